//! # Integration Test Flows
//!
//! Debug switches as a daemon uses them end to end:
//!
//! 1. **Bootstrap**: telemetry, then the process-wide registry, then each
//!    subsystem installs its switches
//! 2. **Operator commands**: `[no] debug ...` from enable and config nodes
//! 3. **Rendering**: "show debugging", config persistence, admin API snapshot
//! 4. **Call sites**: gated logging through a sink

#[cfg(test)]
mod tests {
    use nc_debug::{
        apply_debug_all, apply_debug_command, debug_log_to, AdminNode, DebugFlag, DebugMode,
        DebugOptions, DebugRegistry, Severity, MODE_ALL, MODE_CONF, MODE_NONE, MODE_TERM,
    };
    use nc_telemetry::{init_telemetry, TelemetryConfig};

    use crate::integration::RecordingSink;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Switches a routing subsystem would declare.
    static BGP_UPDATES: DebugFlag = DebugFlag::new("debug bgp updates", "BGP updates");
    static BGP_NEIGHBOR: DebugFlag =
        DebugFlag::new("debug bgp neighbor-events", "BGP neighbor events");
    static ZEBRA_RIB: DebugFlag = DebugFlag::new("debug zebra rib", "Zebra RIB");

    const UPDATES_DETAIL: DebugOptions = DebugOptions::bit(0);
    const UPDATES_PREFIX: DebugOptions = DebugOptions::bit(1);

    fn leak(conf: &'static str, desc: &'static str) -> &'static DebugFlag {
        Box::leak(Box::new(DebugFlag::new(conf, desc)))
    }

    fn show_debugging(registry: &DebugRegistry) -> String {
        let mut out = String::new();
        registry.status_write(&mut out).expect("status write");
        out
    }

    // =============================================================================
    // BOOTSTRAP
    // =============================================================================

    /// The only test in this crate that touches process-wide state.
    #[test]
    fn test_daemon_bootstrap_and_operator_session() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::default()
        };
        init_telemetry(&config).expect("telemetry init");

        assert!(nc_debug::install(&BGP_UPDATES).is_err(), "install before init");

        let registry = nc_debug::init().expect("registry init");
        nc_debug::install(&BGP_UPDATES).expect("install");
        nc_debug::install(&BGP_NEIGHBOR).expect("install");
        nc_debug::install(&ZEBRA_RIB).expect("install");
        assert!(nc_debug::init().is_err(), "second init");

        // Nothing is on yet
        assert_eq!(show_debugging(registry), "");

        // conf t / debug bgp updates detail
        apply_debug_command(&BGP_UPDATES, AdminNode::Config, true, UPDATES_DETAIL);
        // enable / debug zebra rib
        apply_debug_command(&ZEBRA_RIB, AdminNode::Enable, true, DebugOptions::NONE);

        let status = show_debugging(registry);
        let lines: Vec<_> = status.lines().collect();
        assert_eq!(
            lines,
            [
                "  BGP updates is on (mode: term+conf, options: 0x000001) [config: debug bgp updates]",
                "  Zebra RIB is on (mode: term, options: none) [config: debug zebra rib]",
            ]
        );

        // Only the config-node toggle persists
        let mut saved = String::new();
        assert_eq!(registry.config_write(&mut saved), Ok(1));
        assert_eq!(saved, "debug bgp updates\n");

        // enable / no debug all: session modes drop, persisted ones stay
        apply_debug_all(registry, AdminNode::Enable, false);
        assert_eq!(BGP_UPDATES.mode(), DebugMode::CONF);
        assert!(!ZEBRA_RIB.is_active());

        let snapshot = serde_json::to_value(registry.snapshot()).expect("snapshot json");
        assert_eq!(snapshot.as_array().map(Vec::len), Some(3));
        assert_eq!(snapshot[0]["conf"], "debug bgp updates");
        assert_eq!(snapshot[0]["persistent"], true);
        assert_eq!(snapshot[0]["term"], false);
        assert_eq!(snapshot[0]["options"], 1);
        assert_eq!(snapshot[2]["active"], false);
    }

    // =============================================================================
    // RENDERING
    // =============================================================================

    /// A switch turned on in CONF mode only shows up with CONF active and
    /// TERM inactive.
    #[test]
    fn test_conf_only_switch_in_show_debugging() {
        let registry = DebugRegistry::new();
        let x = leak("debug X", "X debugging");
        registry.install(x);

        x.mode_set(MODE_CONF, true);
        let out = show_debugging(&registry);

        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("debug X"));
        assert!(out.contains("X debugging"));
        assert!(out.contains("mode: conf,"), "CONF active, TERM inactive: {out}");
        assert!(!out.contains("term"));
    }

    #[test]
    fn test_show_debugging_follows_install_order() {
        let registry = DebugRegistry::new();
        let a = leak("debug a", "A");
        let b = leak("debug b", "B");
        let c = leak("debug c", "C");
        registry.install(a);
        registry.install(b);
        registry.install(c);

        // Activated out of order on purpose
        for record in [c, a, b] {
            record.mode_set(MODE_ALL, true);
        }

        let out = show_debugging(&registry);
        let pos = |needle: &str| out.find(needle).expect(needle);

        assert!(pos("[config: debug a]") < pos("[config: debug b]"));
        assert!(pos("[config: debug b]") < pos("[config: debug c]"));
    }

    #[test]
    fn test_inactive_switch_with_options_is_not_reported() {
        let registry = DebugRegistry::new();
        let quiet = leak("debug quiet", "Quiet");
        registry.install(quiet);

        quiet.mode_set(MODE_NONE, true);
        quiet.option_set(UPDATES_DETAIL | UPDATES_PREFIX, true);

        assert_eq!(show_debugging(&registry), "");
        let mut saved = String::new();
        assert_eq!(registry.config_write(&mut saved), Ok(0));
    }

    #[test]
    fn test_uninstalled_switch_still_usable_but_invisible() {
        let registry = DebugRegistry::new();
        let loose = leak("debug loose", "Loose");

        loose.enable_all();

        assert!(loose.is_active());
        assert_eq!(show_debugging(&registry), "");
    }

    // =============================================================================
    // CALL SITES
    // =============================================================================

    #[test]
    fn test_call_site_logs_only_while_active() {
        let sink = RecordingSink::default();
        let neighbor = leak("debug ospf neighbor", "OSPF neighbor");

        debug_log_to!(sink, neighbor, Severity::Info, "neighbor {} Full", "192.0.2.1");
        neighbor.mode_set(MODE_TERM, true);
        debug_log_to!(sink, neighbor, Severity::Info, "neighbor {} Full", "192.0.2.2");
        neighbor.log_if_active(&sink, Severity::Error, || "neighbor 192.0.2.2 Down");
        neighbor.clear_all();
        neighbor.log_if_active(&sink, Severity::Error, || "neighbor 192.0.2.3 Down");

        assert_eq!(
            sink.lines(),
            vec![
                (Severity::Info, "neighbor 192.0.2.2 Full".to_string()),
                (Severity::Error, "neighbor 192.0.2.2 Down".to_string()),
            ]
        );
    }

    #[test]
    fn test_options_select_call_site_detail() {
        let sink = RecordingSink::default();
        let updates = leak("debug bgp updates", "BGP updates");
        apply_debug_command(updates, AdminNode::Router, true, UPDATES_PREFIX);

        if updates.option_check(UPDATES_DETAIL) {
            debug_log_to!(sink, updates, Severity::Debug, "attributes ...");
        }
        if updates.option_check(UPDATES_PREFIX) {
            debug_log_to!(sink, updates, Severity::Debug, "prefix {}", "198.51.100.0/24");
        }

        assert_eq!(updates.mode(), DebugMode::TERM, "router node is session-only");
        assert_eq!(
            sink.lines(),
            vec![(Severity::Debug, "prefix 198.51.100.0/24".to_string())]
        );
    }
}

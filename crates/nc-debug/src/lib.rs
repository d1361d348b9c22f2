//! # NC Debug
//!
//! Runtime-toggleable debug switches for the netcontrol daemons.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `DebugFlag`: one named switch around a single atomic 32-bit word
//!   - `AtomicDebugFlags`: masked atomic accessors over that word
//!   - `DebugMode` / `DebugOptions`: typed masks for the mode byte and the
//!     option bytes
//!   - `node_to_mode`: administration context to persistence mode
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `LogSink`: where output of active switches goes (Driven Port)
//!
//! - **Service Layer** (`service/`): Registry
//!   - `DebugRegistry`: install-ordered switch list, status and config
//!     rendering
//!   - `init` / `registry` / `install`: the process-wide instance
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `TracingLogSink`: `LogSink` over `tracing`
//!   - `apply_debug_command` / `apply_debug_all`: operator command glue
//!
//! ## Word Layout
//!
//! | Bits | Group | Owner |
//! |------|-------|-------|
//! | 31..24 | mode (`TERM`, `CONF`) | this crate |
//! | 23..0 | options | declaring subsystem |
//!
//! Mode accessors cannot touch option bits and option accessors cannot touch
//! mode bits: masks are narrowed before they are applied.
//!
//! ## Usage Example
//!
//! ```ignore
//! use nc_debug::{debugd, AdminNode, DebugFlag, DebugOptions};
//!
//! static BGP_UPDATES: DebugFlag = DebugFlag::new("debug bgp updates", "BGP updates");
//! const BGP_UPDATES_DETAIL: DebugOptions = DebugOptions::bit(0);
//!
//! // Bootstrap
//! nc_debug::init()?;
//! nc_debug::install(&BGP_UPDATES)?;
//!
//! // Operator typed "debug bgp updates" in configuration mode
//! nc_debug::apply_debug_command(&BGP_UPDATES, AdminNode::Config, true, DebugOptions::NONE);
//!
//! // Call site; arguments are only evaluated while the switch is on
//! debugd!(BGP_UPDATES, "UPDATE from {} with {} prefixes", peer, prefixes.len());
//!
//! // "show debugging"
//! nc_debug::registry()?.status_write(&mut out)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{apply_debug_all, apply_debug_command, TracingLogSink};
pub use domain::{
    node_to_mode, AdminNode, AtomicDebugFlags, DebugFlag, DebugMode, DebugOptions, Severity,
    MODE_ALL, MODE_CONF, MODE_NONE, MODE_TERM, OPTION_BITS, OPT_ALL, OPT_NONE,
};
pub use error::DebugError;
pub use ports::LogSink;
pub use service::{init, install, registry, DebugRegistry, DebugStatus, RegistryIter};

/// Log to `sink` at `severity` if `record` is active.
///
/// The format arguments are not evaluated when the switch is off.
#[macro_export]
macro_rules! debug_log_to {
    ($sink:expr, $record:expr, $severity:expr, $($arg:tt)+) => {{
        let record: &$crate::DebugFlag = &$record;
        if record.is_active() {
            $crate::LogSink::log(&$sink, $severity, format_args!($($arg)+));
        }
    }};
}

/// Log through `tracing` at `severity` if `record` is active.
#[macro_export]
macro_rules! debug_log {
    ($record:expr, $severity:expr, $($arg:tt)+) => {
        $crate::debug_log_to!($crate::TracingLogSink, $record, $severity, $($arg)+)
    };
}

/// [`debug_log!`] at error severity.
#[macro_export]
macro_rules! debuge {
    ($record:expr, $($arg:tt)+) => {
        $crate::debug_log!($record, $crate::Severity::Error, $($arg)+)
    };
}

/// [`debug_log!`] at warning severity.
#[macro_export]
macro_rules! debugw {
    ($record:expr, $($arg:tt)+) => {
        $crate::debug_log!($record, $crate::Severity::Warning, $($arg)+)
    };
}

/// [`debug_log!`] at info severity.
#[macro_export]
macro_rules! debugi {
    ($record:expr, $($arg:tt)+) => {
        $crate::debug_log!($record, $crate::Severity::Info, $($arg)+)
    };
}

/// [`debug_log!`] at notice severity.
#[macro_export]
macro_rules! debugn {
    ($record:expr, $($arg:tt)+) => {
        $crate::debug_log!($record, $crate::Severity::Notice, $($arg)+)
    };
}

/// [`debug_log!`] at debug severity.
#[macro_export]
macro_rules! debugd {
    ($record:expr, $($arg:tt)+) => {
        $crate::debug_log!($record, $crate::Severity::Debug, $($arg)+)
    };
}

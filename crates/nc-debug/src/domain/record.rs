//! A single named debug switch.

use std::fmt;

use super::flags::{AtomicDebugFlags, DebugMode, DebugOptions, MODE_ALL};
use super::severity::Severity;
use crate::ports::LogSink;

/// One runtime-toggleable debug switch.
///
/// Subsystems declare these as `static` items and install them into a
/// [`DebugRegistry`](crate::DebugRegistry) during startup:
///
/// ```ignore
/// static BGP_UPDATES: DebugFlag = DebugFlag::new("debug bgp updates", "BGP updates");
///
/// nc_debug::install(&BGP_UPDATES)?;
/// ```
///
/// All accessors are MT-safe. `conf` and `desc` never change after
/// construction.
pub struct DebugFlag {
    flags: AtomicDebugFlags,
    conf: &'static str,
    desc: &'static str,
}

impl DebugFlag {
    /// A switch with every bit clear.
    ///
    /// `conf` is the configuration line that re-enables the switch, `desc` the
    /// label shown in status output.
    pub const fn new(conf: &'static str, desc: &'static str) -> Self {
        Self {
            flags: AtomicDebugFlags::new(),
            conf,
            desc,
        }
    }

    pub fn conf(&self) -> &'static str {
        self.conf
    }

    pub fn desc(&self) -> &'static str {
        self.desc
    }

    /// The underlying atomic word.
    pub fn flags(&self) -> &AtomicDebugFlags {
        &self.flags
    }

    pub fn bits(&self) -> u32 {
        self.flags.bits()
    }

    pub fn mode(&self) -> DebugMode {
        self.flags.mode()
    }

    pub fn options(&self) -> DebugOptions {
        self.flags.options()
    }

    /// True if the switch is on in any persistence mode.
    pub fn is_active(&self) -> bool {
        self.flags.mode_check(MODE_ALL)
    }

    pub fn mode_check(&self, mode: impl Into<u32>) -> bool {
        self.flags.mode_check(mode)
    }

    pub fn option_check(&self, options: impl Into<u32>) -> bool {
        self.flags.option_check(options)
    }

    pub fn flags_check(&self, mask: impl Into<u32>) -> bool {
        self.flags.flags_check(mask)
    }

    pub fn mode_set(&self, mode: impl Into<u32>, on: bool) {
        self.flags.mode_set(mode, on)
    }

    pub fn mode_on(&self, mode: impl Into<u32>) {
        self.mode_set(mode, true)
    }

    pub fn mode_off(&self, mode: impl Into<u32>) {
        self.mode_set(mode, false)
    }

    pub fn option_set(&self, options: impl Into<u32>, on: bool) {
        self.flags.option_set(options, on)
    }

    pub fn option_on(&self, options: impl Into<u32>) {
        self.option_set(options, true)
    }

    pub fn option_off(&self, options: impl Into<u32>) {
        self.option_set(options, false)
    }

    pub fn flags_set(&self, mask: impl Into<u32>, on: bool) {
        self.flags.flags_set(mask, on)
    }

    pub fn flags_on(&self, mask: impl Into<u32>) {
        self.flags_set(mask, true)
    }

    pub fn flags_off(&self, mask: impl Into<u32>) {
        self.flags_set(mask, false)
    }

    /// Turn off every mode and option.
    pub fn clear_all(&self) {
        self.flags.clear_all()
    }

    /// Turn on every mode and option.
    pub fn enable_all(&self) {
        self.flags.enable_all()
    }

    /// Forward `message` to `sink` if the switch is active.
    ///
    /// `message` is only called when the switch is on, so building the text
    /// costs nothing for inactive switches. Returns whether anything was
    /// forwarded.
    pub fn log_if_active<S, F, M>(&self, sink: &S, severity: Severity, message: F) -> bool
    where
        S: LogSink + ?Sized,
        F: FnOnce() -> M,
        M: fmt::Display,
    {
        if !self.is_active() {
            return false;
        }
        sink.log(severity, format_args!("{}", message()));
        true
    }
}

impl fmt::Debug for DebugFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugFlag")
            .field("conf", &self.conf)
            .field("desc", &self.desc)
            .field("flags", &self.flags)
            .finish()
    }
}

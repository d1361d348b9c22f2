//! Bit layout of a debug word and the atomic accessors over it.
//!
//! A debug word is 32 bits wide (bytes high to low):
//!
//! ```text
//! [31..24] mode byte      TERM / CONF
//! [23..16] option byte    subsystem defined
//! [15..8]  option byte    subsystem defined
//! [7..0]   option byte    subsystem defined
//! ```
//!
//! The option bytes belong to whoever declares the switch. The mode byte does
//! not: every accessor narrows its mask to the group it operates on, so a
//! caller toggling options can never disturb the persistence mode and the
//! other way around.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use bitflags::bitflags;

/// Session-only activation.
pub const MODE_TERM: u32 = 0x0100_0000;
/// Activation that persists to the configuration file.
pub const MODE_CONF: u32 = 0x0200_0000;
/// Both persistence modes.
pub const MODE_ALL: u32 = MODE_TERM | MODE_CONF;
/// No persistence mode.
pub const MODE_NONE: u32 = 0x0000_0000;
/// Every subsystem-defined option bit.
pub const OPT_ALL: u32 = 0x00FF_FFFF;
/// No option bits.
pub const OPT_NONE: u32 = 0x0000_0000;

/// Number of option bits available to a subsystem.
pub const OPTION_BITS: u8 = 24;

bitflags! {
    /// Persistence mode of a debug switch.
    ///
    /// TERM and CONF are independent; a switch can be on for the current
    /// session, persisted, both, or neither.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DebugMode: u32 {
        const TERM = MODE_TERM;
        const CONF = MODE_CONF;
        const ALL = MODE_ALL;
    }
}

impl DebugMode {
    /// Operator-facing label: `term`, `conf`, `term+conf` or `none`.
    pub fn label(self) -> &'static str {
        match (self.contains(Self::TERM), self.contains(Self::CONF)) {
            (true, true) => "term+conf",
            (true, false) => "term",
            (false, true) => "conf",
            (false, false) => "none",
        }
    }
}

impl From<DebugMode> for u32 {
    fn from(mode: DebugMode) -> Self {
        mode.bits()
    }
}

impl fmt::Display for DebugMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subsystem-defined option bits.
///
/// Can only ever hold bits inside [`OPT_ALL`]. Declaring an option mask that
/// reaches into the mode byte is rejected when the mask is built, so
/// `static`/`const` declarations fail to compile instead of corrupting modes
/// at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DebugOptions(u32);

impl DebugOptions {
    /// No options.
    pub const NONE: Self = Self(OPT_NONE);
    /// Every option bit.
    pub const ALL: Self = Self(OPT_ALL);

    /// Build an option mask.
    ///
    /// # Panics
    ///
    /// Panics if `bits` touches the mode byte. In const context this is a
    /// compile error.
    pub const fn new(bits: u32) -> Self {
        assert!(bits & !OPT_ALL == 0, "option mask overlaps the mode byte");
        Self(bits)
    }

    /// Option bit `n`, counted from the least significant bit.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not below [`OPTION_BITS`].
    pub const fn bit(n: u8) -> Self {
        assert!(n < OPTION_BITS, "option bit out of range");
        Self(1 << n)
    }

    /// Checked constructor; `None` if `bits` touches the mode byte.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & !OPT_ALL == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Keep only the option bits of `bits`.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & OPT_ALL)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == OPT_NONE
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for DebugOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl From<DebugOptions> for u32 {
    fn from(options: DebugOptions) -> Self {
        options.0
    }
}

impl fmt::Display for DebugOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("none")
        } else {
            write!(f, "{:#08x}", self.0)
        }
    }
}

/// Atomic 32-bit debug word.
///
/// Every method is a single atomic instruction on the word. Writers to
/// disjoint bits never lose each other's updates because set and clear are
/// `fetch_or` / `fetch_and`, never a load followed by a store. Nothing here
/// orders accesses to *other* memory, so `Relaxed` is sufficient.
#[derive(Default)]
pub struct AtomicDebugFlags(AtomicU32);

impl AtomicDebugFlags {
    /// All bits clear.
    pub const fn new() -> Self {
        Self(AtomicU32::new(MODE_NONE | OPT_NONE))
    }

    /// Snapshot of the whole word.
    pub fn bits(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Snapshot of the mode byte.
    pub fn mode(&self) -> DebugMode {
        DebugMode::from_bits_truncate(self.bits())
    }

    /// Snapshot of the option bytes.
    pub fn options(&self) -> DebugOptions {
        DebugOptions::from_bits_truncate(self.bits())
    }

    /// True if any bit of `mask` is set. No narrowing.
    pub fn flags_check(&self, mask: impl Into<u32>) -> bool {
        self.bits() & mask.into() != 0
    }

    /// True if any mode bit of `mask` is set.
    pub fn mode_check(&self, mask: impl Into<u32>) -> bool {
        self.flags_check(mask.into() & MODE_ALL)
    }

    /// True if any option bit of `mask` is set.
    pub fn option_check(&self, mask: impl Into<u32>) -> bool {
        self.flags_check(mask.into() & OPT_ALL)
    }

    /// Set or clear the raw bits of `mask`. No narrowing.
    pub fn flags_set(&self, mask: impl Into<u32>, on: bool) {
        let mask = mask.into();
        if on {
            self.0.fetch_or(mask, Ordering::Relaxed);
        } else {
            self.0.fetch_and(!mask, Ordering::Relaxed);
        }
    }

    /// Set or clear the mode bits of `mask`; bits outside the mode byte are dropped.
    pub fn mode_set(&self, mask: impl Into<u32>, on: bool) {
        self.flags_set(mask.into() & MODE_ALL, on);
    }

    /// Set or clear the option bits of `mask`; bits in the mode byte are dropped.
    pub fn option_set(&self, mask: impl Into<u32>, on: bool) {
        self.flags_set(mask.into() & OPT_ALL, on);
    }

    /// Zero the entire word.
    pub fn clear_all(&self) {
        self.0.store(MODE_NONE | OPT_NONE, Ordering::Relaxed);
    }

    /// Set every mode and option bit. Reserved bits stay zero.
    pub fn enable_all(&self) {
        self.0.fetch_or(MODE_ALL | OPT_ALL, Ordering::Relaxed);
    }
}

impl fmt::Debug for AtomicDebugFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.bits();
        f.debug_struct("AtomicDebugFlags")
            .field("mode", &DebugMode::from_bits_truncate(bits))
            .field("options", &DebugOptions::from_bits_truncate(bits))
            .finish()
    }
}

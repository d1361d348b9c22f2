//! # Debug Registry - Enumeration of Declared Switches
//!
//! Every subsystem installs its [`DebugFlag`]s here once, during startup. The
//! registry is only walked to render aggregate state ("show debugging",
//! persisted configuration, the admin API snapshot) and for bulk toggles;
//! logging call sites read their record directly and never come here.
//!
//! ## Ordering
//!
//! Records are kept in install order. Every rendering walks them in that
//! order, so output is deterministic without sorting.
//!
//! ## Consistency
//!
//! Rendering may run while other threads flip flags. Each record's word is
//! read as one atomic snapshot; the report as a whole is not a snapshot
//! across records.

use std::fmt;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::Serialize;
use tracing::debug;

use crate::domain::{DebugFlag, DebugMode, DebugOptions, MODE_ALL, MODE_CONF, MODE_TERM};

/// Ordered collection of installed debug switches.
///
/// Holds non-owning `'static` references; records live in their declaring
/// subsystem's statics for the life of the process.
#[derive(Default)]
pub struct DebugRegistry {
    records: RwLock<Vec<&'static DebugFlag>>,
}

/// Per-switch view for the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugStatus {
    pub conf: &'static str,
    pub desc: &'static str,
    pub active: bool,
    pub term: bool,
    pub persistent: bool,
    pub options: u32,
}

impl DebugStatus {
    fn of(record: &DebugFlag) -> Self {
        let bits = record.bits();
        Self {
            conf: record.conf(),
            desc: record.desc(),
            active: bits & MODE_ALL != 0,
            term: bits & MODE_TERM != 0,
            persistent: bits & MODE_CONF != 0,
            options: record.options().bits(),
        }
    }
}

impl DebugRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record`.
    ///
    /// Not idempotent: installing the same record twice lists it twice.
    pub fn install(&self, record: &'static DebugFlag) {
        let mut records = self.records.write();
        records.push(record);
        debug!(
            conf = record.conf(),
            installed = records.len(),
            "[DebugRegistry] Installed debug switch"
        );
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Installed records in install order.
    ///
    /// The iterator holds the registry's read lock until dropped; do not
    /// `install` from the same thread while one is alive.
    pub fn iter(&self) -> RegistryIter<'_> {
        RegistryIter {
            records: self.records.read(),
            next: 0,
        }
    }

    /// Set or clear `mode` on every installed record.
    ///
    /// Each record is updated atomically; the sweep as a whole is not.
    pub fn set_mode_all(&self, mode: impl Into<u32>, on: bool) {
        let mode = mode.into();
        for record in self.iter() {
            record.mode_set(mode, on);
        }
    }

    /// Write one line per active record describing its state.
    ///
    /// ```text
    ///   BGP updates is on (mode: term+conf, options: 0x000003) [config: debug bgp updates]
    /// ```
    ///
    /// Records with no mode bit set are skipped even when they carry options.
    pub fn status_write<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        for record in self.iter() {
            let bits = record.bits();
            if bits & MODE_ALL == 0 {
                continue;
            }
            let mode = DebugMode::from_bits_truncate(bits);
            let options = DebugOptions::from_bits_truncate(bits);
            writeln!(
                out,
                "  {} is on (mode: {}, options: {}) [config: {}]",
                record.desc(),
                mode,
                options,
                record.conf()
            )?;
        }
        Ok(())
    }

    /// Write the configuration line of every record persisted to config.
    ///
    /// Returns the number of lines written.
    pub fn config_write<W: fmt::Write + ?Sized>(&self, out: &mut W) -> Result<usize, fmt::Error> {
        let mut written = 0;
        for record in self.iter() {
            if record.mode_check(MODE_CONF) {
                writeln!(out, "{}", record.conf())?;
                written += 1;
            }
        }
        Ok(written)
    }

    /// State of every installed record, active or not.
    pub fn snapshot(&self) -> Vec<DebugStatus> {
        self.iter().map(DebugStatus::of).collect()
    }
}

impl<'a> IntoIterator for &'a DebugRegistry {
    type Item = &'static DebugFlag;
    type IntoIter = RegistryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy walk over a [`DebugRegistry`] in install order.
pub struct RegistryIter<'a> {
    records: RwLockReadGuard<'a, Vec<&'static DebugFlag>>,
    next: usize,
}

impl Iterator for RegistryIter<'_> {
    type Item = &'static DebugFlag;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.next).copied()?;
        self.next += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegistryIter<'_> {}

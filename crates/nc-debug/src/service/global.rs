//! Process-wide debug registry.
//!
//! Bootstrap calls [`init`] exactly once before any subsystem installs its
//! switches. Installing before `init`, or calling `init` twice, is a startup
//! ordering bug and is reported as a [`DebugError`] for bootstrap to
//! propagate.
//!
//! ```rust,ignore
//! fn bootstrap() -> Result<(), DebugError> {
//!     nc_debug::init()?;
//!     bgp::debug_init()?; // nc_debug::install(&BGP_UPDATES)?
//!     zebra::debug_init()?;
//!     Ok(())
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use lazy_static::lazy_static;
use tracing::info;

use super::registry::DebugRegistry;
use crate::domain::DebugFlag;
use crate::error::DebugError;

lazy_static! {
    /// Registry shared by every subsystem of the daemon.
    static ref REGISTRY: DebugRegistry = DebugRegistry::new();
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the process-wide registry.
pub fn init() -> Result<&'static DebugRegistry, DebugError> {
    if INITIALIZED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Err(DebugError::AlreadyInitialized);
    }
    info!("[DebugRegistry] Process-wide debug registry initialized");
    Ok(&*REGISTRY)
}

/// The process-wide registry, once [`init`] has run.
pub fn registry() -> Result<&'static DebugRegistry, DebugError> {
    if !INITIALIZED.load(Ordering::Acquire) {
        return Err(DebugError::NotInitialized);
    }
    Ok(&*REGISTRY)
}

/// Install `record` into the process-wide registry.
pub fn install(record: &'static DebugFlag) -> Result<(), DebugError> {
    registry()?.install(record);
    Ok(())
}

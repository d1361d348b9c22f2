//! Service Layer
//!
//! - `DebugRegistry`: ordered collection of installed switches and the
//!   renderings built from it
//! - `global`: the process-wide instance and its init lifecycle

pub mod global;
pub mod registry;

pub use global::{init, install, registry};
pub use registry::{DebugRegistry, DebugStatus, RegistryIter};

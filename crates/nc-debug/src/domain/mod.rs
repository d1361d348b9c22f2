//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - Bit layout constants and typed masks
//! - The atomic debug word
//! - The debug switch record
//! - Administration contexts and their mode mapping
//! - Log severities
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No blocking or allocation in accessors

pub mod flags;
pub mod node;
pub mod record;
pub mod severity;

pub use flags::{
    AtomicDebugFlags, DebugMode, DebugOptions, MODE_ALL, MODE_CONF, MODE_NONE, MODE_TERM,
    OPTION_BITS, OPT_ALL, OPT_NONE,
};
pub use node::{node_to_mode, AdminNode};
pub use record::DebugFlag;
pub use severity::Severity;

//! Error types for the debug facility

use thiserror::Error;

/// Errors from the debug facility.
///
/// Flag accessors and registry installs cannot fail; these cover startup
/// ordering mistakes and operator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugError {
    #[error("debug registry already initialized")]
    AlreadyInitialized,

    #[error("debug registry used before init")]
    NotInitialized,

    #[error("unknown administration node: {0}")]
    UnknownNode(String),
}

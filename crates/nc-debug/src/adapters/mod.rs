//! Adapters Layer
//!
//! - `TracingLogSink`: default `LogSink` writing through `tracing`
//! - `admin`: applies operator debug commands to switches

pub mod admin;
pub mod tracing_sink;

pub use admin::{apply_debug_all, apply_debug_command};
pub use tracing_sink::TracingLogSink;

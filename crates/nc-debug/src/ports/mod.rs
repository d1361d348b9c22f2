//! Ports Layer
//!
//! Traits at the boundary between the debug facility and the daemon hosting it.

pub mod outbound;

pub use outbound::LogSink;

//! Outbound Ports (Driven Ports)
//!
//! The debug facility never writes log output itself. Once a switch is found
//! active the severity and the message are handed to a [`LogSink`].

use std::fmt;

use crate::domain::Severity;

/// Destination for debug output (Driven Port).
///
/// Receives only a severity and the already-gated message; formatting of
/// `message` happens inside the sink, so nothing is formatted for inactive
/// switches.
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        (**self).log(severity, message)
    }
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        (**self).log(severity, message)
    }
}

//! `tracing` backed log sink.

use std::fmt;

use crate::domain::Severity;
use crate::ports::LogSink;

/// Forwards debug output to the daemon's `tracing` subscriber.
///
/// `tracing` has no notice level; notices go out at INFO tagged with
/// `severity = "notice"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        match severity {
            Severity::Error => tracing::error!("{}", message),
            Severity::Warning => tracing::warn!("{}", message),
            Severity::Notice => tracing::info!(severity = "notice", "{}", message),
            Severity::Info => tracing::info!("{}", message),
            Severity::Debug => tracing::debug!("{}", message),
        }
    }
}

//! Telemetry configuration from environment variables.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::TelemetryError;

/// Configuration for daemon logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name for logs
    pub service_name: String,

    /// Daemon identifier (bgpd, zebra, ...); `core` for the shared process
    pub daemon: String,

    /// Log filter directive (trace, debug, info, warn, error, or per-target)
    pub log_level: String,

    /// Whether to enable console output
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "netcontrol".to_string(),
            daemon: "core".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NC_SERVICE_NAME`: Service name (default: netcontrol)
    /// - `NC_DAEMON`: Daemon identifier (default: core)
    /// - `NC_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `NC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `NC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("NC_SERVICE_NAME").unwrap_or_else(|_| "netcontrol".to_string()),

            daemon: env::var("NC_DAEMON").unwrap_or_else(|_| "core".to_string()),

            log_level: env::var("NC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("NC_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            json_logs: env::var("NC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Create configuration for a specific daemon.
    pub fn for_daemon(daemon: &str) -> Self {
        let mut config = Self::from_env();
        config.daemon = daemon.to_string();
        config
    }

    /// Get the full service name including daemon.
    pub fn full_service_name(&self) -> String {
        if self.daemon == "core" {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.daemon)
        }
    }

    /// Check that the log filter directive parses.
    pub fn validate(&self) -> Result<(), TelemetryError> {
        EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|e| TelemetryError::Config(format!("log level {:?}: {}", self.log_level, e)))
    }
}

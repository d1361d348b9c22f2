//! # NC Telemetry
//!
//! Logging for netcontrol daemons.
//!
//! Every crate logs through `tracing`; this crate installs the subscriber
//! (env filter plus a human or JSON formatter) once per process.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TelemetryConfig::for_daemon("bgpd");
//!     init_telemetry(&config)?;
//!
//!     nc_debug::init()?;
//!     // Subsystems install their debug switches here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NC_SERVICE_NAME` | `netcontrol` | Service name in logs |
//! | `NC_DAEMON` | `core` | Daemon identifier |
//! | `NC_LOG_LEVEL` | `info` | Log level filter |
//! | `NC_CONSOLE_OUTPUT` | `true` | Console output |
//! | `NC_JSON_LOGS` | `false` | JSON formatting |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Validate `config` and install the global subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    config.validate()?;
    tracing_setup::init_tracing(config)
}

//! Administration contexts and how they map to persistence modes.
//!
//! A debug command entered while editing the persistent configuration is
//! itself persistent; the same command entered from an interactive session
//! only lasts for that session.

use std::fmt;
use std::str::FromStr;

use super::flags::DebugMode;
use crate::error::DebugError;

/// Operator-interface context a command was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminNode {
    /// Read-only session.
    View,
    /// Privileged interactive session.
    Enable,
    /// Top-level configuration editing.
    Config,
    /// Interface configuration sub-context.
    Interface,
    /// Routing-protocol configuration sub-context.
    Router,
}

impl AdminNode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Enable => "enable",
            Self::Config => "config",
            Self::Interface => "interface",
            Self::Router => "router",
        }
    }
}

impl fmt::Display for AdminNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminNode {
    type Err = DebugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(Self::View),
            "enable" => Ok(Self::Enable),
            "config" | "configure" => Ok(Self::Config),
            "interface" => Ok(Self::Interface),
            "router" => Ok(Self::Router),
            _ => Err(DebugError::UnknownNode(s.to_string())),
        }
    }
}

/// Persistence modes a debug toggle entered under `node` applies to.
///
/// Only the top-level configuration context persists; sub-contexts and
/// interactive sessions are session-only.
pub const fn node_to_mode(node: AdminNode) -> DebugMode {
    match node {
        AdminNode::Config => DebugMode::ALL,
        _ => DebugMode::TERM,
    }
}

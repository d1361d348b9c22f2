//! Glue for operator debug commands.
//!
//! The administration layer parses `[no] debug ...` and decides which switch
//! a command names; these helpers apply it with the persistence mode implied
//! by the node the operator is in.

use tracing::debug;

use crate::domain::{node_to_mode, AdminNode, DebugFlag, DebugMode, DebugOptions};
use crate::service::DebugRegistry;

/// Apply `[no] debug <switch> [options]` entered under `node`.
///
/// Sets or clears the node's persistence mode on `record`, and the given
/// options along with it when there are any. Returns the mode mask applied.
pub fn apply_debug_command(
    record: &DebugFlag,
    node: AdminNode,
    enable: bool,
    options: DebugOptions,
) -> DebugMode {
    let mode = node_to_mode(node);
    record.mode_set(mode, enable);
    if !options.is_empty() {
        record.option_set(options, enable);
    }

    debug!(
        conf = record.conf(),
        node = %node,
        mode = %mode,
        options = %options,
        enable,
        "[DebugAdmin] Debug switch toggled"
    );

    mode
}

/// Apply `[no] debug all` entered under `node` to every installed switch.
pub fn apply_debug_all(registry: &DebugRegistry, node: AdminNode, enable: bool) -> DebugMode {
    let mode = node_to_mode(node);
    registry.set_mode_all(mode, enable);

    debug!(
        node = %node,
        mode = %mode,
        enable,
        switches = registry.len(),
        "[DebugAdmin] All debug switches toggled"
    );

    mode
}

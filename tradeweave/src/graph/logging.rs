//! Structured logging for graph execution events.

use crate::error::AgentError;

use super::Interrupt;

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "starting node");
}

/// Log node execution completion with its routing decision.
pub fn log_node_complete(node_id: &str, next: &super::Next) {
    tracing::debug!(node_id = node_id, ?next, "node complete");
}

/// Log graph execution start.
pub fn log_graph_start() {
    tracing::info!("starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete() {
    tracing::info!("graph execution complete");
}

/// Log graph suspension for human input.
pub fn log_graph_interrupted(node_id: &str, interrupt: &Interrupt) {
    tracing::info!(node_id = node_id, payload = %interrupt.value, "graph execution interrupted");
}

/// Log graph execution error.
pub fn log_graph_error(error: &AgentError) {
    tracing::error!(?error, "graph execution error");
}

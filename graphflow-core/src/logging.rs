//! Logging helpers for graph runs.
//!
//! Structured `tracing` events for run and node lifecycle. The library never
//! installs a subscriber; applications and tests choose where events go.

use crate::error::{GraphError, ValidationError};
use crate::graph::{NodeId, Outcome};

/// Log the start of a run.
pub fn log_run_start(nodes: usize, edges: usize) {
    tracing::info!(nodes, edges, "Starting graph run");
}

/// Log a node about to execute.
pub fn log_node_start(id: NodeId, name: &str) {
    tracing::debug!(node_id = %id, node = name, "Executing node");
}

/// Log a node that executed successfully, with the edge it selected.
pub fn log_node_complete(id: NodeId, name: &str, outcome: Outcome, next: Option<NodeId>) {
    match next {
        Some(next) => tracing::debug!(
            node_id = %id,
            node = name,
            %outcome,
            next = %next,
            "Node complete"
        ),
        None => tracing::debug!(node_id = %id, node = name, %outcome, "Node complete, no outgoing edge"),
    }
}

/// Log a graph rejected by validation.
pub fn log_validation_error(error: &ValidationError) {
    tracing::warn!(%error, "Graph failed validation");
}

/// Log a successful run.
pub fn log_run_complete(visited: usize) {
    tracing::info!(visited, "Graph run complete");
}

/// Log a failed run.
pub fn log_run_error(error: &GraphError, visited: usize) {
    tracing::error!(%error, visited, "Graph run failed");
}

//! Compilation errors for `StateGraph::compile`.

use thiserror::Error;

/// Error building an executable graph from a `StateGraph`.
///
/// Returned by `compile` / `compile_with_checkpointer` when edges reference
/// unknown nodes or do not form a valid chain from START to END.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// An edge references a node id that was never added.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge from START.
    #[error("missing edge from START")]
    MissingStart,

    /// No edge or conditional path reaching END.
    #[error("missing edge to END")]
    MissingEnd,

    /// Edges do not form a valid chain (branch, duplicate from, cycle).
    #[error("invalid chain: {0}")]
    InvalidChain(String),

    /// A conditional path map targets a node id that does not exist.
    #[error("conditional path map references unknown node: {0}")]
    InvalidConditionalPathMap(String),

    /// A node has both an outgoing edge and conditional edges.
    #[error("node has both an edge and conditional edges: {0}")]
    NodeHasBothEdgeAndConditional(String),
}

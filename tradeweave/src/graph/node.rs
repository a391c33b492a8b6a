//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns updated `S` and `Next` (continue, jump, end,
//! or interrupt). Used by `StateGraph` and `CompiledStateGraph`.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// The graph runner uses `Next` to choose the next node (Continue = linear
/// order, Node(id) = jump, End = stop, Interrupt = suspend for human input).
/// When the node has conditional edges, the router decides instead of the
/// returned `Next` — except for `Next::Interrupt`, which always suspends.
///
/// **Interaction**: Implemented by graph nodes; see `StateGraph::add_node`
/// and `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"assistant"`, `"tools"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}

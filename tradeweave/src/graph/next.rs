//! Next-step result from a graph node.
//!
//! The graph runner uses this to pick the next node, to stop, or to suspend
//! the run for human input.

use super::interrupt::Interrupt;

/// Next step after running a node.
///
/// - **Continue**: follow the linear edge order (next node in chain, or END if last).
/// - **Node(id)**: jump to the given node (e.g. tools → assistant).
/// - **End**: stop; return current state as final result.
/// - **Interrupt**: suspend the run; the updated state is checkpointed and the
///   interrupt token is returned to the caller for a later resume.
///
/// **Interaction**: Returned by `Node::run`; consumed by `CompiledStateGraph::invoke`.
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    /// Follow linear edge order; if current node is last, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
    /// Suspend the run and hand the interrupt token to the caller.
    Interrupt(Interrupt),
}

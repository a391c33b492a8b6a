//! State graph: nodes + edges, compile and invoke.
//!
//! Build a `StateGraph` with nodes and edges (conditional edges for routing
//! by state), compile it, then invoke with a state value. A node can suspend
//! the run for human input; the compiled graph checkpoints the suspended
//! state and returns [`GraphOutcome::Interrupted`] to the caller.

mod compile_error;
mod compiled;
mod conditional;
mod interrupt;
mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::{CompiledStateGraph, GraphOutcome};
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use interrupt::Interrupt;
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_interrupted, log_graph_start,
    log_node_complete, log_node_start,
};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, END, START};

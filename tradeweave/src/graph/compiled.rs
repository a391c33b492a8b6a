//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile` or `compile_with_checkpointer`. Holds nodes
//! and edge order (derived from explicit edges at compile time), optional
//! checkpointer. When a checkpointer is set and `config.thread_id` is
//! provided, state is saved at the end of the run and at any suspension
//! point, so an interrupted run can be resumed later from its checkpoint.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AgentError;
use crate::memory::{Checkpoint, CheckpointSource, Checkpointer, RunnableConfig};

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_interrupted, log_graph_start,
    log_node_complete, log_node_start,
};
use super::state_graph::END;
use super::{Interrupt, Next, NextEntry, Node};

/// Result of one graph invocation: ran to END, or suspended for human input.
///
/// A suspension is an expected, resumable pause, not a failure: the
/// accumulated state (including the paused-at marker a node recorded) has
/// been checkpointed against the thread id, and the interrupt token describes
/// what is being asked. Resume by re-invoking with
/// `RunnableConfig::resume_from_node_id` set to the suspended node.
#[derive(Debug, Clone)]
pub enum GraphOutcome<S> {
    /// The run reached END; holds the final state.
    Complete(S),
    /// A node suspended the run; holds the state as of the suspension point.
    Interrupted {
        /// State at the suspension point (already checkpointed when a
        /// checkpointer and thread id were configured).
        state: S,
        /// Token describing the pending request.
        interrupt: Interrupt,
    },
}

impl<S> GraphOutcome<S> {
    /// Returns the contained state, whether the run completed or suspended.
    pub fn into_state(self) -> S {
        match self {
            GraphOutcome::Complete(s) => s,
            GraphOutcome::Interrupted { state, .. } => state,
        }
    }

    /// Returns the interrupt token when the run suspended.
    pub fn interrupt(&self) -> Option<&Interrupt> {
        match self {
            GraphOutcome::Complete(_) => None,
            GraphOutcome::Interrupted { interrupt, .. } => Some(interrupt),
        }
    }
}

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()` or `compile_with_checkpointer()`. Runs
/// from the first node (or `config.resume_from_node_id` when resuming); uses
/// each node's returned `Next` or conditional router (when present) to choose
/// the next node.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (from START).
    pub(super) first_node_id: String,
    /// Linear order of nodes (used for Next::Continue when no conditional).
    /// Contains only the first node when the graph has conditional edges.
    pub(super) edge_order: Vec<String>,
    /// Map from node id to how to get next: Unconditional(to_id) or Conditional(router).
    pub(super) next_map: HashMap<String, NextEntry<S>>,
    pub(super) checkpointer: Option<Arc<dyn Checkpointer<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs the graph with the given state.
    ///
    /// Starts at the first node, or at `config.resume_from_node_id` when set
    /// (resuming a suspended run re-enters the suspended node; earlier steps
    /// are not replayed). After each node, uses the returned `Next` or the
    /// node's conditional router to continue, jump, or end.
    ///
    /// When `config` has `thread_id` and the graph was compiled with a
    /// checkpointer, state is saved after the run completes and immediately
    /// when a node suspends, before `GraphOutcome::Interrupted` is returned.
    pub async fn invoke(
        &self,
        state: S,
        config: Option<RunnableConfig>,
    ) -> Result<GraphOutcome<S>, AgentError> {
        if self.nodes.is_empty() || !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        let config = config.unwrap_or_default();
        let mut state = state;
        let mut current_id = config
            .resume_from_node_id
            .as_ref()
            .filter(|id| self.nodes.contains_key(id.as_str()))
            .cloned()
            .unwrap_or_else(|| self.first_node_id.clone());

        log_graph_start();

        loop {
            let node = self
                .nodes
                .get(&current_id)
                .expect("compiled graph has all nodes")
                .clone();
            log_node_start(&current_id);

            let (new_state, next) = match node.run(state.clone()).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };
            log_node_complete(&current_id, &next);
            state = new_state;

            if let Next::Interrupt(ref interrupt) = next {
                let interrupt = interrupt.clone();
                self.save_checkpoint(&config, &state).await;
                log_graph_interrupted(&current_id, &interrupt);
                return Ok(GraphOutcome::Interrupted { state, interrupt });
            }

            let next_id: Option<String> =
                if let Some(NextEntry::Conditional(router)) = self.next_map.get(&current_id) {
                    let target = router.resolve_next(&state);
                    tracing::debug!(from = %current_id, to = %target, "conditional routing");
                    Some(target)
                } else {
                    match next {
                        Next::End | Next::Interrupt(_) => None,
                        Next::Node(id) => Some(id),
                        Next::Continue => self
                            .next_map
                            .get(&current_id)
                            .and_then(|e| {
                                if let NextEntry::Unconditional(id) = e {
                                    Some(id.clone())
                                } else {
                                    None
                                }
                            })
                            .or_else(|| {
                                let pos = self.edge_order.iter().position(|x| x == &current_id)?;
                                self.edge_order.get(pos + 1).cloned()
                            }),
                    }
                };

            let should_end = next_id.is_none() || next_id.as_deref() == Some(END);
            if should_end {
                self.save_checkpoint(&config, &state).await;
                log_graph_complete();
                return Ok(GraphOutcome::Complete(state));
            }
            if let Some(id) = next_id {
                current_id = id;
            }
        }
    }

    async fn save_checkpoint(&self, config: &RunnableConfig, state: &S) {
        if let (Some(cp), Some(_)) = (&self.checkpointer, &config.thread_id) {
            let checkpoint = Checkpoint::from_state(state.clone(), CheckpointSource::Update, 0);
            if let Err(e) = cp.put(config, &checkpoint).await {
                tracing::warn!(error = %e, "checkpoint save failed");
            }
        }
    }
}

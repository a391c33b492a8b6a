//! Invoke config: thread_id, checkpoint_id, checkpoint_ns, resume point.
//!
//! Passed to `CompiledStateGraph::invoke` and to the `Checkpointer`. When
//! using a checkpointer, invoke must provide at least `thread_id`.

/// Config for a single invoke. Identifies the thread and optional checkpoint.
#[derive(Debug, Clone, Default)]
pub struct RunnableConfig {
    /// Unique id for this conversation/thread. Required when using a checkpointer.
    pub thread_id: Option<String>,
    /// If set, load state from this checkpoint instead of the latest.
    pub checkpoint_id: Option<String>,
    /// Optional namespace for checkpoints. Default is empty.
    pub checkpoint_ns: String,
    /// When set, the graph starts from this node instead of the first one.
    /// Used when resuming after an approval interrupt: load the checkpointed
    /// state, set the resume decision on it, and re-enter at `"tools"`.
    pub resume_from_node_id: Option<String>,
}

impl RunnableConfig {
    /// Config for the given thread id, everything else default.
    pub fn for_thread(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: Some(thread_id.into()),
            ..Default::default()
        }
    }
}

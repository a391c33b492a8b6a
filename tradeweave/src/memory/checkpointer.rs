//! Checkpointer trait and CheckpointError.
//!
//! Saves and loads checkpoints by `(thread_id, checkpoint_ns, checkpoint_id)`.

use async_trait::async_trait;

use super::checkpoint::{Checkpoint, CheckpointListItem, CheckpointMetadata};
use super::config::RunnableConfig;

/// Error type for checkpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("thread_id required")]
    ThreadIdRequired,
    #[error("storage: {0}")]
    Storage(String),
    #[error("not found: {0}")]
    NotFound(String),
}

/// Saves and loads checkpoints by `(thread_id, checkpoint_ns, checkpoint_id)`.
///
/// **Interaction**: Injected at compile via
/// `StateGraph::compile_with_checkpointer`; `CompiledStateGraph::invoke`
/// uses it when `config.thread_id` is set, and the conversation runner loads
/// from it when resuming a suspended run.
#[async_trait]
pub trait Checkpointer<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Persist a checkpoint for the thread. Returns the checkpoint id used.
    async fn put(
        &self,
        config: &RunnableConfig,
        checkpoint: &Checkpoint<S>,
    ) -> Result<String, CheckpointError>;

    /// Load the latest checkpoint for the thread (or the one given by
    /// `config.checkpoint_id`).
    async fn get_tuple(
        &self,
        config: &RunnableConfig,
    ) -> Result<Option<(Checkpoint<S>, CheckpointMetadata)>, CheckpointError>;

    /// List checkpoint ids for the thread, oldest first.
    async fn list(
        &self,
        config: &RunnableConfig,
        limit: Option<usize>,
    ) -> Result<Vec<CheckpointListItem>, CheckpointError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of each CheckpointError variant contains expected keywords.
    #[test]
    fn checkpoint_error_display_all_variants() {
        assert!(CheckpointError::ThreadIdRequired
            .to_string()
            .contains("thread_id"));
        assert!(CheckpointError::Storage("io".into())
            .to_string()
            .contains("storage"));
        assert!(CheckpointError::NotFound("id".into())
            .to_string()
            .contains("not found"));
    }
}

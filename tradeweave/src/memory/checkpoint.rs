//! Checkpoint and metadata types.

use std::time::SystemTime;

use super::uuid6::uuid6;

/// Current version of the checkpoint format.
pub const CHECKPOINT_VERSION: u32 = 1;

/// Source of a checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckpointSource {
    /// Created from an input to invoke.
    #[default]
    Input,
    /// Created by the run loop (end of run or suspension point).
    Update,
}

/// Metadata for a single checkpoint (source, step, created_at).
#[derive(Debug, Clone, Default)]
pub struct CheckpointMetadata {
    /// The source of the checkpoint.
    pub source: CheckpointSource,
    /// The step number of the checkpoint.
    pub step: i64,
    /// Timestamp when this checkpoint was created.
    pub created_at: Option<SystemTime>,
}

/// One checkpoint: state snapshot + id/ts + metadata.
///
/// Stored by a `Checkpointer` keyed by `(thread_id, checkpoint_ns)`.
/// `channel_values` is the graph state `S` at the time of the snapshot —
/// for an interrupted run this includes the paused-at marker the suspending
/// node recorded.
///
/// **Interaction**: Produced by graph execution; consumed by
/// `Checkpointer::put`, returned by `get_tuple`.
#[derive(Debug, Clone)]
pub struct Checkpoint<S> {
    /// The version of the checkpoint format.
    pub v: u32,
    /// The id of the checkpoint. Time-ordered (UUID6) and unique.
    pub id: String,
    /// Creation time, milliseconds since epoch.
    pub ts: String,
    /// The graph state at the time of the checkpoint.
    pub channel_values: S,
    /// Metadata for the checkpoint.
    pub metadata: CheckpointMetadata,
}

/// Item returned by `Checkpointer::list` for history inspection.
#[derive(Debug, Clone)]
pub struct CheckpointListItem {
    pub checkpoint_id: String,
    pub metadata: CheckpointMetadata,
}

impl<S> Checkpoint<S> {
    /// Creates a checkpoint from the current state.
    ///
    /// Uses UUID6 for the checkpoint id so ids are time-ordered and unique.
    pub fn from_state(state: S, source: CheckpointSource, step: i64) -> Self {
        let now = SystemTime::now();
        let ts = format!(
            "{}",
            now.duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        );
        Self {
            v: CHECKPOINT_VERSION,
            id: uuid6().to_string(),
            ts,
            channel_values: state,
            metadata: CheckpointMetadata {
                source,
                step,
                created_at: Some(now),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: from_state generates a UUID6 id and fills metadata.
    #[test]
    fn checkpoint_from_state_has_uuid6_id_and_metadata() {
        let checkpoint: Checkpoint<String> =
            Checkpoint::from_state("state".to_string(), CheckpointSource::Update, 1);

        let parts: Vec<&str> = checkpoint.id.split('-').collect();
        assert_eq!(parts.len(), 5, "8-4-4-4-12 hyphenated id");
        assert!(parts[2].starts_with('6'), "UUID version should be 6");

        assert_eq!(checkpoint.v, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.metadata.source, CheckpointSource::Update);
        assert_eq!(checkpoint.metadata.step, 1);
        assert!(checkpoint.metadata.created_at.is_some());
        assert!(!checkpoint.ts.is_empty());
    }

    /// **Scenario**: Successive checkpoints have distinct ids.
    #[test]
    fn checkpoint_unique_ids() {
        let cp1: Checkpoint<i32> = Checkpoint::from_state(1, CheckpointSource::Input, -1);
        let cp2: Checkpoint<i32> = Checkpoint::from_state(2, CheckpointSource::Update, 0);
        assert_ne!(cp1.id, cp2.id);
    }
}

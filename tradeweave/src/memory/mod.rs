//! Checkpointing: save and restore graph state per conversation thread.
//!
//! A [`Checkpointer`] persists [`Checkpoint`] snapshots keyed by
//! `(thread_id, checkpoint_ns)` from [`RunnableConfig`]. [`MemorySaver`] is
//! the in-memory implementation used here (per-run lifetime, no durability).

mod checkpoint;
mod checkpointer;
mod config;
mod memory_saver;
mod uuid6;

pub use checkpoint::{Checkpoint, CheckpointListItem, CheckpointMetadata, CheckpointSource};
pub use checkpointer::{CheckpointError, Checkpointer};
pub use config::RunnableConfig;
pub use memory_saver::MemorySaver;
pub use uuid6::{uuid6, Uuid6};

//! Graph execution error type.
//!
//! Returned by nodes and by `CompiledStateGraph::invoke` when a step fails.
//! An interruption is not an error: a suspended run surfaces as
//! [`GraphOutcome::Interrupted`](crate::graph::GraphOutcome), never through
//! this type.

use thiserror::Error;

/// Execution error for a graph run.
///
/// One variant: a step failed with a message (LLM call failed, tool dispatch
/// failed, empty graph). No separate error types for tools or LLM at this
/// layer; the originating error is carried in the message.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display format contains "execution failed" and the message.
    #[test]
    fn agent_error_display_execution_failed() {
        let err = AgentError::ExecutionFailed("msg".to_string());
        let s = err.to_string();
        assert!(s.contains("execution failed"), "{}", s);
        assert!(s.contains("msg"), "{}", s);
    }
}

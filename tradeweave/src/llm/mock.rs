//! Scripted LLM for tests and the deterministic example.
//!
//! Returns a fixed sequence of responses, one per `invoke` call; the last
//! response repeats once the script is exhausted. Lets the multi-turn HITL
//! flow (quote → summary → order → final confirmation) run without a model.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;

/// Mock LLM: a scripted sequence of responses.
///
/// **Interaction**: Implements `LlmClient`; used by the assistant node in
/// tests and examples.
pub struct MockLlm {
    script: Vec<LlmResponse>,
    calls: AtomicUsize,
}

impl MockLlm {
    /// Creates a mock that plays back `script` in order; the last entry
    /// repeats for any further calls.
    pub fn from_script(script: Vec<LlmResponse>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a mock that always returns one plain reply (no tool calls).
    pub fn with_no_tool_calls(content: impl Into<String>) -> Self {
        Self::from_script(vec![LlmResponse::text(content)])
    }

    /// Creates a mock whose first turn requests one tool call and whose
    /// second turn replies with plain text.
    pub fn tool_call_then_text(
        call: ToolCall,
        first_content: impl Into<String>,
        second_content: impl Into<String>,
    ) -> Self {
        Self::from_script(vec![
            LlmResponse::with_tool_calls(first_content, vec![call]),
            LlmResponse::text(second_content),
        ])
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        if self.script.is_empty() {
            return Err(AgentError::ExecutionFailed("mock script is empty".into()));
        }
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        let idx = n.min(self.script.len() - 1);
        Ok(self.script[idx].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: The script plays in order and the last entry repeats.
    #[tokio::test]
    async fn script_plays_in_order_then_repeats_last() {
        let llm = MockLlm::from_script(vec![
            LlmResponse::text("first"),
            LlmResponse::text("second"),
        ]);
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "first");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "second");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "second");
    }

    /// **Scenario**: tool_call_then_text requests the call on turn one only.
    #[tokio::test]
    async fn tool_call_then_text_sequence() {
        let llm = MockLlm::tool_call_then_text(
            ToolCall {
                name: "get_stock_price".into(),
                arguments: "{\"symbol\":\"MSFT\"}".into(),
                id: Some("call-1".into()),
            },
            "Looking up the quote.",
            "MSFT trades at 200.3.",
        );
        let first = llm.invoke(&[]).await.unwrap();
        assert_eq!(first.tool_calls.len(), 1);
        let second = llm.invoke(&[]).await.unwrap();
        assert!(second.tool_calls.is_empty());
        assert_eq!(second.content, "MSFT trades at 200.3.");
    }

    /// **Scenario**: An empty script is an execution failure, not a panic.
    #[tokio::test]
    async fn empty_script_is_execution_failed() {
        let llm = MockLlm::from_script(vec![]);
        assert!(llm.invoke(&[]).await.is_err());
    }
}

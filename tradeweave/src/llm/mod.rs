//! LLM client abstraction for the assistant node.
//!
//! The assistant node depends on a callable that takes the message history
//! and returns assistant text plus optional tool calls; this module defines
//! the trait, the scripted [`MockLlm`], and the Chat Completions client
//! [`ChatOpenAI`].

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::state::ToolCall;

/// Response from one LLM completion: assistant text and optional tool calls.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; the assistant node
/// writes `content` into a new assistant message and `tool_calls` into
/// `ChatState::tool_calls` (empty means no tools → the graph ends).
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
    /// Tool calls requested this turn; empty means none.
    pub tool_calls: Vec<ToolCall>,
}

impl LlmResponse {
    /// A plain text reply with no tool calls.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: vec![],
        }
    }

    /// A turn that requests the given tool calls.
    pub fn with_tool_calls(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            content: content.into(),
            tool_calls,
        }
    }
}

/// LLM client: given messages, returns assistant text and optional tool calls.
///
/// Failures (network, auth) surface as `AgentError::ExecutionFailed` to the
/// caller; no internal retry.
///
/// **Interaction**: Used by the assistant node.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content and optional tool calls.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}

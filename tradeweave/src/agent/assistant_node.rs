//! Assistant node: read messages, call the LLM, write the reply and any
//! requested tool calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::ChatState;

/// Assistant node: one LLM turn over the full message history.
///
/// Appends one assistant message and sets `state.tool_calls` from the
/// response (empty when the model requested none — the conditional router
/// then ends the run).
///
/// **Interaction**: Implements `Node<ChatState>`; holds `Arc<dyn LlmClient>`
/// so the same client can be shared with other wiring.
pub struct AssistantNode {
    llm: Arc<dyn LlmClient>,
}

impl AssistantNode {
    /// Creates an assistant node with the given LLM client.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<ChatState> for AssistantNode {
    fn id(&self) -> &str {
        "assistant"
    }

    /// Calls the LLM, appends the assistant message, sets tool_calls.
    /// Routing from this node is decided by the conditional router.
    async fn run(&self, state: ChatState) -> Result<(ChatState, Next), AgentError> {
        let response = self.llm.invoke(&state.messages).await?;
        let mut messages = state.messages;
        messages.push(Message::Assistant(response.content));
        let new_state = ChatState {
            messages,
            tool_calls: response.tool_calls,
            pending_tool: state.pending_tool,
            resume_value: state.resume_value,
        };
        Ok((new_state, Next::Continue))
    }
}

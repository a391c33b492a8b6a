//! Tools node: dispatch the round's tool calls, suspend for approval when a
//! tool asks, merge results into the conversation.
//!
//! When a tool returns an interrupt, the node records the paused-at marker
//! in state and returns `Next::Interrupt`; the run loop checkpoints that
//! state, so a later resume re-enters this node with the stored arguments
//! and routes the caller's decision into the suspended call only. Results of
//! completed calls are appended to `messages` as observations so the next
//! assistant turn can summarize them.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::graph::{Interrupt, Next, Node};
use crate::message::Message;
use crate::state::{ChatState, PendingToolCall, ToolCall, ToolResult};
use crate::tools::{ToolOutcome, ToolRegistry};

/// Event type tag carried in approval interrupt payloads.
pub const APPROVAL_REQUIRED_EVENT_TYPE: &str = "approval_required";

/// Parses a ToolCall.arguments string to a JSON value.
///
/// Falls back to an empty object on parse failure (the tool then rejects
/// missing arguments itself). Unwraps one level of string nesting for models
/// that double-encode arguments.
fn parse_tool_arguments(arguments: &str) -> Value {
    let raw = if arguments.trim().is_empty() {
        serde_json::json!({})
    } else {
        match serde_json::from_str(arguments) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, arguments = %arguments, "tool arguments JSON parse failed, using empty object");
                serde_json::json!({})
            }
        }
    };
    if let Some(s) = raw.as_str() {
        serde_json::from_str(s).unwrap_or_else(|e| {
            warn!(error = %e, "nested tool arguments JSON parse failed");
            raw
        })
    } else {
        raw
    }
}

fn approval_required_payload(tc: &ToolCall, args: &Value, prompt: &str) -> Value {
    serde_json::json!({
        "type": APPROVAL_REQUIRED_EVENT_TYPE,
        "node_id": "tools",
        "tool_name": tc.name,
        "call_id": tc.id,
        "arguments": args,
        "prompt": prompt,
    })
}

/// Tools node: executes the round's tool calls through the registry.
///
/// **Interaction**: Implements `Node<ChatState>`; shares the registry with
/// the LLM wiring via `Arc<ToolRegistry>`.
pub struct ToolNode {
    registry: Arc<ToolRegistry>,
}

impl ToolNode {
    /// Creates a tools node over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Node<ChatState> for ToolNode {
    fn id(&self) -> &str {
        "tools"
    }

    async fn run(&self, state: ChatState) -> Result<(ChatState, Next), AgentError> {
        let ChatState {
            mut messages,
            tool_calls,
            pending_tool,
            resume_value,
        } = state;

        let mut results: Vec<ToolResult> = Vec::with_capacity(tool_calls.len());

        for tc in &tool_calls {
            let args = parse_tool_arguments(&tc.arguments);
            // The stored decision is routed only into the call the paused-at
            // marker records; every other call runs from scratch.
            let resume = match (&pending_tool, &resume_value) {
                (Some(marker), Some(decision)) if marker.matches(tc) => Some(decision.as_str()),
                _ => None,
            };

            debug!(tool = %tc.name, args = ?args, resumed = resume.is_some(), "calling tool");

            match self.registry.call(&tc.name, args.clone(), resume).await {
                Ok(ToolOutcome::Content(content)) => {
                    results.push(ToolResult {
                        call_id: tc.id.clone(),
                        name: Some(tc.name.clone()),
                        content: content.text,
                    });
                }
                Ok(ToolOutcome::Interrupt(prompt)) => {
                    let payload = approval_required_payload(tc, &args, &prompt);
                    let interrupt = match &tc.id {
                        Some(id) => Interrupt::with_id(payload, id.clone()),
                        None => Interrupt::new(payload),
                    };
                    let marker = PendingToolCall {
                        call_id: tc.id.clone(),
                        name: tc.name.clone(),
                        arguments: args,
                        prompt,
                    };
                    // Keep the round's tool_calls so the resumed entry
                    // re-dispatches them with the decision in place.
                    let suspended = ChatState {
                        messages,
                        tool_calls: tool_calls.clone(),
                        pending_tool: Some(marker),
                        resume_value: None,
                    };
                    return Ok((suspended, Next::Interrupt(interrupt)));
                }
                Err(e) => {
                    warn!(tool = %tc.name, error = %e, "tool call failed");
                    return Err(AgentError::ExecutionFailed(e.to_string()));
                }
            }
        }

        for tr in &results {
            let name = tr
                .name
                .as_deref()
                .or(tr.call_id.as_deref())
                .unwrap_or("tool");
            messages.push(Message::User(format!(
                "Tool {} returned: {}",
                name, tr.content
            )));
        }

        let new_state = ChatState {
            messages,
            tool_calls: vec![],
            pending_tool: None,
            resume_value: None,
        };
        Ok((new_state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::demo_registry;

    fn quote_call() -> ToolCall {
        ToolCall {
            name: "get_stock_price".into(),
            arguments: "{\"symbol\":\"MSFT\"}".into(),
            id: Some("call-1".into()),
        }
    }

    fn buy_call() -> ToolCall {
        ToolCall {
            name: "buy_stocks".into(),
            arguments: "{\"symbol\":\"MSFT\",\"quantity\":10,\"total_price\":2003.0}".into(),
            id: Some("call-2".into()),
        }
    }

    fn node() -> ToolNode {
        ToolNode::new(Arc::new(demo_registry()))
    }

    /// **Scenario**: A quote call completes, the observation lands in messages
    /// and the round is cleared.
    #[tokio::test]
    async fn quote_call_merges_observation() {
        let state = ChatState {
            tool_calls: vec![quote_call()],
            ..Default::default()
        };
        let (out, next) = node().run(state).await.unwrap();
        assert_eq!(next, Next::Continue);
        assert!(out.tool_calls.is_empty());
        assert!(out.pending_tool.is_none());
        assert!(matches!(
            &out.messages[0],
            Message::User(s) if s == "Tool get_stock_price returned: 200.3"
        ));
    }

    /// **Scenario**: A purchase call suspends: the marker is recorded, the
    /// round's calls are kept, and the interrupt carries the prompt.
    #[tokio::test]
    async fn purchase_call_suspends_with_marker() {
        let state = ChatState {
            tool_calls: vec![buy_call()],
            ..Default::default()
        };
        let (out, next) = node().run(state).await.unwrap();
        let interrupt = match next {
            Next::Interrupt(i) => i,
            other => panic!("expected interrupt, got {:?}", other),
        };
        assert_eq!(
            interrupt.prompt(),
            Some("Approve buying 10 MSFT stocks for 2003.00?")
        );
        assert_eq!(interrupt.id.as_deref(), Some("call-2"));
        assert_eq!(interrupt.value["type"], APPROVAL_REQUIRED_EVENT_TYPE);
        let marker = out.pending_tool.expect("marker recorded");
        assert_eq!(marker.name, "buy_stocks");
        assert_eq!(out.tool_calls.len(), 1, "round kept for re-entry");
        assert!(out.messages.is_empty(), "no observation before approval");
    }

    /// **Scenario**: Re-entering with a decision routes it into the suspended
    /// call and completes the round.
    #[tokio::test]
    async fn resumed_round_consumes_decision() {
        let state = ChatState {
            tool_calls: vec![buy_call()],
            ..Default::default()
        };
        let tool_node = node();
        let (suspended, _) = tool_node.run(state).await.unwrap();

        let resumed = ChatState {
            resume_value: Some("yes".into()),
            ..suspended
        };
        let (out, next) = tool_node.run(resumed).await.unwrap();
        assert_eq!(next, Next::Continue);
        assert!(out.pending_tool.is_none());
        assert!(out.resume_value.is_none());
        assert!(out.tool_calls.is_empty());
        assert!(matches!(
            &out.messages[0],
            Message::User(s)
                if s == "Tool buy_stocks returned: You bought 10 shares of MSFT for a total price of 2003.0"
        ));
    }

    /// **Scenario**: A decision of "no" produces the decline observation.
    #[tokio::test]
    async fn resumed_round_declines() {
        let state = ChatState {
            tool_calls: vec![buy_call()],
            ..Default::default()
        };
        let tool_node = node();
        let (suspended, _) = tool_node.run(state).await.unwrap();
        let resumed = ChatState {
            resume_value: Some("no".into()),
            ..suspended
        };
        let (out, _) = tool_node.run(resumed).await.unwrap();
        assert!(matches!(
            &out.messages[0],
            Message::User(s) if s == "Tool buy_stocks returned: Buying declined."
        ));
    }

    /// **Scenario**: An unknown tool name fails the run.
    #[tokio::test]
    async fn unknown_tool_fails() {
        let state = ChatState {
            tool_calls: vec![ToolCall {
                name: "sell_stocks".into(),
                arguments: "{}".into(),
                id: None,
            }],
            ..Default::default()
        };
        let err = node().run(state).await.unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
    }

    /// **Scenario**: Malformed argument JSON falls back to an empty object and
    /// the tool reports the missing argument.
    #[tokio::test]
    async fn malformed_arguments_fall_back_to_empty_object() {
        let state = ChatState {
            tool_calls: vec![ToolCall {
                name: "get_stock_price".into(),
                arguments: "not json".into(),
                id: None,
            }],
            ..Default::default()
        };
        let err = node().run(state).await.unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
    }

    /// **Scenario**: Double-encoded arguments are unwrapped before dispatch.
    #[tokio::test]
    async fn double_encoded_arguments_are_unwrapped() {
        let state = ChatState {
            tool_calls: vec![ToolCall {
                name: "get_stock_price".into(),
                arguments: "\"{\\\"symbol\\\":\\\"RIL\\\"}\"".into(),
                id: None,
            }],
            ..Default::default()
        };
        let (out, _) = node().run(state).await.unwrap();
        assert!(matches!(
            &out.messages[0],
            Message::User(s) if s == "Tool get_stock_price returned: 87.6"
        ));
    }
}

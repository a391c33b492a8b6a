//! Conversation state and per-round tool types for the assistant ⇄ tools graph.
//!
//! `ChatState` holds the message history plus the current round of tool calls
//! and, when a tool has requested human approval, a serializable paused-at
//! marker. The assistant node writes `tool_calls`; the tools node consumes
//! them, merges observations into `messages`, and sets or clears
//! `pending_tool` / `resume_value` around an interruption.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::message::Message;

/// A single tool invocation produced by the LLM and consumed by the tools node.
///
/// `arguments` is the raw JSON string from the model; the tools node parses it
/// before dispatch. Optional `id` correlates a call with its result and with
/// the paused-at marker when the call is suspended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as registered in the tool registry.
    pub name: String,
    /// Arguments as a JSON string; parsed in the tools node when dispatching.
    pub arguments: String,
    /// Optional id assigned by the model.
    pub id: Option<String>,
}

/// Result of executing one tool call inside the tools node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResult {
    /// Id of the tool call this result belongs to (if the call had `id`).
    pub call_id: Option<String>,
    /// Tool name; alternative to `call_id` for matching.
    pub name: Option<String>,
    /// Result text.
    pub content: String,
}

/// Paused-at marker for a suspended tool invocation.
///
/// Recorded in state when a tool requests human approval, and persisted with
/// the checkpoint so a later resume re-enters the tools node with the stored
/// arguments and the supplied decision. A thread holds at most one of these
/// at a time: the tools node suspends on the first interrupting call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingToolCall {
    /// Id of the suspended call, when the model assigned one.
    pub call_id: Option<String>,
    /// Name of the suspended tool.
    pub name: String,
    /// Parsed arguments the tool was invoked with.
    pub arguments: Value,
    /// Human-readable approval prompt the tool produced.
    pub prompt: String,
}

impl PendingToolCall {
    /// True when `call` is the suspended invocation this marker records.
    ///
    /// Matches by call id when both sides have one, by tool name otherwise.
    pub fn matches(&self, call: &ToolCall) -> bool {
        match (&self.call_id, &call.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == call.name,
        }
    }
}

/// State for the assistant ⇄ tools graph.
///
/// One state type flows through both nodes: the assistant appends a reply and
/// writes `tool_calls`; the tools node dispatches them, folds results back
/// into `messages`, and clears the round. `pending_tool` and `resume_value`
/// exist only across an interruption: the former is written when a tool
/// suspends, the latter by the caller when resuming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatState {
    /// Conversation history (System, User, Assistant). Append-only.
    pub messages: Vec<Message>,
    /// Current round of tool calls from the LLM; cleared by the tools node.
    pub tool_calls: Vec<ToolCall>,
    /// Set when a tool suspended waiting for human approval.
    #[serde(default)]
    pub pending_tool: Option<PendingToolCall>,
    /// Decision supplied by the caller on resume; routed into the suspended
    /// call and consumed by the tools node.
    #[serde(default)]
    pub resume_value: Option<String>,
}

impl ChatState {
    /// Returns the content of the chronologically last Assistant message, if any.
    pub fn last_assistant_reply(&self) -> Option<String> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.clone()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: last_assistant_reply returns the latest assistant content, skipping later user messages.
    #[test]
    fn last_assistant_reply_picks_latest_assistant() {
        let state = ChatState {
            messages: vec![
                Message::assistant("first"),
                Message::assistant("second"),
                Message::user("after"),
            ],
            ..Default::default()
        };
        assert_eq!(state.last_assistant_reply().as_deref(), Some("second"));
    }

    /// **Scenario**: last_assistant_reply is None when no assistant message exists.
    #[test]
    fn last_assistant_reply_none_without_assistant() {
        let state = ChatState {
            messages: vec![Message::system("s"), Message::user("u")],
            ..Default::default()
        };
        assert!(state.last_assistant_reply().is_none());
    }

    /// **Scenario**: PendingToolCall matches by call id when both sides carry one.
    #[test]
    fn pending_tool_call_matches_by_id() {
        let marker = PendingToolCall {
            call_id: Some("call-1".into()),
            name: "buy_stocks".into(),
            arguments: serde_json::json!({}),
            prompt: "Approve?".into(),
        };
        let same = ToolCall {
            name: "buy_stocks".into(),
            arguments: "{}".into(),
            id: Some("call-1".into()),
        };
        let other = ToolCall {
            id: Some("call-2".into()),
            ..same.clone()
        };
        assert!(marker.matches(&same));
        assert!(!marker.matches(&other));
    }

    /// **Scenario**: Without ids the marker falls back to matching by tool name.
    #[test]
    fn pending_tool_call_matches_by_name_without_ids() {
        let marker = PendingToolCall {
            call_id: None,
            name: "buy_stocks".into(),
            arguments: serde_json::json!({}),
            prompt: "Approve?".into(),
        };
        let call = ToolCall {
            name: "buy_stocks".into(),
            arguments: "{}".into(),
            id: None,
        };
        assert!(marker.matches(&call));
    }

    /// **Scenario**: ChatState with a pending marker round-trips through serde (checkpoint payload).
    #[test]
    fn chat_state_serde_roundtrip_with_pending_tool() {
        let state = ChatState {
            messages: vec![Message::user("Buy 10 MSFT stocks at current price.")],
            tool_calls: vec![ToolCall {
                name: "buy_stocks".into(),
                arguments: "{\"symbol\":\"MSFT\"}".into(),
                id: Some("call-1".into()),
            }],
            pending_tool: Some(PendingToolCall {
                call_id: Some("call-1".into()),
                name: "buy_stocks".into(),
                arguments: serde_json::json!({"symbol": "MSFT"}),
                prompt: "Approve buying 10 MSFT stocks for 2003.00?".into(),
            }),
            resume_value: None,
        };
        let json = serde_json::to_string(&state).expect("serialize");
        let back: ChatState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.messages.len(), 1);
        assert_eq!(back.tool_calls[0].name, "buy_stocks");
        let pending = back.pending_tool.expect("pending marker survives");
        assert_eq!(pending.prompt, "Approve buying 10 MSFT stocks for 2003.00?");
    }
}

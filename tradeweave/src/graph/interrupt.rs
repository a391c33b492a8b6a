//! Interrupt token for suspending graph execution.
//!
//! A node that needs human input returns [`Next::Interrupt`](super::Next)
//! with a token describing what is being asked. The run loop checkpoints the
//! state and hands the token to the caller; the run is later continued by
//! re-entering the graph at the suspended node with the caller's decision in
//! state. The token is data, not an error.

use serde::{Deserialize, Serialize};

/// Interrupt token raised during graph execution.
///
/// `value` is a JSON payload describing the pending request (for the approval
/// flow: prompt, tool name, call id, arguments). `id` optionally identifies
/// the specific interruption, e.g. the suspended tool call id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interrupt {
    /// The interrupt payload (any JSON-serializable data).
    pub value: serde_json::Value,
    /// Optional id for identifying this specific interrupt.
    pub id: Option<String>,
}

impl Interrupt {
    /// Creates a new interrupt with a payload.
    pub fn new(value: serde_json::Value) -> Self {
        Self { value, id: None }
    }

    /// Creates a new interrupt with a payload and id.
    pub fn with_id(value: serde_json::Value, id: impl Into<String>) -> Self {
        Self {
            value,
            id: Some(id.into()),
        }
    }

    /// Returns the `prompt` field of the payload, when present.
    ///
    /// Approval interrupts carry the human-readable question here.
    pub fn prompt(&self) -> Option<&str> {
        self.value.get("prompt").and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_new_has_no_id() {
        let interrupt = Interrupt::new(serde_json::json!({"prompt": "Approve?"}));
        assert_eq!(interrupt.value, serde_json::json!({"prompt": "Approve?"}));
        assert_eq!(interrupt.id, None);
    }

    #[test]
    fn interrupt_with_id_keeps_id() {
        let interrupt = Interrupt::with_id(serde_json::json!({"prompt": "Approve?"}), "call-1");
        assert_eq!(interrupt.id.as_deref(), Some("call-1"));
    }

    /// **Scenario**: prompt() extracts the approval question, and None for payloads without one.
    #[test]
    fn interrupt_prompt_extraction() {
        let with_prompt = Interrupt::new(serde_json::json!({
            "prompt": "Approve buying 10 MSFT stocks for 2003.00?"
        }));
        assert_eq!(
            with_prompt.prompt(),
            Some("Approve buying 10 MSFT stocks for 2003.00?")
        );
        let without = Interrupt::new(serde_json::json!({"tool_name": "buy_stocks"}));
        assert!(without.prompt().is_none());
    }
}

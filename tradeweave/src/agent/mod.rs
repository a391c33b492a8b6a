//! Agent graph nodes and runner for the assistant ⇄ tools cycle.
//!
//! Two nodes over [`ChatState`]: [`AssistantNode`] calls the LLM with the
//! message history and may produce tool calls; [`ToolNode`] dispatches them
//! through the registry, suspending for approval when a tool asks. Routing
//! from the assistant uses [`tools_condition`]: tool calls present → tools,
//! otherwise end. [`AgentRunner`] wires the graph with a checkpointer and
//! exposes the caller-facing run / resume interface.

mod assistant_node;
mod runner;
mod tool_node;

pub use assistant_node::AssistantNode;
pub use runner::{build_initial_state, AgentRunner, RunError, RunOutcome};
pub use tool_node::{ToolNode, APPROVAL_REQUIRED_EVENT_TYPE};

use crate::state::ChatState;

/// Output of the [`tools_condition`] routing function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolsConditionResult {
    /// Route to the tools node.
    Tools,
    /// Route to END.
    End,
}

impl ToolsConditionResult {
    /// Returns the node id string for this routing result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::End => "__end__",
        }
    }
}

/// Conditional routing for the assistant node: if the latest turn requested
/// tool calls, go to the tools node; otherwise end the run.
pub fn tools_condition(state: &ChatState) -> ToolsConditionResult {
    if state.tool_calls.is_empty() {
        ToolsConditionResult::End
    } else {
        ToolsConditionResult::Tools
    }
}

/// Default system prompt for the brokerage assistant.
///
/// Prepended as the first message when a thread starts. The model is told to
/// quote prices via the lookup tool and to place orders via the purchase
/// tool, which always goes through human approval.
pub const SYSTEM_PROMPT: &str = "You are a brokerage assistant.\n\
Use the get_stock_price tool to look up current quotes and the buy_stocks tool \
to place an order once the user has given a symbol, a quantity and the total \
price. Orders always require human approval; the approval step happens outside \
of this conversation. After a tool result, summarize the outcome for the user \
in one short sentence. Answer directly without tools when no market data is \
needed.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ToolCall;

    /// **Scenario**: tools_condition returns End when no tool calls are pending.
    #[test]
    fn tools_condition_end_without_tool_calls() {
        let state = ChatState::default();
        let result = tools_condition(&state);
        assert_eq!(result, ToolsConditionResult::End);
        assert_eq!(result.as_str(), "__end__");
    }

    /// **Scenario**: tools_condition returns Tools when the turn requested calls.
    #[test]
    fn tools_condition_tools_with_tool_calls() {
        let state = ChatState {
            tool_calls: vec![ToolCall {
                name: "get_stock_price".into(),
                arguments: "{}".into(),
                id: Some("call-1".into()),
            }],
            ..Default::default()
        };
        let result = tools_condition(&state);
        assert_eq!(result, ToolsConditionResult::Tools);
        assert_eq!(result.as_str(), "tools");
    }
}

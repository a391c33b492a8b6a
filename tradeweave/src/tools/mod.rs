//! Tools: a closed set of callable capabilities exposed to the LLM.
//!
//! Each tool declares a name, a description, and a JSON Schema for its
//! arguments ([`ToolSpec`]), and implements [`Tool::call`], which returns
//! either a normal result or an interrupt request ([`ToolOutcome`]).
//! Tools are selected by name through [`ToolRegistry`].
//!
//! The two concrete tools here are [`StockPriceTool`] (quote lookup over an
//! injected [`PriceBook`]) and [`BuyStocksTool`] (order placement, which
//! always suspends for human approval before doing anything observable).

mod buy_stocks;
mod price;
mod registry;
mod stock_price;

pub use buy_stocks::{BuyStocksTool, DECLINE_MESSAGE, TOOL_BUY_STOCKS};
pub use price::PriceBook;
pub use registry::{demo_registry, ToolRegistry};
pub use stock_price::{StockPriceTool, TOOL_GET_STOCK_PRICE};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool specification sent to the LLM for tool selection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    /// Tool name the model uses to request a call.
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

/// Result text of a completed tool call.
#[derive(Debug, Clone)]
pub struct ToolCallContent {
    /// Result text.
    pub text: String,
}

/// Outcome of one tool call: a normal result, or a request to suspend the
/// run and ask a human.
///
/// An interrupting tool performs no observable work before approval; the
/// prompt it returns is what the human is asked.
#[derive(Debug, Clone)]
pub enum ToolOutcome {
    /// The tool completed and produced a result.
    Content(ToolCallContent),
    /// The tool requests human approval; carries the question to ask.
    Interrupt(String),
}

/// Errors from listing or calling tools.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
}

/// A single tool callable by the LLM.
///
/// `resume` is `None` on first entry. When a previous call of this tool
/// suspended the run, the caller's decision is passed back verbatim as
/// `Some(decision)` on re-entry, and the tool completes with it.
///
/// **Interaction**: Registered in [`ToolRegistry`]; dispatched by the tools
/// node, which turns `ToolOutcome::Interrupt` into a graph suspension and
/// records the paused-at marker.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name within a registry.
    fn name(&self) -> &str;

    /// Specification for the LLM: name, description, argument schema.
    fn spec(&self) -> ToolSpec;

    /// Executes the tool with parsed JSON arguments.
    async fn call(
        &self,
        args: Value,
        resume: Option<&str>,
    ) -> Result<ToolOutcome, ToolSourceError>;
}

/// Reads a required string argument from a tool's JSON arguments.
pub(crate) fn required_str(args: &Value, key: &str) -> Result<String, ToolSourceError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ToolSourceError::InvalidInput(format!("missing string argument: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of each ToolSourceError variant contains expected keywords.
    #[test]
    fn tool_source_error_display() {
        let s = ToolSourceError::NotFound("x".into()).to_string();
        assert!(s.contains("not found"), "{}", s);
        let s = ToolSourceError::InvalidInput("bad".into()).to_string();
        assert!(s.contains("invalid"), "{}", s);
    }

    #[test]
    fn required_str_reads_or_fails() {
        let args = serde_json::json!({"symbol": "MSFT", "quantity": 10});
        assert_eq!(required_str(&args, "symbol").unwrap(), "MSFT");
        assert!(required_str(&args, "quantity").is_err());
        assert!(required_str(&args, "missing").is_err());
    }
}

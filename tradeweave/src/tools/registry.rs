//! Name-keyed tool registry.

use std::collections::HashMap;

use serde_json::Value;

use super::{Tool, ToolOutcome, ToolSourceError, ToolSpec};

/// Closed lookup table of tools keyed by name.
///
/// `list()` produces the specs bound to the LLM; the tools node dispatches
/// each model-requested call through `call()`.
///
/// **Interaction**: Built once at wiring time, shared as `Arc<ToolRegistry>`
/// between the LLM client (tool schemas) and the tools node (dispatch).
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. Replaces an existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Lists all registered tools as specs for the LLM.
    pub fn list(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(|t| t.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    /// Calls a tool by name with parsed JSON arguments.
    ///
    /// `resume` carries the human decision when re-entering a previously
    /// suspended call; `None` otherwise.
    ///
    /// # Errors
    ///
    /// `ToolSourceError::NotFound` when no tool has that name.
    pub async fn call(
        &self,
        name: &str,
        args: Value,
        resume: Option<&str>,
    ) -> Result<ToolOutcome, ToolSourceError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolSourceError::NotFound(name.to_string()))?;
        tool.call(args, resume).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the demo tools: quote lookup over the demo price book and
/// order placement with approval.
pub fn demo_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(super::StockPriceTool::new(
        super::PriceBook::demo(),
    )));
    registry.register(Box::new(super::BuyStocksTool::new()));
    registry
}

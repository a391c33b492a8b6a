//! Quote lookup tool: `get_stock_price(symbol)`.

use async_trait::async_trait;
use serde_json::Value;

use super::{required_str, PriceBook, Tool, ToolCallContent, ToolOutcome, ToolSourceError, ToolSpec};

/// Name of the quote lookup tool.
pub const TOOL_GET_STOCK_PRICE: &str = "get_stock_price";

/// Returns the current quoted price of a stock from an injected [`PriceBook`].
///
/// Unknown symbols return 0.0 (the book's silent default). Never interrupts.
pub struct StockPriceTool {
    prices: PriceBook,
}

impl StockPriceTool {
    /// Creates the tool over the given price book.
    pub fn new(prices: PriceBook) -> Self {
        Self { prices }
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    fn name(&self) -> &str {
        TOOL_GET_STOCK_PRICE
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_GET_STOCK_PRICE.to_string(),
            description: Some(
                "Return the current price of a stock given the stock symbol".to_string(),
            ),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "Stock symbol, e.g. MSFT"
                    }
                },
                "required": ["symbol"]
            }),
        }
    }

    async fn call(
        &self,
        args: Value,
        _resume: Option<&str>,
    ) -> Result<ToolOutcome, ToolSourceError> {
        let symbol = required_str(&args, "symbol")?;
        let price = self.prices.lookup(&symbol);
        tracing::debug!(symbol = %symbol, price = price, "quote lookup");
        Ok(ToolOutcome::Content(ToolCallContent {
            text: format!("{:?}", price),
        }))
    }
}

//! Order placement tool: `buy_stocks(symbol, quantity, total_price)`.
//!
//! Always suspends for human approval before doing anything observable. The
//! first call returns an interrupt carrying the confirmation prompt; the
//! re-entered call receives the human decision and produces either the
//! confirmation or the decline message.

use async_trait::async_trait;
use serde_json::Value;

use super::{required_str, Tool, ToolCallContent, ToolOutcome, ToolSourceError, ToolSpec};

/// Name of the order placement tool.
pub const TOOL_BUY_STOCKS: &str = "buy_stocks";

/// Decline message returned when the human answers anything but "yes".
pub const DECLINE_MESSAGE: &str = "Buying declined.";

/// Buys stocks after an explicit human approval step.
///
/// No side effect happens before approval: the only observable output of the
/// first entry is the interrupt prompt.
#[derive(Debug, Default)]
pub struct BuyStocksTool;

impl BuyStocksTool {
    /// Creates the tool.
    pub fn new() -> Self {
        Self
    }
}

fn required_i64(args: &Value, key: &str) -> Result<i64, ToolSourceError> {
    args.get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ToolSourceError::InvalidInput(format!("missing integer argument: {}", key)))
}

fn required_f64(args: &Value, key: &str) -> Result<f64, ToolSourceError> {
    args.get(key)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| ToolSourceError::InvalidInput(format!("missing number argument: {}", key)))
}

#[async_trait]
impl Tool for BuyStocksTool {
    fn name(&self) -> &str {
        TOOL_BUY_STOCKS
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_BUY_STOCKS.to_string(),
            description: Some(
                "Buy stocks given the stock symbol, quantity and total price. \
                 Requires human approval before the order is placed."
                    .to_string(),
            ),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "Stock symbol, e.g. MSFT"
                    },
                    "quantity": {
                        "type": "integer",
                        "description": "Number of shares to buy"
                    },
                    "total_price": {
                        "type": "number",
                        "description": "Total price of the order"
                    }
                },
                "required": ["symbol", "quantity", "total_price"]
            }),
        }
    }

    async fn call(
        &self,
        args: Value,
        resume: Option<&str>,
    ) -> Result<ToolOutcome, ToolSourceError> {
        let symbol = required_str(&args, "symbol")?;
        let quantity = required_i64(&args, "quantity")?;
        let total_price = required_f64(&args, "total_price")?;

        let decision = match resume {
            None => {
                return Ok(ToolOutcome::Interrupt(format!(
                    "Approve buying {} {} stocks for {:.2}?",
                    quantity, symbol, total_price
                )))
            }
            Some(d) => d,
        };

        tracing::debug!(symbol = %symbol, quantity = quantity, decision = %decision, "order decision");
        if decision == "yes" {
            // {:?} keeps the trailing .0 on whole totals (wire format of the quote feed).
            Ok(ToolOutcome::Content(ToolCallContent {
                text: format!(
                    "You bought {} shares of {} for a total price of {:?}",
                    quantity, symbol, total_price
                ),
            }))
        } else {
            Ok(ToolOutcome::Content(ToolCallContent {
                text: DECLINE_MESSAGE.to_string(),
            }))
        }
    }
}

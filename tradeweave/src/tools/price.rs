//! Quoted price lookup service.

use std::collections::HashMap;

/// Price lookup over a fixed symbol → price table.
///
/// Injected into [`StockPriceTool`](super::StockPriceTool) instead of living
/// as ambient module state, so tests can build their own book. Unknown
/// symbols quote `0.0` — a silent default, not an error; callers that need
/// to distinguish can check membership first via [`PriceBook::contains`].
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    prices: HashMap<String, f64>,
}

impl PriceBook {
    /// Creates an empty price book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `(symbol, price)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, f64)>,
    {
        Self {
            prices: pairs
                .into_iter()
                .map(|(s, p)| (s.to_string(), p))
                .collect(),
        }
    }

    /// The demo market: the four symbols the examples and tests quote.
    pub fn demo() -> Self {
        Self::from_pairs([
            ("MSFT", 200.3),
            ("AAPL", 100.4),
            ("AMZN", 150.5),
            ("RIL", 87.6),
        ])
    }

    /// Inserts or replaces a quote.
    pub fn insert(&mut self, symbol: impl Into<String>, price: f64) {
        self.prices.insert(symbol.into(), price);
    }

    /// Quoted price for `symbol`; `0.0` for unknown symbols.
    pub fn lookup(&self, symbol: &str) -> f64 {
        self.prices.get(symbol).copied().unwrap_or(0.0)
    }

    /// True when the book has a quote for `symbol`.
    pub fn contains(&self, symbol: &str) -> bool {
        self.prices.contains_key(symbol)
    }
}

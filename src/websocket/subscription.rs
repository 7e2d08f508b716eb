use crate::services::InstrumentCatalog;
use crate::types::Ticker;
use dashmap::DashSet;

/// Symbols a WebSocket client has asked for.
///
/// An empty filter passes every symbol, so a client that never subscribes
/// sees the whole market watch.
#[derive(Debug, Default)]
pub struct SymbolFilter {
    symbols: DashSet<String>,
}

impl SymbolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add known symbols; returns the canonical symbols newly added.
    pub fn subscribe(&self, catalog: &InstrumentCatalog, symbols: &[String]) -> Vec<String> {
        symbols
            .iter()
            .filter_map(|s| catalog.get(s))
            .filter(|i| self.symbols.insert(i.symbol.clone()))
            .map(|i| i.symbol.clone())
            .collect()
    }

    /// Remove symbols; returns the ones that were present.
    pub fn unsubscribe(&self, catalog: &InstrumentCatalog, symbols: &[String]) -> Vec<String> {
        symbols
            .iter()
            .filter_map(|s| catalog.get(s))
            .filter_map(|i| self.symbols.remove(&i.symbol))
            .collect()
    }

    pub fn matches(&self, symbol: &str) -> bool {
        self.symbols.is_empty() || self.symbols.contains(symbol)
    }

    /// Keep only the tickers this client wants.
    pub fn apply(&self, tickers: Vec<Ticker>) -> Vec<Ticker> {
        if self.symbols.is_empty() {
            return tickers;
        }
        tickers.into_iter().filter(|t| self.matches(&t.symbol)).collect()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

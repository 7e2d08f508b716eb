//! Demo instrument reference data.

use std::collections::HashMap;

use crate::types::{AssetClass, Instrument};

/// (symbol, display name, class, base price)
const DEMO_INSTRUMENTS: &[(&str, &str, AssetClass, f64)] = &[
    ("EURUSD", "EUR/USD", AssetClass::Forex, 1.0850),
    ("GBPUSD", "GBP/USD", AssetClass::Forex, 1.2650),
    ("USDJPY", "USD/JPY", AssetClass::Forex, 149.50),
    ("USDCHF", "USD/CHF", AssetClass::Forex, 0.8850),
    ("AUDUSD", "AUD/USD", AssetClass::Forex, 0.6550),
    ("USDCAD", "USD/CAD", AssetClass::Forex, 1.3650),
    ("XAUUSD", "Gold", AssetClass::Metal, 2350.00),
    ("XAGUSD", "Silver", AssetClass::Metal, 28.50),
    ("BTCUSD", "Bitcoin", AssetClass::Crypto, 67000.0),
    ("ETHUSD", "Ethereum", AssetClass::Crypto, 3400.0),
    ("SOLUSD", "Solana", AssetClass::Crypto, 145.0),
    ("AAPL", "Apple", AssetClass::Stock, 180.0),
    ("MSFT", "Microsoft", AssetClass::Stock, 415.0),
    ("GOOGL", "Alphabet", AssetClass::Stock, 175.0),
    ("AMZN", "Amazon", AssetClass::Stock, 185.0),
    ("TSLA", "Tesla", AssetClass::Stock, 250.0),
    ("NVDA", "NVIDIA", AssetClass::Stock, 880.0),
    ("^GSPC", "S&P 500", AssetClass::Index, 5200.0),
    ("^DJI", "Dow Jones", AssetClass::Index, 39000.0),
    ("^IXIC", "NASDAQ", AssetClass::Index, 16500.0),
];

/// Immutable instrument lookup, loaded once at startup.
#[derive(Debug, Clone)]
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
    by_symbol: HashMap<String, usize>,
}

impl InstrumentCatalog {
    /// Build a catalog from instruments; later duplicates are ignored.
    pub fn new(instruments: Vec<Instrument>) -> Self {
        let mut by_symbol = HashMap::with_capacity(instruments.len());
        let mut kept = Vec::with_capacity(instruments.len());
        for inst in instruments {
            let key = inst.symbol.to_ascii_uppercase();
            if by_symbol.contains_key(&key) {
                continue;
            }
            by_symbol.insert(key, kept.len());
            kept.push(inst);
        }
        Self {
            instruments: kept,
            by_symbol,
        }
    }

    /// The dashboard's twenty demo instruments.
    pub fn demo() -> Self {
        Self::new(
            DEMO_INSTRUMENTS
                .iter()
                .map(|(symbol, name, class, base)| Instrument::new(symbol, name, *class, *base))
                .collect(),
        )
    }

    /// Case-insensitive lookup.
    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.by_symbol
            .get(&symbol.to_ascii_uppercase())
            .map(|&i| &self.instruments[i])
    }

    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn by_class(&self, class: AssetClass) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter().filter(move |i| i.asset_class == class)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = InstrumentCatalog::demo();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.get("EURUSD").unwrap().base_price, 1.0850);
        assert_eq!(catalog.get("^DJI").unwrap().base_price, 39000.0);
        assert!(catalog.all().iter().all(|i| i.base_price > 0.0));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = InstrumentCatalog::demo();
        assert_eq!(catalog.get("btcusd").unwrap().symbol, "BTCUSD");
        assert!(catalog.get("DOGEUSD").is_none());
    }

    #[test]
    fn test_by_class() {
        let catalog = InstrumentCatalog::demo();
        assert_eq!(catalog.by_class(AssetClass::Forex).count(), 6);
        assert_eq!(catalog.by_class(AssetClass::Metal).count(), 2);
        assert_eq!(catalog.by_class(AssetClass::Crypto).count(), 3);
        assert_eq!(catalog.by_class(AssetClass::Stock).count(), 6);
        assert_eq!(catalog.by_class(AssetClass::Index).count(), 3);
    }

    #[test]
    fn test_duplicates_ignored() {
        let catalog = InstrumentCatalog::new(vec![
            Instrument::new("AAA", "First", AssetClass::Stock, 10.0),
            Instrument::new("aaa", "Second", AssetClass::Stock, 20.0),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("AAA").unwrap().name, "First");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class of a tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Forex,
    Crypto,
    Metal,
    Stock,
    Index,
}

impl AssetClass {
    /// All asset classes in market-watch order.
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Forex,
        AssetClass::Metal,
        AssetClass::Crypto,
        AssetClass::Stock,
        AssetClass::Index,
    ];

    /// Get the asset class from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "forex" => Some(AssetClass::Forex),
            "crypto" => Some(AssetClass::Crypto),
            "metal" => Some(AssetClass::Metal),
            "stock" => Some(AssetClass::Stock),
            "index" => Some(AssetClass::Index),
            _ => None,
        }
    }

    /// Smallest quoted price increment ("pip") for this class.
    ///
    /// Forex pairs quote in 0.0001 except JPY-quoted pairs, which quote in
    /// 0.01. Everything else moves in whole units.
    pub fn pip_size(&self, symbol: Option<&str>) -> f64 {
        match self {
            AssetClass::Forex => {
                if symbol.map(is_jpy_quoted).unwrap_or(false) {
                    0.01
                } else {
                    0.0001
                }
            }
            AssetClass::Metal | AssetClass::Crypto | AssetClass::Stock | AssetClass::Index => 1.0,
        }
    }

    /// Units per standard lot.
    pub fn contract_size(&self) -> f64 {
        match self {
            AssetClass::Forex => 100_000.0,
            AssetClass::Metal => 100.0,
            AssetClass::Crypto | AssetClass::Stock | AssetClass::Index => 1.0,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetClass::Forex => "forex",
            AssetClass::Crypto => "crypto",
            AssetClass::Metal => "metal",
            AssetClass::Stock => "stock",
            AssetClass::Index => "index",
        };
        write!(f, "{}", s)
    }
}

/// Whether a pair symbol is quoted in JPY (e.g. `USDJPY`, `EUR/JPY`).
pub fn is_jpy_quoted(symbol: &str) -> bool {
    symbol.to_ascii_uppercase().ends_with("JPY")
}

/// Volatility constants used by the synthetic generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityProfile {
    /// Relative noise amplitude per simulator tick.
    pub tick: f64,
    /// Per-candle noise amplitude as a fraction of base price.
    pub candle: f64,
}

impl VolatilityProfile {
    /// Candle noise for every instrument.
    pub const CANDLE: f64 = 0.002;

    /// Derive the profile from the symbol. Crypto majors swing hardest,
    /// then gold, then yen crosses; everything else is quiet.
    pub fn for_symbol(symbol: &str) -> Self {
        let upper = symbol.to_ascii_uppercase();
        let tick = if upper.contains("BTC") {
            0.005
        } else if upper.contains("XAU") {
            0.002
        } else if upper.contains("JPY") {
            0.001
        } else {
            0.0005
        };

        Self {
            tick,
            candle: Self::CANDLE,
        }
    }
}

/// Immutable reference data for a tradable instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_class: AssetClass,
    pub base_price: f64,
    pub volatility: VolatilityProfile,
}

impl Instrument {
    pub fn new(symbol: &str, name: &str, asset_class: AssetClass, base_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            asset_class,
            base_price,
            volatility: VolatilityProfile::for_symbol(symbol),
        }
    }

    /// Pip size for this instrument.
    pub fn pip_size(&self) -> f64 {
        self.asset_class.pip_size(Some(&self.symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_class_from_str() {
        assert_eq!(AssetClass::from_str("forex"), Some(AssetClass::Forex));
        assert_eq!(AssetClass::from_str("CRYPTO"), Some(AssetClass::Crypto));
        assert_eq!(AssetClass::from_str("metal"), Some(AssetClass::Metal));
        assert_eq!(AssetClass::from_str("stock"), Some(AssetClass::Stock));
        assert_eq!(AssetClass::from_str("index"), Some(AssetClass::Index));
        assert_eq!(AssetClass::from_str("bond"), None);
    }

    #[test]
    fn test_asset_class_serialization() {
        let json = serde_json::to_string(&AssetClass::Forex).unwrap();
        assert_eq!(json, "\"forex\"");
        let parsed: AssetClass = serde_json::from_str("\"metal\"").unwrap();
        assert_eq!(parsed, AssetClass::Metal);
    }

    #[test]
    fn test_pip_size() {
        assert_eq!(AssetClass::Forex.pip_size(Some("EURUSD")), 0.0001);
        assert_eq!(AssetClass::Forex.pip_size(Some("USDJPY")), 0.01);
        assert_eq!(AssetClass::Forex.pip_size(Some("eur/jpy")), 0.01);
        assert_eq!(AssetClass::Forex.pip_size(None), 0.0001);
        assert_eq!(AssetClass::Metal.pip_size(Some("XAUUSD")), 1.0);
        assert_eq!(AssetClass::Crypto.pip_size(None), 1.0);
        assert_eq!(AssetClass::Stock.pip_size(None), 1.0);
    }

    #[test]
    fn test_contract_size() {
        assert_eq!(AssetClass::Forex.contract_size(), 100_000.0);
        assert_eq!(AssetClass::Metal.contract_size(), 100.0);
        assert_eq!(AssetClass::Crypto.contract_size(), 1.0);
    }

    #[test]
    fn test_volatility_profile() {
        assert_eq!(VolatilityProfile::for_symbol("BTCUSD").tick, 0.005);
        assert_eq!(VolatilityProfile::for_symbol("XAUUSD").tick, 0.002);
        assert_eq!(VolatilityProfile::for_symbol("USDJPY").tick, 0.001);
        assert_eq!(VolatilityProfile::for_symbol("EURUSD").tick, 0.0005);
        assert_eq!(VolatilityProfile::for_symbol("AAPL").candle, 0.002);
    }

    #[test]
    fn test_instrument_serializes_type_field() {
        let inst = Instrument::new("EURUSD", "EUR/USD", AssetClass::Forex, 1.085);
        let json = serde_json::to_string(&inst).unwrap();
        assert!(json.contains("\"type\":\"forex\""));
        assert!(json.contains("\"basePrice\":1.085"));
    }
}

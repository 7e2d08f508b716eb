use super::AssetClass;
use serde::{Deserialize, Serialize};

/// Direction the simulated trend is currently pushing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// +1.0 for up, -1.0 for down.
    pub fn sign(&self) -> f64 {
        match self {
            Trend::Up => 1.0,
            Trend::Down => -1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Trend::Up => Trend::Down,
            Trend::Down => Trend::Up,
        }
    }
}

/// Mutable per-instrument simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceState {
    pub price: f64,
    pub trend: Trend,
}

/// Live quote row for the market watch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_class: AssetClass,
    pub price: f64,
    /// Absolute change versus the base price.
    pub change: f64,
    /// Percentage change versus the base price.
    pub change_percent: f64,
    /// Most recent prices, oldest first.
    pub sparkline: Vec<f64>,
    pub high24h: f64,
    pub low24h: f64,
    pub volume: f64,
}

/// Colour bucket for a heatmap tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    StrongUp,
    Up,
    Down,
    StrongDown,
}

impl HeatLevel {
    /// Classify a percentage change.
    pub fn classify(change_percent: f64) -> Self {
        if change_percent >= 1.0 {
            HeatLevel::StrongUp
        } else if change_percent >= 0.0 {
            HeatLevel::Up
        } else if change_percent >= -1.0 {
            HeatLevel::Down
        } else {
            HeatLevel::StrongDown
        }
    }
}

/// One heatmap tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub symbol: String,
    pub change: f64,
    pub level: HeatLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_sign_and_reverse() {
        assert_eq!(Trend::Up.sign(), 1.0);
        assert_eq!(Trend::Down.sign(), -1.0);
        assert_eq!(Trend::Up.reversed(), Trend::Down);
        assert_eq!(Trend::Down.reversed(), Trend::Up);
    }

    #[test]
    fn test_heat_level_classify() {
        assert_eq!(HeatLevel::classify(2.5), HeatLevel::StrongUp);
        assert_eq!(HeatLevel::classify(1.0), HeatLevel::StrongUp);
        assert_eq!(HeatLevel::classify(0.0), HeatLevel::Up);
        assert_eq!(HeatLevel::classify(-0.5), HeatLevel::Down);
        assert_eq!(HeatLevel::classify(-1.0), HeatLevel::Down);
        assert_eq!(HeatLevel::classify(-1.01), HeatLevel::StrongDown);
    }

    #[test]
    fn test_ticker_serialization() {
        let ticker = Ticker {
            symbol: "EURUSD".to_string(),
            name: "EUR/USD".to_string(),
            asset_class: AssetClass::Forex,
            price: 1.085,
            change: 0.0,
            change_percent: 0.0,
            sparkline: vec![1.085],
            high24h: 1.09585,
            low24h: 1.07415,
            volume: 1_000_000.0,
        };
        let json = serde_json::to_string(&ticker).unwrap();
        assert!(json.contains("\"type\":\"forex\""));
        assert!(json.contains("\"changePercent\":0.0"));
        assert!(json.contains("\"high24h\""));
    }
}

use serde::{Deserialize, Serialize};

/// Candle interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl CandleInterval {
    /// Get the interval from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(CandleInterval::OneMinute),
            "5m" => Some(CandleInterval::FiveMinutes),
            "15m" => Some(CandleInterval::FifteenMinutes),
            "1h" => Some(CandleInterval::OneHour),
            "4h" => Some(CandleInterval::FourHours),
            "1d" => Some(CandleInterval::OneDay),
            _ => None,
        }
    }

    /// Candle duration in milliseconds.
    pub fn millis(&self) -> i64 {
        match self {
            CandleInterval::OneMinute => 60_000,
            CandleInterval::FiveMinutes => 300_000,
            CandleInterval::FifteenMinutes => 900_000,
            CandleInterval::OneHour => 3_600_000,
            CandleInterval::FourHours => 14_400_000,
            CandleInterval::OneDay => 86_400_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CandleInterval::OneMinute => "1m",
            CandleInterval::FiveMinutes => "5m",
            CandleInterval::FifteenMinutes => "15m",
            CandleInterval::OneHour => "1h",
            CandleInterval::FourHours => "4h",
            CandleInterval::OneDay => "1d",
        }
    }
}

/// OHLCV candle. `low <= min(open, close) <= max(open, close) <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Open time (epoch millis).
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Whether the OHLC ordering holds and every price is positive.
    pub fn is_well_formed(&self) -> bool {
        self.low > 0.0
            && self.low <= self.open.min(self.close)
            && self.open.max(self.close) <= self.high
            && self.volume >= 0.0
    }
}

/// Candle series response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleSeries {
    pub symbol: String,
    pub interval: CandleInterval,
    pub candles: Vec<Candle>,
}

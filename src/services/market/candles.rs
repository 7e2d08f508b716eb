//! Synthetic OHLCV candle generation for the price chart.

use rand::Rng;
use tracing::debug;

use crate::types::{Candle, CandleInterval, Instrument};

/// Series starts this far below the base price.
const START_DISCOUNT: f64 = 0.95;
/// Maximum wick extension beyond the body, as a fraction.
const WICK: f64 = 0.002;
/// Price never falls below this fraction of base.
const PRICE_FLOOR: f64 = 0.01;
const MIN_VOLUME: f64 = 500_000.0;
const VOLUME_RANGE: f64 = 2_000_000.0;

/// Generate `limit` consecutive candles whose last one opens one interval
/// before `now_ms`.
///
/// Each step adds a slow sinusoidal drift plus uniform noise, both scaled by
/// the instrument's candle volatility. Wicks extend the body by up to 0.2%.
pub fn generate_candles<R: Rng + ?Sized>(
    instrument: &Instrument,
    interval: CandleInterval,
    limit: usize,
    now_ms: i64,
    rng: &mut R,
) -> Vec<Candle> {
    let base = instrument.base_price;
    let step_vol = base * instrument.volatility.candle;
    let floor = base * PRICE_FLOOR;
    let interval_ms = interval.millis();

    let mut candles = Vec::with_capacity(limit);
    let mut price = base * START_DISCOUNT;

    for i in 0..limit {
        let open = price;
        let trend = (i as f64 / 20.0).sin() * step_vol * 0.5;
        let noise = (rng.gen::<f64>() - 0.5) * step_vol;

        price = (price + trend + noise).max(floor);
        let close = price;

        let high = open.max(close) * (1.0 + rng.gen::<f64>() * WICK);
        let low = open.min(close) * (1.0 - rng.gen::<f64>() * WICK);
        let volume = MIN_VOLUME + rng.gen::<f64>() * VOLUME_RANGE;

        candles.push(Candle {
            time: now_ms - (limit - i) as i64 * interval_ms,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    debug!(
        symbol = %instrument.symbol,
        interval = interval.as_str(),
        count = candles.len(),
        "generated candles"
    );

    candles
}

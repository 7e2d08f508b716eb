//! Tick simulator
//!
//! Random walk with trend persistence and mean reversion toward each
//! instrument's base price. State lives in a per-symbol store owned by the
//! simulator; each entry is only mutated under its own map guard.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::candles::generate_candles;
use super::catalog::InstrumentCatalog;
use crate::config::{PriceBand, SimulationConfig};
use crate::types::{
    AssetClass, Candle, CandleInterval, HeatLevel, HeatmapCell, Instrument, PriceState, Ticker,
    Trend,
};

/// Probability that the trend flips on a given tick.
pub const TREND_REVERSAL_PROBABILITY: f64 = 0.01;
/// Share of tick volatility contributed by the trend each tick.
const TREND_WEIGHT: f64 = 0.1;
/// Pull toward base price per unit of relative deviation.
const MEAN_REVERSION: f64 = 0.001;
/// Points kept in each ticker's sparkline.
pub const SPARKLINE_LEN: usize = 21;
/// Tiles shown on the heatmap.
pub const HEATMAP_TILES: usize = 12;
const SESSION_RANGE: f64 = 0.01;
const DEMO_VOLUME: f64 = 1_000_000.0;

/// Fresh state at the base price with a random trend.
pub fn initial_state<R: Rng + ?Sized>(instrument: &Instrument, rng: &mut R) -> PriceState {
    PriceState {
        price: instrument.base_price,
        trend: if rng.gen_bool(0.5) { Trend::Up } else { Trend::Down },
    }
}

/// Advance one tick.
///
/// `price *= 1 + noise + trend + reversion`, then an optional clamp into
/// `band` around the base price. The trend reverses with probability
/// [`TREND_REVERSAL_PROBABILITY`].
pub fn generate_tick<R: Rng + ?Sized>(
    instrument: &Instrument,
    state: PriceState,
    band: Option<PriceBand>,
    rng: &mut R,
) -> PriceState {
    let base = instrument.base_price;
    let vol = instrument.volatility.tick;

    let random_change = (rng.gen::<f64>() - 0.5) * vol;
    let trend_change = state.trend.sign() * vol * TREND_WEIGHT;
    let mean_reversion = (base - state.price) / base * MEAN_REVERSION;

    let mut price = state.price * (1.0 + random_change + trend_change + mean_reversion);
    if let Some(band) = band {
        price = band.clamp(price, base);
    }

    let trend = if rng.gen_bool(TREND_REVERSAL_PROBABILITY) {
        state.trend.reversed()
    } else {
        state.trend
    };

    PriceState { price, trend }
}

/// Initial market-watch row before any tick has run.
pub fn initial_ticker(instrument: &Instrument) -> Ticker {
    let base = instrument.base_price;
    Ticker {
        symbol: instrument.symbol.clone(),
        name: instrument.name.clone(),
        asset_class: instrument.asset_class,
        price: base,
        change: 0.0,
        change_percent: 0.0,
        sparkline: vec![base; SPARKLINE_LEN],
        high24h: base * (1.0 + SESSION_RANGE),
        low24h: base * (1.0 - SESSION_RANGE),
        volume: DEMO_VOLUME,
    }
}

struct SymbolState {
    price: PriceState,
    sparkline: VecDeque<f64>,
    high: f64,
    low: f64,
}

impl SymbolState {
    fn new(instrument: &Instrument, price: PriceState) -> Self {
        let base = instrument.base_price;
        Self {
            price,
            sparkline: std::iter::repeat(base).take(SPARKLINE_LEN).collect(),
            high: base * (1.0 + SESSION_RANGE),
            low: base * (1.0 - SESSION_RANGE),
        }
    }

    fn apply(&mut self, next: PriceState) {
        self.price = next;
        if self.sparkline.len() == SPARKLINE_LEN {
            self.sparkline.pop_front();
        }
        self.sparkline.push_back(next.price);
        self.high = self.high.max(next.price);
        self.low = self.low.min(next.price);
    }

    fn to_ticker(&self, instrument: &Instrument) -> Ticker {
        let base = instrument.base_price;
        let change = self.price.price - base;
        Ticker {
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            asset_class: instrument.asset_class,
            price: self.price.price,
            change,
            change_percent: change / base * 100.0,
            sparkline: self.sparkline.iter().copied().collect(),
            high24h: self.high,
            low24h: self.low,
            volume: DEMO_VOLUME,
        }
    }
}

/// Owns the simulated feed: instrument catalog, per-symbol state and the
/// random source.
pub struct MarketSimulator {
    catalog: Arc<InstrumentCatalog>,
    states: DashMap<String, SymbolState>,
    rng: Mutex<StdRng>,
    band: Option<PriceBand>,
}

impl MarketSimulator {
    /// Create a simulator; seeded from `config.seed` when set.
    pub fn new(catalog: Arc<InstrumentCatalog>, config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            instruments = catalog.len(),
            seeded = config.seed.is_some(),
            band = ?config.price_band,
            "market simulator ready"
        );
        Self {
            catalog,
            states: DashMap::new(),
            rng: Mutex::new(rng),
            band: config.price_band,
        }
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // Lock order: rng, then a state entry.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn step(&self, instrument: &Instrument, rng: &mut StdRng) -> Ticker {
        let mut entry = self
            .states
            .entry(instrument.symbol.clone())
            .or_insert_with(|| SymbolState::new(instrument, initial_state(instrument, rng)));
        let next = generate_tick(instrument, entry.price, self.band, rng);
        entry.apply(next);
        entry.to_ticker(instrument)
    }

    /// Advance one symbol, creating its state on first use.
    pub fn tick(&self, symbol: &str) -> Option<Ticker> {
        let instrument = self.catalog.get(symbol)?;
        let mut rng = self.rng();
        Some(self.step(instrument, &mut rng))
    }

    /// Advance every instrument once, in catalog order.
    pub fn tick_all(&self) -> Vec<Ticker> {
        let mut rng = self.rng();
        self.catalog
            .all()
            .iter()
            .map(|instrument| self.step(instrument, &mut rng))
            .collect()
    }

    /// Current row for a symbol without advancing it.
    pub fn ticker(&self, symbol: &str) -> Option<Ticker> {
        let instrument = self.catalog.get(symbol)?;
        Some(self.snapshot(instrument))
    }

    fn snapshot(&self, instrument: &Instrument) -> Ticker {
        match self.states.get(&instrument.symbol) {
            Some(state) => state.to_ticker(instrument),
            None => initial_ticker(instrument),
        }
    }

    /// Current rows for every instrument.
    pub fn tickers(&self) -> Vec<Ticker> {
        self.catalog.all().iter().map(|i| self.snapshot(i)).collect()
    }

    pub fn tickers_by_class(&self, class: AssetClass) -> Vec<Ticker> {
        self.catalog.by_class(class).map(|i| self.snapshot(i)).collect()
    }

    /// Current state of a symbol, if it has ticked.
    pub fn price_state(&self, symbol: &str) -> Option<PriceState> {
        let instrument = self.catalog.get(symbol)?;
        self.states.get(&instrument.symbol).map(|s| s.price)
    }

    /// Heatmap tiles for the first instruments in catalog order.
    pub fn heatmap(&self) -> Vec<HeatmapCell> {
        self.tickers()
            .into_iter()
            .take(HEATMAP_TILES)
            .map(|t| HeatmapCell {
                level: HeatLevel::classify(t.change_percent),
                change: t.change_percent,
                symbol: t.symbol,
            })
            .collect()
    }

    /// Candle history ending now, drawn from the simulator's random source.
    pub fn candles(&self, symbol: &str, interval: CandleInterval, limit: usize) -> Option<Vec<Candle>> {
        let instrument = self.catalog.get(symbol)?;
        let now = Utc::now().timestamp_millis();
        let mut rng = self.rng();
        Some(generate_candles(instrument, interval, limit, now, &mut *rng))
    }

    /// Drop all state; the next tick starts again from base prices.
    pub fn restart(&self) {
        let count = self.states.len();
        self.states.clear();
        debug!(count, "simulator state cleared");
    }
}

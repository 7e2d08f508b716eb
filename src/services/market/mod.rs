//! Simulated market feed
//!
//! - Instrument catalog with base prices
//! - Per-tick random walk with trend and mean reversion
//! - Synthetic candle history
//! - Ticker rows, heatmap tiles

pub mod candles;
pub mod catalog;
pub mod simulator;

pub use candles::generate_candles;
pub use catalog::InstrumentCatalog;
pub use simulator::{generate_tick, initial_state, initial_ticker, MarketSimulator};

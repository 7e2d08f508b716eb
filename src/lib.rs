//! TradeDesk - simulated multi-asset trading dashboard backend
//!
//! - Quant calculators (position size, Kelly, VaR, Monte Carlo, stress)
//! - Simulated market feed with candle history
//! - Demo portfolio and risk metrics
//! - REST API and WebSocket ticker stream

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;
pub mod websocket;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use config::Config;
use services::{InstrumentCatalog, MarketSimulator};
use types::Ticker;

/// Ticker batches buffered per WebSocket subscriber before it starts lagging.
const TICKER_CHANNEL_CAPACITY: usize = 64;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub simulator: Arc<MarketSimulator>,
    pub tickers_tx: broadcast::Sender<Vec<Ticker>>,
}

impl AppState {
    /// Build state over the demo instrument catalog.
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(InstrumentCatalog::demo());
        let simulator = Arc::new(MarketSimulator::new(catalog, &config.simulation));
        let (tickers_tx, _) = broadcast::channel(TICKER_CHANNEL_CAPACITY);
        Self {
            config: Arc::new(config),
            simulator,
            tickers_tx,
        }
    }

    pub fn subscribe_tickers(&self) -> broadcast::Receiver<Vec<Ticker>> {
        self.tickers_tx.subscribe()
    }
}

/// Build the full router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .route("/ws", get(websocket::ws_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Advance the simulator on the configured cadence and broadcast each batch.
pub fn spawn_simulation(state: AppState) -> JoinHandle<()> {
    let period = Duration::from_millis(state.config.simulation.tick_interval_ms);
    info!(interval_ms = period.as_millis() as u64, "starting market simulation");

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let tickers = state.simulator.tick_all();
            // No receivers is not an error; the batch is simply dropped.
            if let Ok(receivers) = state.tickers_tx.send(tickers) {
                debug!(receivers, "broadcast ticker batch");
            }
        }
    })
}

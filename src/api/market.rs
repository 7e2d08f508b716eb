use super::ApiResponse;
use crate::error::{AppError, Result};
use crate::types::{AssetClass, CandleInterval, CandleSeries, HeatmapCell, Instrument, Ticker};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Candles returned when the request doesn't say.
const DEFAULT_CANDLE_LIMIT: usize = 100;

/// Optional asset class filter.
#[derive(Debug, Default, Deserialize)]
pub struct ClassQuery {
    pub class: Option<String>,
}

impl ClassQuery {
    fn asset_class(&self) -> Result<Option<AssetClass>> {
        match self.class.as_deref() {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => AssetClass::from_str(raw)
                .map(Some)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown asset class: {}", raw))),
        }
    }
}

/// Candle history query.
#[derive(Debug, Default, Deserialize)]
pub struct CandleQuery {
    pub interval: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/market/instruments
async fn get_instruments(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> Result<Json<ApiResponse<Vec<Instrument>>>> {
    let catalog = state.simulator.catalog();
    let instruments = match query.asset_class()? {
        Some(class) => catalog.by_class(class).cloned().collect(),
        None => catalog.all().to_vec(),
    };
    Ok(Json(ApiResponse::new(instruments)))
}

/// GET /api/market/tickers
async fn get_tickers(
    State(state): State<AppState>,
    Query(query): Query<ClassQuery>,
) -> Result<Json<ApiResponse<Vec<Ticker>>>> {
    let tickers = match query.asset_class()? {
        Some(class) => state.simulator.tickers_by_class(class),
        None => state.simulator.tickers(),
    };
    Ok(Json(ApiResponse::new(tickers)))
}

/// GET /api/market/tickers/:symbol
async fn get_ticker(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<Ticker>>> {
    let ticker = state
        .simulator
        .ticker(&symbol)
        .ok_or_else(|| AppError::NotFound(format!("Unknown symbol: {}", symbol)))?;
    Ok(Json(ApiResponse::new(ticker)))
}

/// GET /api/market/heatmap
async fn get_heatmap(State(state): State<AppState>) -> Json<ApiResponse<Vec<HeatmapCell>>> {
    Json(ApiResponse::new(state.simulator.heatmap()))
}

/// GET /api/market/candles/:symbol
async fn get_candles(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<ApiResponse<CandleSeries>>> {
    let interval = match query.interval.as_deref() {
        None => CandleInterval::default(),
        Some(raw) => CandleInterval::from_str(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown interval: {}", raw)))?,
    };
    let limit = query
        .limit
        .unwrap_or(DEFAULT_CANDLE_LIMIT)
        .min(state.config.simulation.max_candles);

    let candles = state
        .simulator
        .candles(&symbol, interval, limit)
        .ok_or_else(|| AppError::NotFound(format!("Unknown symbol: {}", symbol)))?;

    let symbol = state
        .simulator
        .catalog()
        .get(&symbol)
        .map(|i| i.symbol.clone())
        .unwrap_or(symbol);

    Ok(Json(ApiResponse::new(CandleSeries {
        symbol,
        interval,
        candles,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/instruments", get(get_instruments))
        .route("/tickers", get(get_tickers))
        .route("/tickers/:symbol", get(get_ticker))
        .route("/heatmap", get(get_heatmap))
        .route("/candles/:symbol", get(get_candles))
}

pub mod health;
pub mod market;
pub mod portfolio;
pub mod quant;

use crate::AppState;
use axum::Router;
use serde::Serialize;

/// API response wrapper matching frontend expectations
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Server time the payload was produced (ms since epoch).
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta {
                timestamp: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/market", market::router())
        .nest("/api/quant", quant::router())
        .nest("/api/portfolio", portfolio::router())
}

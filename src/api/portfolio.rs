use super::ApiResponse;
use crate::error::Result;
use crate::services::portfolio::{demo_risk_metrics, demo_snapshot, demo_stress_tests};
use crate::types::{PortfolioSnapshot, RiskMetrics, StressResult};
use crate::AppState;
use axum::{routing::get, Json, Router};

/// GET /api/portfolio
async fn get_portfolio() -> Json<ApiResponse<PortfolioSnapshot>> {
    Json(ApiResponse::new(demo_snapshot()))
}

/// GET /api/portfolio/risk
async fn get_risk() -> Json<ApiResponse<RiskMetrics>> {
    Json(ApiResponse::new(demo_risk_metrics()))
}

/// GET /api/portfolio/stress
async fn get_stress() -> Result<Json<ApiResponse<Vec<StressResult>>>> {
    Ok(Json(ApiResponse::new(demo_stress_tests()?)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_portfolio))
        .route("/risk", get(get_risk))
        .route("/stress", get(get_stress))
}

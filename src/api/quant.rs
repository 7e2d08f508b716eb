//! Quant calculator endpoints.
//!
//! Sampling calculators draw from a fresh entropy-seeded RNG per request, or
//! from `SIM_SEED` when configured so responses are reproducible. They run on
//! the blocking pool.

use super::ApiResponse;
use crate::error::{AppError, QuantError, Result};
use crate::services::quant::{
    calculate_kelly, calculate_monte_carlo, calculate_position_size, calculate_var,
    run_stress_tests,
};
use crate::types::{
    KellyInput, KellyResult, MonteCarloInput, MonteCarloResult, PositionSizeInput,
    PositionSizeResult, StressInput, StressResult, VarInput, VarResult,
};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Simulated periods allowed per simulated path, on average, under the
/// simulation cap.
const MAX_STEPS_PER_SIMULATION: usize = 1_000;

fn request_rng(state: &AppState) -> StdRng {
    match state.config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run a sampling calculator on the blocking pool with a per-request RNG.
async fn run_sampler<T, F>(state: &AppState, calculate: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut StdRng) -> std::result::Result<T, QuantError> + Send + 'static,
{
    let mut rng = request_rng(state);
    let result = tokio::task::spawn_blocking(move || calculate(&mut rng))
        .await
        .map_err(|e| AppError::Internal(format!("sampler task failed: {}", e)))?;
    Ok(result?)
}

fn check_simulations(state: &AppState, simulations: usize) -> Result<()> {
    let max = state.config.quant.max_simulations;
    if simulations > max {
        return Err(AppError::BadRequest(format!(
            "simulations {} exceeds limit {}",
            simulations, max
        )));
    }
    Ok(())
}

/// POST /api/quant/position-size
async fn position_size(
    Json(input): Json<PositionSizeInput>,
) -> Result<Json<ApiResponse<PositionSizeResult>>> {
    let result = calculate_position_size(&input)?;
    Ok(Json(ApiResponse::new(result)))
}

/// POST /api/quant/kelly
async fn kelly(Json(input): Json<KellyInput>) -> Result<Json<ApiResponse<KellyResult>>> {
    let result = calculate_kelly(&input)?;
    Ok(Json(ApiResponse::new(result)))
}

/// POST /api/quant/var
async fn var(
    State(state): State<AppState>,
    Json(mut input): Json<VarInput>,
) -> Result<Json<ApiResponse<VarResult>>> {
    let simulations = *input
        .simulations
        .get_or_insert(state.config.quant.var_simulations);
    check_simulations(&state, simulations)?;

    let result = run_sampler(&state, move |rng| calculate_var(&input, rng)).await?;
    Ok(Json(ApiResponse::new(result)))
}

/// POST /api/quant/monte-carlo
async fn monte_carlo(
    State(state): State<AppState>,
    Json(input): Json<MonteCarloInput>,
) -> Result<Json<ApiResponse<MonteCarloResult>>> {
    check_simulations(&state, input.simulations)?;
    let budget = state
        .config
        .quant
        .max_simulations
        .saturating_mul(MAX_STEPS_PER_SIMULATION);
    if input.simulations.saturating_mul(input.trades) > budget {
        return Err(AppError::BadRequest(format!(
            "simulations x trades exceeds limit {}",
            budget
        )));
    }

    debug!(
        simulations = input.simulations,
        trades = input.trades,
        "running monte carlo"
    );
    let result = run_sampler(&state, move |rng| calculate_monte_carlo(&input, rng)).await?;
    Ok(Json(ApiResponse::new(result)))
}

/// POST /api/quant/stress
async fn stress(Json(input): Json<StressInput>) -> Result<Json<ApiResponse<Vec<StressResult>>>> {
    let results = run_stress_tests(&input)?;
    Ok(Json(ApiResponse::new(results)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/position-size", post(position_size))
        .route("/kelly", post(kelly))
        .route("/var", post(var))
        .route("/monte-carlo", post(monte_carlo))
        .route("/stress", post(stress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn seeded_state() -> AppState {
        let mut config = Config::default();
        config.simulation.seed = Some(42);
        config.quant.max_simulations = 1_000;
        AppState::new(config)
    }

    #[tokio::test]
    async fn test_kelly_handler() {
        let Json(response) = kelly(Json(KellyInput {
            win_probability: 0.55,
            win_loss_ratio: 1.5,
        }))
        .await
        .unwrap();
        assert!((response.data.kelly_fraction - 0.25).abs() < 1e-9);
        assert!((response.data.half_kelly - 0.125).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_var_handler_rejects_oversized_request() {
        let input = VarInput {
            portfolio_value: 100_000.0,
            confidence_level: 0.95,
            time_horizon_days: 1,
            volatility: 0.2,
            simulations: Some(5_000),
        };
        let err = var(State(seeded_state()), Json(input)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_seeded_monte_carlo_is_reproducible() {
        let input = MonteCarloInput {
            initial_capital: 10_000.0,
            expected_return: 0.1,
            volatility: 0.2,
            time_horizon: 1.0,
            simulations: 500,
            trades: 50,
            ruin_threshold: 0.0,
        };
        let Json(a) = monte_carlo(State(seeded_state()), Json(input.clone()))
            .await
            .unwrap();
        let Json(b) = monte_carlo(State(seeded_state()), Json(input)).await.unwrap();
        assert_eq!(a.data, b.data);
    }

    #[tokio::test]
    async fn test_monte_carlo_work_budget() {
        let input = MonteCarloInput {
            initial_capital: 10_000.0,
            expected_return: 0.1,
            volatility: 0.2,
            time_horizon: 1.0,
            simulations: 1_000,
            trades: 1_000_000,
            ruin_threshold: 0.0,
        };
        let err = monte_carlo(State(seeded_state()), Json(input))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_quant_error_surfaces() {
        let err = position_size(Json(PositionSizeInput {
            account_balance: 10_000.0,
            risk_percent: 2.0,
            entry_price: 1.085,
            stop_loss: 1.085,
            instrument_type: crate::types::AssetClass::Forex,
            symbol: None,
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Quant(_)));
    }
}

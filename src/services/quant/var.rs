//! Value-at-Risk
//!
//! Three estimates of the same loss quantile plus the tail mean:
//! - Parametric: normal quantile times horizon-scaled volatility
//! - Historical: parametric scaled by a fat-tail factor (no return history
//!   exists in this system, so this stands in for an empirical quantile)
//! - Monte Carlo: quantile of simulated zero-drift GBM losses
//! - Expected shortfall: mean simulated loss at or beyond the VaR threshold

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use super::{ensure_positive, inverse_normal_cdf, sort_ascending};
use crate::error::QuantError;
use crate::types::{VarInput, VarResult};

/// Trading days used to scale annual volatility to the horizon.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Multiplier turning the parametric estimate into the historical one.
pub const HISTORICAL_TAIL_FACTOR: f64 = 1.15;

/// Draws used when the input doesn't specify a count.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Annual volatility scaled to `days`.
pub fn horizon_volatility(annual_volatility: f64, days: u32) -> f64 {
    annual_volatility * (days as f64 / TRADING_DAYS_PER_YEAR).sqrt()
}

/// Compute all four risk figures for a portfolio.
pub fn calculate_var<R: Rng + ?Sized>(input: &VarInput, rng: &mut R) -> Result<VarResult, QuantError> {
    let value = ensure_positive("portfolio value", input.portfolio_value)?;
    let volatility = ensure_positive("volatility", input.volatility)?;
    let confidence = input.confidence_level;

    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(QuantError::invalid(format!(
            "confidence level must be in (0, 1), got {}",
            confidence
        )));
    }
    if input.time_horizon_days < 1 {
        return Err(QuantError::invalid("time horizon must be at least one day"));
    }
    let simulations = input.simulations.unwrap_or(DEFAULT_SIMULATIONS);
    if simulations == 0 {
        return Err(QuantError::invalid("simulations must be at least 1"));
    }

    let sigma_t = horizon_volatility(volatility, input.time_horizon_days);
    let z = inverse_normal_cdf(confidence)?;

    let var_parametric = (value * z * sigma_t).max(0.0);
    let var_historical = var_parametric * HISTORICAL_TAIL_FACTOR;
    if !var_historical.is_finite() {
        return Err(QuantError::overflow(format!(
            "parametric VaR is not finite (volatility {})",
            volatility
        )));
    }

    let (var_monte_carlo, expected_shortfall) =
        simulate_losses(value, sigma_t, confidence, simulations, rng)?;

    debug!(
        value,
        confidence,
        days = input.time_horizon_days,
        simulations,
        var_parametric,
        var_monte_carlo,
        "computed VaR"
    );

    Ok(VarResult {
        var_parametric,
        var_historical,
        var_monte_carlo,
        expected_shortfall,
    })
}

/// Monte Carlo VaR and expected shortfall from `n` GBM terminal values.
fn simulate_losses<R: Rng + ?Sized>(
    value: f64,
    sigma_t: f64,
    confidence: f64,
    n: usize,
    rng: &mut R,
) -> Result<(f64, f64), QuantError> {
    // Zero drift in price means a -σ²/2 log drift.
    let log_drift = -0.5 * sigma_t * sigma_t;

    let mut losses: Vec<f64> = Vec::with_capacity(n);
    for _ in 0..n {
        let z: f64 = StandardNormal.sample(rng);
        let terminal = value * (log_drift + sigma_t * z).exp();
        let loss = value - terminal;
        if !loss.is_finite() {
            return Err(QuantError::overflow("simulated portfolio value is not finite"));
        }
        losses.push(loss);
    }
    sort_ascending(&mut losses);

    // Losses sorted ascending: the VaR sits at the confidence quantile and
    // the tail is everything from there up.
    let idx = ((n as f64) * confidence).floor() as usize;
    let idx = idx.min(n - 1);
    let threshold = losses[idx];
    let tail = &losses[idx..];
    let tail_mean = tail.iter().sum::<f64>() / tail.len() as f64;

    let var = threshold.max(0.0);
    Ok((var, tail_mean.max(var)))
}

//! Quant calculators
//!
//! Pure functions over scalar inputs:
//! - Position sizing from account risk and stop distance
//! - Kelly criterion
//! - Value-at-Risk (parametric, historical, Monte Carlo) and expected shortfall
//! - Monte Carlo equity path simulation
//! - Stress tests against named market shocks
//!
//! Calculators that sample take the random source as an argument so callers
//! can pin a seed.

pub mod kelly;
pub mod monte_carlo;
pub mod normal;
pub mod position_size;
pub mod stress;
pub mod var;

pub use kelly::{calculate_kelly, calculate_kelly_criterion, half_kelly};
pub use monte_carlo::calculate_monte_carlo;
pub use normal::inverse_normal_cdf;
pub use position_size::calculate_position_size;
pub use stress::{run_stress_tests, standard_scenarios};
pub use var::{calculate_var, HISTORICAL_TAIL_FACTOR, TRADING_DAYS_PER_YEAR};

use crate::error::QuantError;

/// Reject NaN and infinities with a named error.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<f64, QuantError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuantError::invalid(format!("{} must be finite, got {}", name, value)))
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64, QuantError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(QuantError::invalid(format!("{} must be positive, got {}", name, value)))
    }
}

/// Require a finite, non-negative value.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<f64, QuantError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(QuantError::invalid(format!("{} must not be negative, got {}", name, value)))
    }
}

/// Nearest-rank percentile of an ascending slice; `p` in [0, 1].
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64) * p).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Sort ascending; callers guarantee no NaN.
pub(crate) fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

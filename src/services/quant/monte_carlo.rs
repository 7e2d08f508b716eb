//! Monte Carlo equity path simulation.
//!
//! Each path compounds `trades` normally distributed period returns scaled
//! from annual figures. Ruin is path-based: the first time interim capital
//! touches the ruin threshold the path stops there (capital is floored at
//! zero), so a ruined path never recovers.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::{debug, warn};

use super::{ensure_finite, ensure_non_negative, ensure_positive, percentile, sort_ascending};
use crate::error::QuantError;
use crate::types::{MonteCarloInput, MonteCarloResult};

/// Run the simulation and summarise the terminal capital distribution.
pub fn calculate_monte_carlo<R: Rng + ?Sized>(
    input: &MonteCarloInput,
    rng: &mut R,
) -> Result<MonteCarloResult, QuantError> {
    let initial = ensure_positive("initial capital", input.initial_capital)?;
    let expected_return = ensure_finite("expected return", input.expected_return)?;
    let volatility = ensure_positive("volatility", input.volatility)?;
    let horizon = ensure_positive("time horizon", input.time_horizon)?;
    let ruin_threshold = ensure_non_negative("ruin threshold", input.ruin_threshold)?;

    if input.simulations == 0 {
        return Err(QuantError::invalid("simulations must be at least 1"));
    }
    if input.trades == 0 {
        return Err(QuantError::invalid("trades must be at least 1"));
    }
    if ruin_threshold >= initial {
        return Err(QuantError::invalid(format!(
            "ruin threshold {} must be below initial capital {}",
            ruin_threshold, initial
        )));
    }

    let periods = input.trades as f64;
    let period_mean = expected_return * horizon / periods;
    let period_std = volatility * (horizon / periods).sqrt();
    let returns = Normal::new(period_mean, period_std)
        .map_err(|e| QuantError::invalid(format!("return distribution: {}", e)))?;

    let mut terminals: Vec<f64> = Vec::with_capacity(input.simulations);
    let mut ruined_paths = 0usize;

    for _ in 0..input.simulations {
        let mut capital = initial;
        let mut ruined = false;

        for _ in 0..input.trades {
            let r = returns.sample(rng);
            capital *= 1.0 + r;

            if !capital.is_finite() {
                warn!(volatility, period_std, "equity path overflowed");
                return Err(QuantError::overflow(format!(
                    "equity path diverged (period volatility {})",
                    period_std
                )));
            }
            if capital <= ruin_threshold {
                capital = capital.max(0.0);
                ruined = true;
                break;
            }
        }

        if ruined {
            ruined_paths += 1;
        }
        terminals.push(capital);
    }

    let expected_value = terminals.iter().sum::<f64>() / terminals.len() as f64;
    if !expected_value.is_finite() {
        return Err(QuantError::overflow("mean terminal capital is not finite"));
    }

    sort_ascending(&mut terminals);
    // Reported band always contains the mean, even when most paths end at zero.
    let percentile5 = percentile(&terminals, 0.05).min(expected_value);
    let percentile95 = percentile(&terminals, 0.95).max(expected_value);
    let probability_of_ruin = ruined_paths as f64 / input.simulations as f64;

    debug!(
        simulations = input.simulations,
        trades = input.trades,
        probability_of_ruin,
        expected_value,
        "monte carlo complete"
    );

    Ok(MonteCarloResult {
        probability_of_ruin,
        expected_value,
        percentile5,
        percentile95,
        value_at_risk: (initial - percentile5).max(0.0),
    })
}

//! Kelly criterion for a binary win/loss bet.

use super::ensure_finite;
use crate::error::QuantError;
use crate::types::{KellyInput, KellyResult};

/// Optimal fraction of capital to stake: `p - (1 - p) / ratio`.
///
/// The raw fraction is returned unclipped. Negative means the edge is
/// negative and no position should be taken; values above 1 imply leverage.
pub fn calculate_kelly_criterion(win_probability: f64, win_loss_ratio: f64) -> Result<f64, QuantError> {
    let p = ensure_finite("win probability", win_probability)?;
    let ratio = ensure_finite("win/loss ratio", win_loss_ratio)?;

    if !(0.0..=1.0).contains(&p) {
        return Err(QuantError::invalid(format!(
            "win probability must be in [0, 1], got {}",
            p
        )));
    }
    if ratio <= 0.0 {
        return Err(QuantError::invalid(format!(
            "win/loss ratio must be positive, got {}",
            ratio
        )));
    }

    Ok(p - (1.0 - p) / ratio)
}

/// Half-Kelly, the usual practical cap for display.
pub fn half_kelly(kelly_fraction: f64) -> f64 {
    kelly_fraction / 2.0
}

/// Struct form used by the HTTP layer.
pub fn calculate_kelly(input: &KellyInput) -> Result<KellyResult, QuantError> {
    let kelly_fraction = calculate_kelly_criterion(input.win_probability, input.win_loss_ratio)?;
    Ok(KellyResult {
        kelly_fraction,
        half_kelly: half_kelly(kelly_fraction),
    })
}

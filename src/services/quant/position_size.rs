//! Fixed-fractional position sizing.

use super::{ensure_finite, ensure_positive};
use crate::error::QuantError;
use crate::types::{PositionSizeInput, PositionSizeResult};

/// Size a position so that hitting the stop loses `risk_percent` of the
/// account.
///
/// `position_size * |entry - stop| == risk_amount`; lots and pips follow from
/// the instrument class's contract size and pip size.
pub fn calculate_position_size(input: &PositionSizeInput) -> Result<PositionSizeResult, QuantError> {
    let balance = ensure_positive("account balance", input.account_balance)?;
    let risk_percent = ensure_finite("risk percent", input.risk_percent)?;
    let entry = ensure_positive("entry price", input.entry_price)?;
    let stop = ensure_positive("stop loss", input.stop_loss)?;

    if risk_percent <= 0.0 || risk_percent > 100.0 {
        return Err(QuantError::invalid(format!(
            "risk percent must be in (0, 100], got {}",
            risk_percent
        )));
    }

    let distance = (entry - stop).abs();
    if distance == 0.0 {
        return Err(QuantError::invalid("entry price equals stop loss"));
    }

    let pip_size = input.instrument_type.pip_size(input.symbol.as_deref());
    let contract_size = input.instrument_type.contract_size();

    let risk_amount = balance * risk_percent / 100.0;
    let position_size = risk_amount / distance;

    if !position_size.is_finite() {
        return Err(QuantError::overflow(format!(
            "position size overflowed for stop distance {}",
            distance
        )));
    }

    Ok(PositionSizeResult {
        position_size,
        lots: position_size / contract_size,
        risk_amount,
        pip_distance: distance / pip_size,
        pip_value: pip_size * position_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetClass;

    fn forex(balance: f64, risk: f64, entry: f64, stop: f64) -> PositionSizeInput {
        PositionSizeInput {
            account_balance: balance,
            risk_percent: risk,
            entry_price: entry,
            stop_loss: stop,
            instrument_type: AssetClass::Forex,
            symbol: None,
        }
    }

    #[test]
    fn test_eurusd_scenario() {
        let result = calculate_position_size(&forex(10_000.0, 2.0, 1.0850, 1.0800)).unwrap();
        assert_eq!(result.risk_amount, 200.0);
        assert!((result.pip_distance - 50.0).abs() < 1e-6);
        assert!((result.position_size - 40_000.0).abs() < 1e-3);
        assert!((result.lots - 0.4).abs() < 1e-8);
        assert!((result.pip_value - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_short_side_uses_absolute_distance() {
        let long = calculate_position_size(&forex(10_000.0, 1.0, 1.10, 1.09)).unwrap();
        let short = calculate_position_size(&forex(10_000.0, 1.0, 1.09, 1.10)).unwrap();
        assert!((long.position_size - short.position_size).abs() < 1e-6);
    }

    #[test]
    fn test_jpy_pip_size() {
        let input = PositionSizeInput {
            symbol: Some("USDJPY".to_string()),
            ..forex(10_000.0, 1.0, 149.50, 149.00)
        };
        let result = calculate_position_size(&input).unwrap();
        assert!((result.pip_distance - 50.0).abs() < 1e-6);
        assert!((result.position_size - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_metal_contract_size() {
        let input = PositionSizeInput {
            instrument_type: AssetClass::Metal,
            symbol: Some("XAUUSD".to_string()),
            ..forex(50_000.0, 1.0, 2350.0, 2340.0)
        };
        let result = calculate_position_size(&input).unwrap();
        assert!((result.position_size - 50.0).abs() < 1e-9);
        assert!((result.lots - 0.5).abs() < 1e-9);
        assert!((result.pip_distance - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_risk_identity_holds() {
        for (entry, stop) in [(1.2650, 1.2600), (67_000.0, 65_500.0), (180.0, 181.5)] {
            let input = PositionSizeInput {
                instrument_type: AssetClass::Crypto,
                ..forex(25_000.0, 3.0, entry, stop)
            };
            let result = calculate_position_size(&input).unwrap();
            assert_eq!(result.risk_amount, 25_000.0 * 3.0 / 100.0);
            let implied = result.position_size * (entry - stop).abs();
            assert!((implied - result.risk_amount).abs() < 1e-6);
        }
    }

    #[test]
    fn test_entry_equals_stop_is_invalid() {
        let err = calculate_position_size(&forex(10_000.0, 2.0, 1.085, 1.085)).unwrap_err();
        assert!(matches!(err, QuantError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(calculate_position_size(&forex(0.0, 2.0, 1.0, 0.9)).is_err());
        assert!(calculate_position_size(&forex(-5.0, 2.0, 1.0, 0.9)).is_err());
        assert!(calculate_position_size(&forex(1000.0, 0.0, 1.0, 0.9)).is_err());
        assert!(calculate_position_size(&forex(1000.0, 101.0, 1.0, 0.9)).is_err());
        assert!(calculate_position_size(&forex(1000.0, 2.0, -1.0, 0.9)).is_err());
        assert!(calculate_position_size(&forex(1000.0, 2.0, 1.0, 0.0)).is_err());
        assert!(calculate_position_size(&forex(f64::NAN, 2.0, 1.0, 0.9)).is_err());
    }

    #[test]
    fn test_full_risk_allowed() {
        let result = calculate_position_size(&forex(1000.0, 100.0, 1.0, 0.5)).unwrap();
        assert_eq!(result.risk_amount, 1000.0);
    }
}

//! Scenario stress tests.

use super::ensure_finite;
use crate::error::QuantError;
use crate::types::{StressInput, StressResult, StressScenario};

/// The crash scenarios shown on the risk panel.
pub fn standard_scenarios() -> Vec<StressScenario> {
    vec![
        StressScenario {
            name: "Market Crash (-20%)".to_string(),
            shock_percent: -20.0,
        },
        StressScenario {
            name: "Flash Crash (-10%)".to_string(),
            shock_percent: -10.0,
        },
    ]
}

/// P&L of a linear exposure under each scenario's price shock.
pub fn run_stress_tests(input: &StressInput) -> Result<Vec<StressResult>, QuantError> {
    let exposure = ensure_finite("exposure", input.exposure)?;

    let scenarios = if input.scenarios.is_empty() {
        standard_scenarios()
    } else {
        input.scenarios.clone()
    };

    scenarios
        .into_iter()
        .map(|s| {
            let shock = ensure_finite("shock percent", s.shock_percent)?;
            if shock < -100.0 {
                return Err(QuantError::invalid(format!(
                    "{}: shock below -100% ({})",
                    s.name, shock
                )));
            }
            Ok(StressResult {
                pnl: exposure * shock / 100.0,
                name: s.name,
                shock_percent: shock,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scenarios_on_demo_exposure() {
        let results = run_stress_tests(&StressInput {
            exposure: 42_500.0,
            scenarios: vec![],
        })
        .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Market Crash (-20%)");
        assert_eq!(results[0].pnl, -8_500.0);
        assert_eq!(results[1].pnl, -4_250.0);
    }

    #[test]
    fn test_short_exposure_gains_in_crash() {
        let results = run_stress_tests(&StressInput {
            exposure: -10_000.0,
            scenarios: standard_scenarios(),
        })
        .unwrap();
        assert!(results.iter().all(|r| r.pnl > 0.0));
    }

    #[test]
    fn test_custom_scenario_and_validation() {
        let ok = run_stress_tests(&StressInput {
            exposure: 1_000.0,
            scenarios: vec![StressScenario {
                name: "Rally".to_string(),
                shock_percent: 15.0,
            }],
        })
        .unwrap();
        assert_eq!(ok[0].pnl, 150.0);

        let err = run_stress_tests(&StressInput {
            exposure: 1_000.0,
            scenarios: vec![StressScenario {
                name: "Impossible".to_string(),
                shock_percent: -150.0,
            }],
        });
        assert!(err.is_err());
    }
}

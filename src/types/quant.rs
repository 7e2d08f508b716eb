use super::AssetClass;
use serde::{Deserialize, Serialize};

/// Position sizing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSizeInput {
    /// Account balance in account currency (> 0).
    pub account_balance: f64,
    /// Risk per trade as a percentage (2 = 2%).
    pub risk_percent: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    #[serde(default = "default_instrument_type")]
    pub instrument_type: AssetClass,
    /// Symbol, used to pick the JPY pip size for yen-quoted pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

fn default_instrument_type() -> AssetClass {
    AssetClass::Forex
}

/// Position sizing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSizeResult {
    /// Position size in base units.
    pub position_size: f64,
    /// Position size in standard lots.
    pub lots: f64,
    /// Amount at risk in account currency.
    pub risk_amount: f64,
    /// Entry-to-stop distance in pips.
    pub pip_distance: f64,
    /// Account-currency value of a one-pip move for this position.
    pub pip_value: f64,
}

/// Kelly criterion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KellyInput {
    pub win_probability: f64,
    pub win_loss_ratio: f64,
}

/// Kelly criterion result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KellyResult {
    /// Raw Kelly fraction; negative means "don't take the bet".
    pub kelly_fraction: f64,
    pub half_kelly: f64,
}

/// Value-at-Risk request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarInput {
    pub portfolio_value: f64,
    /// Confidence level in (0, 1), e.g. 0.95.
    pub confidence_level: f64,
    #[serde(default = "default_horizon_days")]
    pub time_horizon_days: u32,
    /// Annualized volatility (0.2 = 20%).
    pub volatility: f64,
    /// Monte Carlo draws; the server default applies when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulations: Option<usize>,
}

fn default_horizon_days() -> u32 {
    1
}

/// Value-at-Risk result. All figures are non-negative loss magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarResult {
    pub var_parametric: f64,
    pub var_historical: f64,
    pub var_monte_carlo: f64,
    pub expected_shortfall: f64,
}

/// Monte Carlo equity simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloInput {
    pub initial_capital: f64,
    /// Expected annual return (0.1 = 10%).
    pub expected_return: f64,
    /// Annual volatility (0.2 = 20%).
    pub volatility: f64,
    /// Horizon in years.
    #[serde(default = "default_time_horizon")]
    pub time_horizon: f64,
    pub simulations: usize,
    /// Periods per path.
    pub trades: usize,
    /// Capital at or below which a path counts as ruined.
    #[serde(default)]
    pub ruin_threshold: f64,
}

fn default_time_horizon() -> f64 {
    1.0
}

/// Monte Carlo equity simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloResult {
    /// Fraction of paths ruined, in [0, 1].
    pub probability_of_ruin: f64,
    /// Mean terminal capital.
    pub expected_value: f64,
    pub percentile5: f64,
    pub percentile95: f64,
    /// Initial capital minus the 5th percentile, floored at zero.
    pub value_at_risk: f64,
}

/// A named market shock applied to a portfolio exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressScenario {
    pub name: String,
    /// Price shock as a percentage (-20 = 20% drop).
    pub shock_percent: f64,
}

/// Stress test request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressInput {
    /// Net market exposure in account currency.
    pub exposure: f64,
    /// Scenarios to run; the standard crash set when empty.
    #[serde(default)]
    pub scenarios: Vec<StressScenario>,
}

/// Profit/loss of the exposure under one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressResult {
    pub name: String,
    pub shock_percent: f64,
    pub pnl: f64,
}

use serde::{Deserialize, Serialize};

/// Account-level portfolio figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_balance: f64,
    pub equity: f64,
    pub margin: f64,
    pub free_margin: f64,
    /// Equity over margin, as a percentage.
    pub margin_level: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
    pub daily_pnl: f64,
    pub weekly_pnl: f64,
    pub monthly_pnl: f64,
}

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

/// An open position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPosition {
    pub id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: PositionSide,
    /// Size in lots.
    pub size: f64,
    pub entry_price: f64,
    pub current_price: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

/// Portfolio summary with its open positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub summary: PortfolioSummary,
    pub positions: Vec<OpenPosition>,
}

/// Portfolio-level risk statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    pub value_at_risk: f64,
    #[serde(rename = "conditionalVaR")]
    pub conditional_var: f64,
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    /// Percent.
    pub max_drawdown: f64,
    /// Percent.
    pub current_drawdown: f64,
    /// Percent.
    pub win_rate: f64,
    pub profit_factor: f64,
    pub average_win: f64,
    pub average_loss: f64,
    pub risk_reward_ratio: f64,
}

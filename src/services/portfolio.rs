//! Demo portfolio shown on the dashboard.
//!
//! There is no broker behind this; the figures are fixed demo values.

use crate::error::QuantError;
use crate::services::quant::run_stress_tests;
use crate::types::{
    OpenPosition, PortfolioSnapshot, PortfolioSummary, PositionSide, RiskMetrics, StressInput,
    StressResult,
};

/// Net exposure the risk panel stress-tests against.
pub const DEMO_EXPOSURE: f64 = 42_500.0;

pub fn demo_summary() -> PortfolioSummary {
    PortfolioSummary {
        total_balance: 100_000.0,
        equity: 102_500.0,
        margin: 15_000.0,
        free_margin: 87_500.0,
        margin_level: 683.33,
        unrealized_pnl: 2_500.0,
        realized_pnl: 5_000.0,
        daily_pnl: 850.0,
        weekly_pnl: 3_200.0,
        monthly_pnl: 8_500.0,
    }
}

/// (id, symbol, side, lots, entry, current, pnl, pnl %)
const DEMO_POSITIONS: &[(&str, &str, PositionSide, f64, f64, f64, f64, f64)] = &[
    ("1", "EURUSD", PositionSide::Long, 1.5, 1.0820, 1.0850, 450.0, 0.45),
    ("2", "XAUUSD", PositionSide::Long, 0.5, 2320.0, 2350.0, 1500.0, 0.65),
    ("3", "BTCUSD", PositionSide::Short, 0.1, 68500.0, 67000.0, 150.0, 0.22),
];

pub fn demo_positions() -> Vec<OpenPosition> {
    DEMO_POSITIONS
        .iter()
        .map(
            |&(id, symbol, side, size, entry_price, current_price, pnl, pnl_percent)| OpenPosition {
                id: id.to_string(),
                symbol: symbol.to_string(),
                side,
                size,
                entry_price,
                current_price,
                pnl,
                pnl_percent,
            },
        )
        .collect()
}

/// Summary plus open positions.
pub fn demo_snapshot() -> PortfolioSnapshot {
    PortfolioSnapshot {
        summary: demo_summary(),
        positions: demo_positions(),
    }
}

pub fn demo_risk_metrics() -> RiskMetrics {
    RiskMetrics {
        value_at_risk: 2_500.0,
        conditional_var: 3_800.0,
        sharpe_ratio: 1.85,
        sortino_ratio: 2.45,
        max_drawdown: 12.5,
        current_drawdown: 2.3,
        win_rate: 62.5,
        profit_factor: 1.85,
        average_win: 450.0,
        average_loss: 280.0,
        risk_reward_ratio: 1.61,
    }
}

/// Standard crash scenarios against [`DEMO_EXPOSURE`].
pub fn demo_stress_tests() -> Result<Vec<StressResult>, QuantError> {
    run_stress_tests(&StressInput {
        exposure: DEMO_EXPOSURE,
        scenarios: Vec::new(),
    })
}

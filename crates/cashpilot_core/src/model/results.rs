//! Projection results
//!
//! Output types from running and analyzing scenarios. A run produces one
//! [`PeriodResult`] per simulated calendar month; the caller persists the
//! whole sequence, fully replacing any prior results for the scenario.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One simulated month of P&L, cash-flow and balance-sheet metrics.
///
/// Flow figures (`revenue`, `expenses`, `ebitda`, ...) are monthly;
/// margins and ratios are percentages. Every ratio with a zero or
/// non-positive denominator evaluates to 0, never NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// First day of the simulated month
    pub date: Date,
    /// Human-readable label ("Jan 2026")
    pub period_label: String,

    // === P&L ===
    pub revenue: f64,
    pub expenses: f64,
    pub gross_margin: f64,
    pub ebitda: f64,
    pub ebitda_margin: f64,
    pub depreciation: f64,
    pub operating_result: f64,
    pub operating_margin: f64,
    pub net_income: f64,
    pub net_margin: f64,

    // === Cash flow ===
    /// Cash flow from operations before working-capital change
    pub caf: f64,
    pub bfr: f64,
    pub bfr_change: f64,
    pub operating_cash_flow: f64,
    pub cash_balance: f64,

    // === Balance sheet ===
    pub receivables: f64,
    pub payables: f64,
    pub inventory: f64,
    pub fixed_assets: f64,
    pub current_assets: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub debt: f64,
    pub equity: f64,

    // === Ratios ===
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub cash_ratio: f64,
    pub debt_to_equity: f64,
    pub roe: f64,
    pub roce: f64,
}

/// Per-period revenue/cash/net-income deltas between two runs (A − B).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub date: Date,
    pub revenue_diff: f64,
    pub revenue_diff_pct: f64,
    pub cash_balance_diff: f64,
    pub cash_balance_diff_pct: f64,
    pub net_income_diff: f64,
    pub net_income_diff_pct: f64,
}

/// Aggregate deltas over the aligned comparison horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Final aligned period's revenue delta (A − B)
    pub final_revenue_diff: f64,
    /// Final aligned period's cash balance delta
    pub final_cash_balance_diff: f64,
    /// Final aligned period's net income delta
    pub final_net_income_diff: f64,
    /// Difference in average month-over-month revenue growth rate (%)
    pub avg_revenue_growth_diff: f64,
    /// Total operating-cash-flow delta over the aligned horizon
    pub total_operating_cash_flow_diff: f64,
}

/// Result of comparing two period-result sequences.
///
/// Sequences of different lengths are compared over their aligned prefix;
/// `length_mismatch` is set so callers can detect a horizon drift the
/// truncation would otherwise hide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub periods: Vec<PeriodComparison>,
    pub summary: ComparisonSummary,
    pub length_mismatch: bool,
}

/// One point of a single-parameter sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// The value the swept parameter was set to for this run
    pub parameter_value: f64,
    /// Full projection under that value
    pub outcome: Vec<PeriodResult>,
    /// Final period's cash balance
    pub final_cash: f64,
    /// Final period's monthly revenue
    pub final_revenue: f64,
    /// Mean net margin across the run (%)
    pub avg_net_margin: f64,
}

//! Integration tests for the scenario projection engine
//!
//! Tests are organized by topic:
//! - `simulation` - driver loop, determinism, metric formulas
//! - `assumptions` - per-kind effects, date windows, wire decoding
//! - `comparison` - scenario-to-scenario deltas and truncation
//! - `sensitivity` - single-parameter sweeps

mod simulation;

use crate::model::{FinancialSnapshot, Scenario, ScenarioId};
use jiff::civil::date;

/// A scenario spanning `months` periods starting 2026-01-01.
pub(crate) fn scenario_over(months: i32) -> Scenario {
    let base = date(2026, 1, 1);
    Scenario::new(
        ScenarioId(1),
        "test scenario",
        base,
        crate::date_math::add_months(base, months - 1),
    )
}

/// The reference snapshot: 120k annual revenue, 60k annual expenses
/// (all fixed), 10k cash.
pub(crate) fn base_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        revenue: 120_000.0,
        expenses: 60_000.0,
        fixed_expenses: 60_000.0,
        cash: 10_000.0,
        ..Default::default()
    }
}

/// Approximate float equality with an absolute tolerance.
pub(crate) fn assert_close(actual: f64, expected: f64, message: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{message}: expected {expected}, got {actual}"
    );
}

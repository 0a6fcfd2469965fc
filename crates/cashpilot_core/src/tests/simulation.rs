//! Tests for the projection driver loop
//!
//! These tests verify:
//! - Period counts over inclusive date ranges
//! - Determinism of repeated runs
//! - Metric formulas on a known snapshot
//! - Zero-safe ratio behavior
//! - Error cases

use jiff::civil::date;

use crate::error::SimulationError;
use crate::model::{
    Assumption, AssumptionCategory, AssumptionKind, FinancialSnapshot, Scenario, ScenarioId,
};
use crate::simulation::{simulate_scenario, simulate_scenario_with_constants};
use crate::simulation_state::FinancialConstants;

use super::{assert_close, base_snapshot, scenario_over};

#[test]
fn test_period_count_inclusive() {
    let scenario = Scenario::new(
        ScenarioId(1),
        "q1",
        date(2026, 1, 1),
        date(2026, 3, 1),
    );
    let results = simulate_scenario(&scenario, &[], &base_snapshot()).unwrap();
    assert_eq!(results.len(), 3, "Jan through Mar inclusive is 3 periods");

    let single = Scenario::new(ScenarioId(2), "one", date(2026, 5, 1), date(2026, 5, 1));
    let results = simulate_scenario(&single, &[], &base_snapshot()).unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn test_period_dates_and_labels() {
    let results = simulate_scenario(&scenario_over(3), &[], &base_snapshot()).unwrap();
    assert_eq!(results[0].date, date(2026, 1, 1));
    assert_eq!(results[1].date, date(2026, 2, 1));
    assert_eq!(results[2].date, date(2026, 3, 1));
    assert_eq!(results[0].period_label, "Jan 2026");
    assert_eq!(results[2].period_label, "Mar 2026");
}

#[test]
fn test_inverted_date_range_rejected() {
    let scenario = Scenario::new(
        ScenarioId(1),
        "backwards",
        date(2026, 6, 1),
        date(2026, 1, 1),
    );
    let err = simulate_scenario(&scenario, &[], &base_snapshot()).unwrap_err();
    assert_eq!(
        err,
        SimulationError::InvalidDateRange {
            base_date: date(2026, 6, 1),
            end_date: date(2026, 1, 1),
        }
    );
}

#[test]
fn test_determinism() {
    let scenario = scenario_over(24);
    let assumptions = vec![
        Assumption::new(
            "growth",
            AssumptionCategory::Revenue,
            AssumptionKind::GrowthRate { rate: 3.0 },
        ),
        Assumption::new(
            "hire",
            AssumptionCategory::Salaries,
            AssumptionKind::Recurring { amount: 2_500.0 },
        ),
    ];
    let snapshot = base_snapshot();

    let first = simulate_scenario(&scenario, &assumptions, &snapshot).unwrap();
    let second = simulate_scenario(&scenario, &assumptions, &snapshot).unwrap();
    assert_eq!(first, second, "identical inputs must give identical output");
}

#[test]
fn test_empty_assumptions_flat_projection() {
    let results = simulate_scenario(&scenario_over(12), &[], &base_snapshot()).unwrap();
    for period in &results {
        assert_close(period.revenue, 10_000.0, "revenue stays flat");
        assert_close(period.expenses, 5_000.0, "expenses stay flat");
    }
}

#[test]
fn test_depreciation_drift_on_fixed_assets() {
    let snapshot = FinancialSnapshot {
        fixed_assets: 120_000.0,
        ..base_snapshot()
    };
    let results = simulate_scenario(&scenario_over(3), &[], &snapshot).unwrap();

    // 10% annual straight-line, monthly: 120_000 * 0.10/12 = 1000
    assert_close(results[0].fixed_assets, 120_000.0, "period 1 fixed assets");
    assert_close(results[0].depreciation, 1_000.0, "period 1 depreciation");
    assert_close(results[1].fixed_assets, 119_000.0, "period 2 fixed assets");
    assert_close(
        results[1].depreciation,
        119_000.0 * 0.10 / 12.0,
        "period 2 depreciation",
    );
    assert!(results[2].fixed_assets < results[1].fixed_assets);
}

#[test]
fn test_metric_formulas_first_period() {
    let results = simulate_scenario(&scenario_over(1), &[], &base_snapshot()).unwrap();
    let p = &results[0];

    assert_close(p.revenue, 10_000.0, "monthly revenue");
    assert_close(p.expenses, 5_000.0, "monthly expenses");
    assert_close(p.gross_margin, 6_500.0, "65% of monthly revenue");
    assert_close(p.ebitda, 5_000.0, "ebitda");
    assert_close(p.ebitda_margin, 50.0, "ebitda margin");
    assert_close(p.depreciation, 0.0, "no fixed assets");
    assert_close(p.operating_result, 5_000.0, "operating result");
    assert_close(p.net_income, 3_750.0, "25% tax on operating result");
    assert_close(p.caf, 3_750.0, "caf = net income + depreciation");
    assert_close(p.bfr_change, 0.0, "no change on first period");
    assert_close(p.operating_cash_flow, 3_750.0, "ocf");
    assert_close(p.cash_balance, 13_750.0, "starting cash + ocf");
    assert_close(p.current_assets, 13_750.0, "cash only");
    assert_close(p.total_assets, 13_750.0, "no fixed assets");
    assert_close(p.equity, 13_750.0, "assets minus zero liabilities");
}

#[test]
fn test_receivables_payables_roll_forward() {
    let results = simulate_scenario(&scenario_over(2), &[], &base_snapshot()).unwrap();

    // Defaults: customers pay at 45 days, suppliers at 30
    assert_close(
        results[1].receivables,
        10_000.0 * 45.0 / 30.0,
        "period 2 receivables from period 1 revenue",
    );
    assert_close(
        results[1].payables,
        5_000.0 * 30.0 / 30.0,
        "period 2 payables from period 1 expenses",
    );
}

#[test]
fn test_end_to_end_growth_scenario() {
    let scenario = Scenario::new(
        ScenarioId(1),
        "two months",
        date(2026, 1, 1),
        date(2026, 2, 1),
    );
    let assumptions = vec![Assumption::new(
        "growth",
        AssumptionCategory::Revenue,
        AssumptionKind::GrowthRate { rate: 5.0 },
    )];
    let results = simulate_scenario(&scenario, &assumptions, &base_snapshot()).unwrap();

    assert_eq!(results.len(), 2);
    // Growth applies within each simulated month before evaluation
    assert_close(results[0].revenue, 10_500.0, "period 1 revenue");
    assert_close(results[1].revenue, 11_025.0, "period 2 revenue compounds");
    assert!(
        results[1].cash_balance > results[0].cash_balance
            && results[0].cash_balance > 10_000.0,
        "cash strictly increases while ebitda is positive"
    );
}

#[test]
fn test_zero_safe_ratios() {
    // Zero payables, zero revenue, zero equity base: every guarded ratio
    // must come out 0, never NaN or infinity
    let results =
        simulate_scenario(&scenario_over(2), &[], &FinancialSnapshot::default()).unwrap();
    for p in &results {
        assert_eq!(p.current_ratio, 0.0);
        assert_eq!(p.quick_ratio, 0.0);
        assert_eq!(p.cash_ratio, 0.0);
        assert_eq!(p.ebitda_margin, 0.0);
        assert_eq!(p.operating_margin, 0.0);
        assert_eq!(p.net_margin, 0.0);
        assert_eq!(p.debt_to_equity, 0.0);
        assert_eq!(p.roe, 0.0);
        assert_eq!(p.roce, 0.0);
        assert!(p.cash_balance.is_finite());
    }
}

#[test]
fn test_negative_equity_guards() {
    let snapshot = FinancialSnapshot {
        revenue: 12_000.0,
        expenses: 60_000.0,
        fixed_expenses: 60_000.0,
        debt: 50_000.0,
        ..Default::default()
    };
    let results = simulate_scenario(&scenario_over(3), &[], &snapshot).unwrap();
    for p in &results {
        assert!(p.equity < 0.0, "loss-making leveraged business");
        assert_eq!(p.debt_to_equity, 0.0, "guarded on non-positive equity");
        assert_eq!(p.roe, 0.0);
        assert!(p.roe.is_finite() && p.roce.is_finite());
    }
}

#[test]
fn test_custom_constants() {
    let constants = FinancialConstants {
        tax_rate: 0.0,
        ..Default::default()
    };
    let results = simulate_scenario_with_constants(
        &scenario_over(1),
        &[],
        &base_snapshot(),
        &constants,
    )
    .unwrap();
    assert_close(
        results[0].net_income,
        results[0].operating_result,
        "untaxed net income equals operating result",
    );
}

#[test]
fn test_horizon_ending_at_calendar_maximum() {
    // December 9999 is the last representable month; the loop must stop
    // cleanly instead of stepping past it
    let scenario = Scenario::new(
        ScenarioId(1),
        "far future",
        date(9999, 10, 1),
        date(9999, 12, 1),
    );
    let results = simulate_scenario(&scenario, &[], &base_snapshot()).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].date, date(9999, 12, 1));
}

#[test]
fn test_mid_month_base_date_steps_monthly() {
    let scenario = Scenario::new(
        ScenarioId(1),
        "mid-month",
        date(2026, 1, 31),
        date(2026, 4, 30),
    );
    let results = simulate_scenario(&scenario, &[], &base_snapshot()).unwrap();
    let dates: Vec<_> = results.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2026, 1, 31),
            date(2026, 2, 28),
            date(2026, 3, 28),
            date(2026, 4, 28),
        ]
    );
}

//! Evaluate one month of metrics from the working state.
//!
//! Pure computation: reads the state, never mutates it. Rolling the state
//! into the next period is `WorkingState::roll_forward`'s job. Every
//! ratio guards its denominator and resolves to 0 instead of NaN or
//! infinity; downstream charts and stored rows rely on that.

use crate::date_math::period_label;
use crate::model::PeriodResult;
use crate::simulation_state::{FinancialConstants, WorkingState};

use jiff::civil::Date;

/// Ratio that resolves to 0 on a zero denominator.
#[inline]
fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Compute the period's metrics for the month starting at `date`.
pub fn evaluate_period(
    state: &WorkingState,
    constants: &FinancialConstants,
    date: Date,
) -> PeriodResult {
    let revenue = state.revenue / 12.0;
    let expenses = state.expenses / 12.0;

    let gross_margin = revenue * constants.gross_margin_ratio;
    let ebitda = revenue - expenses;
    let ebitda_margin = safe_div(ebitda, revenue) * 100.0;

    let depreciation = state.fixed_assets * constants.monthly_depreciation_rate();
    let operating_result = ebitda - depreciation;
    let operating_margin = safe_div(operating_result, revenue) * 100.0;

    let net_income = operating_result * (1.0 - constants.tax_rate);
    let net_margin = safe_div(net_income, revenue) * 100.0;

    let caf = net_income + depreciation;
    let bfr_change = match state.previous_bfr {
        Some(previous) => state.bfr - previous,
        None => 0.0,
    };
    let operating_cash_flow = caf - bfr_change;
    let cash_balance = state.cash + operating_cash_flow;

    let current_assets = cash_balance + state.receivables + state.inventory;
    let total_assets = current_assets + state.fixed_assets;
    let total_liabilities = state.payables + state.debt;
    let equity = total_assets - total_liabilities;

    let current_ratio = safe_div(current_assets, state.payables);
    let quick_ratio = safe_div(current_assets - state.inventory, state.payables);
    let cash_ratio = safe_div(cash_balance, state.payables);

    // Return ratios are only meaningful over a positive capital base
    let debt_to_equity = if equity > 0.0 { state.debt / equity } else { 0.0 };
    let roe = if equity > 0.0 {
        net_income * 12.0 / equity * 100.0
    } else {
        0.0
    };
    let capital_employed = equity + state.debt;
    let roce = if capital_employed > 0.0 {
        operating_result * 12.0 / capital_employed * 100.0
    } else {
        0.0
    };

    PeriodResult {
        date,
        period_label: period_label(date),
        revenue,
        expenses,
        gross_margin,
        ebitda,
        ebitda_margin,
        depreciation,
        operating_result,
        operating_margin,
        net_income,
        net_margin,
        caf,
        bfr: state.bfr,
        bfr_change,
        operating_cash_flow,
        cash_balance,
        receivables: state.receivables,
        payables: state.payables,
        inventory: state.inventory,
        fixed_assets: state.fixed_assets,
        current_assets,
        total_assets,
        total_liabilities,
        debt: state.debt,
        equity,
        current_ratio,
        quick_ratio,
        cash_ratio,
        debt_to_equity,
        roe,
        roce,
    }
}

//! Scenario-to-scenario comparison.

use crate::error::{ComparisonError, ComparisonSide};
use crate::model::{ComparisonResult, ComparisonSummary, PeriodComparison, PeriodResult};

#[inline]
fn pct_diff(a: f64, b: f64) -> f64 {
    if b == 0.0 { 0.0 } else { (a - b) / b * 100.0 }
}

/// Mean month-over-month revenue growth rate of a run, in percent.
fn avg_revenue_growth(results: &[PeriodResult]) -> f64 {
    if results.len() < 2 {
        return 0.0;
    }
    let growth_sum: f64 = results
        .windows(2)
        .map(|w| pct_diff(w[1].revenue, w[0].revenue))
        .sum();
    growth_sum / (results.len() - 1) as f64
}

/// Compare two projection runs period by period (A − B).
///
/// Sequences of different lengths are compared over the aligned prefix of
/// length `min(len_a, len_b)`; `length_mismatch` is set on the result so
/// callers can tell a horizon drift from a genuine match. Summary
/// aggregates cover the aligned prefix only.
pub fn compare_scenarios(
    results_a: &[PeriodResult],
    results_b: &[PeriodResult],
) -> Result<ComparisonResult, ComparisonError> {
    if results_a.is_empty() {
        return Err(ComparisonError::EmptyResults(ComparisonSide::Baseline));
    }
    if results_b.is_empty() {
        return Err(ComparisonError::EmptyResults(ComparisonSide::Candidate));
    }

    let aligned = results_a.len().min(results_b.len());
    let a = &results_a[..aligned];
    let b = &results_b[..aligned];

    let periods: Vec<PeriodComparison> = a
        .iter()
        .zip(b)
        .map(|(pa, pb)| PeriodComparison {
            date: pa.date,
            revenue_diff: pa.revenue - pb.revenue,
            revenue_diff_pct: pct_diff(pa.revenue, pb.revenue),
            cash_balance_diff: pa.cash_balance - pb.cash_balance,
            cash_balance_diff_pct: pct_diff(pa.cash_balance, pb.cash_balance),
            net_income_diff: pa.net_income - pb.net_income,
            net_income_diff_pct: pct_diff(pa.net_income, pb.net_income),
        })
        .collect();

    let (final_a, final_b) = (&a[aligned - 1], &b[aligned - 1]);
    let total_ocf_a: f64 = a.iter().map(|p| p.operating_cash_flow).sum();
    let total_ocf_b: f64 = b.iter().map(|p| p.operating_cash_flow).sum();

    let summary = ComparisonSummary {
        final_revenue_diff: final_a.revenue - final_b.revenue,
        final_cash_balance_diff: final_a.cash_balance - final_b.cash_balance,
        final_net_income_diff: final_a.net_income - final_b.net_income,
        avg_revenue_growth_diff: avg_revenue_growth(a) - avg_revenue_growth(b),
        total_operating_cash_flow_diff: total_ocf_a - total_ocf_b,
    };

    Ok(ComparisonResult {
        periods,
        summary,
        length_mismatch: results_a.len() != results_b.len(),
    })
}

//! Single-parameter sensitivity sweeps.
//!
//! Each sweep point clones the assumption list, overwrites the targeted
//! parameter, and re-runs the projection. Points are independent runs,
//! so with the `parallel` feature the sweep fans out over rayon.

use crate::error::Result;
use crate::model::{
    Assumption, AssumptionCategory, AssumptionKind, FinancialSnapshot, PeriodResult, Scenario,
    SensitivityPoint,
};
use crate::simulation::simulate_scenario_with_constants;
use crate::simulation_state::FinancialConstants;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Selects which assumption a sweep targets: the first one matching both
/// the category and the kind's stored type.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityParameter {
    pub category: AssumptionCategory,
    pub kind: AssumptionKind,
}

impl SensitivityParameter {
    pub fn new(category: AssumptionCategory, kind: AssumptionKind) -> Self {
        Self { category, kind }
    }

    fn matches(&self, assumption: &Assumption) -> bool {
        assumption.category == self.category && assumption.kind.same_type(&self.kind)
    }
}

/// Overwrite the kind's primary numeric field with the sweep value.
fn override_value(kind: &mut AssumptionKind, value: f64) {
    match kind {
        AssumptionKind::GrowthRate { rate } | AssumptionKind::PercentageChange { rate } => {
            *rate = value;
        }
        AssumptionKind::FixedAmount { amount }
        | AssumptionKind::Recurring { amount }
        | AssumptionKind::OneTime { amount, .. } => {
            *amount = value;
        }
        AssumptionKind::PaymentTerms { customer_days, .. } => {
            *customer_days = Some(value);
        }
        // Nothing to override; the point runs the baseline unchanged
        AssumptionKind::Unrecognized { .. } => {}
    }
}

/// Sweep one assumption parameter across `values` with default constants.
pub fn sensitivity_analysis(
    scenario: &Scenario,
    assumptions: &[Assumption],
    snapshot: &FinancialSnapshot,
    parameter: &SensitivityParameter,
    values: &[f64],
) -> Result<Vec<SensitivityPoint>> {
    sensitivity_analysis_with_constants(
        scenario,
        assumptions,
        snapshot,
        parameter,
        values,
        &FinancialConstants::default(),
    )
}

/// Sweep one assumption parameter with caller-supplied constants.
pub fn sensitivity_analysis_with_constants(
    scenario: &Scenario,
    assumptions: &[Assumption],
    snapshot: &FinancialSnapshot,
    parameter: &SensitivityParameter,
    values: &[f64],
    constants: &FinancialConstants,
) -> Result<Vec<SensitivityPoint>> {
    let run_point = |&value: &f64| -> Result<SensitivityPoint> {
        let mut swept = assumptions.to_vec();
        if let Some(target) = swept.iter_mut().find(|a| parameter.matches(a)) {
            override_value(&mut target.kind, value);
        }

        let outcome =
            simulate_scenario_with_constants(scenario, &swept, snapshot, constants)?;
        Ok(build_point(value, outcome))
    };

    #[cfg(feature = "parallel")]
    let points: Result<Vec<SensitivityPoint>> = values.par_iter().map(run_point).collect();

    #[cfg(not(feature = "parallel"))]
    let points: Result<Vec<SensitivityPoint>> = values.iter().map(run_point).collect();

    points
}

fn build_point(value: f64, outcome: Vec<PeriodResult>) -> SensitivityPoint {
    let final_cash = outcome.last().map(|p| p.cash_balance).unwrap_or(0.0);
    let final_revenue = outcome.last().map(|p| p.revenue).unwrap_or(0.0);
    let avg_net_margin = if outcome.is_empty() {
        0.0
    } else {
        outcome.iter().map(|p| p.net_margin).sum::<f64>() / outcome.len() as f64
    };

    SensitivityPoint {
        parameter_value: value,
        outcome,
        final_cash,
        final_revenue,
        avg_net_margin,
    }
}

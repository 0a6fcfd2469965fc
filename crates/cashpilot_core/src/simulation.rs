//! The projection driver loop.
//!
//! `simulate_scenario` is a pure function over its inputs: identical
//! scenario + assumptions + snapshot always yield an identical result
//! sequence. No I/O, no randomness, no state retained between calls.

use crate::apply::apply_assumptions;
use crate::date_math::{add_months, same_month};
use crate::error::{Result, SimulationError};
use crate::evaluate::evaluate_period;
use crate::model::{Assumption, FinancialSnapshot, PeriodResult, Scenario};
use crate::simulation_state::{FinancialConstants, WorkingState};

/// Project a scenario month by month with the default financial constants.
///
/// Returns one [`PeriodResult`] per calendar month from `base_date`
/// through `end_date` inclusive. The assumption list may be empty; its
/// order is significant within each month.
pub fn simulate_scenario(
    scenario: &Scenario,
    assumptions: &[Assumption],
    snapshot: &FinancialSnapshot,
) -> Result<Vec<PeriodResult>> {
    simulate_scenario_with_constants(
        scenario,
        assumptions,
        snapshot,
        &FinancialConstants::default(),
    )
}

/// Project a scenario with caller-supplied constants (tax rate,
/// depreciation, default payment terms).
pub fn simulate_scenario_with_constants(
    scenario: &Scenario,
    assumptions: &[Assumption],
    snapshot: &FinancialSnapshot,
    constants: &FinancialConstants,
) -> Result<Vec<PeriodResult>> {
    if scenario.base_date > scenario.end_date {
        return Err(SimulationError::InvalidDateRange {
            base_date: scenario.base_date,
            end_date: scenario.end_date,
        });
    }

    let mut state = WorkingState::from_snapshot(snapshot, constants);
    let mut results = Vec::with_capacity(scenario.period_count().max(0) as usize);

    let mut current_date = scenario.base_date;
    while current_date <= scenario.end_date {
        apply_assumptions(&mut state, assumptions, current_date);

        let period = evaluate_period(&state, constants, current_date);
        state.roll_forward(&period);
        results.push(period);

        // The end month is always the last period; breaking here keeps the
        // increment from stepping past the calendar's representable range
        // when the horizon ends in December 9999
        if same_month(current_date, scenario.end_date) {
            break;
        }
        current_date = add_months(current_date, 1);
    }

    Ok(results)
}

//! Apply assumptions to the working state for one simulated month.
//!
//! Assumptions mutate the state in list order: each one sees the
//! cumulative effect of the assumptions before it in the same pass. An
//! assumption only fires when the current month falls inside its optional
//! date window. Unrecognized stored kinds are skipped with a warning so
//! historical scenarios keep simulating across schema additions.

use crate::date_math::same_month;
use crate::model::{Assumption, AssumptionCategory, AssumptionKind};
use crate::simulation_state::WorkingState;

use jiff::civil::Date;
use tracing::warn;

/// Apply every in-window assumption to `state` for the month containing
/// `current_date`.
pub fn apply_assumptions(state: &mut WorkingState, assumptions: &[Assumption], current_date: Date) {
    for assumption in assumptions {
        if assumption.applies_on(current_date) {
            apply_one(state, assumption, current_date);
        }
    }
}

fn apply_one(state: &mut WorkingState, assumption: &Assumption, current_date: Date) {
    match &assumption.kind {
        AssumptionKind::GrowthRate { rate } => {
            state.revenue *= 1.0 + rate / 100.0;
        }

        AssumptionKind::FixedAmount { amount } | AssumptionKind::Recurring { amount } => {
            if assumption.category == AssumptionCategory::Salaries {
                state.salaries += amount;
            } else {
                state.fixed_expenses += amount;
            }
            state.recompute_expenses();
        }

        AssumptionKind::OneTime { amount, date } => {
            // Fires only in the calendar month the outflow is dated
            let Some(date) = date else { return };
            if !same_month(*date, current_date) {
                return;
            }
            match assumption.category {
                AssumptionCategory::Investment | AssumptionCategory::Equipment => {
                    state.fixed_assets += amount;
                }
                _ => {
                    state.expenses += amount;
                }
            }
            state.cash -= amount;
        }

        AssumptionKind::PercentageChange { rate } => match assumption.category {
            AssumptionCategory::Pricing => {
                state.avg_unit_price *= 1.0 + rate / 100.0;
                state.revenue = state.avg_unit_price * state.unit_volume;
            }
            AssumptionCategory::ExpenseReduction => {
                state.fixed_expenses *= 1.0 - rate / 100.0;
                state.recompute_expenses();
            }
            // Inert for other categories
            _ => {}
        },

        AssumptionKind::PaymentTerms {
            customer_days,
            supplier_days,
        } => {
            if let Some(days) = customer_days {
                state.customer_payment_days = *days;
            }
            if let Some(days) = supplier_days {
                state.supplier_payment_days = *days;
            }
            state.recompute_bfr();
        }

        AssumptionKind::Unrecognized {
            assumption_type, ..
        } => {
            warn!(
                assumption = %assumption.name,
                kind = %assumption_type,
                "skipping assumption with unrecognized type"
            );
        }
    }
}

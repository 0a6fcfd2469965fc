//! Runtime state for a projection run, mutated month by month as
//! assumptions apply. A fresh [`WorkingState`] is built from the snapshot
//! on every `simulate_scenario` call; nothing survives between runs.

use crate::model::FinancialSnapshot;

/// Simplifying business constants used by the projection formulas.
///
/// These are product decisions, not engineering artifacts: a flat 65%
/// gross-margin ratio instead of cost-of-goods data, a 25% flat tax, 10%
/// straight-line annual depreciation, and French-SME-typical default
/// payment terms. Overridable per run; do not change the defaults without
/// product confirmation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialConstants {
    pub tax_rate: f64,
    pub annual_depreciation_rate: f64,
    pub gross_margin_ratio: f64,
    pub default_customer_payment_days: f64,
    pub default_supplier_payment_days: f64,
    pub default_bfr_days: f64,
}

impl Default for FinancialConstants {
    fn default() -> Self {
        Self {
            tax_rate: 0.25,
            annual_depreciation_rate: 0.10,
            gross_margin_ratio: 0.65,
            default_customer_payment_days: 45.0,
            default_supplier_payment_days: 30.0,
            default_bfr_days: 30.0,
        }
    }
}

impl FinancialConstants {
    /// Depreciation rate applied each month to fixed assets.
    #[inline]
    pub fn monthly_depreciation_rate(&self) -> f64 {
        self.annual_depreciation_rate / 12.0
    }
}

/// The engine's private working copy of the financial state.
///
/// Flow figures stay annualized here (divided by 12 at evaluation time);
/// balance-sheet figures are rolled forward at the end of each period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingState {
    pub revenue: f64,
    pub avg_unit_price: f64,
    pub unit_volume: f64,
    pub expenses: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
    pub salaries: f64,
    pub cash: f64,
    pub receivables: f64,
    pub payables: f64,
    pub inventory: f64,
    pub fixed_assets: f64,
    pub equity: f64,
    pub debt: f64,
    pub bfr: f64,

    /// Live payment-term day counts, seeded from the defaults and
    /// overwritten by `payment_terms` assumptions
    pub customer_payment_days: f64,
    pub supplier_payment_days: f64,
    pub bfr_days: f64,

    /// Previous period's BFR; `None` until the first period has been
    /// evaluated, which pins the first period's BFR change to 0
    pub previous_bfr: Option<f64>,
}

impl WorkingState {
    pub fn from_snapshot(snapshot: &FinancialSnapshot, constants: &FinancialConstants) -> Self {
        Self {
            revenue: snapshot.revenue,
            avg_unit_price: snapshot.avg_unit_price,
            unit_volume: snapshot.unit_volume,
            expenses: snapshot.expenses,
            fixed_expenses: snapshot.fixed_expenses,
            variable_expenses: snapshot.variable_expenses,
            salaries: snapshot.salaries,
            cash: snapshot.cash,
            receivables: snapshot.receivables,
            payables: snapshot.payables,
            inventory: snapshot.inventory,
            fixed_assets: snapshot.fixed_assets,
            equity: snapshot.equity,
            debt: snapshot.debt,
            bfr: snapshot.bfr,
            customer_payment_days: constants.default_customer_payment_days,
            supplier_payment_days: constants.default_supplier_payment_days,
            bfr_days: constants.default_bfr_days,
            previous_bfr: None,
        }
    }

    /// Recompute the total expense figure from its components. Called
    /// after any assumption touches fixed expenses or salaries.
    #[inline]
    pub fn recompute_expenses(&mut self) {
        self.expenses = self.fixed_expenses + self.variable_expenses + self.salaries;
    }

    /// Recompute the working-capital requirement from the live payment
    /// terms: receivables exposure plus inventory minus supplier credit,
    /// both scaled over the BFR horizon.
    #[inline]
    pub fn recompute_bfr(&mut self) {
        let monthly_revenue = self.revenue / 12.0;
        let monthly_expenses = self.expenses / 12.0;
        self.bfr = monthly_revenue * self.customer_payment_days / self.bfr_days + self.inventory
            - monthly_expenses * self.supplier_payment_days / self.bfr_days;
    }

    /// Roll the state into the next period after evaluation: cash becomes
    /// the period's ending balance, receivables/payables are restated from
    /// the period's flows and the live payment terms, fixed assets shed
    /// the period's depreciation, and equity picks up the computed value.
    pub fn roll_forward(&mut self, period: &crate::model::PeriodResult) {
        self.cash = period.cash_balance;
        self.receivables = period.revenue * self.customer_payment_days / 30.0;
        self.payables = period.expenses * self.supplier_payment_days / 30.0;
        self.fixed_assets -= period.depreciation;
        self.equity = period.equity;
        self.previous_bfr = Some(self.bfr);
    }
}

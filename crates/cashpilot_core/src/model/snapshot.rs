//! Current financial state snapshot - the projection's starting point
//!
//! Loaded by the application layer from the accounting tables and handed
//! to the engine as plain data. Every field defaults to zero so partial
//! snapshots (young businesses, missing ledger sections) load cleanly.

use serde::{Deserialize, Serialize};

/// Flat record of the business's current annualized figures.
///
/// `revenue`, `expenses` and their breakdowns are annualized; the engine
/// divides by 12 when evaluating a month. Balance-sheet figures (`cash`,
/// `receivables`, ...) are point-in-time values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    /// Annualized revenue
    pub revenue: f64,
    /// Average unit selling price
    pub avg_unit_price: f64,
    /// Annual unit sales volume
    pub unit_volume: f64,
    /// Annualized total expenses
    pub expenses: f64,
    /// Annualized fixed expenses
    pub fixed_expenses: f64,
    /// Annualized variable expenses
    pub variable_expenses: f64,
    /// Annualized salary mass
    pub salaries: f64,
    pub cash: f64,
    pub receivables: f64,
    pub payables: f64,
    pub inventory: f64,
    pub fixed_assets: f64,
    pub equity: f64,
    pub debt: f64,
    /// Working-capital requirement (besoin en fonds de roulement)
    pub bfr: f64,
}

//! CashPilot scenario projection engine
//!
//! This crate is the computational core of CashPilot's "what-if" financial
//! scenario feature: a deterministic, month-by-month projection of P&L,
//! cash-flow and balance-sheet metrics under user-defined assumptions.
//! It supports:
//! - Ordered, time-scoped assumptions (growth rates, recurring amounts,
//!   one-time outflows, pricing changes, payment-term changes)
//! - Per-month metric evaluation with zero-safe ratios
//! - Scenario-to-scenario comparison with aggregate deltas
//! - Single-parameter sensitivity sweeps
//!
//! The engine is a pure function over its inputs: it performs no I/O,
//! keeps no state between calls, and returns identical results for
//! identical arguments. Persistence, rendering, and scheduling live in
//! the surrounding application.
//!
//! ```ignore
//! use cashpilot_core::model::{Assumption, AssumptionCategory, AssumptionKind, Scenario, ScenarioId, FinancialSnapshot};
//! use cashpilot_core::simulation::simulate_scenario;
//!
//! let scenario = Scenario::new(
//!     ScenarioId(1),
//!     "Hire in spring",
//!     jiff::civil::date(2026, 1, 1),
//!     jiff::civil::date(2026, 12, 1),
//! );
//! let assumptions = vec![Assumption::new(
//!     "Monthly growth",
//!     AssumptionCategory::Revenue,
//!     AssumptionKind::GrowthRate { rate: 2.0 },
//! )];
//! let snapshot = FinancialSnapshot {
//!     revenue: 240_000.0,
//!     expenses: 180_000.0,
//!     cash: 25_000.0,
//!     ..Default::default()
//! };
//!
//! let periods = simulate_scenario(&scenario, &assumptions, &snapshot)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod apply;
pub mod date_math;
pub mod error;
pub mod evaluate;
pub mod simulation;
pub mod simulation_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{SensitivityParameter, compare_scenarios, sensitivity_analysis};
pub use error::{ComparisonError, ComparisonSide, Result, SimulationError};
pub use simulation::{simulate_scenario, simulate_scenario_with_constants};
pub use simulation_state::FinancialConstants;

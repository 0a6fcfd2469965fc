//! Derived analyses over projection runs.
//!
//! - `compare` - period-by-period deltas between two runs, with a summary
//!   of final and aggregate differences.
//! - `sensitivity` - single-parameter what-if sweeps: override one
//!   assumption parameter across a value range and re-project each point.

mod compare;
mod sensitivity;

pub use compare::compare_scenarios;
pub use sensitivity::{SensitivityParameter, sensitivity_analysis};

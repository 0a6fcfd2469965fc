use std::fmt;

use jiff::civil::Date;

/// Errors from running a scenario projection
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Scenario dates are inverted: the projection window is empty or negative
    InvalidDateRange { base_date: Date, end_date: Date },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidDateRange {
                base_date,
                end_date,
            } => {
                write!(
                    f,
                    "invalid scenario date range: base date {base_date} is after end date {end_date}"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Which result sequence a comparison error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSide {
    Baseline,
    Candidate,
}

impl fmt::Display for ComparisonSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonSide::Baseline => write!(f, "baseline"),
            ComparisonSide::Candidate => write!(f, "candidate"),
        }
    }
}

/// Errors from comparing two projection runs
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// One of the two period-result sequences is empty
    EmptyResults(ComparisonSide),
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::EmptyResults(side) => {
                write!(f, "cannot compare scenarios: {side} results are empty")
            }
        }
    }
}

impl std::error::Error for ComparisonError {}

pub type Result<T> = std::result::Result<T, SimulationError>;

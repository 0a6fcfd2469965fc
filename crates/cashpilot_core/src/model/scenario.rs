//! Scenario definitions
//!
//! A scenario is a named projection window plus a lifecycle status. The
//! assumptions attached to it live in their own list (see
//! [`super::assumptions`]) so they can be edited independently of runs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ScenarioId(pub u64);

/// Lifecycle status of a scenario. A scenario starts as a draft and is
/// marked completed by the caller after a successful projection run has
/// been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    #[default]
    Draft,
    Completed,
}

/// A what-if scenario: an inclusive monthly projection window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// First projected month (inclusive)
    pub base_date: Date,
    /// Last projected month (inclusive)
    pub end_date: Date,
    #[serde(default)]
    pub status: ScenarioStatus,
    #[serde(default)]
    pub is_baseline: bool,
}

impl Scenario {
    pub fn new(id: ScenarioId, name: impl Into<String>, base_date: Date, end_date: Date) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            base_date,
            end_date,
            status: ScenarioStatus::Draft,
            is_baseline: false,
        }
    }

    /// Transition draft → completed after a successful run.
    pub fn mark_completed(&mut self) {
        self.status = ScenarioStatus::Completed;
    }

    /// Number of monthly periods this scenario spans.
    pub fn period_count(&self) -> i32 {
        crate::date_math::months_between_inclusive(self.base_date, self.end_date)
    }
}

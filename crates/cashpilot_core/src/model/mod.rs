mod assumptions;
mod results;
mod scenario;
mod snapshot;

pub use assumptions::{Assumption, AssumptionCategory, AssumptionKind};
pub use results::{
    ComparisonResult, ComparisonSummary, PeriodComparison, PeriodResult, SensitivityPoint,
};
pub use scenario::{Scenario, ScenarioId, ScenarioStatus};
pub use snapshot::FinancialSnapshot;

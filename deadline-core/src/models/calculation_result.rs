use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calculation_step::{CalculationStep, ExcludedDate};
use super::direction::Direction;

/// The full outcome of one deadline calculation.
///
/// A result is produced fresh per invocation and never mutated afterwards.
/// All request fields are echoed back so a result is self-describing.
///
/// `excluded_dates` covers the main walk only. Days skipped while rolling
/// the end date forward off a weekend or holiday are visible through
/// `original_end_date` and `end_date`, but are not listed as exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub start_date: NaiveDate,
    pub target_days: u32,
    pub direction: Direction,
    pub use_business_days: bool,
    pub exclude_holidays: bool,

    /// Final end date, after any rollover adjustment.
    pub end_date: NaiveDate,
    /// The pre-rollover end date; present only when rollover occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_end_date: Option<NaiveDate>,
    pub is_rollover: bool,

    /// Every day the walker visited, counted or excluded.
    pub total_calendar_days: u32,
    /// Days actually counted; equals `target_days` on completion.
    pub business_days_count: u32,

    pub calculation_steps: Vec<CalculationStep>,
    pub excluded_dates: Vec<ExcludedDate>,
}

impl CalculationResult {
    /// Whole-day signed distance from `today` to the end date.
    ///
    /// Negative when the deadline has already passed. `today` is supplied
    /// by the caller so the engine stays deterministic; adapters pass the
    /// current local calendar date.
    pub fn days_from_now(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }
}

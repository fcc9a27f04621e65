use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calculation_result::CalculationResult;
use super::direction::Direction;

/// A stored calculation, as it exists in a history backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    pub id: i64,
    /// Present only for deadlines the user saved under a name.
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_days: u32,
    pub direction: Direction,
    pub use_business_days: bool,
    pub exclude_holidays: bool,
    pub created_at: DateTime<Utc>,
}

/// For creating new history entries (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeadlineRecord {
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target_days: u32,
    pub direction: Direction,
    pub use_business_days: bool,
    pub exclude_holidays: bool,
}

impl NewDeadlineRecord {
    /// Capture the fields a history entry keeps from a finished calculation.
    pub fn from_result(result: &CalculationResult, name: Option<String>) -> Self {
        Self {
            name,
            start_date: result.start_date,
            end_date: result.end_date,
            target_days: result.target_days,
            direction: result.direction,
            use_business_days: result.use_business_days,
            exclude_holidays: result.exclude_holidays,
        }
    }
}

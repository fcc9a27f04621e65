//! The rollover resolver: moves an end date off a weekend or holiday.

use chrono::NaiveDate;

use crate::calculations::common::{exclusion_for, next_day};
use crate::models::HolidayCalendar;

/// The stabilized date plus enough context to report what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverOutcome {
    /// First date at or after the candidate that is not excluded.
    pub final_date: NaiveDate,
    /// Whether the candidate moved at all.
    pub is_rollover: bool,
    /// The candidate as it was handed in, for reporting.
    pub original_date: NaiveDate,
}

/// Advance `candidate` one day at a time while it lands on an excluded day.
///
/// The adjustment always moves forward in time, even for a backward
/// calculation: a deadline that falls on a closed day is due the next open
/// day, never an earlier one. Exclusion uses the same two rules as the
/// walker, each gated by its flag. A candidate that is already valid comes
/// back unchanged with `is_rollover` false.
///
/// Days skipped here are not reported as excluded dates; callers surface
/// the move through `original_date` and `final_date` instead.
pub fn resolve(
    candidate: NaiveDate,
    use_business_days: bool,
    exclude_holidays: bool,
    calendar: &HolidayCalendar,
) -> RolloverOutcome {
    let mut current = candidate;

    while exclusion_for(current, use_business_days, exclude_holidays, calendar).is_some() {
        current = next_day(current);
    }

    RolloverOutcome {
        final_date: current,
        is_rollover: current != candidate,
        original_date: candidate,
    }
}

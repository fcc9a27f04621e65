//! The day walker: counts off days one at a time in the requested direction.

use chrono::NaiveDate;

use crate::calculations::common::{exclusion_for, next_day, previous_day};
use crate::models::{
    CalculationRequest, CalculationStep, Direction, ExcludedDate, HolidayCalendar, StepAction,
};

/// Everything the walk produced, before any rollover adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Where the cursor stopped; the start date itself when `target_days` is 0.
    pub end_date: NaiveDate,
    /// Every visited day in visit order, counted and excluded alike.
    pub steps: Vec<CalculationStep>,
    /// The excluded subset of `steps`, in the same order.
    pub excluded_dates: Vec<ExcludedDate>,
    /// Number of days visited.
    pub total_calendar_days: u32,
    /// Number of days counted; equals the requested day count on return.
    pub business_days_count: u32,
}

/// Advance a cursor from the start date until `target_days` days have been
/// counted under the request's exclusion rules.
///
/// Each iteration moves the cursor one day (forward or backward per the
/// request) and classifies the day it lands on. Counted days decrement the
/// remaining total; excluded days are recorded and skipped. The loop ends
/// exactly when the remaining total reaches zero, which always happens:
/// weekends cover at most two of every seven days and the holiday table is
/// finite, so the cursor always reaches countable days.
///
/// The start date itself is never visited or classified.
pub fn walk(request: &CalculationRequest, calendar: &HolidayCalendar) -> WalkOutcome {
    let mut cursor = request.start_date;
    let mut remaining = request.target_days;
    let mut steps = Vec::new();
    let mut excluded_dates = Vec::new();
    let mut total_calendar_days = 0u32;
    let mut business_days_count = 0u32;

    while remaining > 0 {
        cursor = match request.direction {
            Direction::Forward => next_day(cursor),
            Direction::Backward => previous_day(cursor),
        };
        total_calendar_days += 1;

        match exclusion_for(
            cursor,
            request.use_business_days,
            request.exclude_holidays,
            calendar,
        ) {
            None => {
                remaining -= 1;
                business_days_count += 1;
                steps.push(CalculationStep {
                    date: cursor,
                    action: StepAction::Counted,
                    reason: None,
                    days_remaining: remaining,
                });
            }
            Some(reason) => {
                excluded_dates.push(ExcludedDate {
                    date: cursor,
                    reason,
                });
                steps.push(CalculationStep {
                    date: cursor,
                    action: StepAction::Excluded,
                    reason: Some(reason),
                    days_remaining: remaining,
                });
            }
        }
    }

    WalkOutcome {
        end_date: cursor,
        steps,
        excluded_dates,
        total_calendar_days,
        business_days_count,
    }
}

//! Result assembly: one walk, one conditional rollover, one result.

use tracing::debug;

use crate::calculations::{rollover, walker};
use crate::models::{CalculationRequest, CalculationResult, HolidayCalendar};

/// The deadline calculation engine.
///
/// Holds the holiday calendar and nothing else; every calculation is an
/// independent, synchronous pass over the request. The calculator is safe
/// to share across threads since the calendar is only ever read.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use deadline_core::DeadlineCalculator;
/// use deadline_core::models::{CalculationRequest, Direction, HolidayCalendar};
///
/// let calculator = DeadlineCalculator::new(HolidayCalendar::new());
/// let request = CalculationRequest {
///     start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     target_days: 30,
///     direction: Direction::Forward,
///     use_business_days: false,
///     exclude_holidays: false,
/// };
///
/// let result = calculator.calculate(&request);
/// assert_eq!(result.end_date, NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DeadlineCalculator {
    calendar: HolidayCalendar,
}

impl DeadlineCalculator {
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Run a full calculation for a validated request.
    ///
    /// This is total over its input domain: validated requests cannot make
    /// it fail, so there is no error path. The walker produces the raw end
    /// date and trace; the rollover resolver then runs whenever business
    /// days or holiday exclusion is active, including for a zero day count,
    /// so a start date that already sits on an excluded day still rolls
    /// forward.
    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        let walk = walker::walk(request, &self.calendar);

        let rollover_active = request.use_business_days || request.exclude_holidays;
        let (end_date, is_rollover, original_end_date) = if rollover_active {
            let resolved = rollover::resolve(
                walk.end_date,
                request.use_business_days,
                request.exclude_holidays,
                &self.calendar,
            );
            (
                resolved.final_date,
                resolved.is_rollover,
                resolved.is_rollover.then_some(resolved.original_date),
            )
        } else {
            (walk.end_date, false, None)
        };

        debug!(
            start_date = %request.start_date,
            target_days = request.target_days,
            direction = request.direction.as_str(),
            end_date = %end_date,
            total_calendar_days = walk.total_calendar_days,
            is_rollover,
            "deadline calculated"
        );

        CalculationResult {
            start_date: request.start_date,
            target_days: request.target_days,
            direction: request.direction,
            use_business_days: request.use_business_days,
            exclude_holidays: request.exclude_holidays,
            end_date,
            original_end_date,
            is_rollover,
            total_calendar_days: walk.total_calendar_days,
            business_days_count: walk.business_days_count,
            calculation_steps: walk.steps,
            excluded_dates: walk.excluded_dates,
        }
    }
}

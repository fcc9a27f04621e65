//! Day-classification rules shared by the walker and the rollover resolver.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{ExclusionReason, HolidayCalendar};

/// Whether `date` falls on a Saturday or Sunday.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use deadline_core::calculations::common::is_weekend;
///
/// let saturday = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 7, 7).unwrap();
///
/// assert!(is_weekend(saturday));
/// assert!(!is_weekend(monday));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classify a date under the active exclusion rules.
///
/// Returns `None` when the date counts. The weekend rule is checked first,
/// so a holiday landing on a Saturday reports [`ExclusionReason::Weekend`]
/// when both rules are active. Each rule applies only when its flag is set.
pub fn exclusion_for(
    date: NaiveDate,
    use_business_days: bool,
    exclude_holidays: bool,
    calendar: &HolidayCalendar,
) -> Option<ExclusionReason> {
    if use_business_days && is_weekend(date) {
        return Some(ExclusionReason::Weekend);
    }
    if exclude_holidays && calendar.contains(date) {
        return Some(ExclusionReason::FederalHoliday);
    }
    None
}

/// The calendar day after `date`.
pub(crate) fn next_day(date: NaiveDate) -> NaiveDate {
    // chrono represents dates out to year 262142; a one-day step cannot
    // leave that range for any realistic deadline input.
    date.succ_opt()
        .expect("successor stays within chrono's supported date range")
}

/// The calendar day before `date`.
pub(crate) fn previous_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt()
        .expect("predecessor stays within chrono's supported date range")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn july_4_calendar() -> HolidayCalendar {
        [date(2025, 7, 4)].into_iter().collect()
    }

    #[test]
    fn weekend_covers_saturday_and_sunday_only() {
        // 2025-07-07 is a Monday
        let monday = date(2025, 7, 7);
        let mut cursor = monday;
        let mut weekend_days = Vec::new();
        for _ in 0..7 {
            if is_weekend(cursor) {
                weekend_days.push(cursor);
            }
            cursor = cursor.succ_opt().unwrap();
        }

        assert_eq!(weekend_days, vec![date(2025, 7, 12), date(2025, 7, 13)]);
    }

    #[test]
    fn no_flags_means_nothing_is_excluded() {
        let calendar = july_4_calendar();
        let saturday = date(2025, 7, 5);

        assert_eq!(exclusion_for(saturday, false, false, &calendar), None);
        assert_eq!(exclusion_for(date(2025, 7, 4), false, false, &calendar), None);
    }

    #[test]
    fn business_days_flag_excludes_weekends() {
        let calendar = HolidayCalendar::new();

        assert_eq!(
            exclusion_for(date(2025, 7, 5), true, false, &calendar),
            Some(ExclusionReason::Weekend)
        );
        assert_eq!(exclusion_for(date(2025, 7, 7), true, false, &calendar), None);
    }

    #[test]
    fn holiday_flag_excludes_listed_dates() {
        let calendar = july_4_calendar();

        assert_eq!(
            exclusion_for(date(2025, 7, 4), false, true, &calendar),
            Some(ExclusionReason::FederalHoliday)
        );
        assert_eq!(exclusion_for(date(2025, 7, 3), false, true, &calendar), None);
    }

    #[test]
    fn holiday_flag_without_weekend_flag_counts_saturdays() {
        let calendar = july_4_calendar();

        assert_eq!(exclusion_for(date(2025, 7, 5), false, true, &calendar), None);
    }

    #[test]
    fn weekend_reason_wins_for_a_holiday_on_saturday() {
        // 2026-07-04 falls on a Saturday; the observed holiday is the 3rd.
        let calendar: HolidayCalendar = [date(2026, 7, 4)].into_iter().collect();

        assert_eq!(
            exclusion_for(date(2026, 7, 4), true, true, &calendar),
            Some(ExclusionReason::Weekend)
        );
    }

    #[test]
    fn next_and_previous_day_cross_month_and_year_boundaries() {
        assert_eq!(next_day(date(2025, 1, 31)), date(2025, 2, 1));
        assert_eq!(next_day(date(2025, 12, 31)), date(2026, 1, 1));
        assert_eq!(previous_day(date(2025, 3, 1)), date(2025, 2, 28));
        assert_eq!(previous_day(date(2026, 1, 1)), date(2025, 12, 31));
    }
}

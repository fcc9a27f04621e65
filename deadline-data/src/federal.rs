//! The built-in U.S. federal holiday table.
//!
//! Dates are pre-enumerated per year rather than derived from recurrence
//! rules, so observed shifts (July 4th, 2026 falls on a Saturday and is
//! observed on the 3rd) are encoded directly. Years outside the table
//! simply have no holidays; extending coverage is a data change, either
//! here or via the CSV loader.

use chrono::NaiveDate;
use deadline_core::models::HolidayCalendar;

/// A named entry in the federal holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FederalHoliday {
    pub date: NaiveDate,
    pub name: &'static str,
}

const TABLE: &[(i32, u32, u32, &str)] = &[
    // 2025
    (2025, 1, 1, "New Year's Day"),
    (2025, 1, 20, "Martin Luther King Jr. Day"),
    (2025, 2, 17, "Washington's Birthday"),
    (2025, 5, 26, "Memorial Day"),
    (2025, 6, 19, "Juneteenth National Independence Day"),
    (2025, 7, 4, "Independence Day"),
    (2025, 9, 1, "Labor Day"),
    (2025, 10, 13, "Columbus Day"),
    (2025, 11, 11, "Veterans Day"),
    (2025, 11, 27, "Thanksgiving Day"),
    (2025, 12, 25, "Christmas Day"),
    // 2026
    (2026, 1, 1, "New Year's Day"),
    (2026, 1, 19, "Martin Luther King Jr. Day"),
    (2026, 2, 16, "Washington's Birthday"),
    (2026, 5, 25, "Memorial Day"),
    (2026, 6, 19, "Juneteenth National Independence Day"),
    (2026, 7, 3, "Independence Day (observed)"),
    (2026, 9, 7, "Labor Day"),
    (2026, 10, 12, "Columbus Day"),
    (2026, 11, 11, "Veterans Day"),
    (2026, 11, 26, "Thanksgiving Day"),
    (2026, 12, 25, "Christmas Day"),
];

/// Every federal holiday the built-in table covers, in table order.
pub fn federal_holidays() -> Vec<FederalHoliday> {
    TABLE
        .iter()
        .map(|&(year, month, day, name)| FederalHoliday {
            // The table is a compile-time constant of real calendar dates.
            date: NaiveDate::from_ymd_opt(year, month, day)
                .expect("federal holiday table contains only valid dates"),
            name,
        })
        .collect()
}

/// The built-in table as a [`HolidayCalendar`] ready for the engine.
pub fn federal_holiday_calendar() -> HolidayCalendar {
    federal_holidays().into_iter().map(|h| h.date).collect()
}

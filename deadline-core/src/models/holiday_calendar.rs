use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Pre-enumerated holiday dates, keyed by year.
///
/// The calendar supports exactly one query: membership of a specific date.
/// There are no recurrence rules; each covered year lists its dates
/// explicitly. Looking up a date in a year the calendar does not cover is
/// not an error, it simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    years: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl HolidayCalendar {
    /// Create an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday date. Returns `false` if the date was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.years.entry(date.year()).or_default().insert(date)
    }

    /// Whether `date` is listed as a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.years
            .get(&date.year())
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Years the calendar has entries for, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }

    /// Holiday dates within `year`, ascending. Empty for uncovered years.
    pub fn dates_in_year(&self, year: i32) -> Vec<NaiveDate> {
        self.years
            .get(&year)
            .map(|dates| dates.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Total number of holiday dates across all years.
    pub fn len(&self) -> usize {
        self.years.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.years.values().all(BTreeSet::is_empty)
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        let mut calendar = Self::new();
        calendar.extend(iter);
        calendar
    }
}

impl Extend<NaiveDate> for HolidayCalendar {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        for date in iter {
            self.insert(date);
        }
    }
}

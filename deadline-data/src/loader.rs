use std::io::Read;

use chrono::NaiveDate;
use deadline_core::models::HolidayCalendar;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading holiday data.
#[derive(Debug, Error)]
pub enum HolidayLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Duplicate holiday date in input: {0}")]
    DuplicateDate(NaiveDate),
}

impl From<csv::Error> for HolidayLoaderError {
    fn from(err: csv::Error) -> Self {
        HolidayLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a holiday CSV file.
///
/// The CSV format:
/// - `date`: the holiday date in `YYYY-MM-DD` form
/// - `name`: a human-readable label for the holiday
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
}

/// Loader for holiday data from CSV files.
///
/// The built-in federal table covers two years; this loader is how coverage
/// is extended without touching code. Records become plain calendar dates,
/// so the same CSV can carry any year.
pub struct HolidayLoader;

impl HolidayLoader {
    /// Parse holiday records from a CSV reader.
    ///
    /// Returns the records in file order. The reader can be any type that
    /// implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<HolidayRecord>, HolidayLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: HolidayRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse a CSV reader straight into a [`HolidayCalendar`].
    ///
    /// A date listed twice is rejected rather than silently collapsed, on
    /// the assumption that a duplicate means a hand-edited file went wrong.
    pub fn load<R: Read>(reader: R) -> Result<HolidayCalendar, HolidayLoaderError> {
        let mut calendar = HolidayCalendar::new();
        for record in Self::parse(reader)? {
            if !calendar.insert(record.date) {
                return Err(HolidayLoaderError::DuplicateDate(record.date));
            }
        }
        Ok(calendar)
    }
}

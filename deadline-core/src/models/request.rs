use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::direction::Direction;

/// A validated calculation request.
///
/// `target_days` is a magnitude; the sign of intent is carried only by
/// `direction`. Construction goes through [`RawCalculationRequest::validate`]
/// at the boundary, so the engine never sees an invalid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub start_date: NaiveDate,
    pub target_days: u32,
    pub direction: Direction,
    pub use_business_days: bool,
    pub exclude_holidays: bool,
}

/// Validation errors for the boundary contract, one variant per field fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing required field: startDate")]
    MissingStartDate,

    #[error("missing required field: days")]
    MissingDays,

    #[error("startDate must be a calendar date in YYYY-MM-DD format, got '{0}'")]
    InvalidStartDate(String),

    #[error("days must be a non-negative whole number, got '{0}'")]
    InvalidDays(String),

    #[error("direction must be \"forward\" or \"backward\", got '{0}'")]
    InvalidDirection(String),
}

/// Unvalidated request fields as an adapter receives them.
///
/// Every adapter funnels its raw input through [`validate`] so the field
/// rules live in exactly one place. Defaults follow the boundary contract:
/// `direction` falls back to forward, both flags to false.
///
/// [`validate`]: RawCalculationRequest::validate
///
/// # Example
///
/// ```
/// use deadline_core::models::{Direction, RawCalculationRequest};
///
/// let raw = RawCalculationRequest {
///     start_date: Some("2025-07-01".to_string()),
///     days: Some("30".to_string()),
///     direction: None,
///     use_business_days: true,
///     exclude_holidays: false,
/// };
///
/// let request = raw.validate().unwrap();
/// assert_eq!(request.target_days, 30);
/// assert_eq!(request.direction, Direction::Forward);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalculationRequest {
    pub start_date: Option<String>,
    pub days: Option<String>,
    pub direction: Option<String>,
    #[serde(default)]
    pub use_business_days: bool,
    #[serde(default)]
    pub exclude_holidays: bool,
}

impl RawCalculationRequest {
    /// Check every field and produce a typed request.
    ///
    /// # Errors
    ///
    /// Returns the [`RequestError`] variant naming the first invalid field:
    /// missing start date, missing day count, a start date that is not a
    /// real `YYYY-MM-DD` calendar date, a day count that is negative or not
    /// a whole number, or a direction outside the two accepted literals.
    pub fn validate(&self) -> Result<CalculationRequest, RequestError> {
        let start_date = match &self.start_date {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => return Err(RequestError::MissingStartDate),
        };
        let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| RequestError::InvalidStartDate(start_date.to_string()))?;

        let days = match &self.days {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => return Err(RequestError::MissingDays),
        };
        let target_days = days
            .parse::<u32>()
            .map_err(|_| RequestError::InvalidDays(days.to_string()))?;

        let direction = match &self.direction {
            Some(s) => Direction::parse(s.trim())
                .ok_or_else(|| RequestError::InvalidDirection(s.trim().to_string()))?,
            None => Direction::default(),
        };

        Ok(CalculationRequest {
            start_date,
            target_days,
            direction,
            use_business_days: self.use_business_days,
            exclude_holidays: self.exclude_holidays,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(start_date: &str, days: &str) -> RawCalculationRequest {
        RawCalculationRequest {
            start_date: Some(start_date.to_string()),
            days: Some(days.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_minimal_request() {
        let request = raw("2025-07-01", "30").validate().unwrap();

        assert_eq!(
            request,
            CalculationRequest {
                start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                target_days: 30,
                direction: Direction::Forward,
                use_business_days: false,
                exclude_holidays: false,
            }
        );
    }

    #[test]
    fn validate_accepts_explicit_backward_direction() {
        let mut input = raw("2025-07-01", "10");
        input.direction = Some("backward".to_string());

        let request = input.validate().unwrap();

        assert_eq!(request.direction, Direction::Backward);
    }

    #[test]
    fn validate_accepts_zero_days() {
        let request = raw("2025-07-01", "0").validate().unwrap();

        assert_eq!(request.target_days, 0);
    }

    #[test]
    fn validate_trims_whitespace() {
        let request = raw(" 2025-07-01 ", " 30 ").validate().unwrap();

        assert_eq!(request.target_days, 30);
    }

    #[test]
    fn validate_rejects_missing_start_date() {
        let input = RawCalculationRequest {
            days: Some("30".to_string()),
            ..Default::default()
        };

        assert_eq!(input.validate(), Err(RequestError::MissingStartDate));
    }

    #[test]
    fn validate_treats_blank_start_date_as_missing() {
        let input = raw("   ", "30");

        assert_eq!(input.validate(), Err(RequestError::MissingStartDate));
    }

    #[test]
    fn validate_rejects_missing_days() {
        let input = RawCalculationRequest {
            start_date: Some("2025-07-01".to_string()),
            ..Default::default()
        };

        assert_eq!(input.validate(), Err(RequestError::MissingDays));
    }

    #[test]
    fn validate_rejects_unparseable_start_date() {
        let input = raw("July 1st 2025", "30");

        assert_eq!(
            input.validate(),
            Err(RequestError::InvalidStartDate("July 1st 2025".to_string()))
        );
    }

    #[test]
    fn validate_rejects_impossible_calendar_date() {
        let input = raw("2025-02-30", "30");

        assert_eq!(
            input.validate(),
            Err(RequestError::InvalidStartDate("2025-02-30".to_string()))
        );
    }

    #[test]
    fn validate_rejects_negative_days() {
        let input = raw("2025-07-01", "-5");

        assert_eq!(
            input.validate(),
            Err(RequestError::InvalidDays("-5".to_string()))
        );
    }

    #[test]
    fn validate_rejects_non_numeric_days() {
        let input = raw("2025-07-01", "thirty");

        assert_eq!(
            input.validate(),
            Err(RequestError::InvalidDays("thirty".to_string()))
        );
    }

    #[test]
    fn validate_rejects_unknown_direction() {
        let mut input = raw("2025-07-01", "30");
        input.direction = Some("up".to_string());

        assert_eq!(
            input.validate(),
            Err(RequestError::InvalidDirection("up".to_string()))
        );
    }

    #[test]
    fn start_date_errors_take_precedence_over_days_errors() {
        let input = RawCalculationRequest::default();

        assert_eq!(input.validate(), Err(RequestError::MissingStartDate));
    }
}

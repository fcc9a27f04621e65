//! Wiring and rendering for the command-line surface.
//!
//! Everything here is deliberately thin: input parsing goes through the
//! shared boundary validation in `deadline-core`, the calculation is one
//! engine call, and these helpers only assemble dependencies and format
//! the outcome as text.

use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use deadline_core::db::RepositoryRegistry;
use deadline_core::models::{CalculationResult, DeadlineRecord, Direction, HolidayCalendar};
use deadline_data::{HolidayLoader, federal_holiday_calendar};
use deadline_db_sqlite::SqliteRepositoryFactory;

/// All backends this binary knows how to open.
pub fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    registry
}

/// The built-in federal table, optionally extended from a CSV file.
///
/// CSV entries never replace built-in years; both sources are merged, so a
/// file can add future years without re-listing the bundled ones.
pub fn load_calendar(holidays_csv: Option<&Path>) -> Result<HolidayCalendar> {
    let mut calendar = federal_holiday_calendar();

    if let Some(path) = holidays_csv {
        let file = File::open(path)
            .with_context(|| format!("cannot open holiday file '{}'", path.display()))?;
        let loaded = HolidayLoader::load(file)
            .with_context(|| format!("cannot load holidays from '{}'", path.display()))?;
        for year in loaded.years() {
            calendar.extend(loaded.dates_in_year(year));
        }
    }

    Ok(calendar)
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn days_from_now_phrase(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        d if d > 0 => format!("{d} days from now"),
        d => format!("{} days ago", -d),
    }
}

/// Render a finished calculation for the terminal.
///
/// `today` is passed in rather than read from the clock so output is
/// reproducible in tests.
pub fn render_result(
    result: &CalculationResult,
    today: NaiveDate,
    show_steps: bool,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Deadline: {} ({})",
        long_date(result.end_date),
        result.end_date.format("%Y-%m-%d")
    );
    let _ = writeln!(out, "  {}", days_from_now_phrase(result.days_from_now(today)));
    if let Some(original) = result.original_end_date {
        let _ = writeln!(
            out,
            "  Rolled over from weekend/holiday (originally {})",
            original.format("%Y-%m-%d")
        );
    }

    let verb = match result.direction {
        Direction::Forward => "Added",
        Direction::Backward => "Subtracted",
    };
    let counted = if result.use_business_days {
        format!("{} business days", result.business_days_count)
    } else {
        format!("{} calendar days", result.total_calendar_days)
    };
    let holidays = if result.exclude_holidays {
        ", excluding federal holidays"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "{verb} {counted}{holidays} from {}",
        result.start_date.format("%Y-%m-%d")
    );

    if !result.excluded_dates.is_empty() {
        let _ = writeln!(out, "Excluded dates:");
        for excluded in &result.excluded_dates {
            let _ = writeln!(
                out,
                "  {}  {}",
                excluded.date.format("%Y-%m-%d"),
                excluded.reason.as_str()
            );
        }
    }

    if show_steps && !result.calculation_steps.is_empty() {
        let _ = writeln!(out, "Steps:");
        for step in &result.calculation_steps {
            let action = match step.reason {
                Some(reason) => format!("Excluded ({})", reason.as_str()),
                None => "Counted".to_string(),
            };
            let _ = writeln!(
                out,
                "  {}  {action}, {} remaining",
                step.date.format("%Y-%m-%d"),
                step.days_remaining
            );
        }
    }

    out
}

/// Render stored history entries, one line each, most recent first.
pub fn render_history(records: &[DeadlineRecord]) -> String {
    if records.is_empty() {
        return "No recent calculations\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        let arrow = match record.direction {
            Direction::Forward => "->",
            Direction::Backward => "<-",
        };
        let mut flags = Vec::new();
        if record.use_business_days {
            flags.push("business days");
        }
        if record.exclude_holidays {
            flags.push("no holidays");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        };
        let name = record
            .name
            .as_deref()
            .map(|n| format!("  \"{n}\""))
            .unwrap_or_default();

        let _ = writeln!(
            out,
            "#{:<4} {} {arrow} {}  {} days{flags}{name}  [{}]",
            record.id,
            record.start_date.format("%Y-%m-%d"),
            record.end_date.format("%Y-%m-%d"),
            record.target_days,
            record.created_at.format("%Y-%m-%d %H:%M"),
        );
    }
    out
}

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use deadline_core::db::DbConfig;
use deadline_core::models::{NewDeadlineRecord, RawCalculationRequest};
use deadline_core::{DeadlineCalculator, HistoryRepository};
use deadline_cli::app;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Deadline calculator for calendar-day and business-day counting.
///
/// Computes an end date from a start date and a day count, optionally
/// skipping weekends and federal holidays, and keeps a local history of
/// past calculations.
#[derive(Debug, Parser)]
struct Cli {
    /// History backend to use.
    #[arg(long, default_value = "sqlite", global = true)]
    backend: String,

    /// History connection string.
    /// For SQLite this is a file path (e.g. `deadlines.db`) or `:memory:`.
    #[arg(long, default_value = "deadlines.db", global = true)]
    db: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a deadline from a start date and a day count.
    Calculate {
        /// Start date in YYYY-MM-DD format.
        #[arg(long)]
        start_date: Option<String>,

        /// Number of days to count off (non-negative).
        #[arg(long)]
        days: Option<String>,

        /// Counting direction: "forward" or "backward".
        #[arg(long)]
        direction: Option<String>,

        /// Count business days only, skipping Saturdays and Sundays.
        #[arg(long)]
        business_days: bool,

        /// Skip federal holidays while counting.
        #[arg(long)]
        exclude_holidays: bool,

        /// Extend the built-in holiday table from a CSV file (date,name).
        #[arg(long)]
        holidays_csv: Option<PathBuf>,

        /// Print the day-by-day walk.
        #[arg(long)]
        show_steps: bool,

        /// Record this calculation in the history database.
        #[arg(long)]
        save: bool,

        /// Save the deadline under a name (implies --save).
        #[arg(long)]
        name: Option<String>,
    },

    /// Show recent calculations, most recent first.
    History {
        /// Maximum number of entries to show.
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },

    /// Delete all stored calculations.
    ClearHistory,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let db_config = DbConfig {
        backend: cli.backend,
        connection_string: cli.db,
    };

    match cli.command {
        Command::Calculate {
            start_date,
            days,
            direction,
            business_days,
            exclude_holidays,
            holidays_csv,
            show_steps,
            save,
            name,
        } => {
            let raw = RawCalculationRequest {
                start_date,
                days,
                direction,
                use_business_days: business_days,
                exclude_holidays,
            };

            // Field-level validation failures are user errors, reported
            // without touching the engine or the database.
            let request = match raw.validate() {
                Ok(request) => request,
                Err(error) => {
                    eprintln!("invalid request: {error}");
                    return Ok(ExitCode::from(2));
                }
            };

            let calendar = app::load_calendar(holidays_csv.as_deref())?;
            let calculator = DeadlineCalculator::new(calendar);
            let result = calculator.calculate(&request);

            let today = Local::now().date_naive();
            print!("{}", app::render_result(&result, today, show_steps));

            if save || name.is_some() {
                debug!("connecting to {} backend", db_config.backend);
                let registry = app::build_registry();
                let repo = registry.create(&db_config).await?;
                let record = repo
                    .save(NewDeadlineRecord::from_result(&result, name))
                    .await?;
                info!(id = record.id, "calculation saved to history");
            }

            Ok(ExitCode::SUCCESS)
        }

        Command::History { limit } => {
            debug!("connecting to {} backend", db_config.backend);
            let registry = app::build_registry();
            let repo = registry.create(&db_config).await?;

            let records = repo.list(Some(limit)).await?;
            print!("{}", app::render_history(&records));

            Ok(ExitCode::SUCCESS)
        }

        Command::ClearHistory => {
            debug!("connecting to {} backend", db_config.backend);
            let registry = app::build_registry();
            let repo = registry.create(&db_config).await?;

            let removed = repo.clear().await?;
            info!(removed, "calculation history cleared");

            Ok(ExitCode::SUCCESS)
        }
    }
}

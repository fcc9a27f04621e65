pub mod calculations;
pub mod db;
pub mod models;

pub use calculations::DeadlineCalculator;
pub use db::repository::{HistoryRepository, RepositoryError};
pub use models::*;

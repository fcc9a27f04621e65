use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DeadlineRecord, NewDeadlineRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Storage for past calculations, owned by the adapter.
///
/// The engine never touches this; it exists so every surface shares one
/// way to keep and replay a calculation history instead of growing its
/// own ad-hoc persistence.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Persist a calculation and return it with its assigned id.
    async fn save(&self, record: NewDeadlineRecord) -> Result<DeadlineRecord, RepositoryError>;

    async fn get(&self, id: i64) -> Result<DeadlineRecord, RepositoryError>;

    /// Stored records, most recent first, optionally capped at `limit`.
    async fn list(&self, limit: Option<i64>) -> Result<Vec<DeadlineRecord>, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Remove every record and return how many were deleted.
    async fn clear(&self) -> Result<usize, RepositoryError>;
}

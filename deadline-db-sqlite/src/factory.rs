use async_trait::async_trait;

use deadline_core::db::repository::{HistoryRepository, RepositoryError};
use deadline_core::db::{DbConfig, RepositoryFactory};

use crate::SqliteRepository;

/// Map a connection string onto a sqlx SQLite URL.
///
/// Accepted values:
/// * A bare file path, e.g. `"deadlines.db"`. The file is created if it
///   does not exist.
/// * `":memory:"` for an ephemeral in-memory database (useful for tests).
/// * A full `sqlite:` URL, passed through unchanged.
fn database_url(connection_string: &str) -> String {
    if connection_string.starts_with("sqlite:") {
        connection_string.to_string()
    } else if connection_string == ":memory:" {
        "sqlite::memory:".to_string()
    } else {
        format!("sqlite:{connection_string}?mode=rwc")
    }
}

/// [`RepositoryFactory`] for SQLite.
///
/// Register this with a [`deadline_core::db::RepositoryRegistry`] to make
/// the `"sqlite"` backend available:
///
/// ```rust,no_run
/// use deadline_core::db::RepositoryRegistry;
/// use deadline_db_sqlite::SqliteRepositoryFactory;
///
/// let mut registry = RepositoryRegistry::new();
/// registry.register(Box::new(SqliteRepositoryFactory));
/// ```
pub struct SqliteRepositoryFactory;

#[async_trait]
impl RepositoryFactory for SqliteRepositoryFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Open the database described by `config.connection_string` and bring
    /// its schema up to date before handing the repository out.
    async fn create(
        &self,
        config: &DbConfig,
    ) -> Result<Box<dyn HistoryRepository>, RepositoryError> {
        let repo = SqliteRepository::new(&database_url(&config.connection_string)).await?;
        repo.run_migrations().await?;
        Ok(Box::new(repo))
    }
}

#[cfg(test)]
mod tests {
    use deadline_core::db::DbConfig;
    use deadline_core::db::RepositoryFactory;

    use super::{SqliteRepositoryFactory, database_url};

    #[test]
    fn backend_name_is_sqlite() {
        assert_eq!(SqliteRepositoryFactory.backend_name(), "sqlite");
    }

    #[test]
    fn bare_paths_become_rwc_urls() {
        assert_eq!(database_url("deadlines.db"), "sqlite:deadlines.db?mode=rwc");
    }

    #[test]
    fn memory_keyword_maps_to_sqlx_memory_url() {
        assert_eq!(database_url(":memory:"), "sqlite::memory:");
    }

    #[test]
    fn full_urls_pass_through() {
        assert_eq!(
            database_url("sqlite:custom.db?mode=ro"),
            "sqlite:custom.db?mode=ro"
        );
    }

    /// Full round-trip: factory to SqliteRepository with an in-memory DB.
    #[tokio::test]
    async fn creates_in_memory_repository() {
        let config = DbConfig {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        };

        let result = SqliteRepositoryFactory.create(&config).await;
        assert!(
            result.is_ok(),
            "failed to create in-memory repository: {:#?}",
            result.err()
        );
    }
}

pub mod factory;

pub use factory::SqliteRepositoryFactory;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use deadline_core::{
    DeadlineRecord, Direction, HistoryRepository, NewDeadlineRecord, RepositoryError,
};
use sqlx::{FromRow, sqlite::SqlitePool};
use tracing::debug;

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<(), RepositoryError> {
        debug!("running deadline history migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(FromRow)]
struct DeadlineRecordRow {
    id: i64,
    name: Option<String>,
    start_date: String,
    end_date: String,
    target_days: i64,
    direction: String,
    use_business_days: bool,
    exclude_holidays: bool,
    created_at: String,
}

impl TryFrom<DeadlineRecordRow> for DeadlineRecord {
    type Error = RepositoryError;

    fn try_from(row: DeadlineRecordRow) -> Result<Self, Self::Error> {
        Ok(DeadlineRecord {
            id: row.id,
            name: row.name,
            start_date: parse_date(&row.start_date)?,
            end_date: parse_date(&row.end_date)?,
            target_days: u32::try_from(row.target_days).map_err(|_| {
                RepositoryError::Database(format!("Negative target_days: {}", row.target_days))
            })?,
            direction: parse_direction(&row.direction)?,
            use_business_days: row.use_business_days,
            exclude_holidays: row.exclude_holidays,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::Database(format!("Failed to parse date '{}': {}", s, e)))
}

fn parse_direction(s: &str) -> Result<Direction, RepositoryError> {
    Direction::parse(s)
        .ok_or_else(|| RepositoryError::Database(format!("Invalid direction: {}", s)))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    // SQLite stores timestamps in various formats, try common ones
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::Database(format!("Failed to parse datetime '{}': {}", s, e)))
}

const SELECT_COLUMNS: &str = "SELECT id, name, start_date, end_date, target_days, direction,
        use_business_days, exclude_holidays, created_at
 FROM deadline_history";

#[async_trait]
impl HistoryRepository for SqliteRepository {
    async fn save(&self, record: NewDeadlineRecord) -> Result<DeadlineRecord, RepositoryError> {
        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(
            "INSERT INTO deadline_history (
                name, start_date, end_date, target_days, direction,
                use_business_days, exclude_holidays, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.name)
        .bind(record.start_date.format("%Y-%m-%d").to_string())
        .bind(record.end_date.format("%Y-%m-%d").to_string())
        .bind(record.target_days as i64)
        .bind(record.direction.as_str())
        .bind(record.use_business_days)
        .bind(record.exclude_holidays)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get(id).await
    }

    async fn get(&self, id: i64) -> Result<DeadlineRecord, RepositoryError> {
        let row: DeadlineRecordRow =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?
                .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<DeadlineRecord>, RepositoryError> {
        // Ties on created_at (second resolution) fall back to insertion order.
        let rows: Vec<DeadlineRecordRow> = match limit {
            Some(limit) => {
                sqlx::query_as(&format!(
                    "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?"
                ))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM deadline_history WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn clear(&self) -> Result<usize, RepositoryError> {
        let result = sqlx::query("DELETE FROM deadline_history")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(result.rows_affected() as usize)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn setup_test_db() -> SqliteRepository {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        let repo = SqliteRepository::new_with_pool(pool).await;
        repo.run_migrations()
            .await
            .expect("Failed to run migrations");
        repo
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_record(name: Option<&str>) -> NewDeadlineRecord {
        NewDeadlineRecord {
            name: name.map(str::to_string),
            start_date: date(2025, 7, 1),
            end_date: date(2025, 8, 12),
            target_days: 30,
            direction: Direction::Forward,
            use_business_days: true,
            exclude_holidays: true,
        }
    }

    #[tokio::test]
    async fn test_save_and_get_record() {
        let repo = setup_test_db().await;

        let saved = repo.save(new_record(None)).await.expect("Should save record");

        assert!(saved.id > 0);
        assert_eq!(saved.start_date, date(2025, 7, 1));
        assert_eq!(saved.end_date, date(2025, 8, 12));
        assert_eq!(saved.target_days, 30);
        assert_eq!(saved.direction, Direction::Forward);
        assert!(saved.use_business_days);
        assert!(saved.exclude_holidays);
        assert_eq!(saved.name, None);

        let fetched = repo.get(saved.id).await.expect("Should fetch record");
        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn test_save_keeps_the_deadline_name() {
        let repo = setup_test_db().await;

        let saved = repo
            .save(new_record(Some("answer brief")))
            .await
            .expect("Should save record");

        assert_eq!(saved.name.as_deref(), Some("answer brief"));
    }

    #[tokio::test]
    async fn test_backward_direction_round_trips() {
        let repo = setup_test_db().await;
        let mut record = new_record(None);
        record.direction = Direction::Backward;

        let saved = repo.save(record).await.expect("Should save record");

        assert_eq!(saved.direction, Direction::Backward);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = setup_test_db().await;

        let result = repo.get(999).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let repo = setup_test_db().await;

        let first = repo.save(new_record(Some("first"))).await.unwrap();
        let second = repo.save(new_record(Some("second"))).await.unwrap();
        let third = repo.save(new_record(Some("third"))).await.unwrap();

        let listed = repo.list(None).await.expect("Should list records");

        assert_eq!(
            listed.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![third.id, second.id, first.id]
        );
    }

    #[tokio::test]
    async fn test_list_honors_the_limit() {
        let repo = setup_test_db().await;
        for _ in 0..5 {
            repo.save(new_record(None)).await.unwrap();
        }

        let listed = repo.list(Some(2)).await.expect("Should list records");

        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_record() {
        let repo = setup_test_db().await;
        let saved = repo.save(new_record(None)).await.unwrap();

        repo.delete(saved.id).await.expect("Should delete record");

        let result = repo.get(saved.id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let repo = setup_test_db().await;

        let result = repo.delete(42).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_clear_reports_the_removed_count() {
        let repo = setup_test_db().await;
        for _ in 0..3 {
            repo.save(new_record(None)).await.unwrap();
        }

        let removed = repo.clear().await.expect("Should clear history");

        assert_eq!(removed, 3);
        assert!(repo.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_on_empty_history_is_zero() {
        let repo = setup_test_db().await;

        let removed = repo.clear().await.expect("Should clear history");

        assert_eq!(removed, 0);
    }

    #[tokio::test]
    async fn test_zero_target_days_round_trips() {
        let repo = setup_test_db().await;
        let mut record = new_record(None);
        record.target_days = 0;
        record.end_date = record.start_date;

        let saved = repo.save(record).await.expect("Should save record");

        assert_eq!(saved.target_days, 0);
        assert_eq!(saved.start_date, saved.end_date);
    }
}

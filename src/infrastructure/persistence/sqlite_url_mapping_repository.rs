//! SQLite implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Row shape of the `generated_urls` table.
#[derive(sqlx::FromRow)]
struct GeneratedUrlRow {
    id: i64,
    short_code: String,
    long_url: String,
    added_time: DateTime<Utc>,
}

impl From<GeneratedUrlRow> for UrlMapping {
    fn from(row: GeneratedUrlRow) -> Self {
        UrlMapping::new(row.id, row.short_code, row.long_url, row.added_time)
    }
}

/// SQLite repository for URL mappings.
///
/// Uniqueness of `short_code` is enforced by the table's `UNIQUE` constraint.
/// The pool runs in WAL mode with a busy timeout, so concurrent writers wait
/// for the lock instead of failing.
pub struct SqliteUrlMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlMappingRepository {
    /// Creates a repository over an existing pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (and if needed creates) the database file at `db_path`.
    ///
    /// The parent directory is created when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the directory cannot be
    /// created or the database cannot be opened.
    pub async fn connect(db_path: &str, max_connections: u32) -> Result<Self, AppError> {
        if let Some(parent) = Path::new(db_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl UrlMappingRepository for SqliteUrlMappingRepository {
    async fn init(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS generated_urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                short_code TEXT NOT NULL UNIQUE,
                long_url TEXT NOT NULL,
                added_time DATETIME NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO generated_urls (short_code, long_url, added_time)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.long_url)
        .bind(new_mapping.created_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(id) => Ok(new_mapping.with_id(id)),
            Err(e) if is_unique_violation_on_code(&e) => Err(AppError::DuplicateCode {
                code: new_mapping.short_code,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM generated_urls WHERE short_code = ?)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists != 0)
    }

    async fn lookup(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let long_url = sqlx::query_scalar::<_, String>(
            "SELECT long_url FROM generated_urls WHERE short_code = ?",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(long_url)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, GeneratedUrlRow>(
            r#"
            SELECT id, short_code, long_url, added_time
            FROM generated_urls
            WHERE short_code = ?
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM generated_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

//! `SQLite` implementation of [`SettingsStore`].
//!
//! All values live in one key/value table; booleans are stored as 0/1
//! integers, matching the host convention of integer-backed boolean
//! settings.

use sqlx::SqlitePool;

use modekit_app::ports::SettingsStore;
use modekit_domain::error::ModeKitError;

use crate::error::StorageError;

/// `SQLite`-backed scalar settings store.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Create a new store backed by the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn read(&self, key: &str) -> Result<Option<i64>, ModeKitError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;
        Ok(row.map(|(value,)| value))
    }

    async fn write(&self, key: &str, value: i64) -> Result<(), ModeKitError> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(StorageError::from)?;
        Ok(())
    }
}

impl SettingsStore for SqliteSettingsStore {
    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, ModeKitError> {
        Ok(self.read(key).await?.map_or(default, |value| value != 0))
    }

    async fn put_bool(&self, key: &str, value: bool) -> Result<(), ModeKitError> {
        self.write(key, i64::from(value)).await
    }

    async fn get_int(&self, key: &str, default: i64) -> Result<i64, ModeKitError> {
        Ok(self.read(key).await?.unwrap_or(default))
    }

    async fn put_int(&self, key: &str, value: i64) -> Result<(), ModeKitError> {
        self.write(key, value).await
    }
}

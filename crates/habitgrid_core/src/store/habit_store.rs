//! Key-value store contract and SQLite implementation.

use crate::db::DbError;
use crate::index::normalize_completions;
use crate::model::data::HabitData;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Fixed key the aggregate blob is stored under.
pub const STORAGE_KEY: &str = "habit-tracker-data";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure for blob read/write operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Blob could not be encoded or decoded as JSON.
    Json(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid habit data blob: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Raw blob access plus the aggregate-level `load`/`save` built on top.
///
/// Implementors provide `read_blob`/`write_blob`; the provided methods own the
/// JSON encoding and the fallback policy.
pub trait HabitStore {
    /// Reads the stored blob, `None` when nothing was saved yet.
    fn read_blob(&self) -> StoreResult<Option<String>>;
    /// Replaces the stored blob.
    fn write_blob(&self, blob: &str) -> StoreResult<()>;

    /// Reads and decodes the aggregate, surfacing every failure.
    fn try_load(&self) -> StoreResult<Option<HabitData>> {
        let Some(blob) = self.read_blob()? else {
            return Ok(None);
        };
        let mut data: HabitData = serde_json::from_str(&blob)?;
        data.completions = normalize_completions(&data.completions);
        Ok(Some(data))
    }

    /// Loads the aggregate, falling back to the default starter data when the
    /// blob is missing, malformed or unreadable.
    fn load(&self) -> HabitData {
        let started_at = Instant::now();
        match self.try_load() {
            Ok(Some(data)) => {
                info!(
                    "event=store_load module=store status=ok habits={} completions={} notes={} duration_ms={}",
                    data.habits.len(),
                    data.completions.len(),
                    data.notes.len(),
                    started_at.elapsed().as_millis()
                );
                data
            }
            Ok(None) => {
                info!("event=store_load module=store status=empty fallback=default");
                HabitData::default_data()
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=error fallback=default error={}",
                    err
                );
                HabitData::default_data()
            }
        }
    }

    /// Encodes and writes the aggregate once. No retry is attempted.
    ///
    /// Failures are returned unlogged; the caller owns the error event.
    fn save(&self, data: &HabitData) -> StoreResult<()> {
        let blob = serde_json::to_string(data)?;
        self.write_blob(&blob)
    }
}

/// SQLite-backed store using the `kv_store` table.
pub struct SqliteHabitStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteHabitStore<'conn> {
    /// Store bound to the default `STORAGE_KEY`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, STORAGE_KEY)
    }

    /// Store bound to a caller-chosen key, e.g. for isolated profiles.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl HabitStore for SqliteHabitStore<'_> {
    fn read_blob(&self) -> StoreResult<Option<String>> {
        let blob = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![self.key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(blob)
    }

    fn write_blob(&self, blob: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key, blob, now_epoch_ms()],
        )?;
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

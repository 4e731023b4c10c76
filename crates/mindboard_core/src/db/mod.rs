//! Document-store bootstrap for project persistence.
//!
//! # Responsibility
//! - Open and configure the SQLite connection backing the project store.
//! - Apply schema migrations before any document is read or written.
//!
//! # Invariants
//! - Applied migration version is tracked via `PRAGMA user_version`.
//! - Returned connections have `foreign_keys=ON` and migrations applied.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::{Duration, Instant};

pub mod migrations;

pub type DbResult<T> = Result<T, DbError>;

/// Store bootstrap and migration errors.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The on-disk schema is newer than this binary understands.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opens the file-backed project store and applies pending migrations.
///
/// # Side effects
/// - Emits `store_open` events with mode, duration and status.
pub fn open_store(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_with("file", || Connection::open(path.as_ref()))
}

/// Opens an in-memory project store, mainly for tests and demos.
pub fn open_store_in_memory() -> DbResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=db status=start mode={mode}");

    let result = connect().map_err(DbError::from).and_then(|mut conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        migrations::apply_migrations(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=store_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=db status=error mode={mode} duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use bok_types::models::{Bok, NewBok};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("DB lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("corrupt row: {0}")]
    Corrupt(String),
}

/// Storage capability consumed by the create handler.
///
/// Implementations assign the identifier and creation timestamp and hand back
/// the row exactly as persisted.
pub trait BokStore: Send + Sync {
    fn insert_bok(&self, new: &NewBok) -> Result<Bok, StoreError>;
}

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        migrations::run(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Private in-memory database, used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> std::result::Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> std::result::Result<T, StoreError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        f(&conn)
    }
}

impl BokStore for Database {
    fn insert_bok(&self, new: &NewBok) -> std::result::Result<Bok, StoreError> {
        self.create_bok(new)?.try_into()
    }
}

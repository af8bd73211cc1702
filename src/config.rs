use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::db::schema;
use crate::error::CarpoolResult;

pub const DEFAULT_DB_PATH: &str = ".data/carpool.db";

/// Where the roster and the last assignment are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl StoreConfig {
    pub fn with_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens the database, creating its directory and schema as needed.
    pub fn open(&self) -> CarpoolResult<Connection> {
        if let Some(dir) = self.db_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(&self.db_path)?;
        schema::initialize(&conn)?;
        Ok(conn)
    }
}

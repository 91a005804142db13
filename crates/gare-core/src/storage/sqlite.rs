//! SQLite storage backend.
//!
//! Slots live in a single `kv` table created from `assets/schema.sql`. Each
//! write replaces the row for its key and stamps `updated_at`.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::Storage;
use crate::error::{DatabaseResultExt, GareError, Result};

/// Durable storage in a SQLite database file.
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema. Missing parent directories are created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GareError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification: `$XDG_DATA_HOME/gare/gare.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("gare")
            .place_data_file("gare.db")
            .map_err(|e| GareError::XdgDirectory(e.to_string()))
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let storage = Self { connection };
        storage.initialize_schema()?;
        Ok(storage)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// Returns the instant `key` was last written, if it holds a value.
    pub fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read slot timestamp")?;

        raw.map(|s| {
            s.parse::<Timestamp>().map_err(|e| {
                GareError::invalid_input("updated_at").with_reason(e.to_string())
            })
        })
        .transpose()
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to read slot")
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .db_context("Failed to write slot")?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.connection
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .db_context("Failed to remove slot")?;
        Ok(())
    }
}

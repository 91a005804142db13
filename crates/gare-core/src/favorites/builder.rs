//! Builder for opening a [`FavoriteStore`] over SQLite storage.

use std::path::{Path, PathBuf};

use log::debug;

use super::{FavoriteStore, DEFAULT_KEY};
use crate::{error::Result, storage::SqliteStorage};

/// Builder for creating and configuring a SQLite-backed favorite store.
#[derive(Debug, Clone)]
pub struct FavoriteStoreBuilder {
    database_path: Option<PathBuf>,
    key: String,
}

impl FavoriteStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            key: DEFAULT_KEY.to_string(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/gare/gare.db` or `~/.local/share/gare/gare.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the storage key holding the favorites array.
    pub fn with_key(mut self, key: Option<impl Into<String>>) -> Self {
        if let Some(key) = key {
            self.key = key.into();
        }
        self
    }

    /// Opens the database and builds the store.
    ///
    /// # Errors
    ///
    /// Returns `GareError::XdgDirectory` if no default path can be resolved,
    /// `GareError::FileSystem` if the parent directory cannot be created, and
    /// `GareError::Database` if database initialization fails.
    pub fn build(self) -> Result<FavoriteStore<SqliteStorage>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => SqliteStorage::default_path()?,
        };

        debug!("Opening favorites database at {}", db_path.display());
        let storage = SqliteStorage::open(&db_path)?;
        Ok(FavoriteStore::with_key(storage, self.key))
    }
}

impl Default for FavoriteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

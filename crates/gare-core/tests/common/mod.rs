use gare_core::{FavoriteStore, FavoriteStoreBuilder, SqliteStorage};
use tempfile::TempDir;

/// Helper function to open a favorite store in a fresh temporary database
pub fn create_test_store() -> (TempDir, FavoriteStore<SqliteStorage>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    (temp_dir, store)
}

/// Helper function to reopen the store living in `temp_dir`
pub fn open_store(temp_dir: &TempDir) -> FavoriteStore<SqliteStorage> {
    FavoriteStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to open favorite store")
}

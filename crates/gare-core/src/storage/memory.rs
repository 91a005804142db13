//! In-process storage backend.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use super::Storage;
use crate::error::Result;

/// Storage backed by a map in memory. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `key` already holding `value`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.slots().insert(key.into(), value.into());
        storage
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let storage = MemoryStorage::with_value("favorites", "[]");
        storage.set("favorites", "[1]").unwrap();
        assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = MemoryStorage::with_value("favorites", "[]");
        storage.remove("favorites").unwrap();
        storage.remove("favorites").unwrap();
        assert_eq!(storage.get("favorites").unwrap(), None);
    }
}

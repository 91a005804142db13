//! Key/value slots for persisted application state.
//!
//! Every piece of durable state in gare lives in a single string slot
//! addressed by key. The [`Storage`] trait is the seam between the components
//! that own a slot (such as [`crate::favorites::FavoriteStore`]) and the
//! backend holding it:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  FavoriteStore  │    │  dyn Storage    │    │ SqliteStorage / │
//! │ (owns its slot) │───▶│ get / set / rm  │───▶│ MemoryStorage   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Backends treat values as opaque text and never interpret them.

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// A durable string slot keyed by name.
pub trait Storage {
    /// Reads the value stored under `key`, `None` when the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Empties the slot. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

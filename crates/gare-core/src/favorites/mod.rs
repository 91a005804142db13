//! Favorite stations persisted in a single storage slot.
//!
//! [`FavoriteStore`] owns one [`Storage`] key holding the JSON array of
//! [`FavoriteRecord`]s. Every mutation is a read-modify-write of the whole
//! array; there is no partial update and no locking, so two concurrent
//! writers race and the last one wins.
//!
//! # Failure policy
//!
//! Favorites are a convenience feature, so the plain operations never return
//! errors:
//!
//! - reads ([`FavoriteStore::get_all`], [`FavoriteStore::contains`]) degrade to
//!   an empty set when the slot is absent, unreadable or malformed;
//! - writes ([`FavoriteStore::add`], [`FavoriteStore::remove`],
//!   [`FavoriteStore::clear`]) report a [`WriteStatus`] that callers are free
//!   to ignore.
//!
//! A write never starts from a slot it could not read: when the storage
//! backend fails the read, the write is skipped and reported as
//! [`WriteStatus::Failed`]. A slot that reads fine but holds malformed JSON
//! is treated as empty and overwritten.
//!
//! Every swallowed failure is logged at `warn` level. The `try_*` variants
//! expose the underlying [`Result`] for callers that care.
//!
//! # Examples
//!
//! ```rust
//! use gare_core::{FavoriteStore, MemoryStorage, Suggestion};
//!
//! let store = FavoriteStore::new(MemoryStorage::new());
//! store.add("stop_area:SNCF:87191007", "Thionville", "stop_area");
//! assert!(store.contains("stop_area:SNCF:87191007"));
//!
//! let ranked = store.rank_favorites_first(vec![
//!     Suggestion { id: "x".into(), name: "Metz".into(), kind: "stop_area".into() },
//!     Suggestion { id: "stop_area:SNCF:87191007".into(), name: "Thionville".into(), kind: "stop_area".into() },
//! ]);
//! assert_eq!(ranked[0].name, "Thionville");
//! ```

use std::collections::HashSet;

use log::{debug, warn};

use crate::{
    error::{GareError, Result},
    models::{FavoriteRecord, Identified},
    storage::Storage,
};

pub mod builder;

pub use builder::FavoriteStoreBuilder;

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "favorites";

/// Outcome of a fire-and-forget write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// The slot was rewritten.
    Written,
    /// Nothing needed to change.
    Unchanged,
    /// Persisting failed; the failure was logged.
    Failed,
}

impl WriteStatus {
    pub fn is_failed(self) -> bool {
        self == WriteStatus::Failed
    }
}

/// Durable, ordered set of favorites keyed by location id.
pub struct FavoriteStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> FavoriteStore<S> {
    /// Creates a store over `storage` using [`DEFAULT_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_KEY)
    }

    /// Creates a store over `storage` using a custom slot key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The slot key this store owns.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns all favorites in insertion order, or an empty list when the
    /// slot cannot be read.
    pub fn get_all(&self) -> Vec<FavoriteRecord> {
        self.try_get_all().unwrap_or_else(|e| {
            warn!("Ignoring unreadable favorites in slot '{}': {e}", self.key);
            Vec::new()
        })
    }

    /// Returns all favorites, surfacing storage and decoding errors.
    pub fn try_get_all(&self) -> Result<Vec<FavoriteRecord>> {
        match self.storage.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Whether `id` is currently a favorite.
    pub fn contains(&self, id: &str) -> bool {
        self.get_all().iter().any(|record| record.id == id)
    }

    /// Adds a favorite unless `id` is already present.
    pub fn add(&self, id: &str, name: &str, kind: &str) -> WriteStatus {
        self.report("add", id, self.try_add(id, name, kind))
    }

    /// Adds a favorite, returning `true` if a record was appended.
    ///
    /// A malformed slot is treated as empty and overwritten.
    pub fn try_add(&self, id: &str, name: &str, kind: &str) -> Result<bool> {
        let mut records = self.read_for_write()?;
        if records.iter().any(|record| record.id == id) {
            return Ok(false);
        }

        records.push(FavoriteRecord::new(id, name, kind));
        self.persist(&records)?;
        Ok(true)
    }

    /// Removes the favorite with `id`, if any.
    pub fn remove(&self, id: &str) -> WriteStatus {
        self.report("remove", id, self.try_remove(id))
    }

    /// Removes the favorite with `id`, returning `true` if one was removed.
    ///
    /// The filtered array is written back even when nothing matched.
    pub fn try_remove(&self, id: &str) -> Result<bool> {
        let mut records = self.read_for_write()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        self.persist(&records)?;
        Ok(records.len() != before)
    }

    /// Adds `id` when absent, removes it when present. Returns whether `id`
    /// is a favorite afterwards.
    pub fn toggle(&self, id: &str, name: &str, kind: &str) -> Result<bool> {
        if self.contains(id) {
            self.try_remove(id)?;
            Ok(false)
        } else {
            self.try_add(id, name, kind)?;
            Ok(true)
        }
    }

    /// Wipes the slot.
    pub fn clear(&self) -> WriteStatus {
        match self.storage.remove(&self.key) {
            Ok(()) => WriteStatus::Written,
            Err(e) => {
                warn!("Failed to clear favorites slot '{}': {e}", self.key);
                WriteStatus::Failed
            }
        }
    }

    /// Orders `candidates` so favorites come first, keeping the relative
    /// input order within each group.
    pub fn rank_favorites_first<T: Identified>(&self, candidates: Vec<T>) -> Vec<T> {
        let records = self.get_all();
        let favorite_ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        rank_favorites_first(candidates, &favorite_ids)
    }

    /// Serializes the stored favorites for export.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.try_get_all()?)?)
    }

    /// Appends records from an exported array whose ids are not yet stored.
    /// Returns the number of records added.
    pub fn merge_json(&self, json: &str) -> Result<usize> {
        let incoming: Vec<FavoriteRecord> = serde_json::from_str(json)?;
        let mut records = self.read_for_write()?;
        let mut seen: HashSet<String> = records.iter().map(|r| r.id.clone()).collect();

        let before = records.len();
        for record in incoming {
            if record.id.is_empty() {
                return Err(GareError::invalid_input("id").with_reason("must not be empty"));
            }
            if seen.insert(record.id.clone()) {
                records.push(record);
            }
        }

        let added = records.len() - before;
        if added > 0 {
            self.persist(&records)?;
        }
        Ok(added)
    }

    /// Current records as the base of a read-modify-write. Storage errors
    /// propagate; undecodable contents read as empty.
    fn read_for_write(&self) -> Result<Vec<FavoriteRecord>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Overwriting malformed favorites in slot '{}': {e}", self.key);
            Vec::new()
        }))
    }

    fn persist(&self, records: &[FavoriteRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.storage.set(&self.key, &raw)?;
        debug!("Persisted {} favorites to slot '{}'", records.len(), self.key);
        Ok(())
    }

    fn report(&self, operation: &str, id: &str, result: Result<bool>) -> WriteStatus {
        match result {
            Ok(true) => WriteStatus::Written,
            Ok(false) => WriteStatus::Unchanged,
            Err(e) => {
                warn!("Failed to {operation} favorite '{id}' in slot '{}': {e}", self.key);
                WriteStatus::Failed
            }
        }
    }
}

/// Stable partition of `candidates`: those whose id is in `favorite_ids`,
/// then the rest, each group in input order.
pub fn rank_favorites_first<T: Identified>(
    candidates: Vec<T>,
    favorite_ids: &HashSet<&str>,
) -> Vec<T> {
    let (mut favorites, others): (Vec<T>, Vec<T>) = candidates
        .into_iter()
        .partition(|candidate| favorite_ids.contains(candidate.id()));
    favorites.extend(others);
    favorites
}

//! Core library for the gare station finder.
//!
//! This crate holds everything behind the station search screens that is not
//! UI: the favorites store persisted in a key/value slot, the formatting
//! helpers turning rail API timestamps and place names into display labels,
//! and markdown display wrappers for the CLI.
//!
//! # Layout
//!
//! - [`storage`]: the [`Storage`] slot abstraction with SQLite and in-memory
//!   backends
//! - [`favorites`]: [`FavoriteStore`], its fail-open read/write policy and
//!   favorites-first ranking of search suggestions
//! - [`format`]: compact timestamp parsing, delay labels, place name cleanup
//! - [`display`]: `Display` wrappers for lists and write outcomes
//!
//! # Quick Start
//!
//! ```rust
//! use gare_core::{format, FavoriteStore, MemoryStorage, WriteStatus};
//!
//! let store = FavoriteStore::new(MemoryStorage::new());
//! assert_eq!(store.add("A", "Gare X", "stop_area"), WriteStatus::Written);
//! assert_eq!(store.add("A", "Gare X", "stop_area"), WriteStatus::Unchanged);
//!
//! let scheduled = format::parse_timestamp("20240601T080000")?;
//! let actual = format::parse_timestamp("20240601T080500")?;
//! assert_eq!(format::delay_label(scheduled, actual), "Retard : 5 min");
//! # Ok::<(), gare_core::TimestampError>(())
//! ```

pub mod display;
pub mod error;
pub mod favorites;
pub mod format;
pub mod models;
pub mod params;
pub mod storage;

// Re-export commonly used types
pub use display::{Favorites, LocalDateTime, OperationStatus, Suggestions, WriteOutcome};
pub use error::{GareError, Result, TimestampError};
pub use favorites::{FavoriteStore, FavoriteStoreBuilder, WriteStatus};
pub use models::{FavoriteRecord, Identified, Suggestion, STOP_AREA, STOP_POINT};
pub use params::{AddFavorite, FavoriteId};
pub use storage::{MemoryStorage, SqliteStorage, Storage};

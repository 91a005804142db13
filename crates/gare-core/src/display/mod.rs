//! Display formatting for favorites, suggestions and operation outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation results get newtype wrappers so the CLI can
//! print any of them the same way:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │ (FavoriteRecord │───▶│ (Favorites,     │───▶│   Output        │
//! │  Suggestion)    │    │  WriteOutcome)  │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use gare_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Favorite added".to_string());
//! assert_eq!(status.to_string(), "Success: Favorite added\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Favorites, Suggestions};
pub use datetime::{LocalDateTime, ZonedDateTime};
pub use results::WriteOutcome;
pub use status::{OperationStatus, StatusLevel};

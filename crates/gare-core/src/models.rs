//! Data models for favorites and search suggestions.
//!
//! Models implement [`std::fmt::Display`] (see [`crate::display`]) and
//! serialize with the exact field names of the persisted favorites slot:
//!
//! ```json
//! [{"id": "stop_area:SNCF:87113001", "name": "Paris Est", "type": "stop_area",
//!   "addedAt": "2024-06-01T08:00:00Z"}]
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Location granularity tag for a stop area.
pub const STOP_AREA: &str = "stop_area";

/// Location granularity tag for a stop point.
pub const STOP_POINT: &str = "stop_point";

/// Anything addressable by a transit location identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A user-pinned transit location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: String,
    pub name: String,
    /// Location tag such as [`STOP_AREA`]; unknown tags are kept verbatim.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "addedAt")]
    pub added_at: Timestamp,
}

impl FavoriteRecord {
    /// Creates a record stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            added_at: Timestamp::now(),
        }
    }
}

impl Identified for FavoriteRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A place returned by a station search, before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Identified for Suggestion {
    fn id(&self) -> &str {
        &self.id
    }
}

impl From<&FavoriteRecord> for Suggestion {
    fn from(record: &FavoriteRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            kind: record.kind.clone(),
        }
    }
}

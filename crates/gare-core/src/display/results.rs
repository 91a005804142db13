//! Result wrapper types for displaying write outcomes.

use std::fmt;

use crate::favorites::WriteStatus;

/// The favorites mutation a [`WriteOutcome`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
    Clear,
}

/// Wrapper type for displaying the result of a favorites write.
///
/// # Examples
///
/// ```rust
/// use gare_core::{
///     display::{results::FavoriteAction, WriteOutcome},
///     WriteStatus,
/// };
///
/// let outcome = WriteOutcome::new(FavoriteAction::Add, "A", WriteStatus::Unchanged);
/// assert_eq!(outcome.to_string(), "A is already a favorite.\n");
/// ```
pub struct WriteOutcome {
    pub action: FavoriteAction,
    pub id: String,
    pub status: WriteStatus,
}

impl WriteOutcome {
    /// Create a new WriteOutcome wrapper.
    pub fn new(action: FavoriteAction, id: impl Into<String>, status: WriteStatus) -> Self {
        Self {
            action,
            id: id.into(),
            status,
        }
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FavoriteAction::*;
        use WriteStatus::*;

        match (self.action, self.status) {
            (Add, Written) => writeln!(f, "Added {} to favorites.", self.id),
            (Add, Unchanged) => writeln!(f, "{} is already a favorite.", self.id),
            (Remove, Written) => writeln!(f, "Removed {} from favorites.", self.id),
            (Remove, Unchanged) => writeln!(f, "{} was not a favorite.", self.id),
            (Clear, Written | Unchanged) => writeln!(f, "Cleared all favorites."),
            (_, Failed) => writeln!(f, "Favorites could not be saved; see logs for details."),
        }
    }
}

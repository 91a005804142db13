//! Collection wrapper types for displaying groups of records.

use std::fmt;

use crate::models::{FavoriteRecord, Suggestion};

/// Newtype wrapper for displaying the favorites list.
///
/// # Examples
///
/// ```rust
/// use gare_core::display::Favorites;
///
/// assert_eq!(Favorites(vec![]).to_string(), "No favorites yet.\n");
/// ```
pub struct Favorites(pub Vec<FavoriteRecord>);

impl Favorites {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of favorites in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the favorites.
    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteRecord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a FavoriteRecord;
    type IntoIter = std::slice::Iter<'a, FavoriteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Favorites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No favorites yet.")
        } else {
            for record in &self.0 {
                write!(f, "{}", record)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying ranked search suggestions.
pub struct Suggestions(pub Vec<Suggestion>);

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Suggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No suggestions.")
        } else {
            for suggestion in &self.0 {
                write!(f, "{}", suggestion)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(id: &str, name: &str) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            name: name.to_string(),
            kind: "stop_area".to_string(),
        }
    }

    #[test]
    fn test_suggestions_keep_order() {
        let output = Suggestions(vec![suggestion("B", "Metz"), suggestion("A", "Nancy")]).to_string();
        let metz = output.find("Metz").unwrap();
        let nancy = output.find("Nancy").unwrap();
        assert!(metz < nancy);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_empty_suggestions() {
        let suggestions = Suggestions(vec![]);
        assert!(suggestions.is_empty());
        assert_eq!(suggestions.to_string(), "No suggestions.\n");
    }
}

//! Display implementations for domain models.
//!
//! Records render as markdown list items. Place names go through
//! [`dedupe_parenthetical`] so `"Metz (Metz)"` prints as `Metz`.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    format::dedupe_parenthetical,
    models::{FavoriteRecord, Suggestion},
};

impl fmt::Display for FavoriteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** (`{}`)", dedupe_parenthetical(&self.name), self.id)?;
        if !self.kind.is_empty() {
            writeln!(f, "  - Type: {}", self.kind)?;
        }
        writeln!(f, "  - Added: {}", LocalDateTime(&self.added_at))
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} (`{}`", dedupe_parenthetical(&self.name), self.id)?;
        if !self.kind.is_empty() {
            write!(f, ", {}", self.kind)?;
        }
        writeln!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STOP_AREA;

    #[test]
    fn test_favorite_record_display() {
        let record = FavoriteRecord {
            id: "stop_area:SNCF:87191007".to_string(),
            name: "Thionville (Thionville)".to_string(),
            kind: STOP_AREA.to_string(),
            added_at: "2024-06-15T12:00:00Z".parse().unwrap(),
        };

        let output = record.to_string();
        assert!(output.starts_with("- **Thionville** (`stop_area:SNCF:87191007`)\n"));
        assert!(output.contains("  - Type: stop_area\n"));
        assert!(output.contains("  - Added: 2024-06-1"));
    }

    #[test]
    fn test_suggestion_display() {
        let suggestion = Suggestion {
            id: "X".to_string(),
            name: "Paris (Gare du Nord)".to_string(),
            kind: String::new(),
        };
        assert_eq!(suggestion.to_string(), "- Paris (Gare du Nord) (`X`)\n");
    }
}

//! Parameter structures for favorites operations.
//!
//! These types are free of CLI framework derives. Interface layers define
//! their own argument structs and convert into them:
//!
//! ```text
//! CLI Args (clap) → Core Params → FavoriteStore
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{GareError, Result},
    models::STOP_AREA,
};

/// Parameters for adding a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavorite {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    STOP_AREA.to_string()
}

impl AddFavorite {
    /// Rejects blank ids and names.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GareError::invalid_input("id").with_reason("must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(GareError::invalid_input("name").with_reason("must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for operations addressing a single favorite by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteId {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_favorite_validation() {
        let params = AddFavorite {
            id: "A".to_string(),
            name: "Gare X".to_string(),
            kind: default_kind(),
        };
        assert!(params.validate().is_ok());

        let blank_id = AddFavorite {
            id: "  ".to_string(),
            ..params.clone()
        };
        assert!(matches!(
            blank_id.validate(),
            Err(GareError::InvalidInput { field, .. }) if field == "id"
        ));

        let blank_name = AddFavorite {
            name: String::new(),
            ..params
        };
        assert!(matches!(
            blank_name.validate(),
            Err(GareError::InvalidInput { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_add_favorite_type_defaults_to_stop_area() {
        let params: AddFavorite = serde_json::from_str(r#"{"id":"A","name":"Gare X"}"#).unwrap();
        assert_eq!(params.kind, STOP_AREA);
    }
}

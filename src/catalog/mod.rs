// src/catalog/mod.rs

//! In-memory recipe catalogue
//!
//! The catalogue is an ordered, append-only sequence of [`Recipe`] records:
//! - Records keep their insertion order for listing and search
//! - Ids are assigned by the store, never by the caller
//! - Nothing is ever updated or deleted in place
//!
//! The store itself is synchronous and lock-free; callers that share it
//! across tasks wrap it in a lock (see `server::ServerState`).

mod seed;
mod store;

pub use seed::{builtin_recipes, load_seed_file, SeedFile};
pub use store::{RecipeStore, DEFAULT_MAX_RESULTS};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned identifier, unique among held records
    pub id: i64,
    /// Display name, the target of keyword search
    pub label: String,
    /// Attribution string
    pub source: String,
    /// Link to the external recipe page
    pub url: String,
}

/// Fields a caller supplies to create a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub label: String,
    pub source: String,
    pub url: String,
}

impl RecipeCreate {
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            url: url.into(),
        }
    }

    /// Check the record invariants that serde cannot express.
    ///
    /// Only the label is constrained (it must not be blank); `source` and
    /// `url` are accepted as given.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::Validation("label must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Search response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSearchResults {
    pub results: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_create_validate() {
        assert!(RecipeCreate::new("Beef Tacos", "X", "http://x").validate().is_ok());
        assert!(RecipeCreate::new("", "X", "http://x").validate().is_err());
        assert!(RecipeCreate::new("   ", "X", "http://x").validate().is_err());
    }

    #[test]
    fn test_recipe_create_requires_every_field() {
        let missing_url = r#"{"label": "Soup", "source": "Grandma"}"#;
        assert!(serde_json::from_str::<RecipeCreate>(missing_url).is_err());

        let wrong_type = r#"{"label": 7, "source": "Grandma", "url": "http://x"}"#;
        assert!(serde_json::from_str::<RecipeCreate>(wrong_type).is_err());

        let ok = r#"{"label": "Soup", "source": "Grandma", "url": "http://x"}"#;
        let parsed: RecipeCreate = serde_json::from_str(ok).unwrap();
        assert_eq!(parsed.label, "Soup");
    }

    #[test]
    fn test_search_results_shape() {
        let results = RecipeSearchResults {
            results: vec![Recipe {
                id: 1,
                label: "Chicken Vesuvio".to_string(),
                source: "Serious Eats".to_string(),
                url: "http://example.com".to_string(),
            }],
        };

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["results"][0]["id"], 1);
        assert_eq!(json["results"][0]["label"], "Chicken Vesuvio");
    }
}

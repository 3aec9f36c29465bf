// src/catalog/seed.rs
//! Seed data for the catalogue
//!
//! The server starts from either the built-in dataset or a TOML seed file:
//!
//! ```toml
//! [[recipes]]
//! id = 1
//! label = "Chicken Vesuvio"
//! source = "Serious Eats"
//! url = "http://www.seriouseats.com/recipes/2011/12/chicken-vesuvio-recipe.html"
//! ```

use super::Recipe;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Seed file structure
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Built-in dataset used when no seed file is configured
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            label: "Chicken Vesuvio".to_string(),
            source: "Serious Eats".to_string(),
            url: "http://www.seriouseats.com/recipes/2011/12/chicken-vesuvio-recipe.html"
                .to_string(),
        },
        Recipe {
            id: 2,
            label: "Chicken Paprikash".to_string(),
            source: "No Recipes".to_string(),
            url: "http://norecipes.com/recipe/chicken-paprikash/".to_string(),
        },
        Recipe {
            id: 3,
            label: "Cauliflower and Tofu Curry Recipe".to_string(),
            source: "Serious Eats".to_string(),
            url: "http://www.seriouseats.com/recipes/2011/02/cauliflower-and-tofu-curry-recipe.html"
                .to_string(),
        },
    ]
}

/// Load recipes from a TOML seed file
pub fn load_seed_file(path: &Path) -> Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let seed: SeedFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;

    Ok(seed.recipes)
}

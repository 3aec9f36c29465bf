// src/catalog/store.rs
//! Append-only recipe store
//!
//! Lookups and searches are linear scans over the insertion-ordered
//! sequence. Ids come from an explicit counter rather than the record
//! count, so they stay unique even if records are ever removed.

use super::{Recipe, RecipeCreate};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// Result count used when a search does not ask for one
pub const DEFAULT_MAX_RESULTS: i64 = 10;

/// Ordered in-memory collection of recipes
#[derive(Debug, Clone)]
pub struct RecipeStore {
    records: Vec<Recipe>,
    /// Id handed to the next created record
    next_id: i64,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore {
    /// Create an empty store; the first created record gets id 1
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store from seed records, keeping their order
    ///
    /// Seed ids must be positive and unique, and the largest must leave
    /// room for the id counter, which starts just past it.
    pub fn with_records(records: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for recipe in &records {
            if recipe.id <= 0 {
                return Err(Error::InvalidSeed(format!(
                    "recipe '{}' has non-positive id {}",
                    recipe.label, recipe.id
                )));
            }
            if !seen.insert(recipe.id) {
                return Err(Error::InvalidSeed(format!("duplicate recipe id {}", recipe.id)));
            }
            if recipe.label.trim().is_empty() {
                return Err(Error::InvalidSeed(format!("recipe {} has an empty label", recipe.id)));
            }
        }

        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .ok_or_else(|| Error::InvalidSeed(format!("no ids left after {}", max_id)))?;
        Ok(Self { records, next_id })
    }

    /// Look up a recipe by id
    pub fn get(&self, id: i64) -> Result<&Recipe> {
        self.records
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Search recipes by label keyword
    ///
    /// Without a keyword (or with an empty one) this returns the first
    /// `max_results` records. With a keyword, labels are matched by
    /// case-insensitive substring. Insertion order is preserved and
    /// `max_results <= 0` yields nothing.
    ///
    /// Keyword length limits are a request-level concern and are not
    /// checked here.
    pub fn search(&self, keyword: Option<&str>, max_results: i64) -> Vec<Recipe> {
        let limit = usize::try_from(max_results).unwrap_or(0);

        let results: Vec<Recipe> = match keyword.filter(|k| !k.is_empty()) {
            None => self.records.iter().take(limit).cloned().collect(),
            Some(keyword) => {
                let needle = keyword.to_lowercase();
                self.records
                    .iter()
                    .filter(|recipe| recipe.label.to_lowercase().contains(&needle))
                    .take(limit)
                    .cloned()
                    .collect()
            }
        };

        debug!(
            "Search keyword={:?} max_results={} -> {} result(s)",
            keyword,
            max_results,
            results.len()
        );
        results
    }

    /// Append a new recipe and return it with its assigned id
    ///
    /// Fails with `IdsExhausted` once the counter cannot advance; the store
    /// is left unchanged in that case.
    pub fn create(&mut self, recipe_in: RecipeCreate) -> Result<Recipe> {
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(Error::IdsExhausted(self.next_id))?;

        let recipe = Recipe {
            id: self.next_id,
            label: recipe_in.label,
            source: recipe_in.source,
            url: recipe_in.url,
        };
        self.next_id = following;
        self.records.push(recipe.clone());
        Ok(recipe)
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Recipe] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

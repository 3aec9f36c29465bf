// src/server/handlers/search.rs
//! Keyword search endpoint

use crate::catalog::RecipeSearchResults;
use crate::error::Error;
use crate::server::{ApiResult, ServerConfig, SharedState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

/// Query parameters for `/search/`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Label keyword; empty or absent lists recipes unfiltered
    pub keyword: Option<String>,
    /// Result-count limit (defaults to the configured value)
    pub max_results: Option<i64>,
}

impl SearchQuery {
    /// Validate against the configured limits and resolve the result count
    ///
    /// Returns the keyword to search for (None = unfiltered) and the
    /// effective `max_results`, clamped to the cap when one is configured.
    pub fn resolve(&self, config: &ServerConfig) -> Result<(Option<&str>, i64), Error> {
        let keyword = self.keyword.as_deref().filter(|k| !k.is_empty());

        if let Some(keyword) = keyword
            && keyword.chars().count() < config.min_keyword_len
        {
            return Err(Error::Validation(format!(
                "keyword must be at least {} characters",
                config.min_keyword_len
            )));
        }

        let max_results = self.max_results.unwrap_or(config.default_max_results);
        let max_results = match config.max_results_cap {
            Some(cap) => max_results.min(cap),
            None => max_results,
        };

        Ok((keyword, max_results))
    }
}

/// GET /search/?keyword=<text>&max_results=<n>
///
/// Returns `{ "results": [...] }`; zero matches is still 200.
/// Keywords shorter than the configured minimum are rejected with 422
/// before the store is consulted.
pub async fn search_recipes(
    State(state): State<SharedState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<RecipeSearchResults>> {
    let state = state.read().await;

    let resolved = query
        .map_err(|rejection| Error::Validation(rejection.body_text()))
        .and_then(|Query(query)| {
            let (keyword, max_results) = query.resolve(&state.config)?;
            Ok((keyword.map(str::to_string), max_results))
        });

    let (keyword, max_results) = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            state.metrics.record_rejection();
            warn!("Rejected search: {}", e);
            return Err(e.into());
        }
    };

    state.metrics.record_search();
    let results = state.store.search(keyword.as_deref(), max_results);
    Ok(Json(RecipeSearchResults { results }))
}

// src/server/handlers/recipes.rs
//! Single-recipe endpoints: fetch by id and create

use crate::catalog::{Recipe, RecipeCreate};
use crate::error::Error;
use crate::server::{ApiResult, SharedState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info, warn};

/// GET /recipe/:recipe_id
///
/// Returns:
/// - 200 OK with the recipe
/// - 404 Not Found ("No recipe found") for an unknown id
/// - 422 if the id is not an integer
pub async fn fetch_recipe(
    State(state): State<SharedState>,
    recipe_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Recipe>> {
    let state = state.read().await;

    let Path(recipe_id) = recipe_id.map_err(|rejection| {
        state.metrics.record_rejection();
        warn!("Rejected recipe lookup: {}", rejection.body_text());
        Error::Validation(format!("recipe_id must be an integer: {}", rejection.body_text()))
    })?;

    match state.store.get(recipe_id) {
        Ok(recipe) => {
            state.metrics.record_lookup_hit();
            Ok(Json(recipe.clone()))
        }
        Err(e) => {
            state.metrics.record_lookup_miss();
            debug!("Recipe {} not found", recipe_id);
            Err(e.into())
        }
    }
}

/// POST /recipe/
///
/// Creates a recipe in memory only. Returns 201 Created with the stored
/// record, including its assigned id.
pub async fn create_recipe(
    State(state): State<SharedState>,
    payload: Result<Json<RecipeCreate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let recipe_in = match payload.map_err(body_error).and_then(|Json(recipe_in)| {
        recipe_in.validate()?;
        Ok(recipe_in)
    }) {
        Ok(recipe_in) => recipe_in,
        Err(e) => {
            state.read().await.metrics.record_rejection();
            warn!("Rejected recipe create: {}", e);
            return Err(e.into());
        }
    };

    // Id assignment and append happen under one write lock
    let mut state = state.write().await;
    let recipe = state
        .store
        .create(recipe_in)
        .inspect_err(|e| error!("Recipe create failed: {}", e))?;
    state.metrics.record_create();

    info!("Created recipe {} '{}'", recipe.id, recipe.label);
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Classify a JSON body rejection: shape problems are validation failures,
/// anything that is not decodable JSON is a malformed body
fn body_error(rejection: JsonRejection) -> Error {
    match rejection {
        JsonRejection::JsonDataError(e) => Error::Validation(e.body_text()),
        other => Error::MalformedBody(other.body_text()),
    }
}

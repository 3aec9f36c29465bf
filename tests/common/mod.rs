// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use recipe_api::{create_router, Recipe, RecipeStore, ServerConfig, ServerState};
use serde_json::Value;
use tower::ServiceExt;

/// Build a recipe record with a placeholder source and url.
pub fn recipe(id: i64, label: &str) -> Recipe {
    Recipe {
        id,
        label: label.to_string(),
        source: "Serious Eats".to_string(),
        url: format!("http://example.com/recipes/{}", id),
    }
}

/// Router over a two-record store: "Chicken Vesuvio" (1) and "Chicken Stew" (2).
pub fn chicken_app() -> Router {
    app_with(vec![recipe(1, "Chicken Vesuvio"), recipe(2, "Chicken Stew")])
}

/// Router over the given seed records with default configuration.
pub fn app_with(records: Vec<Recipe>) -> Router {
    app_with_config(ServerConfig::default(), records)
}

/// Router over the given seed records with the given configuration.
pub fn app_with_config(config: ServerConfig, records: Vec<Recipe>) -> Router {
    let store = RecipeStore::with_records(records).unwrap();
    let state = ServerState::with_store(config, store);
    create_router(state.into_shared())
}

/// Send a request and return the status plus the body parsed as JSON
/// (`Value::Null` for an empty or non-JSON body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Ids of the records in a `{ "results": [...] }` body, in order.
pub fn result_ids(body: &Value) -> Vec<i64> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

// src/server/routes.rs
//! Axum router configuration for the recipe server

use crate::server::audit::audit_requests;
use crate::server::handlers::{admin, index, recipes, search};
use crate::server::SharedState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    // CORS configuration - permissive, the API is public and read-mostly
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // HTML listing of every recipe
        .route("/", get(index::root))
        // Single recipe lookup
        .route("/recipe/:recipe_id", get(recipes::fetch_recipe))
        // Create (in memory only)
        .route("/recipe/", post(recipes::create_recipe))
        // Keyword search, with and without the trailing slash
        .route("/search/", get(search::search_recipes))
        .route("/search", get(search::search_recipes))
        // Health check
        .route("/health", get(health_check))
        // Admin endpoints
        .route("/admin/stats", get(admin::stats))
        .layer(middleware::from_fn_with_state(state.clone(), audit_requests))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{ServerConfig, ServerState};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = ServerState::new(ServerConfig::default()).unwrap();
        create_router(state.into_shared())
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_is_html() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_app()
            .oneshot(Request::builder().uri("/recipes/all").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

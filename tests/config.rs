// tests/config.rs

//! Startup path: configuration file + seed file -> running router.

mod common;

use axum::http::StatusCode;
use common::{get, result_ids};
use recipe_api::{create_router, RecipeApiConfig, ServerState};
use std::fs;

#[tokio::test]
async fn test_config_with_seed_file() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(
        dir.path().join("seed.toml"),
        r#"
[[recipes]]
id = 1
label = "Chicken Vesuvio"
source = "Serious Eats"
url = "http://example.com/vesuvio"

[[recipes]]
id = 2
label = "Chicken Stew"
source = "Home"
url = "http://example.com/stew"
"#,
    )
    .unwrap();

    let config_path = dir.path().join("recipe-api.toml");
    fs::write(
        &config_path,
        r#"
[server]
bind = "127.0.0.1:0"
audit_log = false

[search]
default_max_results = 1

[seed]
path = "seed.toml"
"#,
    )
    .unwrap();

    let config = RecipeApiConfig::load(&config_path).unwrap();
    let server_config = config.to_server_config().unwrap();
    let state = ServerState::new(server_config).unwrap();
    let app = create_router(state.into_shared());

    let (status, body) = get(&app, "/search/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result_ids(&body), vec![1]);

    let (status, body) = get(&app, "/recipe/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "Home");
}

#[test]
fn test_config_missing_file() {
    let err = RecipeApiConfig::load(std::path::Path::new("/nonexistent/recipe-api.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_config_bad_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("seed.toml"), "[[recipes]]\nid = \"one\"\n").unwrap();

    let config_path = dir.path().join("recipe-api.toml");
    fs::write(&config_path, "[seed]\npath = \"seed.toml\"\n").unwrap();

    let config = RecipeApiConfig::load(&config_path).unwrap();
    let server_config = config.to_server_config().unwrap();
    assert!(ServerState::new(server_config).is_err());
}

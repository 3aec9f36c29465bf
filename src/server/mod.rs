// src/server/mod.rs
//! Recipe HTTP server
//!
//! This module provides an HTTP server that:
//! - Renders an HTML listing of every recipe at `/`
//! - Serves single recipes by id
//! - Answers keyword searches with a result-count limit
//! - Accepts new recipes into the in-memory catalogue
//!
//! All state lives in process memory and is reset on restart.

mod audit;
pub mod config;
mod error;
mod handlers;
pub mod metrics;
mod routes;

pub use config::RecipeApiConfig;
pub use error::{ApiError, ApiResult, ProblemDetails};
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::catalog::{builtin_recipes, load_seed_file, RecipeStore, DEFAULT_MAX_RESULTS};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Log method, path and status of every request
    pub enable_audit_log: bool,
    /// Result count when a search omits `max_results`
    pub default_max_results: i64,
    /// Shortest keyword `/search/` accepts
    pub min_keyword_len: usize,
    /// Largest result count a search may return (None = unlimited)
    pub max_results_cap: Option<i64>,
    /// Seed file (None = built-in dataset)
    pub seed_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8001)),
            enable_audit_log: true,
            default_max_results: DEFAULT_MAX_RESULTS,
            min_keyword_len: 3,
            max_results_cap: None,
            seed_path: None,
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    /// The recipe catalogue; creates take the write lock on the whole state
    pub store: RecipeStore,
    /// Metrics collector
    pub metrics: Arc<ServerMetrics>,
}

/// State handle passed to every handler
pub type SharedState = Arc<RwLock<ServerState>>;

impl ServerState {
    /// Build state from configuration, loading the seed dataset
    pub fn new(config: ServerConfig) -> Result<Self> {
        let recipes = match &config.seed_path {
            Some(path) => {
                tracing::info!("Loading seed recipes from {}", path.display());
                load_seed_file(path)?
            }
            None => builtin_recipes(),
        };

        let store = RecipeStore::with_records(recipes).context("Seed dataset rejected")?;
        Ok(Self::with_store(config, store))
    }

    /// Build state around an existing store
    pub fn with_store(config: ServerConfig, store: RecipeStore) -> Self {
        Self {
            config,
            store,
            metrics: Arc::new(ServerMetrics::new()),
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }
}

/// Start the recipe server and run until Ctrl+C or SIGTERM
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting recipe server on {}", config.bind_addr);
    tracing::info!(
        "Search: default {} result(s), cap {:?}, keywords >= {} chars",
        config.default_max_results,
        config.max_results_cap,
        config.min_keyword_len
    );
    if config.enable_audit_log {
        tracing::info!("Audit logging: enabled");
    }

    let state = ServerState::new(config.clone())?;
    tracing::info!("Catalogue seeded with {} recipe(s)", state.store.len());

    let app = create_router(state.into_shared());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Recipe server is ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Recipe server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_state_uses_builtin_seed() {
        let state = ServerState::new(ServerConfig::default()).unwrap();
        assert_eq!(state.store.len(), 3);
        assert_eq!(state.store.get(1).unwrap().label, "Chicken Vesuvio");
    }

    #[test]
    fn test_state_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[recipes]]\nid = 7\nlabel = \"Beef Stew\"\nsource = \"Home\"\nurl = \"http://x\""
        )
        .unwrap();

        let config = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let mut state = ServerState::new(config).unwrap();
        assert_eq!(state.store.len(), 1);

        let created = state
            .store
            .create(crate::catalog::RecipeCreate::new("Pie", "Home", "http://y"))
            .unwrap();
        assert_eq!(created.id, 8);
    }

    #[test]
    fn test_state_rejects_duplicate_seed_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[recipes]]
id = 1
label = "A"
source = "s"
url = "u"

[[recipes]]
id = 1
label = "B"
source = "s"
url = "u"
"#
        )
        .unwrap();

        let config = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        assert!(ServerState::new(config).is_err());
    }
}

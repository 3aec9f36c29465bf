// src/server/config.rs
//! Configuration file parsing for the recipe server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, audit logging
//! - [search] - Result-count defaults and keyword length limit
//! - [seed] - Optional seed file for the initial catalogue

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct RecipeApiConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Seed settings
    #[serde(default)]
    pub seed: SeedSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Log every request (method, path, status)
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            audit_log: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8001".to_string()
}

fn default_true() -> bool {
    true
}

/// Search configuration section
#[derive(Debug, Deserialize)]
pub struct SearchSection {
    /// Result count when the request does not give `max_results`
    #[serde(default = "default_max_results")]
    pub default_max_results: i64,

    /// Minimum keyword length accepted by `/search/`
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,

    /// Upper bound applied to any requested `max_results` (None = no cap)
    #[serde(default)]
    pub max_results_cap: Option<i64>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            min_keyword_len: default_min_keyword_len(),
            max_results_cap: None,
        }
    }
}

fn default_max_results() -> i64 {
    crate::catalog::DEFAULT_MAX_RESULTS
}

fn default_min_keyword_len() -> usize {
    3
}

/// Seed configuration section
#[derive(Debug, Default, Deserialize)]
pub struct SeedSection {
    /// TOML file with `[[recipes]]` entries (None = built-in dataset)
    pub path: Option<PathBuf>,
}

impl RecipeApiConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: RecipeApiConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Relative seed paths are resolved against the config file's directory
        if let Some(seed_path) = config.seed.path.take() {
            let resolved = match path.parent() {
                Some(dir) if seed_path.is_relative() => dir.join(seed_path),
                _ => seed_path,
            };
            config.seed.path = Some(resolved);
        }

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        if self.search.min_keyword_len == 0 {
            anyhow::bail!("search.min_keyword_len must be at least 1");
        }

        if self.search.default_max_results < 0 {
            anyhow::bail!(
                "search.default_max_results must not be negative, got {}",
                self.search.default_max_results
            );
        }

        if let Some(cap) = self.search.max_results_cap {
            if cap < 0 {
                anyhow::bail!("search.max_results_cap must not be negative, got {}", cap);
            }
            if self.search.default_max_results > cap {
                anyhow::bail!(
                    "search.default_max_results must not exceed search.max_results_cap ({}), got {}",
                    cap,
                    self.search.default_max_results
                );
            }
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        Ok(ServerConfig {
            bind_addr,
            enable_audit_log: self.server.audit_log,
            default_max_results: self.search.default_max_results,
            min_keyword_len: self.search.min_keyword_len,
            max_results_cap: self.search.max_results_cap,
            seed_path: self.seed.path.clone(),
        })
    }
}

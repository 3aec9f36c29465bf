// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recipe_api::catalog::{builtin_recipes, load_seed_file};
use recipe_api::{RecipeApiConfig, RecipeStore};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-api")]
#[command(author, version, about = "In-memory recipe catalogue served over HTTP", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the bind address (e.g. 0.0.0.0:8001)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Validate a configuration file and its seed data
    CheckConfig {
        /// Configuration file path
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<RecipeApiConfig> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            RecipeApiConfig::load(path)
        }
        None => Ok(RecipeApiConfig::new()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Serve { config, bind }) => {
            let file_config = load_config(config.as_ref())?;
            let mut server_config = file_config.to_server_config()?;
            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            recipe_api::run_server(server_config).await
        }
        Some(Commands::CheckConfig { path }) => {
            let config = RecipeApiConfig::load(&path)?;
            let recipes = match &config.seed.path {
                Some(seed_path) => load_seed_file(seed_path)?,
                None => builtin_recipes(),
            };
            let store = RecipeStore::with_records(recipes).context("Seed dataset rejected")?;

            println!("Configuration OK: {}", path.display());
            println!("  bind: {}", config.server.bind);
            println!(
                "  search: default {} result(s), cap {:?}, keywords >= {} chars",
                config.search.default_max_results,
                config.search.max_results_cap,
                config.search.min_keyword_len
            );
            println!("  seed: {} recipe(s)", store.len());
            Ok(())
        }
        None => {
            println!("recipe-api v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'recipe-api --help' for usage information");
            Ok(())
        }
    }
}

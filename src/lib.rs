// src/lib.rs

//! Recipe API
//!
//! A small HTTP service over an in-memory recipe catalogue.
//!
//! # Architecture
//!
//! - Catalogue: ordered, append-only [`catalog::RecipeStore`] with id
//!   lookup, keyword search and create
//! - Server: axum router sharing the store behind one `RwLock`
//! - No persistence: the catalogue is seeded at startup and lost on exit

pub mod catalog;
mod error;
pub mod server;

pub use catalog::{Recipe, RecipeCreate, RecipeSearchResults, RecipeStore};
pub use error::{Error, Result};
pub use server::{create_router, run_server, RecipeApiConfig, ServerConfig, ServerState};

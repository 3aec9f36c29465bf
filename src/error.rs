// src/error.rs

//! Error types for the recipe catalogue

use thiserror::Error;

/// Errors raised by catalogue operations and request validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No record carries the requested id
    #[error("No recipe found")]
    NotFound(i64),

    /// Input failed structural validation (missing field, short keyword, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Request body could not be decoded at all
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Seed data violates a catalogue invariant
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    /// The id counter cannot advance past the largest representable id
    #[error("No recipe ids left after {0}")]
    IdsExhausted(i64),
}

/// Result alias for catalogue operations
pub type Result<T> = std::result::Result<T, Error>;

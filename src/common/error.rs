//! Error types for the arithmetic snippets
//!
//! Messages say which input was at fault so the user can fix the flag or
//! config entry directly.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the snippets
#[derive(Error, Debug)]
pub enum Error {
    // === Computation Errors ===
    #[error("Cannot compute {terms} Fibonacci terms: values overflow u64 after {max} terms")]
    FibonacciOverflow { terms: u32, max: u32 },

    #[error("Non-finite value for {field}: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a non-finite input error for the named field
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFiniteInput { field, value }
    }
}

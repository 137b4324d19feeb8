// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for fieldcheck.
//!
//! Validation itself never fails: a rule that does not pass is reported as
//! data inside a [`ValidationReport`](crate::rules::ValidationReport). The
//! errors here cover everything around that core: loading configuration,
//! parsing schemas, strict schema checks and CLI I/O.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fieldcheck operations.
#[derive(Error, Debug)]
pub enum FcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Schema errors
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    // Validation outcome surfaced as a failure (CLI exit status)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Schema-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Failed to parse schema: {message}")]
    Parse { message: String },

    #[error("Unknown rule '{rule}' on field '{field}'")]
    UnknownRule { field: String, rule: String },

    #[error("Invalid argument for rule '{rule}' on field '{field}': {arg}")]
    InvalidArgument {
        field: String,
        rule: String,
        arg: String,
    },

    #[error("Malformed rule reference on field '{field}': {raw}")]
    MalformedRule { field: String, raw: String },
}

/// Validation outcomes that a caller chose to treat as failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{invalid} of {total} input(s) failed validation")]
    Failed { invalid: usize, total: usize },

    #[error("Input must be a JSON object or an array of objects")]
    UnsupportedInput,
}

/// Result type alias for fieldcheck operations.
pub type Result<T> = std::result::Result<T, FcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use classdoc_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the introspection engine (loading, resolution).
    #[display("{}", _0)]
    Core(AppError),

    /// Output serialization failure.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

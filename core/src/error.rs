//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Absent inputs are never errors; resolvers return empty results for them.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (model or config files).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A JSON model or config document failed to deserialize.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// A YAML model or config document failed to deserialize.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A positional lookup (e.g. the first type argument) found nothing.
    #[from(ignore)]
    #[display("Index Error: {_0}")]
    Index(String),

    /// The ancestor chain handed over by the parser is not finite.
    #[from(ignore)]
    #[display("Structural Integrity Error: hierarchy of '{class}' exceeds depth {depth}")]
    StructuralIntegrity {
        /// Qualified name of the class at which the ceiling was crossed.
        class: String,
        /// The depth that was reached.
        depth: usize,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

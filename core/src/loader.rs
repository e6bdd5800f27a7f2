//! # Document Loading
//!
//! Reads JSON or YAML documents (model dumps, configuration files) into typed
//! values. The format is chosen from the file extension.

use crate::error::AppResult;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Serialization format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json` and anything unrecognized.
    Json,
    /// `.yaml` / `.yml`.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// Deserializes `content` in the given format.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> AppResult<T> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

/// Reads and deserializes the file at `path`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path)?;
    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loader: reading document");
    parse_document(&content, format)
}

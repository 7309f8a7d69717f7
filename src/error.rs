//! Errors raised outside the extraction core.
//!
//! Extraction itself is total over every input string; these variants only
//! come from loading configuration, acquiring input and serializing output.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the configuration and CLI layers.
pub type Result<T> = std::result::Result<T, NamexError>;

#[derive(Debug, Error)]
pub enum NamexError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("unknown match policy '{0}' (expected 'lookahead' or 'symmetric')")]
    UnknownPolicy(String),

    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

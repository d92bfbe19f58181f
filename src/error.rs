use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a schema and writing JSDoc.
///
/// Rendering itself is infallible; these come from I/O and `$ref` resolution.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("input schema not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid $ref {reference}: {reason}")]
    Reference { reference: String, reason: String },

    #[error("circular $ref detected at {0}")]
    CircularReference(String),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP fetch failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConversionError>;

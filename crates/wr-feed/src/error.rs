//! Error types for payload loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading retrieval payloads.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to read a payload file.
    #[error("failed to read payload {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The payload is not valid JSON.
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        /// File path or `<input>`.
        origin: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The payload is JSON but matches no known response shape.
    #[error("unrecognized payload shape in {origin}")]
    UnknownShape {
        /// File path or `<input>`.
        origin: String,
    },
}

//! Configuration errors.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// A configuration file or location that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A discovered `.wr.toml` exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Offending file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A `.wr.toml` is not valid TOML or a value has the wrong type.
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Parser diagnostics, including line and column.
        source: de::Error,
    },

    /// No platform data directory, so the state file has no default location.
    #[error("no data directory for the state file (is HOME set?)")]
    NoDataDirectory,
}

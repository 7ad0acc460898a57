//! Persisted reader state.
//!
//! Profiles and history live in one JSON file:
//!
//! ```json
//! { "long_term": {"kant": 1.96}, "short_term": {"kant": 1.64}, "history": [...] }
//! ```
//!
//! Only term weights are stored. Decay factors, pruning bounds and history capacity
//! come from configuration each time the file is loaded. Writes go to a temporary
//! sibling that is then renamed over the state file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use wr_config::Config;
use wr_rank::{History, HistoryEntry, ProfilePair, RankError, TermVector};

/// Errors reading or writing the state file.
#[derive(Debug, Error)]
pub enum StateError {
    /// Failed to read the state file.
    #[error("failed to read state file {path}: {source}")]
    Read {
        /// State file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The state file is not valid JSON.
    #[error("failed to parse state file {path}: {source}")]
    Parse {
        /// State file path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Failed to write the state file.
    #[error("failed to write state file {path}: {source}")]
    Write {
        /// State file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Configured profile settings are unusable.
    #[error("invalid profile settings: {0}")]
    Settings(#[from] RankError),
}

/// On-disk layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    /// Long-term profile weights.
    #[serde(default)]
    long_term: TermVector,
    /// Short-term profile weights.
    #[serde(default)]
    short_term: TermVector,
    /// History entries, newest first.
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

/// Profiles and history of one reader.
#[derive(Debug, Clone)]
pub struct ReaderState {
    /// Long-term and short-term profiles.
    pub profiles: ProfilePair,
    /// Reading history, newest first.
    pub history: History,
}

impl ReaderState {
    /// Creates an empty state using configured settings.
    pub fn empty(config: &Config) -> Result<Self, StateError> {
        Ok(Self {
            profiles: ProfilePair::new(&config.profile)?,
            history: History::new(config.history.capacity),
        })
    }

    /// Loads state from `path`, returning an empty state if the file does not exist.
    pub fn load(path: &Path, config: &Config) -> Result<Self, StateError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file, starting empty");
                return Self::empty(config);
            }
            Err(source) => {
                return Err(StateError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let file: StateFile = serde_json::from_str(&json).map_err(|source| StateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let profiles = ProfilePair::with_terms(file.long_term, file.short_term, &config.profile)?;
        let history = History::from_entries(file.history, config.history.capacity);
        debug!(
            path = %path.display(),
            long_term = profiles.long_term.terms().len(),
            short_term = profiles.short_term.terms().len(),
            history = history.len(),
            "loaded state"
        );

        Ok(Self { profiles, history })
    }

    /// Writes state to `path` atomically, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let file = StateFile {
            long_term: self.profiles.long_term.terms().clone(),
            short_term: self.profiles.short_term.terms().clone(),
            history: self.history.iter().cloned().collect(),
        };
        let write_err = |source| StateError::Write {
            path: path.to_path_buf(),
            source,
        };

        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| write_err(io::Error::other(e)))?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = temp_path(path);
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, path).map_err(write_err)?;
        debug!(path = %path.display(), "saved state");
        Ok(())
    }
}

/// Returns the sibling path used for atomic writes.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

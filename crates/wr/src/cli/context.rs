//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use wr_config::{Config, default_state_path};
use wr_rank::Ranker;

use crate::cli::state::ReaderState;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Explicit state file from `--state`.
    state_override: Option<PathBuf>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(state_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            state_override,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(state_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            state_override,
        })
    }

    /// Returns the state file path, defaulting to the platform data directory.
    pub fn state_path(&self) -> Result<PathBuf, ExitCode> {
        if let Some(path) = &self.state_override {
            return Ok(self.cwd.join(path));
        }
        default_state_path().map_err(|e| {
            eprintln!("error: could not determine state file location: {e}");
            eprintln!("use --state to choose a path");
            ExitCode::FAILURE
        })
    }

    /// Loads persisted profiles and history.
    pub fn load_state(&self) -> Result<(PathBuf, ReaderState), ExitCode> {
        let path = self.state_path()?;
        match ReaderState::load(&path, &self.config) {
            Ok(state) => Ok((path, state)),
            Err(e) => {
                eprintln!("error: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Writes profiles and history back.
    pub fn save_state(&self, path: &Path, state: &ReaderState) -> Result<(), ExitCode> {
        state.save(path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }

    /// Builds a ranker from configuration.
    pub fn ranker(&self) -> Result<Ranker, ExitCode> {
        Ranker::from_config(&self.config).map_err(|e| {
            eprintln!("error: invalid ranking settings: {e}");
            ExitCode::FAILURE
        })
    }

    /// Returns the language to use, preferring an explicit override.
    pub fn language(&self, explicit: Option<&str>) -> String {
        explicit
            .unwrap_or(&self.config.settings.language)
            .trim()
            .to_lowercase()
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

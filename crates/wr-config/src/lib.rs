//! Configuration system for wr.
//!
//! wr uses TOML configuration files named `.wr.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.wr.toml` files found,
//! then loading `~/.wr.toml` as the global config with lowest precedence.
//!
//! Every tunable of the ranking engine lives here: profile decay rates and pruning bounds,
//! the novelty signal, the default exploit weight, history capacity and stopword selection.
//! Every default is a working value, so an empty configuration is always valid.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    path::{Path, PathBuf},
    str,
};

pub use discovery::{
    CONFIG_FILENAME, default_state_path, discover_config_files, global_config_path,
    is_global_config,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawHistorySettings, RawProfileSettings, RawRankingSettings, RawSettings,
    RawStopwordSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Language codes with curated stopword lists.
pub const KNOWN_LANGUAGES: &[&str] = &["de", "en", "fr", "es", "ru"];

/// Top-level merged configuration for wr.
///
/// This represents the fully resolved configuration after merging all discovered `.wr.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Scoring and diversification settings.
    pub ranking: RankingSettings,
    /// Interest profile settings.
    pub profile: ProfileSettings,
    /// Reading history settings.
    pub history: HistorySettings,
    /// Stopword selection.
    pub stopwords: StopwordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Resolves the configuration that applies in `cwd`.
    ///
    /// See [`discover_config_files`] for which files take part and in what order.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Parses and merges `files`, highest precedence first.
    ///
    /// The first unreadable or malformed file aborts loading. No files yields the
    /// defaults.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut parsed = Vec::with_capacity(files.len());
        for path in files {
            parsed.push(ParsedConfig {
                path: path.clone(),
                config: parse_config_file(path)?,
            });
        }
        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Extra stopwords are emitted in sorted order so the output is deterministic.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            settings: self.settings.clone(),
            ranking: self.ranking.clone(),
            profile: self.profile.clone(),
            history: self.history.clone(),
            stopwords: SerializableStopwordSettings::from(&self.stopwords),
        };
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// General settings for wr.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Default language code for tokenization.
    pub language: String,
    /// Maximum number of ranked results (0 ranks every candidate).
    pub limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: String::from("de"),
            limit: 0,
        }
    }
}

impl Settings {
    /// Returns the result limit, or `None` when every candidate should be ranked.
    pub fn limit(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }
}

/// Scoring and diversification settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Balance between profile affinity (1.0) and query affinity (0.0).
    pub exploit: f64,
    /// Number of most recent history entries checked by the novelty signal.
    pub novelty_window: usize,
    /// Magnitude of the novelty adjustment added to or subtracted from a score.
    pub novelty: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            exploit: 0.7,
            novelty_window: 8,
            novelty: 0.05,
        }
    }
}

/// Interest profile settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileSettings {
    /// Per-update decay of the long-term profile.
    pub long_term_decay: f64,
    /// Per-update decay of the short-term profile.
    pub short_term_decay: f64,
    /// Terms at or below this weight are pruned.
    pub epsilon: f64,
    /// Maximum number of terms kept per profile.
    pub max_terms: usize,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            long_term_decay: 0.98,
            short_term_decay: 0.82,
            epsilon: 0.05,
            max_terms: 800,
        }
    }
}

/// Reading history settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of history entries retained.
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { capacity: 200 }
    }
}

/// Where stopword lists come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordSource {
    /// The built-in curated lists only.
    #[default]
    Curated,
    /// Curated lists extended with the Stopwords ISO collection.
    Iso,
}

impl fmt::Display for StopwordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curated => write!(f, "curated"),
            Self::Iso => write!(f, "iso"),
        }
    }
}

impl str::FromStr for StopwordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "curated" => Ok(Self::Curated),
            "iso" => Ok(Self::Iso),
            _ => Err(format!(
                "unknown stopword source '{s}', expected one of: curated, iso"
            )),
        }
    }
}

/// Stopword selection settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StopwordSettings {
    /// Which built-in lists to use.
    pub source: StopwordSource,
    /// Additional stopwords per language code.
    pub extra: HashMap<String, Vec<String>>,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// General settings.
    settings: Settings,
    /// Ranking settings.
    ranking: RankingSettings,
    /// Profile settings.
    profile: ProfileSettings,
    /// History settings.
    history: HistorySettings,
    /// Stopword settings with sorted languages.
    stopwords: SerializableStopwordSettings,
}

/// Stopword settings with sorted languages for deterministic TOML output.
#[derive(Serialize)]
struct SerializableStopwordSettings {
    /// Which built-in lists to use.
    source: StopwordSource,
    /// Additional stopwords per language code (sorted).
    extra: BTreeMap<String, Vec<String>>,
}

impl From<&StopwordSettings> for SerializableStopwordSettings {
    fn from(stopwords: &StopwordSettings) -> Self {
        Self {
            source: stopwords.source,
            extra: stopwords
                .extra
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

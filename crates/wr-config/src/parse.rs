//! Reading single `.wr.toml` files.
//!
//! Every field is optional here: a file only states what it overrides, and
//! [`merge_configs`](crate::merge_configs) fills the gaps from lower layers and defaults.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, StopwordSource};

/// One `.wr.toml` as written, sections absent unless present in the file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `root = true` ends discovery at this file.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Ranking settings section.
    pub ranking: Option<RawRankingSettings>,
    /// Profile settings section.
    pub profile: Option<RawProfileSettings>,
    /// History settings section.
    pub history: Option<RawHistorySettings>,
    /// Stopword settings section.
    pub stopwords: Option<RawStopwordSettings>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Default language code.
    pub language: Option<String>,
    /// Maximum number of ranked results.
    pub limit: Option<usize>,
}

/// Raw ranking settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRankingSettings {
    /// Profile-vs-query balance.
    pub exploit: Option<f64>,
    /// History entries checked by the novelty signal.
    pub novelty_window: Option<usize>,
    /// Magnitude of the novelty adjustment.
    pub novelty: Option<f64>,
}

/// Raw profile settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProfileSettings {
    /// Long-term decay factor.
    pub long_term_decay: Option<f64>,
    /// Short-term decay factor.
    pub short_term_decay: Option<f64>,
    /// Pruning threshold.
    pub epsilon: Option<f64>,
    /// Maximum terms per profile.
    pub max_terms: Option<usize>,
}

/// Raw history settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHistorySettings {
    /// Maximum retained entries.
    pub capacity: Option<usize>,
}

/// Raw stopword settings.
///
/// Extra stopwords accept either a single string or an array per language:
///
/// ```toml
/// [stopwords.extra]
/// de = "siehe"
/// en = ["via", "per"]
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopwordSettings {
    /// Which built-in lists to use.
    pub source: Option<StopwordSource>,
    /// Additional stopwords per language code.
    #[serde_as(as = "Option<HashMap<_, OneOrMany<_>>>")]
    pub extra: Option<HashMap<String, Vec<String>>>,
}

/// Reads and parses one configuration file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    fs::read_to_string(path)
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|contents| parse_config_str(&contents, path))
}

/// Parses TOML text, attributing errors to `path`.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses TOML text with no file behind it.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Returns true if the file at `path` sets `root = true`.
///
/// Unreadable or malformed files count as non-root; loading reports them properly.
pub fn is_root_config(path: &Path) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| toml::from_str::<RawConfig>(&contents).ok())
        .and_then(|config| config.root)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_sets_nothing() {
        let config = parse_config_str("", Path::new(".wr.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.settings.is_none());
        assert!(config.ranking.is_none());
        assert!(config.profile.is_none());
        assert!(config.history.is_none());
        assert!(config.stopwords.is_none());
    }

    #[test]
    fn profile_section() {
        let toml = r#"
[profile]
long_term_decay = 0.95
short_term_decay = 0.5
epsilon = 0.01
max_terms = 100
"#;
        let config = parse_config_str(toml, Path::new(".wr.toml")).unwrap();
        let profile = config.profile.unwrap();
        assert_eq!(profile.long_term_decay, Some(0.95));
        assert_eq!(profile.short_term_decay, Some(0.5));
        assert_eq!(profile.epsilon, Some(0.01));
        assert_eq!(profile.max_terms, Some(100));
    }

    #[test]
    fn partial_ranking_leaves_rest_unset() {
        let toml = r#"
[ranking]
exploit = 0.25
"#;
        let config = parse_config_str(toml, Path::new(".wr.toml")).unwrap();
        let ranking = config.ranking.unwrap();
        assert_eq!(ranking.exploit, Some(0.25));
        assert!(ranking.novelty_window.is_none());
        assert!(ranking.novelty.is_none());
    }

    #[test]
    fn root_flag_and_settings() {
        let toml = r#"
root = true

[settings]
language = "fr"
limit = 12
"#;
        let config = parse_config_str(toml, Path::new(".wr.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        let settings = config.settings.unwrap();
        assert_eq!(settings.language.as_deref(), Some("fr"));
        assert_eq!(settings.limit, Some(12));
    }

    #[test]
    fn extra_stopwords_accept_string_or_list() {
        let toml = r#"
[stopwords]
source = "iso"

[stopwords.extra]
de = "siehe"
en = ["via", "per"]
"#;
        let config = parse_config_str(toml, Path::new(".wr.toml")).unwrap();
        let stopwords = config.stopwords.unwrap();
        assert_eq!(stopwords.source, Some(StopwordSource::Iso));
        let extra = stopwords.extra.unwrap();
        assert_eq!(extra["de"], vec!["siehe".to_string()]);
        assert_eq!(extra["en"], vec!["via".to_string(), "per".to_string()]);
    }

    #[test]
    fn unknown_stopword_source_is_parse_error() {
        let toml = r#"
[stopwords]
source = "nltk"
"#;
        let result = parse_config_str(toml, Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn syntax_error_names_file() {
        let result = parse_config_str("[profile\nepsilon = ", Path::new("bad.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn type_mismatch_is_rejected() {
        assert!(parse_config("[history]\ncapacity = 10\n").is_ok());
        assert!(parse_config("[history]\ncapacity = \"ten\"\n").is_err());
    }
}

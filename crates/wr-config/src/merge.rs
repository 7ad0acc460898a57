//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules.

use std::path::PathBuf;

use crate::{
    Config, HistorySettings, ProfileSettings, RankingSettings, Settings, StopwordSettings,
    parse::{
        RawConfig, RawHistorySettings, RawProfileSettings, RawRankingSettings, RawSettings,
        RawStopwordSettings,
    },
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Extra stopwords: merged per language, first definition for each language wins
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let mut config = Config {
        config_root: configs
            .first()
            .and_then(|c| c.path.parent())
            .map(|p| p.to_path_buf()),
        ..Config::default()
    };

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref settings) = raw.settings {
            apply_raw_settings(&mut config.settings, settings);
        }
        if let Some(ref ranking) = raw.ranking {
            apply_raw_ranking(&mut config.ranking, ranking);
        }
        if let Some(ref profile) = raw.profile {
            apply_raw_profile(&mut config.profile, profile);
        }
        if let Some(ref history) = raw.history {
            apply_raw_history(&mut config.history, history);
        }
        if let Some(ref stopwords) = raw.stopwords {
            apply_raw_stopwords(&mut config.stopwords, stopwords);
        }
    }

    config
}

/// Applies raw general settings, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(ref v) = raw.language {
        result.language = v.to_lowercase();
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Applies raw ranking settings, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingSettings, raw: &RawRankingSettings) {
    if let Some(v) = raw.exploit {
        result.exploit = v;
    }
    if let Some(v) = raw.novelty_window {
        result.novelty_window = v;
    }
    if let Some(v) = raw.novelty {
        result.novelty = v;
    }
}

/// Applies raw profile settings, overwriting any present values.
fn apply_raw_profile(result: &mut ProfileSettings, raw: &RawProfileSettings) {
    if let Some(v) = raw.long_term_decay {
        result.long_term_decay = v;
    }
    if let Some(v) = raw.short_term_decay {
        result.short_term_decay = v;
    }
    if let Some(v) = raw.epsilon {
        result.epsilon = v;
    }
    if let Some(v) = raw.max_terms {
        result.max_terms = v;
    }
}

/// Applies raw history settings, overwriting any present values.
fn apply_raw_history(result: &mut HistorySettings, raw: &RawHistorySettings) {
    if let Some(v) = raw.capacity {
        result.capacity = v;
    }
}

/// Applies raw stopword settings.
///
/// Extra stopwords replace the whole list for a language, so a closer config can
/// shrink a list defined globally.
fn apply_raw_stopwords(result: &mut StopwordSettings, raw: &RawStopwordSettings) {
    if let Some(v) = raw.source {
        result.source = v;
    }
    if let Some(ref extra) = raw.extra {
        for (lang, words) in extra {
            result.extra.insert(lang.to_lowercase(), words.clone());
        }
    }
}

//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::{Config, KNOWN_LANGUAGES};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A profile decay factor is outside the open interval (0, 1).
    DecayOutOfRange {
        /// Which profile the decay belongs to.
        profile: &'static str,
        /// Configured value.
        value: f64,
    },
    /// The pruning threshold is negative or not finite.
    InvalidEpsilon {
        /// Configured value.
        value: f64,
    },
    /// Profiles are capped at zero terms and will never remember anything.
    ZeroMaxTerms,
    /// The default exploit weight is outside [0, 1].
    ExploitOutOfRange {
        /// Configured value.
        value: f64,
    },
    /// The novelty magnitude is negative or not finite.
    InvalidNovelty {
        /// Configured value.
        value: f64,
    },
    /// History capacity is zero, which disables the novelty signal.
    ZeroHistoryCapacity,
    /// The novelty window looks further back than history retains.
    NoveltyWindowExceedsHistory {
        /// Configured novelty window.
        window: usize,
        /// Configured history capacity.
        capacity: usize,
    },
    /// A language code has no curated stopword list.
    UnknownLanguage {
        /// The unrecognized code.
        code: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecayOutOfRange { profile, value } => {
                write!(f, "{profile} decay {value} must lie strictly between 0 and 1")
            }
            Self::InvalidEpsilon { value } => {
                write!(f, "profile epsilon {value} must be a non-negative number")
            }
            Self::ZeroMaxTerms => write!(f, "profile max_terms is 0"),
            Self::ExploitOutOfRange { value } => {
                write!(f, "ranking exploit {value} must lie between 0 and 1")
            }
            Self::InvalidNovelty { value } => {
                write!(f, "ranking novelty {value} must be a non-negative number")
            }
            Self::ZeroHistoryCapacity => write!(f, "history capacity is 0"),
            Self::NoveltyWindowExceedsHistory { window, capacity } => write!(
                f,
                "novelty window {window} is larger than history capacity {capacity}"
            ),
            Self::UnknownLanguage { code } => {
                write!(f, "language '{code}' has no stopword list")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let profile = &config.profile;
    for (name, value) in [
        ("long-term", profile.long_term_decay),
        ("short-term", profile.short_term_decay),
    ] {
        if !(value > 0.0 && value < 1.0) {
            warnings.push(ConfigWarning::DecayOutOfRange {
                profile: name,
                value,
            });
        }
    }
    if !profile.epsilon.is_finite() || profile.epsilon < 0.0 {
        warnings.push(ConfigWarning::InvalidEpsilon {
            value: profile.epsilon,
        });
    }
    if profile.max_terms == 0 {
        warnings.push(ConfigWarning::ZeroMaxTerms);
    }

    let exploit = config.ranking.exploit;
    if !(0.0..=1.0).contains(&exploit) {
        warnings.push(ConfigWarning::ExploitOutOfRange { value: exploit });
    }
    let novelty = config.ranking.novelty;
    if !novelty.is_finite() || novelty < 0.0 {
        warnings.push(ConfigWarning::InvalidNovelty { value: novelty });
    }

    let capacity = config.history.capacity;
    if capacity == 0 {
        warnings.push(ConfigWarning::ZeroHistoryCapacity);
    } else if config.ranking.novelty_window > capacity {
        warnings.push(ConfigWarning::NoveltyWindowExceedsHistory {
            window: config.ranking.novelty_window,
            capacity,
        });
    }

    if !KNOWN_LANGUAGES.contains(&config.settings.language.as_str()) {
        warnings.push(ConfigWarning::UnknownLanguage {
            code: config.settings.language.clone(),
        });
    }

    warnings
}

//! Languages with curated stopword lists.

use std::{fmt, str};

/// A language for which a curated stopword list exists.
///
/// Language codes outside this set are still accepted everywhere a code is taken;
/// they simply tokenize without stopword filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// German (`de`).
    German,
    /// English (`en`).
    English,
    /// French (`fr`).
    French,
    /// Spanish (`es`).
    Spanish,
    /// Russian (`ru`).
    Russian,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Self; 5] = [
        Self::German,
        Self::English,
        Self::French,
        Self::Spanish,
        Self::Russian,
    ];

    /// Resolves a language code, returning `None` for codes without a stopword list.
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// Returns the two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Russian => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" => Ok(Self::German),
            "en" => Ok(Self::English),
            "fr" => Ok(Self::French),
            "es" => Ok(Self::Spanish),
            "ru" => Ok(Self::Russian),
            _ => Err(format!(
                "unknown language '{s}', expected one of: de, en, fr, es, ru"
            )),
        }
    }
}

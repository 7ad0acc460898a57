//! Text normalization and tokenization.
//!
//! Tokens are produced in four steps:
//! 1. Lowercase the text and strip diacritical marks (NFKD, then drop U+0300..=U+036F)
//! 2. Treat every run of characters that are neither letters nor digits as a separator
//! 3. Drop tokens shorter than [`MIN_TOKEN_CHARS`] characters
//! 4. Drop stopwords of the requested language
//!
//! The result depends only on the input text, the language code and the stopword
//! configuration the tokenizer was built with.

use std::{collections::HashMap, ops::RangeInclusive, sync::LazyLock};

use unicode_normalization::UnicodeNormalization;
use wr_config::StopwordSettings;

use crate::{Language, Stopwords};

/// Minimum token length in characters.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Range of combining diacritical marks removed after decomposition.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Tokenizer shared by the free [`tokenize`] function.
static DEFAULT_TOKENIZER: LazyLock<Tokenizer> = LazyLock::new(Tokenizer::default);

/// Lowercases text and strips combining diacritical marks.
///
/// Characters other than letters and digits are kept; [`Tokenizer::tokenize`] treats
/// them as separators.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// Language-aware tokenizer with preloaded stopword sets.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Stopword sets keyed by lowercase language code.
    stopwords: HashMap<String, Stopwords>,
    /// Filter used for codes without an entry.
    fallback: Stopwords,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&StopwordSettings::default())
    }
}

impl Tokenizer {
    /// Creates a tokenizer, loading stopwords for every curated language and every
    /// language that has configured extra words.
    pub fn new(settings: &StopwordSettings) -> Self {
        let codes = Language::ALL
            .iter()
            .map(|lang| lang.code().to_string())
            .chain(settings.extra.keys().map(|code| code.to_lowercase()));

        let stopwords = codes
            .map(|code| {
                let words = Stopwords::for_code(&code, settings);
                (code, words)
            })
            .collect();

        Self {
            stopwords,
            fallback: Stopwords::empty(),
        }
    }

    /// Returns the stopword set used for a language code.
    pub fn stopwords(&self, language: &str) -> &Stopwords {
        self.stopwords
            .get(&language.trim().to_lowercase())
            .unwrap_or(&self.fallback)
    }

    /// Splits text into normalized, filtered tokens.
    pub fn tokenize(&self, text: &str, language: &str) -> Vec<String> {
        let stopwords = self.stopwords(language);
        let folded = fold(text);

        folded
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|token| !stopwords.contains(token))
            .map(str::to_owned)
            .collect()
    }
}

/// Tokenizes text with the default curated stopword lists.
///
/// An unrecognized language code disables stopword filtering.
pub fn tokenize(text: &str, language: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text, language)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use wr_config::StopwordSource;

    use super::*;

    #[test]
    fn german_title_drops_articles() {
        assert_eq!(
            tokenize("Die Philosophie der Freiheit", "de"),
            vec!["philosophie", "freiheit"]
        );
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(
            tokenize("Émile Durkheim: Über Religion", "xx"),
            vec!["emile", "durkheim", "uber", "religion"]
        );
        assert_eq!(fold("Ça va, Señor?"), "ca va, senor?");
    }

    #[test]
    fn punctuation_runs_separate_tokens() {
        assert_eq!(
            tokenize("state-of-the-art...machine_learning!!2024", "xx"),
            vec!["state", "the", "art", "machine", "learning", "2024"]
        );
    }

    #[test]
    fn short_tokens_are_dropped() {
        assert_eq!(tokenize("an ox ate hay", "xx"), vec!["ate", "hay"]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two Cyrillic letters are four bytes but only two characters
        assert_eq!(tokenize("он дом", "xx"), vec!["дом"]);
    }

    #[test]
    fn unknown_language_keeps_stopwords() {
        assert_eq!(
            tokenize("the history of the world", "it"),
            vec!["the", "history", "the", "world"]
        );
        assert_eq!(
            tokenize("the history of the world", "en"),
            vec!["history", "world"]
        );
    }

    #[test]
    fn folded_stopwords_match_folded_tokens() {
        assert_eq!(tokenize("Für Elise", "de"), vec!["elise"]);
        assert_eq!(tokenize("Cuándo está qué", "es"), vec!["cuando"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("", "de").is_empty());
        assert!(tokenize("  ,;  ", "de").is_empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let text = "Kant und die Kritik der reinen Vernunft";
        assert_eq!(tokenize(text, "de"), tokenize(text, "de"));
    }

    #[test]
    fn configured_extras_are_applied() {
        let settings = StopwordSettings {
            source: StopwordSource::Curated,
            extra: HashMap::from([("de".to_string(), vec!["siehe".to_string()])]),
        };
        let tokenizer = Tokenizer::new(&settings);

        assert_eq!(
            tokenizer.tokenize("Siehe auch Freiheit", "DE"),
            vec!["freiheit"]
        );
    }
}

//! Relevance scoring.
//!
//! A candidate's base score blends three signals:
//!
//! ```text
//! score = exploit * cos(doc, profile) + (1 - exploit) * cos(doc, query) + novelty
//! ```
//!
//! The novelty term is negative for titles read recently and positive otherwise, so
//! fresh material edges out what the reader has just seen.

use std::{fmt, str};

use wr_config::RankingSettings;

use crate::{History, RankError, TermVector, cosine};

/// Balance between profile affinity (1.0) and query affinity (0.0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExploitWeight(f64);

impl Default for ExploitWeight {
    fn default() -> Self {
        Self(RankingSettings::default().exploit)
    }
}

impl ExploitWeight {
    /// Creates a weight, rejecting values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, RankError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(RankError::ExploitOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates a weight from a 0-100 slider position.
    pub fn from_percent(percent: u32) -> Result<Self, RankError> {
        if percent > 100 {
            return Err(RankError::ExploitPercentOutOfRange(percent));
        }
        Ok(Self(f64::from(percent) / 100.0))
    }

    /// Returns the raw weight.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Share of the short-term profile in the combined profile.
    pub fn short_term_share(self) -> f64 {
        0.3 + 0.5 * self.0
    }

    /// MMR trade-off used by the ranking pipeline.
    pub fn mmr_lambda(self) -> f64 {
        0.7 + 0.2 * self.0
    }
}

impl fmt::Display for ExploitWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl str::FromStr for ExploitWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid exploit weight '{s}', expected a number in [0, 1]"))?;
        Self::new(value).map_err(|e| e.to_string())
    }
}

/// Novelty adjustment for recently read titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Novelty {
    /// Number of most recent history entries checked.
    window: usize,
    /// Size of the adjustment, finite and non-negative.
    magnitude: f64,
}

impl Default for Novelty {
    fn default() -> Self {
        let settings = RankingSettings::default();
        Self {
            window: settings.novelty_window,
            magnitude: settings.novelty,
        }
    }
}

impl TryFrom<&RankingSettings> for Novelty {
    type Error = RankError;

    fn try_from(settings: &RankingSettings) -> Result<Self, Self::Error> {
        Self::new(settings.novelty_window, settings.novelty)
    }
}

impl Novelty {
    /// Creates a novelty signal, rejecting a negative or non-finite magnitude.
    pub fn new(window: usize, magnitude: f64) -> Result<Self, RankError> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(RankError::InvalidNovelty(magnitude));
        }
        Ok(Self { window, magnitude })
    }

    /// Returns `-magnitude` if the title matches one of the recent history titles,
    /// `+magnitude` otherwise.
    ///
    /// Titles are compared exactly.
    pub fn signal(&self, title: &str, history: &History) -> f64 {
        if history.recent_titles(self.window).any(|seen| seen == title) {
            -self.magnitude
        } else {
            self.magnitude
        }
    }
}

/// Profile and query affinity of a document, without novelty.
pub fn affinity(
    document: &TermVector,
    profile: &TermVector,
    query: &TermVector,
    exploit: ExploitWeight,
) -> f64 {
    let exploit = exploit.value();
    exploit * cosine(document, profile) + (1.0 - exploit) * cosine(document, query)
}

/// Full base score of a candidate.
pub fn base_score(
    document: &TermVector,
    profile: &TermVector,
    query: &TermVector,
    exploit: ExploitWeight,
    novelty: f64,
) -> f64 {
    affinity(document, profile, query, exploit) + novelty
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::{HistoryEntry, term_frequency};

    /// History containing the given titles, newest first.
    fn history(titles: &[&str]) -> History {
        History::from_entries(
            titles.iter().map(|title| HistoryEntry {
                title: (*title).to_string(),
                lang: "de".to_string(),
                ts: DateTime::<Utc>::UNIX_EPOCH,
            }),
            200,
        )
    }

    #[test]
    fn exploit_range_is_checked() {
        assert!(ExploitWeight::new(0.0).is_ok());
        assert!(ExploitWeight::new(1.0).is_ok());
        assert_eq!(
            ExploitWeight::new(1.5),
            Err(RankError::ExploitOutOfRange(1.5))
        );
        assert!(ExploitWeight::new(-0.1).is_err());
        assert!(ExploitWeight::new(f64::NAN).is_err());
    }

    #[test]
    fn exploit_from_percent() {
        assert_eq!(ExploitWeight::from_percent(70).unwrap().value(), 0.7);
        assert_eq!(
            ExploitWeight::from_percent(101),
            Err(RankError::ExploitPercentOutOfRange(101))
        );
    }

    #[test]
    fn exploit_parses_from_str() {
        assert_eq!("0.25".parse::<ExploitWeight>().unwrap().value(), 0.25);
        assert!("abc".parse::<ExploitWeight>().is_err());
        assert!("2".parse::<ExploitWeight>().is_err());
    }

    #[test]
    fn derived_weights() {
        let full = ExploitWeight::new(1.0).unwrap();
        assert!((full.short_term_share() - 0.8).abs() < 1e-12);
        assert!((full.mmr_lambda() - 0.9).abs() < 1e-12);

        let none = ExploitWeight::new(0.0).unwrap();
        assert!((none.short_term_share() - 0.3).abs() < 1e-12);
        assert!((none.mmr_lambda() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn recently_read_title_is_penalized() {
        let novelty = Novelty::default();
        let history = history(&["Kant"]);

        assert_eq!(novelty.signal("Kant", &history), -0.05);
        assert_eq!(novelty.signal("Hegel", &history), 0.05);
        assert_eq!(novelty.signal("kant", &history), 0.05);
    }

    #[test]
    fn novelty_only_checks_the_window() {
        let novelty = Novelty::new(2, 0.05).unwrap();
        let history = history(&["a", "b", "Kant"]);

        assert_eq!(novelty.signal("b", &history), -0.05);
        assert_eq!(novelty.signal("Kant", &history), 0.05);
    }

    #[test]
    fn novelty_magnitude_is_checked() {
        assert!(Novelty::new(8, 0.0).is_ok());
        assert_eq!(
            Novelty::new(8, -0.05),
            Err(RankError::InvalidNovelty(-0.05))
        );
        assert!(matches!(
            Novelty::new(8, f64::NAN),
            Err(RankError::InvalidNovelty(_))
        ));
        assert!(Novelty::new(8, f64::INFINITY).is_err());

        let mut settings = RankingSettings::default();
        settings.novelty = f64::NAN;
        assert!(Novelty::try_from(&settings).is_err());
    }

    #[test]
    fn empty_history_rewards_everything() {
        assert_eq!(Novelty::default().signal("Kant", &History::default()), 0.05);
    }

    #[test]
    fn base_score_blends_profile_and_query() {
        let doc = term_frequency(["kant", "ethik"]);
        let profile = term_frequency(["kant", "ethik"]);
        let query = term_frequency(["logik"]);

        let exploit = ExploitWeight::new(0.7).unwrap();
        let score = base_score(&doc, &profile, &query, exploit, 0.05);
        // 0.7 * 1 + 0.3 * 0 + 0.05
        assert!((score - 0.75).abs() < 1e-12);

        let exploit = ExploitWeight::new(0.0).unwrap();
        assert!((base_score(&doc, &profile, &query, exploit, -0.05) + 0.05).abs() < 1e-12);
    }

    #[test]
    fn empty_profile_and_query_leave_only_novelty() {
        let doc = term_frequency(["kant"]);
        let empty = TermVector::new();
        let score = base_score(&doc, &empty, &empty, ExploitWeight::default(), 0.05);
        assert_eq!(score, 0.05);
    }
}

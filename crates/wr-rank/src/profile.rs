//! Decaying interest profiles.
//!
//! A reader has two profiles built from the documents they consume:
//! - **Long-term**: decays slowly and captures stable interests
//! - **Short-term**: decays fast and follows the current session
//!
//! Every update decays existing weights, adds the consumed document's term
//! frequencies and prunes the result. Profiles are values: updates return a new
//! profile and leave the input untouched.

use std::cmp::Ordering;

use tracing::debug;
use wr_config::ProfileSettings;

use crate::{ExploitWeight, IdfProvider, RankError, TermVector, apply_idf};

/// Bounds applied to a profile after every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pruning {
    /// Terms at or below this weight are dropped.
    epsilon: f64,
    /// Maximum number of terms kept.
    max_terms: usize,
}

impl Default for Pruning {
    fn default() -> Self {
        let settings = ProfileSettings::default();
        Self {
            epsilon: settings.epsilon,
            max_terms: settings.max_terms,
        }
    }
}

impl Pruning {
    /// Creates pruning bounds, rejecting a negative or non-finite epsilon.
    pub fn new(epsilon: f64, max_terms: usize) -> Result<Self, RankError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(RankError::InvalidEpsilon(epsilon));
        }
        Ok(Self { epsilon, max_terms })
    }

    /// Returns the weight threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the term cap.
    pub fn max_terms(&self) -> usize {
        self.max_terms
    }

    /// Drops light terms, then keeps the heaviest `max_terms`.
    ///
    /// Equal weights are ordered by term so the surviving set is deterministic.
    pub fn apply(&self, terms: TermVector) -> TermVector {
        let mut entries: Vec<(String, f64)> = terms
            .into_iter()
            .filter(|(_, weight)| *weight > self.epsilon)
            .collect();

        if entries.len() > self.max_terms {
            entries.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            entries.truncate(self.max_terms);
        }

        entries.into_iter().collect()
    }
}

/// A weighted term vector with a per-update decay factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Current term weights.
    terms: TermVector,
    /// Multiplier applied to every weight on update, in `(0, 1)`.
    decay: f64,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new(decay: f64) -> Result<Self, RankError> {
        Self::with_terms(TermVector::new(), decay)
    }

    /// Creates a profile from existing weights, such as a restored state file.
    pub fn with_terms(terms: TermVector, decay: f64) -> Result<Self, RankError> {
        if !(decay > 0.0 && decay < 1.0) {
            return Err(RankError::DecayOutOfRange(decay));
        }
        Ok(Self { terms, decay })
    }

    /// Returns the term weights.
    pub fn terms(&self) -> &TermVector {
        &self.terms
    }

    /// Returns the decay factor.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Returns true if the profile holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the profile after consuming a document.
    ///
    /// Existing weights are multiplied by the decay factor, the document's weights
    /// are added and the result is pruned.
    pub fn update(&self, document: &TermVector, pruning: &Pruning) -> Self {
        let mut terms = self.terms.clone();
        terms.scale(self.decay);
        terms.add_scaled(document, 1.0);
        let before = terms.len();
        let terms = pruning.apply(terms);
        debug!(
            decay = self.decay,
            before,
            after = terms.len(),
            "updated profile"
        );
        Self {
            terms,
            decay: self.decay,
        }
    }

    /// Returns the `n` heaviest terms, heaviest first, ties ordered by term.
    pub fn top_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.terms.iter().collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries.truncate(n);
        entries
    }
}

/// The long-term and short-term profiles of one reader.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePair {
    /// Slowly decaying profile.
    pub long_term: Profile,
    /// Quickly decaying profile.
    pub short_term: Profile,
    /// Bounds applied on update.
    pruning: Pruning,
}

impl Default for ProfilePair {
    fn default() -> Self {
        let settings = ProfileSettings::default();
        Self {
            long_term: Profile {
                terms: TermVector::new(),
                decay: settings.long_term_decay,
            },
            short_term: Profile {
                terms: TermVector::new(),
                decay: settings.short_term_decay,
            },
            pruning: Pruning::default(),
        }
    }
}

impl ProfilePair {
    /// Creates empty profiles from settings.
    pub fn new(settings: &ProfileSettings) -> Result<Self, RankError> {
        Self::with_terms(TermVector::new(), TermVector::new(), settings)
    }

    /// Restores profiles from stored weights, taking decay and pruning from settings.
    pub fn with_terms(
        long_term: TermVector,
        short_term: TermVector,
        settings: &ProfileSettings,
    ) -> Result<Self, RankError> {
        Ok(Self {
            long_term: Profile::with_terms(long_term, settings.long_term_decay)?,
            short_term: Profile::with_terms(short_term, settings.short_term_decay)?,
            pruning: Pruning::new(settings.epsilon, settings.max_terms)?,
        })
    }

    /// Returns the pruning bounds.
    pub fn pruning(&self) -> &Pruning {
        &self.pruning
    }

    /// Returns true if both profiles are empty.
    pub fn is_empty(&self) -> bool {
        self.long_term.is_empty() && self.short_term.is_empty()
    }

    /// Returns both profiles updated with a consumed document.
    pub fn update(&self, document: &TermVector) -> Self {
        Self {
            long_term: self.long_term.update(document, &self.pruning),
            short_term: self.short_term.update(document, &self.pruning),
            pruning: self.pruning,
        }
    }

    /// Returns the `n` heaviest long-term and short-term terms.
    pub fn top_terms(&self, n: usize) -> (Vec<(&str, f64)>, Vec<(&str, f64)>) {
        (self.long_term.top_terms(n), self.short_term.top_terms(n))
    }

    /// Blends the IDF-weighted profiles into one vector.
    ///
    /// A higher exploit weight leans on the short-term profile:
    /// `beta_st = 0.3 + 0.5 * exploit`, `beta_lt = 1 - beta_st`.
    pub fn combined<P: IdfProvider + ?Sized>(&self, idf: &P, exploit: ExploitWeight) -> TermVector {
        let beta_st = exploit.short_term_share();
        let beta_lt = 1.0 - beta_st;

        let mut combined = apply_idf(self.long_term.terms(), idf);
        combined.scale(beta_lt);
        combined.add_scaled(&apply_idf(self.short_term.terms(), idf), beta_st);
        combined
    }
}

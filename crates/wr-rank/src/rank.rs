//! The ranking pipeline.
//!
//! A ranking pass:
//! 1. Tokenizes every candidate and builds its term-frequency vector
//! 2. Computes a fresh IDF table over those vectors
//! 3. Weights candidates, the query and the combined profile by IDF
//! 4. Scores every candidate
//! 5. Orders candidates with MMR
//!
//! Consuming a document updates both profiles with its raw term frequencies and
//! produces the history entry the caller records.

use std::{mem, sync::LazyLock};

use tracing::{debug, trace};
use wr_config::Config;

use crate::{
    Candidate, ExploitWeight, History, HistoryEntry, Novelty, ProfilePair, RankError,
    TermVector, Tokenizer, apply_idf, base_score, compute_idf, mmr_order, term_frequency,
};

/// Ranker used by the free [`rank`] and [`consume`] functions.
static DEFAULT_RANKER: LazyLock<Ranker> = LazyLock::new(Ranker::default);

/// Everything a ranking pass reads besides the candidates.
#[derive(Debug, Clone, Copy)]
pub struct RankingContext<'a> {
    /// Free-text query, possibly empty.
    pub query: &'a str,
    /// Language code used for tokenization.
    pub language: &'a str,
    /// Balance between profile and query affinity.
    pub exploit: ExploitWeight,
    /// Reader profiles.
    pub profiles: &'a ProfilePair,
    /// Reading history, newest first.
    pub history: &'a History,
    /// Maximum number of results; `None` ranks every candidate.
    pub limit: Option<usize>,
}

/// A candidate in its final position.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    /// The ranked candidate.
    pub candidate: Candidate,
    /// IDF-weighted term vector of the candidate.
    pub vector: TermVector,
    /// Base score before diversification.
    pub score: f64,
    /// Zero-based position in the final order.
    pub position: usize,
}

/// Tokenizer plus scoring tunables.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    /// Tokenizer applied to candidates, queries and consumed documents.
    tokenizer: Tokenizer,
    /// Novelty signal settings.
    novelty: Novelty,
}

impl Ranker {
    /// Creates a ranker.
    pub fn new(tokenizer: Tokenizer, novelty: Novelty) -> Self {
        Self { tokenizer, novelty }
    }

    /// Creates a ranker from configuration.
    ///
    /// Fails if the configured novelty magnitude is negative or not finite.
    pub fn from_config(config: &Config) -> Result<Self, RankError> {
        Ok(Self::new(
            Tokenizer::new(&config.stopwords),
            Novelty::try_from(&config.ranking)?,
        ))
    }

    /// Returns the tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Returns the term-frequency vector of arbitrary text.
    pub fn term_frequency(&self, text: &str, language: &str) -> TermVector {
        term_frequency(self.tokenizer.tokenize(text, language))
    }

    /// Ranks candidates against the context.
    ///
    /// Returns at most `context.limit` results in diversified order. An empty candidate
    /// list yields an empty result.
    pub fn rank(
        &self,
        candidates: &[Candidate],
        context: &RankingContext<'_>,
    ) -> Result<Vec<RankedResult>, RankError> {
        let frequencies: Vec<TermVector> = candidates
            .iter()
            .map(|candidate| self.term_frequency(&candidate.text(), context.language))
            .collect();
        let idf = compute_idf(&frequencies);

        let mut vectors: Vec<TermVector> = frequencies
            .iter()
            .map(|tf| apply_idf(tf, &idf))
            .collect();
        let query = apply_idf(
            &self.term_frequency(context.query, context.language),
            &idf,
        );
        let profile = context.profiles.combined(&idf, context.exploit);

        let scores: Vec<f64> = candidates
            .iter()
            .zip(&vectors)
            .map(|(candidate, vector)| {
                let novelty = self.novelty.signal(&candidate.title, context.history);
                let score = base_score(vector, &profile, &query, context.exploit, novelty);
                trace!(id = %candidate.id, score, novelty, "scored candidate");
                score
            })
            .collect();

        let k = context.limit.unwrap_or(candidates.len());
        let order = mmr_order(&vectors, &scores, context.exploit.mmr_lambda(), k)?;

        debug!(
            candidates = candidates.len(),
            vocabulary = idf.len(),
            chosen = order.len(),
            exploit = context.exploit.value(),
            "ranked candidates"
        );

        Ok(order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedResult {
                candidate: candidates[index].clone(),
                vector: mem::take(&mut vectors[index]),
                score: scores[index],
                position,
            })
            .collect())
    }

    /// Records that a candidate was read.
    ///
    /// Returns updated profiles and the history entry to record. The consumed vector
    /// is the plain term frequency of the candidate's text, without IDF.
    pub fn consume(
        &self,
        profiles: &ProfilePair,
        candidate: &Candidate,
        language: &str,
    ) -> (ProfilePair, HistoryEntry) {
        let document = self.term_frequency(&candidate.text(), language);
        debug!(id = %candidate.id, terms = document.len(), "consuming document");
        (
            profiles.update(&document),
            HistoryEntry::now(candidate.title.clone(), language),
        )
    }
}

/// Ranks candidates with default tokenization and novelty settings.
pub fn rank(
    candidates: &[Candidate],
    context: &RankingContext<'_>,
) -> Result<Vec<RankedResult>, RankError> {
    DEFAULT_RANKER.rank(candidates, context)
}

/// Consumes a candidate with default tokenization.
pub fn consume(
    profiles: &ProfilePair,
    candidate: &Candidate,
    language: &str,
) -> (ProfilePair, HistoryEntry) {
    DEFAULT_RANKER.consume(profiles, candidate, language)
}

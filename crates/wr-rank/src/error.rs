//! Error types for the ranking engine.

use thiserror::Error;

/// Precondition violations reported by the ranking engine.
///
/// Malformed but well-typed input is never an error: missing text is empty, an empty
/// candidate list ranks to nothing, and unknown languages skip stopword filtering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// Exploit weight outside `[0, 1]` or not finite.
    #[error("exploit weight must be within [0, 1], got {0}")]
    ExploitOutOfRange(f64),

    /// Exploit percentage above 100.
    #[error("exploit percentage must be within 0..=100, got {0}")]
    ExploitPercentOutOfRange(u32),

    /// MMR trade-off outside `[0, 1]` or not finite.
    #[error("mmr lambda must be within [0, 1], got {0}")]
    LambdaOutOfRange(f64),

    /// Vectors and scores passed to the diversifier differ in length.
    #[error("got {vectors} vectors but {scores} scores")]
    LengthMismatch {
        /// Number of candidate vectors.
        vectors: usize,
        /// Number of base scores.
        scores: usize,
    },

    /// Profile decay outside the open interval `(0, 1)`.
    #[error("decay factor must be within (0, 1), got {0}")]
    DecayOutOfRange(f64),

    /// Negative or non-finite pruning threshold.
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    /// Negative or non-finite novelty magnitude.
    #[error("novelty must be finite and non-negative, got {0}")]
    InvalidNovelty(f64),
}

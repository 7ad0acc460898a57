//! Maximal Marginal Relevance diversification.
//!
//! Picks candidates greedily, each time taking the unchosen candidate that maximizes
//!
//! ```text
//! lambda * score(i) - (1 - lambda) * max_{j chosen} cos(v_i, v_j)
//! ```
//!
//! - `lambda = 1.0` orders purely by score
//! - `lambda = 0.0` maximizes diversity among picks
//!
//! The first pick carries no penalty. On equal marginal relevance the earliest index
//! wins.

use crate::{RankError, TermVector, cosine};

/// Orders candidates by maximal marginal relevance.
///
/// Returns the first `min(k, n)` picks as indices into `vectors`. The highest
/// similarity of every candidate to the picks so far is maintained incrementally, so
/// a pass computes `O(n * k)` cosines.
pub fn mmr_order(
    vectors: &[TermVector],
    scores: &[f64],
    lambda: f64,
    k: usize,
) -> Result<Vec<usize>, RankError> {
    if !(0.0..=1.0).contains(&lambda) {
        return Err(RankError::LambdaOutOfRange(lambda));
    }
    if vectors.len() != scores.len() {
        return Err(RankError::LengthMismatch {
            vectors: vectors.len(),
            scores: scores.len(),
        });
    }

    let n = vectors.len();
    let picks = n.min(k);
    let mut order = Vec::with_capacity(picks);
    let mut chosen = vec![false; n];
    let mut max_similarity = vec![0.0f64; n];

    for _ in 0..picks {
        let mut best: Option<(usize, f64)> = None;

        for i in (0..n).filter(|&i| !chosen[i]) {
            let marginal = lambda * scores[i] - (1.0 - lambda) * max_similarity[i];
            match best {
                Some((_, best_marginal)) if marginal <= best_marginal => {}
                _ => best = Some((i, marginal)),
            }
        }

        let Some((pick, _)) = best else { break };
        chosen[pick] = true;
        order.push(pick);

        for i in (0..n).filter(|&i| !chosen[i]) {
            let similarity = cosine(&vectors[i], &vectors[pick]);
            if similarity > max_similarity[i] {
                max_similarity[i] = similarity;
            }
        }
    }

    Ok(order)
}

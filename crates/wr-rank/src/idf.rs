//! Inverse document frequency over a candidate corpus.
//!
//! The table is rebuilt for every ranking pass from the candidates being ranked and
//! is never persisted. Rare terms score higher:
//!
//! `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, with `N = max(corpus size, 1)`
//!
//! Every weight is at least 1, so a term present in every document still counts.

use std::collections::HashMap;

use crate::TermVector;

/// Source of IDF values for terms.
///
/// This abstraction lets weighting work against a per-pass table or a fixed set of
/// values in tests.
pub trait IdfProvider {
    /// Returns the IDF value for a term, or `None` if the term is unknown.
    ///
    /// Unknown terms are dropped when weighting a vector.
    fn idf(&self, term: &str) -> Option<f64>;
}

/// IDF weights computed from a corpus of term vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    /// Weight per term.
    weights: HashMap<String, f64>,
    /// Effective corpus size used in the formula.
    documents: usize,
}

impl IdfTable {
    /// Returns the number of terms with a weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the corpus had no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the corpus size used in the formula (at least 1).
    pub fn documents(&self) -> usize {
        self.documents
    }
}

impl IdfProvider for IdfTable {
    fn idf(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }
}

/// Builds the IDF table for a corpus.
///
/// Document frequency counts each term once per document. The result does not depend
/// on corpus order.
pub fn compute_idf<'a, I>(corpus: I) -> IdfTable
where
    I: IntoIterator<Item = &'a TermVector>,
{
    let mut df: HashMap<String, usize> = HashMap::new();
    let mut size = 0usize;
    for doc in corpus {
        size += 1;
        for term in doc.terms() {
            match df.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    df.insert(term.to_owned(), 1);
                }
            }
        }
    }

    let documents = size.max(1);
    let n = documents as f64;
    let weights = df
        .into_iter()
        .map(|(term, count)| {
            let idf = ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0;
            (term, idf)
        })
        .collect();

    IdfTable { weights, documents }
}

/// Weights a term-frequency vector by IDF.
///
/// Terms without an IDF value vanish from the result.
pub fn apply_idf<P: IdfProvider + ?Sized>(tf: &TermVector, idf: &P) -> TermVector {
    tf.iter()
        .filter_map(|(term, weight)| {
            let w = idf.idf(term)?;
            Some((term.to_owned(), weight * w))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_frequency;

    /// Fixed IDF values for testing.
    struct FixedIdf(HashMap<&'static str, f64>);

    impl IdfProvider for FixedIdf {
        fn idf(&self, term: &str) -> Option<f64> {
            self.0.get(term).copied()
        }
    }

    #[test]
    fn idf_formula() {
        let docs = [
            term_frequency(["kant", "ethik"]),
            term_frequency(["kant", "logik"]),
            term_frequency(["hegel"]),
        ];
        let idf = compute_idf(&docs);

        assert_eq!(idf.documents(), 3);
        // ln(4 / 3) + 1
        let kant = idf.idf("kant").unwrap();
        assert!((kant - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        // ln(4 / 2) + 1
        let hegel = idf.idf("hegel").unwrap();
        assert!((hegel - (2.0f64.ln() + 1.0)).abs() < 1e-12);
        assert!(hegel > kant);
        assert_eq!(idf.idf("fichte"), None);
    }

    #[test]
    fn term_in_every_document_weighs_one() {
        let docs = [term_frequency(["kant"]), term_frequency(["kant", "kant"])];
        let idf = compute_idf(&docs);
        assert!((idf.idf("kant").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_terms_count_once_per_document() {
        let docs = [term_frequency(["kant", "kant", "kant"]), term_frequency(["hegel"])];
        let idf = compute_idf(&docs);
        assert_eq!(idf.idf("kant"), idf.idf("hegel"));
    }

    #[test]
    fn empty_corpus_is_empty_table() {
        let idf = compute_idf(&Vec::<TermVector>::new());
        assert!(idf.is_empty());
        assert_eq!(idf.documents(), 1);
    }

    #[test]
    fn invariant_under_reordering() {
        let a = term_frequency(["alpha", "beta"]);
        let b = term_frequency(["beta", "gamma", "gamma"]);
        let c = term_frequency(["delta"]);

        let forward = compute_idf([&a, &b, &c]);
        let backward = compute_idf([&c, &b, &a]);
        let shuffled = compute_idf([&b, &c, &a]);

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn apply_idf_drops_unknown_terms() {
        let idf = FixedIdf(HashMap::from([("kant", 2.0), ("hegel", 1.5)]));
        let tf = term_frequency(["kant", "kant", "fichte"]);

        let weighted = apply_idf(&tf, &idf);

        assert_eq!(weighted.get("kant"), 4.0);
        assert_eq!(weighted.get("fichte"), 0.0);
        assert_eq!(weighted.len(), 1);
    }
}

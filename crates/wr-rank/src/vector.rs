//! Sparse term vectors.
//!
//! A [`TermVector`] maps normalized terms to non-negative weights. Terms are kept in
//! lexical order so iteration, floating point summation and serialization are the
//! same on every run.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

/// Sparse mapping from term to weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector {
    /// Term weights in lexical term order.
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the weight of a term, or 0 if absent.
    pub fn get(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Sets the weight of a term.
    pub fn insert(&mut self, term: impl Into<String>, weight: f64) {
        self.weights.insert(term.into(), weight);
    }

    /// Adds `weight` to a term, inserting it if absent.
    pub fn add(&mut self, term: &str, weight: f64) {
        match self.weights.get_mut(term) {
            Some(existing) => *existing += weight,
            None => {
                self.weights.insert(term.to_owned(), weight);
            }
        }
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the vector has no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `(term, weight)` pairs in lexical term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &weight)| (term.as_str(), weight))
    }

    /// Iterates over terms in lexical order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Multiplies every weight by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for weight in self.weights.values_mut() {
            *weight *= factor;
        }
    }

    /// Adds `factor * other` term-wise into this vector.
    pub fn add_scaled(&mut self, other: &Self, factor: f64) {
        for (term, weight) in other.iter() {
            self.add(term, factor * weight);
        }
    }

    /// Keeps only terms for which the predicate returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, f64) -> bool) {
        self.weights.retain(|term, weight| keep(term, *weight));
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Sparse dot product.
    ///
    /// Walks the shorter vector and looks terms up in the longer one.
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter_map(|(term, weight)| large.weights.get(term).map(|w| weight * w))
            .sum()
    }
}

impl FromIterator<(String, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TermVector {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.into_iter()
    }
}

/// Counts occurrences of each token.
pub fn term_frequency<I, S>(tokens: I) -> TermVector
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tf = TermVector::new();
    for token in tokens {
        tf.add(token.as_ref(), 1.0);
    }
    tf
}

/// Cosine similarity of two non-negative vectors.
///
/// Returns 0 when either vector has zero norm, never NaN.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

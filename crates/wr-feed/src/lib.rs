//! Retrieval boundary for wr.
//!
//! Search and related-page endpoints answer in several JSON shapes. This crate
//! normalizes all of them into [`Candidate`] values so the ranking engine never needs
//! to know where a candidate came from. It performs no network I/O: payloads are read
//! from strings or files that some other tool fetched.

#![warn(missing_docs)]

mod error;
mod html;
mod payload;

use std::{collections::HashSet, fs, path::Path};

pub use error::FeedError;
pub use html::strip_html;
pub use payload::parse_payload;
use payload::parse_payload_from;
use tracing::debug;
use wr_rank::Candidate;

/// Reads and parses a payload file.
pub fn load_file(path: &Path) -> Result<Vec<Candidate>, FeedError> {
    let json = fs::read_to_string(path).map_err(|source| FeedError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_payload_from(&json, &path.display().to_string())
}

/// Reads several payload files, keeping one batch per file in argument order.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Vec<Candidate>>, FeedError> {
    paths.iter().map(|path| load_file(path.as_ref())).collect()
}

/// Returns the deduplication key of a candidate: its lowercased id.
pub fn dedup_key(candidate: &Candidate) -> String {
    candidate.id.to_lowercase()
}

/// Concatenates batches, dropping candidates whose key was already seen.
///
/// The first occurrence wins, so base results should precede related results.
pub fn merge_candidates<I>(batches: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = Vec<Candidate>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    let mut dropped = 0usize;

    for candidate in batches.into_iter().flatten() {
        if seen.insert(dedup_key(&candidate)) {
            merged.push(candidate);
        } else {
            dropped += 1;
        }
    }

    debug!(kept = merged.len(), dropped, "merged candidates");
    merged
}

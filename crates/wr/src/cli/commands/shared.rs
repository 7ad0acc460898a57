//! Shared helpers for command implementations.

use std::{path::PathBuf, process::ExitCode};

use wr_rank::Candidate;

/// Loads payload files and merges them into one deduplicated candidate list.
///
/// Used by `rank` and `consume`.
pub fn load_candidates(files: &[PathBuf]) -> Result<Vec<Candidate>, ExitCode> {
    let batches = wr_feed::load_files(files).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    Ok(wr_feed::merge_candidates(batches))
}

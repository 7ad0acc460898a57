//! Implementation of `wr consume`.

use std::process::ExitCode;

use wr_feed::dedup_key;
use wr_rank::Candidate;

use super::shared::load_candidates;
use crate::cli::{args::ConsumeCommand, context::CommandContext, output::dim, state::ReaderState};

/// Records a consumed document, updating both profiles and the history.
///
/// Nothing is written when the document cannot be resolved.
pub fn run(ctx: &CommandContext, cmd: &ConsumeCommand) -> ExitCode {
    let candidate = match resolve(cmd) {
        Ok(candidate) => candidate,
        Err(code) => return code,
    };
    let ranker = match ctx.ranker() {
        Ok(ranker) => ranker,
        Err(code) => return code,
    };
    let (path, state) = match ctx.load_state() {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let language = ctx.language(cmd.language.as_deref());
    let (profiles, entry) = ranker.consume(&state.profiles, &candidate, &language);
    let state = ReaderState {
        profiles,
        history: state.history.record(entry),
    };

    if let Err(code) = ctx.save_state(&path, &state) {
        return code;
    }

    println!("Consumed {}", candidate.title);
    println!(
        "{}",
        dim(&format!(
            "{} long-term terms, {} short-term terms, {} reads",
            state.profiles.long_term.terms().len(),
            state.profiles.short_term.terms().len(),
            state.history.len()
        ))
    );
    ExitCode::SUCCESS
}

/// Finds the consumed document by id in payload files, or builds it from inline fields.
fn resolve(cmd: &ConsumeCommand) -> Result<Candidate, ExitCode> {
    if let Some(id) = &cmd.id {
        let key = id.to_lowercase();
        return load_candidates(&cmd.files)?
            .into_iter()
            .find(|candidate| dedup_key(candidate) == key)
            .ok_or_else(|| {
                eprintln!("error: no candidate with id '{id}' in the given files");
                ExitCode::FAILURE
            });
    }

    let Some(title) = &cmd.title else {
        eprintln!("error: either --id or --title is required");
        return Err(ExitCode::FAILURE);
    };
    let mut candidate = Candidate::new(title.clone(), title.clone());
    if let Some(excerpt) = &cmd.excerpt {
        candidate = candidate.with_excerpt(excerpt.clone());
    }
    if let Some(summary) = &cmd.summary {
        candidate = candidate.with_summary(summary.clone());
    }
    Ok(candidate)
}

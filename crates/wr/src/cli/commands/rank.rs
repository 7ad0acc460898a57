//! Implementation of `wr rank`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use wr_rank::{Candidate, ExploitWeight, RankedResult, RankingContext};

use super::shared::load_candidates;
use crate::cli::{
    args::RankCommand,
    context::CommandContext,
    output::{dim, header, print_json, truncate},
};

/// Widest title shown in the results table.
const TITLE_WIDTH: usize = 48;

/// Widest excerpt shown in the results table.
const EXCERPT_WIDTH: usize = 64;

/// One ranked candidate in JSON output.
#[derive(Serialize)]
struct RankedJson<'a> {
    /// Zero-based position in the diversified order.
    position: usize,
    /// Base score before diversification.
    score: f64,
    /// The candidate itself.
    #[serde(flatten)]
    candidate: &'a Candidate,
}

/// Ranks candidates from payload files against the stored profiles.
pub fn run(ctx: &CommandContext, cmd: &RankCommand) -> ExitCode {
    let candidates = match load_candidates(&cmd.files) {
        Ok(candidates) => candidates,
        Err(code) => return code,
    };
    let (_, state) = match ctx.load_state() {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let exploit = match cmd.exploit {
        Some(exploit) => exploit,
        None => match ExploitWeight::new(ctx.config.ranking.exploit) {
            Ok(exploit) => exploit,
            Err(e) => {
                eprintln!("error: invalid ranking.exploit in configuration: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    let limit = match cmd.limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => ctx.config.settings.limit(),
    };
    let language = ctx.language(cmd.language.as_deref());

    let context = RankingContext {
        query: &cmd.query,
        language: &language,
        exploit,
        profiles: &state.profiles,
        history: &state.history,
        limit,
    };
    let ranker = match ctx.ranker() {
        Ok(ranker) => ranker,
        Err(code) => return code,
    };
    let results = match ranker.rank(&candidates, &context) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: ranking failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        let json: Vec<RankedJson<'_>> = results
            .iter()
            .map(|result| RankedJson {
                position: result.position,
                score: result.score,
                candidate: &result.candidate,
            })
            .collect();
        return print_json(&json);
    }

    print_table(&results, candidates.len());
    ExitCode::SUCCESS
}

/// Prints ranked results as a table.
fn print_table(results: &[RankedResult], total: usize) {
    if results.is_empty() {
        println!("{}", dim("No candidates."));
        return;
    }

    println!(
        "{}",
        header(&format!("Ranked {} of {} candidates", results.len(), total))
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Score", "Title", "Id", "Excerpt"]);
    for result in results {
        let candidate = &result.candidate;
        table.add_row(vec![
            Cell::new(result.position + 1),
            Cell::new(format!("{:.3}", result.score)),
            Cell::new(truncate(&candidate.title, TITLE_WIDTH)),
            Cell::new(&candidate.id),
            Cell::new(truncate(
                candidate.excerpt.as_deref().unwrap_or_default(),
                EXCERPT_WIDTH,
            )),
        ]);
    }
    println!("{table}");
}

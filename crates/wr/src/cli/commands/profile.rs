//! Implementation of `wr profile`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use wr_rank::{HistoryEntry, Profile};

use crate::cli::{
    args::ProfileCommand,
    context::CommandContext,
    output::{dim, header, print_json},
};

/// A weighted profile term in JSON output.
#[derive(Serialize)]
struct TermJson<'a> {
    /// The term.
    term: &'a str,
    /// Its weight.
    weight: f64,
}

/// Profile snapshot in JSON output.
#[derive(Serialize)]
struct ProfileJson<'a> {
    /// Heaviest long-term terms.
    long_term: Vec<TermJson<'a>>,
    /// Heaviest short-term terms.
    short_term: Vec<TermJson<'a>>,
    /// Most recent reads, newest first.
    history: Vec<&'a HistoryEntry>,
}

/// Shows the heaviest profile terms and the most recent reads.
pub fn run(ctx: &CommandContext, cmd: &ProfileCommand) -> ExitCode {
    let (_, state) = match ctx.load_state() {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };
    let recent: Vec<&HistoryEntry> = state.history.iter().take(cmd.limit).collect();

    if cmd.json {
        let (long_term, short_term) = state.profiles.top_terms(cmd.limit);
        return print_json(&ProfileJson {
            long_term: term_json(long_term),
            short_term: term_json(short_term),
            history: recent,
        });
    }

    print_terms("Long-term profile", &state.profiles.long_term, cmd.limit);
    println!();
    print_terms("Short-term profile", &state.profiles.short_term, cmd.limit);
    println!();
    print_history(&recent);
    ExitCode::SUCCESS
}

/// Converts weighted terms for JSON output.
fn term_json(terms: Vec<(&str, f64)>) -> Vec<TermJson<'_>> {
    terms
        .into_iter()
        .map(|(term, weight)| TermJson { term, weight })
        .collect()
}

/// Prints the heaviest terms of one profile.
fn print_terms(title: &str, profile: &Profile, limit: usize) {
    println!(
        "{} {}",
        header(title),
        dim(&format!(
            "({} terms, decay {})",
            profile.terms().len(),
            profile.decay()
        ))
    );
    if profile.is_empty() {
        println!("  {}", dim("(empty)"));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Term", "Weight"]);
    for (term, weight) in profile.top_terms(limit) {
        table.add_row(vec![Cell::new(term), Cell::new(format!("{weight:.3}"))]);
    }
    println!("{table}");
}

/// Prints recent history entries.
fn print_history(entries: &[&HistoryEntry]) {
    println!("{}", header("Recent reads"));
    if entries.is_empty() {
        println!("  {}", dim("(none)"));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Title", "Lang", "Read"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.title),
            Cell::new(&entry.lang),
            Cell::new(entry.ts.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }
    println!("{table}");
}

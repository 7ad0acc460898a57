//! Command-line interface for the `wr` reader's ranking tool.

use std::process::ExitCode;

use clap::Parser;
use wr::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let Cli {
        state,
        verbose,
        command,
    } = Cli::parse();
    logging::init(verbose);

    // init must work even when an existing config file is invalid
    let ctx = match &command {
        Commands::Init(_) => CommandContext::load_cwd_only(state),
        _ => CommandContext::load(state),
    };
    match ctx {
        Ok(ctx) => commands::run(command, &ctx),
        Err(code) => code,
    }
}

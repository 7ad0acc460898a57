//! Command implementations and dispatch.

pub mod config;
pub mod consume;
pub mod init;
pub mod profile;
pub mod rank;
pub mod reset;
mod shared;
pub mod tokens;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Rank(cmd) => rank::run(ctx, &cmd),
        Commands::Consume(cmd) => consume::run(ctx, &cmd),
        Commands::Profile(cmd) => profile::run(ctx, &cmd),
        Commands::Tokens(cmd) => tokens::run(ctx, &cmd),
        Commands::Reset => reset::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}

//! Implementation of `wr config`.

use std::process::ExitCode;

use crate::cli::{
    context::CommandContext,
    output::{Highlighter, warning},
};

/// Shows effective configuration settings, followed by any validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&config.settings_to_toml()));

    for issue in config.validate() {
        eprintln!("{}", warning(&format!("warning: {issue}")));
    }
    ExitCode::SUCCESS
}

//! Implementation of `wr tokens`.

use std::process::ExitCode;

use crate::cli::{args::TokensCommand, context::CommandContext};

/// Prints the tokens of the given text, one per line.
pub fn run(ctx: &CommandContext, cmd: &TokensCommand) -> ExitCode {
    let language = ctx.language(cmd.language.as_deref());
    let text = cmd.text.join(" ");
    let ranker = match ctx.ranker() {
        Ok(ranker) => ranker,
        Err(code) => return code,
    };

    for token in ranker.tokenizer().tokenize(&text, &language) {
        println!("{token}");
    }
    ExitCode::SUCCESS
}

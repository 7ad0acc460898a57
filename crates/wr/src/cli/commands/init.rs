//! Implementation of `wr init`.

use std::{fs, path::PathBuf, process::ExitCode};

use wr_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{Highlighter, indent_content, subheader},
};

/// Writes a commented starter `.wr.toml`.
///
/// Running in the home directory is treated like `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let (path, template) = match target(ctx, cmd.global) {
        Ok(target) => target,
        Err(code) => return code,
    };

    if path.exists() && !cmd.force {
        eprintln!("error: {} already exists", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }
    if let Err(e) = fs::write(&path, &template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    println!(
        "{}",
        indent_content(&Highlighter::new().highlight_toml(&template))
    );
    ExitCode::SUCCESS
}

/// Picks the file to write and the template that goes into it.
fn target(ctx: &CommandContext, global: bool) -> Result<(PathBuf, String), ExitCode> {
    let home_config = global_config_path();
    let in_home = home_config
        .as_deref()
        .and_then(|path| path.parent())
        .is_some_and(|home| home == ctx.cwd);

    if !global && !in_home {
        return Ok((ctx.cwd.join(CONFIG_FILENAME), local_template()));
    }
    match home_config {
        Some(path) => Ok((path, global_template())),
        None => {
            eprintln!("error: could not determine home directory");
            Err(ExitCode::FAILURE)
        }
    }
}

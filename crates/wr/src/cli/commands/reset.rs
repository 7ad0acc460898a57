//! Implementation of `wr reset`.

use std::{fs, io, process::ExitCode};

use crate::cli::{context::CommandContext, output::dim};

/// Deletes the state file, forgetting both profiles and the history.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let path = match ctx.state_path() {
        Ok(path) => path,
        Err(code) => return code,
    };

    match fs::remove_file(&path) {
        Ok(()) => {
            println!("Removed {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!("{}", dim(&format!("No state at {}", path.display())));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to remove {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}

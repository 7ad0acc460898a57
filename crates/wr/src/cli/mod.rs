//! CLI support for the `wr` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
pub mod state;

pub use context::CommandContext;

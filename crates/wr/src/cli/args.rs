//! Clap argument definitions for the `wr` CLI.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use wr_rank::ExploitWeight;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "wr")]
#[command(about = "Personalized, diversified ranking of short documents")]
pub struct Cli {
    /// State file holding profiles and history [default: platform data directory]
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `wr` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates from payload files
    #[command(after_help = "\
PAYLOADS:
  Each file holds one JSON response from a search or related-page endpoint:
    {\"pages\": [...]}              REST title search or related pages
    {\"query\": {\"search\": [...]}}  action API search
    {\"query\": {\"pages\": {...}}}   action API extracts
    {\"pageid\", \"title\", ...}      page summary
    [...]                         bare array of records
  Later files only add candidates whose id was not seen before.

EXAMPLES:
  wr rank search.json related.json -q 'kritik der vernunft'
  wr rank search.json -e 0.2 -n 5 --json")]
    Rank(RankCommand),

    /// Record a consumed document and update the profiles
    Consume(ConsumeCommand),

    /// Show profile terms and reading history
    Profile(ProfileCommand),

    /// Show how text is tokenized
    Tokens(TokensCommand),

    /// Delete the persisted profiles and history
    Reset,

    /// Initialize wr configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

/// Arguments for `wr rank`.
#[derive(Args, Debug, Clone)]
pub struct RankCommand {
    /// Payload files with candidates
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Query text
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,

    /// Language code for tokenization [default: from config]
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Exploit weight in [0, 1]; 1 follows the profile, 0 follows the query
    /// [default: from config]
    #[arg(short = 'e', long)]
    pub exploit: Option<ExploitWeight>,

    /// Maximum results [default: from config, 0 = all]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `wr consume`.
#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("document")
        .required(true)
        .args(["id", "title"])
))]
pub struct ConsumeCommand {
    /// Payload files to look the id up in
    #[arg(requires = "id")]
    pub files: Vec<PathBuf>,

    /// Id of the consumed candidate
    #[arg(long, requires = "files")]
    pub id: Option<String>,

    /// Title of a document given inline
    #[arg(long)]
    pub title: Option<String>,

    /// Excerpt of a document given inline
    #[arg(long, requires = "title")]
    pub excerpt: Option<String>,

    /// Summary of a document given inline
    #[arg(long, requires = "title")]
    pub summary: Option<String>,

    /// Language code the document was read in [default: from config]
    #[arg(short = 'l', long)]
    pub language: Option<String>,
}

/// Arguments for `wr profile`.
#[derive(Args, Debug, Clone)]
pub struct ProfileCommand {
    /// Terms shown per profile and history entries shown
    #[arg(short = 'n', long, default_value = "15")]
    pub limit: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `wr tokens`.
#[derive(Args, Debug, Clone)]
pub struct TokensCommand {
    /// Text to tokenize
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Language code [default: from config]
    #[arg(short = 'l', long)]
    pub language: Option<String>,
}

/// Arguments for `wr init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.wr.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

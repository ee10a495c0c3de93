//! Clap derive structures for the `selekt` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// selekt -- drive a headless select controller from the command line
#[derive(Debug, Parser)]
#[command(
    name = "selekt",
    version,
    about = "Drive a headless select controller without a renderer",
    long_about = "Resolve queries against an option source and replay scripted\n\
        interactions (focus, typing, arrow keys, clicks) through the same\n\
        controller a UI would embed, then print the resulting snapshot.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Settings file (defaults to the platform config dir)
    #[arg(long, short = 'c', env = "SELEKT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SELEKT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Allow several options to be selected at once
    #[arg(long, short = 'm', global = true)]
    pub multiple: bool,

    /// Accept typed text as a search query
    #[arg(long, short = 's', global = true)]
    pub search: bool,

    /// Substring matching instead of fuzzy ranking
    #[arg(long, global = true)]
    pub exact: bool,

    /// Keep the input focused after a selection
    #[arg(long, global = true)]
    pub keep_open: bool,

    /// Separator for multi-value display strings
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// Delay before a simulated fetch is issued, in milliseconds
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a query against an option source and print the pool
    #[command(alias = "f")]
    Filter(FilterArgs),

    /// Run an interaction script and print the final snapshot
    #[command(alias = "r")]
    Replay(ReplayArgs),

    /// Inspect effective settings
    Config(ConfigArgs),
}

// ── Shared source arguments ──────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Option source file (.toml or .json)
    #[arg(long, short = 'f', value_name = "FILE")]
    pub options: PathBuf,

    /// Serve queries through a simulated async fetch with this latency
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Fail simulated fetches that take longer than this
    #[arg(long, value_name = "MS", requires = "latency_ms")]
    pub fetch_timeout_ms: Option<u64>,
}

// ── Filter ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Search text; an empty string lists the whole source
    pub query: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the pool ungrouped, one row per option
    #[arg(long)]
    pub flat: bool,
}

// ── Replay ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Script file, one step per line; `-` reads stdin
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show effective settings (file, env, and flags merged)
    Show,

    /// Print the settings file path
    Path,
}

//! CLI module for Vitalis
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `ask` - Answer a single question
//! - `chat` - Interactive question-and-answer session
//! - `serve` - Start the HTTP API
//! - `dataset` - Inspect the reference dataset (describe, countries, country)
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # One-shot question
//! vitalis ask "Qual a expectativa de vida média?"
//!
//! # Chat against a specific CSV
//! vitalis chat --dataset data/LifeExpectancy.csv
//!
//! # Summary table of two columns
//! vitalis dataset describe -i "Life expectancy" -i GDP
//! ```

pub mod ask;
pub mod chat;
pub mod completions;
pub mod config;
pub mod context;
pub mod dataset;
pub mod output;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::dataset::Indicator;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Vitalis - life-expectancy questions answered from data
#[derive(Parser, Debug)]
#[command(
    name = "vitalis",
    version,
    about = "Answer life-expectancy questions from a dataset, with an LLM fallback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question
    Ask(AskArgs),
    /// Start an interactive chat session
    Chat(ChatArgs),
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Inspect the dataset
    #[command(subcommand)]
    Dataset(DatasetCommands),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that loads the dataset.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitalis.toml")]
    pub config: PathBuf,

    /// Override the dataset CSV path
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question, in Portuguese for the built-in dataset rules
    pub question: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Skip the typing indicator
    #[arg(long)]
    pub no_typing: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override server port
    #[arg(short, long, env = "VITALIS_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "VITALIS_HOST")]
    pub host: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Subcommand, Debug)]
pub enum DatasetCommands {
    /// Descriptive statistics of numeric columns
    Describe(DescribeArgs),
    /// Distinct countries in file order
    Countries(CountriesArgs),
    /// Life expectancy of one country, year by year
    Country(CountryArgs),
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Restrict to these columns (repeatable; header or snake_case name)
    #[arg(short, long = "indicator")]
    pub indicators: Vec<Indicator>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct CountryArgs {
    /// Country name (case-insensitive)
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "vitalis.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

//! FILENAME: app/src/config.rs
//! PURPOSE: Command line definition and the runtime configuration derived from it.

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fanout", version, about = "Evaluates arithmetic operations concurrently")]
pub struct Cli {
    /// File receiving the seq|level|category|message log lines.
    #[arg(long, env = "FANOUT_LOG_FILE", default_value = "fanout.log", global = true)]
    pub log_file: PathBuf,

    /// off, error, warn, info, debug or trace.
    #[arg(
        long,
        env = "FANOUT_LOG_LEVEL",
        default_value = "info",
        value_parser = parse_level,
        global = true
    )]
    pub log_level: LevelFilter,

    /// Number of worker threads. Defaults to one per core.
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a batch of independent operations concurrently.
    Multi(MultiArgs),
    /// Check an expression and print its normalized form.
    Validate(ValidateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct MultiArgs {
    /// Number of operations, each evaluated on its own worker. Must be > 0.
    #[arg(long, short, default_value_t = 0)]
    pub number: usize,

    /// Build composed operation trees instead of flat ones.
    #[arg(long)]
    pub composed: bool,

    /// Seed for the random operands of flat operations.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    #[arg(allow_hyphen_values = true)]
    pub expression: String,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level '{}'", value))
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub threads: Option<usize>,
    pub json: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            log_file: cli.log_file.clone(),
            log_level: cli.log_level,
            threads: cli.threads,
            json: cli.json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from("fanout.log"),
            log_level: LevelFilter::Info,
            threads: None,
            json: false,
        }
    }
}

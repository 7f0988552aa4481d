//! FILENAME: app/src/lib.rs
// PURPOSE: Driver library: parses the command line, sets up logging and the
// worker pool, then dispatches to a subcommand.

use clap::Parser;
use std::io::Write;

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

pub use config::{Cli, Command, Config, MultiArgs, ValidateArgs};
pub use logging::{get_log_path, init_log_file, next_seq, sort_log_file, write_log};


// ============================================================================
// EXIT CODES
// ============================================================================

pub const SUCCESS: i32 = 0;
pub const NO_BASE_CMD_ERROR: i32 = 1;
pub const WRONG_MULTI_CMD_ERROR: i32 = 2;
pub const INVALID_EXPRESSION_ERROR: i32 = 3;

pub const BASE_COMMANDS_HELP: &str = "You need to enter a basic command:\n- multi\n- validate";

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Full program run. Returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if let Err(e) = logging::init(&config) {
        eprintln!("[LOG_INIT] {}", e);
    }
    configure_worker_pool(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = dispatch(cli.command, &config, &mut out);

    log::logger().flush();
    if let Err(e) = sort_log_file() {
        eprintln!("[LOG_ERROR] {}", e);
    }
    code
}

/// Sizes rayon's global pool when `--threads` is given.
pub fn configure_worker_pool(config: &Config) {
    let Some(threads) = config.threads else {
        return;
    };
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
        Ok(()) => log::info!(target: "INIT", "worker pool sized to {} threads", threads),
        Err(e) => log::warn!(target: "INIT", "could not size worker pool: {}", e),
    }
}

/// Runs one subcommand and maps its outcome to an exit code.
pub fn dispatch(command: Option<Command>, config: &Config, out: &mut dyn Write) -> i32 {
    match command {
        None => {
            let _ = writeln!(out, "{}", BASE_COMMANDS_HELP);
            NO_BASE_CMD_ERROR
        }
        Some(Command::Multi(args)) => match commands::run_multi(&args, config, out) {
            Ok(_) => SUCCESS,
            Err(e) => {
                log::error!(target: "CMD", "{}", e);
                eprintln!("{}", e);
                WRONG_MULTI_CMD_ERROR
            }
        },
        Some(Command::Validate(args)) => match commands::run_validate(&args, config, out) {
            Ok(_) => SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                INVALID_EXPRESSION_ERROR
            }
        },
    }
}

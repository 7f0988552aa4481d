//! FILENAME: app/src/commands.rs
// PURPOSE: The driver's subcommands. They call into the engine and parser
// crates and hand the outcome to the output module.

use crate::config::{Config, MultiArgs, ValidateArgs};
use crate::logging::{log_enter_info, log_exit_info};
use crate::output;
use engine::{generate_batch, run_batch, BatchMode, OperationResult};
use parser::ValidatedExpression;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Builds `args.number` operations, runs them concurrently and prints the results.
pub fn run_multi(
    args: &MultiArgs,
    config: &Config,
    out: &mut dyn Write,
) -> Result<Vec<OperationResult>, String> {
    log_enter_info!(
        "CMD",
        "run_multi",
        "number={} composed={} seed={:?}",
        args.number,
        args.composed,
        args.seed
    );

    if args.number == 0 {
        return Err("multi: --number must be greater than 0".to_string());
    }

    let mode = if args.composed {
        BatchMode::Composed
    } else {
        BatchMode::Plain
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut operations = generate_batch(args.number, mode, &mut rng);
    let results = run_batch(&mut operations);

    for (i, result) in results.iter().enumerate() {
        if let Some(err) = &result.error {
            log::warn!(target: "CMD", "operation {} failed: {}", i + 1, err);
        }
    }

    output::write_results(&results, config.json, out)?;

    log_exit_info!("CMD", "run_multi", "{} results", results.len());
    Ok(results)
}

/// Validates one expression and prints the normalized form or the rejection.
pub fn run_validate(
    args: &ValidateArgs,
    config: &Config,
    out: &mut dyn Write,
) -> Result<ValidatedExpression, String> {
    log_enter_info!("CMD", "run_validate", "{:?}", args.expression);

    let outcome = parser::validate(&args.expression);
    output::write_validation(&outcome, config.json, out)?;

    match outcome {
        Ok(validated) => {
            log_exit_info!("CMD", "run_validate", "ok {}", validated);
            Ok(validated)
        }
        Err(err) => {
            log::warn!(target: "CMD", "rejected {:?}: {}", args.expression, err);
            Err(format!("Invalid expression -> {}", err))
        }
    }
}

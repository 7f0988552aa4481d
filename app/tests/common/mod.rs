//! FILENAME: tests/common/mod.rs
//! Test harness for driver integration tests.

#![allow(dead_code)]

use clap::Parser;
use engine::OperationResult;
use fanout_lib::{commands, dispatch, Cli, Config, MultiArgs, ValidateArgs};
use parser::ValidatedExpression;

/// Runs commands against an in-memory output buffer.
pub struct TestHarness {
    pub config: Config,
    pub out: Vec<u8>,
}

impl TestHarness {
    /// Text output, default configuration.
    pub fn new() -> Self {
        TestHarness {
            config: Config::default(),
            out: Vec::new(),
        }
    }

    /// JSON output.
    pub fn json() -> Self {
        let mut harness = Self::new();
        harness.config.json = true;
        harness
    }

    pub fn multi(&mut self, number: usize, composed: bool, seed: Option<u64>) -> Result<Vec<OperationResult>, String> {
        let args = MultiArgs {
            number,
            composed,
            seed,
        };
        commands::run_multi(&args, &self.config, &mut self.out)
    }

    pub fn validate(&mut self, expression: &str) -> Result<ValidatedExpression, String> {
        let args = ValidateArgs {
            expression: expression.to_string(),
        };
        commands::run_validate(&args, &self.config, &mut self.out)
    }

    /// Parses a full command line and dispatches it, returning the exit code.
    pub fn run_args(&mut self, args: &[&str]) -> i32 {
        let mut argv = vec!["fanout"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        let config = Config {
            json: cli.json,
            ..self.config.clone()
        };
        dispatch(cli.command, &config, &mut self.out)
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn output_lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_string).collect()
    }
}

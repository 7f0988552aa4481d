//! FILENAME: engine/src/operation.rs
//! PURPOSE: The capability set shared by simple and composed operations.
//! CONTEXT: Composed operations hold their children as `Box<dyn Operation>`,
//! so any implementor can appear anywhere in a tree and be dispatched to a
//! worker the same way. The driver uses the same trait for flat batches.

use crate::error::EvalError;
use crate::signal::CompletionSignal;
use serde::Serialize;

/// An evaluable node. Executed once, then queried any number of times.
pub trait Operation: Send {
    /// Computes and stores the result, then releases the bound signal (if any).
    /// Calling this a second time is unsupported.
    fn execute(&mut self);

    /// The stored outcome. Zeroed until `execute` has run.
    fn results(&self) -> &OperationResult;

    /// Attaches a signal that `execute` releases exactly once when it finishes.
    fn bind_completion_signal(&mut self, signal: CompletionSignal);
}

/// Value, trace and error produced by one evaluation step.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OperationResult {
    pub value: f64,
    pub display: String,
    pub error: Option<EvalError>,
}

impl OperationResult {
    pub fn succeeded(value: f64, display: String) -> Self {
        OperationResult {
            value,
            display,
            error: None,
        }
    }

    /// A failed step keeps a zeroed value and an empty trace.
    pub fn failed(error: EvalError) -> Self {
        OperationResult {
            value: 0.0,
            display: String::new(),
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Converts to a `Result` for callers that prefer `?`.
    pub fn as_result(&self) -> Result<(f64, &str), &EvalError> {
        match &self.error {
            Some(err) => Err(err),
            None => Ok((self.value, &self.display)),
        }
    }
}

/// Operands always render with exactly two fractional digits.
pub fn format_operand(value: f64) -> String {
    format!("{:.2}", value)
}

/// Bookkeeping shared by every `Operation` implementor: the write-once
/// outcome and the optional completion signal.
#[derive(Debug, Default)]
pub(crate) struct ExecutionState {
    outcome: OperationResult,
    signal: Option<CompletionSignal>,
    executed: bool,
}

impl ExecutionState {
    pub(crate) fn outcome(&self) -> &OperationResult {
        &self.outcome
    }

    pub(crate) fn bind(&mut self, signal: CompletionSignal) {
        self.signal = Some(signal);
    }

    /// Runs `evaluate` unless this node already ran, stores its outcome and
    /// releases the signal. The signal is released on every path.
    pub(crate) fn run(&mut self, kind: &str, evaluate: impl FnOnce() -> OperationResult) {
        if self.executed {
            log::warn!("{} operation executed twice; keeping the first result", kind);
        } else {
            self.outcome = evaluate();
            self.executed = true;
            if let Some(err) = &self.outcome.error {
                log::debug!("{} operation failed: {}", kind, err);
            }
        }
        if let Some(signal) = self.signal.take() {
            signal.release();
        }
    }
}

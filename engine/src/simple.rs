//! FILENAME: engine/src/simple.rs
//! PURPOSE: Left-to-right reduction of a flat list of operands with one operator.
//! CONTEXT: Display strings have the form `(a SYM b SYM c)`. On a division by
//! zero the error reconstructs the whole operand list, not just the prefix
//! that was actually computed.

use crate::error::EvalError;
use crate::operation::{format_operand, ExecutionState, Operation, OperationResult};
use crate::operator::{self, DivisionByZero};
use crate::signal::CompletionSignal;
use std::fmt::Write;

#[derive(Debug)]
pub struct SimpleOperation {
    operands: Vec<f64>,
    operator: String,
    state: ExecutionState,
}

impl SimpleOperation {
    pub fn new(operands: Vec<f64>, operator: impl Into<String>) -> Self {
        SimpleOperation {
            operands,
            operator: operator.into(),
            state: ExecutionState::default(),
        }
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }
}

impl Operation for SimpleOperation {
    fn execute(&mut self) {
        let operands = &self.operands;
        let symbol = &self.operator;
        self.state.run("simple", || fold_operands(operands, symbol));
    }

    fn results(&self) -> &OperationResult {
        self.state.outcome()
    }

    fn bind_completion_signal(&mut self, signal: CompletionSignal) {
        self.state.bind(signal);
    }
}

/// Folds `operands` with the operator named by `symbol`.
pub fn fold_operands(operands: &[f64], symbol: &str) -> OperationResult {
    let Some((&first, rest)) = operands.split_first() else {
        return OperationResult::failed(EvalError::NoOperands);
    };

    let mut value = first;
    let mut display = format!("({}", format_operand(first));
    for &operand in rest {
        let op = match operator::resolve(symbol) {
            Ok(op) => op,
            Err(err) => return OperationResult::failed(err),
        };
        value = match op.apply(value, operand) {
            Ok(next) => next,
            Err(DivisionByZero) => {
                return OperationResult::failed(EvalError::DivisionByZero {
                    context: operand_trace(operands, symbol),
                })
            }
        };
        let _ = write!(display, " {} {}", symbol, format_operand(operand));
    }
    display.push(')');

    OperationResult::succeeded(value, display)
}

/// `(a SYM b SYM c)=0` over the full operand list.
fn operand_trace(operands: &[f64], symbol: &str) -> String {
    let joined = operands
        .iter()
        .map(|&operand| format_operand(operand))
        .collect::<Vec<_>>()
        .join(&format!(" {} ", symbol));
    format!("({})=0", joined)
}

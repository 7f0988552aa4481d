//! FILENAME: engine/src/error.rs

use crate::operator::SUPPORTED_OPERATIONS;
use serde::Serialize;
use thiserror::Error;

/// Errors an operation can record instead of a value.
/// They are stored and forwarded as data, never unwound.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum EvalError {
    #[error("operator \"{symbol}\" not supported\nSupported operations:{supported}")]
    UnsupportedOperator {
        symbol: String,
        supported: &'static str,
    },

    /// `context` rebuilds the expression that failed, ending in `=0`.
    #[error("can't divide by zero -> {context}")]
    DivisionByZero { context: String },

    #[error("operation has no operands")]
    NoOperands,
}

impl EvalError {
    pub fn unsupported_operator(symbol: &str) -> Self {
        EvalError::UnsupportedOperator {
            symbol: symbol.to_string(),
            supported: SUPPORTED_OPERATIONS.as_str(),
        }
    }
}

//! FILENAME: engine/src/operator.rs
//! PURPOSE: The four binary operators and the symbol lookup table.
//! CONTEXT: The table is built once on first use and only read afterwards,
//! so every worker can resolve symbols concurrently without locking.

use crate::error::EvalError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Raised by `divide` when the divisor is zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("can't divide by zero")]
pub struct DivisionByZero;

/// Signature shared by every registered operator.
pub type OperatorFn = fn(f64, f64) -> Result<f64, DivisionByZero>;

pub fn add(x: f64, y: f64) -> Result<f64, DivisionByZero> {
    Ok(x + y)
}

pub fn subtract(x: f64, y: f64) -> Result<f64, DivisionByZero> {
    Ok(x - y)
}

pub fn multiply(x: f64, y: f64) -> Result<f64, DivisionByZero> {
    Ok(x * y)
}

pub fn divide(x: f64, y: f64) -> Result<f64, DivisionByZero> {
    if y == 0.0 {
        return Err(DivisionByZero);
    }
    Ok(x / y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Divide,
        Operator::Multiply,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    pub fn function(self) -> OperatorFn {
        match self {
            Operator::Add => add,
            Operator::Subtract => subtract,
            Operator::Multiply => multiply,
            Operator::Divide => divide,
        }
    }

    pub fn apply(self, x: f64, y: f64) -> Result<f64, DivisionByZero> {
        (self.function())(x, y)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

static REGISTRY: Lazy<HashMap<&'static str, Operator>> =
    Lazy::new(|| Operator::ALL.iter().map(|op| (op.symbol(), *op)).collect());

/// Human readable list of the registered operators, one per line.
pub static SUPPORTED_OPERATIONS: Lazy<String> = Lazy::new(|| {
    Operator::ALL
        .iter()
        .map(|op| format!("\n- {} \"{}\"", op.name(), op.symbol()))
        .collect()
});

/// Looks up an operator by symbol.
pub fn resolve(symbol: &str) -> Result<Operator, EvalError> {
    REGISTRY
        .get(symbol)
        .copied()
        .ok_or_else(|| EvalError::unsupported_operator(symbol))
}

//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the expression validator.
//! CONTEXT: Raw expression text is checked here before anything tries to
//! turn it into an operation tree. The normalized output can be tokenized
//! with the lexer.
//!
//! PIPELINE: Expression String --> Validator --> Normalized String --> Lexer --> Tokens
//!
//! SUPPORTED INPUT:
//! - Operators: +, -, *, /
//! - Brackets: ( ), [ ], { }
//! - Numbers with '.' or ',' as the decimal separator

pub mod lexer;
pub mod token;
pub mod validator;

#[cfg(test)]
mod tests;

pub use lexer::Lexer;
pub use token::Token;
pub use validator::{
    normalize, validate, BracketFamily, ValidatedExpression, ValidationError, ValidationResult,
};

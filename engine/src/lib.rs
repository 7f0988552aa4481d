//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the operation engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod batch;
pub mod composed;
pub mod error;
pub mod operation;
pub mod operator;
pub mod signal;
pub mod simple;

// Re-export commonly used types at the crate root
pub use batch::{demo_tree, generate_batch, plain_operation, run_batch, BatchMode, BATCH_OPERATORS};
pub use composed::ComposedOperation;
pub use error::EvalError;
pub use operation::{format_operand, Operation, OperationResult};
pub use operator::{resolve, DivisionByZero, Operator, OperatorFn, SUPPORTED_OPERATIONS};
pub use signal::CompletionSignal;
pub use simple::SimpleOperation;

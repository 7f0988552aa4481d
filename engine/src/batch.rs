//! FILENAME: engine/src/batch.rs
//! PURPOSE: Builds and runs batches of independent top-level operations.
//! CONTEXT: This is the entry point the driver uses. Operations in a batch
//! run concurrently on the worker pool; results come back in batch order.

use crate::composed::{execute_children, ComposedOperation};
use crate::operation::{Operation, OperationResult};
use crate::simple::SimpleOperation;
use rand::Rng;

/// Operator cycle used for plain batches, indexed by `i % 4`.
pub const BATCH_OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// One flat two-operand operation per slot.
    Plain,
    /// One three-level demo tree per slot.
    Composed,
}

/// Creates `count` operations. Slot `i` (1-based) is seeded with `i`.
pub fn generate_batch<R: Rng>(
    count: usize,
    mode: BatchMode,
    rng: &mut R,
) -> Vec<Box<dyn Operation>> {
    (1..=count)
        .map(|i| match mode {
            BatchMode::Plain => Box::new(plain_operation(i, rng.gen::<f64>())) as Box<dyn Operation>,
            BatchMode::Composed => Box::new(demo_tree(i)) as Box<dyn Operation>,
        })
        .collect()
}

/// `(i*i SYM i*factor)` with the operator picked from `BATCH_OPERATORS`.
pub fn plain_operation(i: usize, factor: f64) -> SimpleOperation {
    let seed = i as f64;
    SimpleOperation::new(
        vec![seed * seed, seed * factor],
        BATCH_OPERATORS[i % BATCH_OPERATORS.len()],
    )
}

/// `{[(s * 2s) / (2s + 3s)] + [(3s + 3) - (s / 2)]}` for seed `s`.
pub fn demo_tree(seed: usize) -> ComposedOperation {
    let s = seed as f64;

    let left = ComposedOperation::new(
        vec![
            Box::new(SimpleOperation::new(vec![s, s * 2.0], "*")),
            Box::new(SimpleOperation::new(vec![s * 2.0, s * 3.0], "+")),
        ],
        "/",
    );
    let right = ComposedOperation::new(
        vec![
            Box::new(SimpleOperation::new(vec![s * 3.0, 3.0], "+")),
            Box::new(SimpleOperation::new(vec![s, 2.0], "/")),
        ],
        "-",
    );

    ComposedOperation::new(vec![Box::new(left), Box::new(right)], "+")
}

/// Executes every operation concurrently and collects the results in order.
/// A failing operation does not affect its siblings.
pub fn run_batch(operations: &mut [Box<dyn Operation>]) -> Vec<OperationResult> {
    log::debug!("running batch of {} operations", operations.len());
    execute_children(operations);

    let results: Vec<OperationResult> = operations.iter().map(|op| op.results().clone()).collect();
    let failed = results.iter().filter(|r| r.is_error()).count();
    log::debug!("batch finished: {} ok, {} failed", results.len() - failed, failed);
    results
}

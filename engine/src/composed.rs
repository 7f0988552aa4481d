//! FILENAME: engine/src/composed.rs
//! PURPOSE: A node whose operands are other operations, evaluated concurrently.
//! CONTEXT: Execution fans the children out to the worker pool, waits for all
//! of them on a countdown sized to the child count, then folds their results
//! left to right. Completion order never affects the result because the fold
//! only starts after the barrier.
//!
//! DISPLAY:
//!   [child0 SYM child1 SYM child2]   when child0's trace has no '[' or '{'
//!   {child0 SYM child1 SYM child2}   otherwise
//!
//! Only the first child's trace decides the bracket pair, so right-heavy
//! trees can nest the same pair twice. Callers compare traces literally, so
//! the rule is kept as is.

use crate::error::EvalError;
use crate::operation::{ExecutionState, Operation, OperationResult};
use crate::operator::{self, DivisionByZero};
use crate::signal::CompletionSignal;

pub struct ComposedOperation {
    children: Vec<Box<dyn Operation>>,
    operator: String,
    state: ExecutionState,
}

impl ComposedOperation {
    pub fn new(children: Vec<Box<dyn Operation>>, operator: impl Into<String>) -> Self {
        ComposedOperation {
            children,
            operator: operator.into(),
            state: ExecutionState::default(),
        }
    }

    pub fn children(&self) -> &[Box<dyn Operation>] {
        &self.children
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }
}

impl std::fmt::Debug for ComposedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedOperation")
            .field("children", &self.children.len())
            .field("operator", &self.operator)
            .field("outcome", self.state.outcome())
            .finish()
    }
}

impl Operation for ComposedOperation {
    fn execute(&mut self) {
        let children = &mut self.children;
        let symbol = &self.operator;
        self.state.run("composed", || {
            execute_children(children);
            combine_children(children, symbol)
        });
    }

    fn results(&self) -> &OperationResult {
        self.state.outcome()
    }

    fn bind_completion_signal(&mut self, signal: CompletionSignal) {
        self.state.bind(signal);
    }
}

/// Runs every operation on the worker pool and returns once all of them
/// have released the shared signal.
pub fn execute_children(children: &mut [Box<dyn Operation>]) {
    let group = CompletionSignal::new(children.len());
    log::trace!("fan-out of {} operations", children.len());

    // The scope keeps each child exclusively borrowed by its own task and
    // runs queued work while joining, so nested fan-outs cannot starve the pool.
    rayon::scope(|scope| {
        for child in children.iter_mut() {
            child.bind_completion_signal(group.clone());
            scope.spawn(move |_| child.execute());
        }
    });

    group.wait();
    log::trace!("fan-in of {} operations", children.len());
}

/// Folds already executed children with the operator named by `symbol`.
/// Stops at the first child error and forwards it unchanged.
pub fn combine_children(children: &[Box<dyn Operation>], symbol: &str) -> OperationResult {
    let Some((first, rest)) = children.split_first() else {
        return OperationResult::failed(EvalError::NoOperands);
    };

    let first = first.results();
    if let Some(err) = &first.error {
        return OperationResult::failed(err.clone());
    }

    let (opening, closing) = brackets_for(&first.display);
    let mut value = first.value;
    let mut display = format!("{}{}", opening, first.display);

    for child in rest {
        let child = child.results();
        if let Some(err) = &child.error {
            return OperationResult::failed(err.clone());
        }
        let op = match operator::resolve(symbol) {
            Ok(op) => op,
            Err(err) => return OperationResult::failed(err),
        };
        value = match op.apply(value, child.value) {
            Ok(next) => next,
            Err(DivisionByZero) => {
                return OperationResult::failed(EvalError::DivisionByZero {
                    context: format!("{}=0", child.display),
                })
            }
        };
        display.push_str(symbol);
        display.push_str(&child.display);
    }
    display.push(closing);

    OperationResult::succeeded(value, display)
}

/// Picks `{ }` when the trace already contains square or curly brackets.
pub fn brackets_for(inner: &str) -> (char, char) {
    if inner.contains('[') || inner.contains('{') {
        ('{', '}')
    } else {
        ('[', ']')
    }
}

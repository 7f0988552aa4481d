//! FILENAME: engine/src/signal.rs
//! PURPOSE: Countdown used to report that concurrently running operations finished.
//! CONTEXT: The signal carries no data. Results are read from the operations
//! themselves once the count has reached zero.

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
struct Countdown {
    remaining: Mutex<usize>,
    zero: Condvar,
}

/// Cloneable handle to a shared countdown. Owned by whoever waits on it.
#[derive(Debug, Clone)]
pub struct CompletionSignal {
    inner: Arc<Countdown>,
}

impl CompletionSignal {
    /// Creates a signal expecting `count` releases.
    pub fn new(count: usize) -> Self {
        CompletionSignal {
            inner: Arc::new(Countdown {
                remaining: Mutex::new(count),
                zero: Condvar::new(),
            }),
        }
    }

    /// Records one completion. Extra releases past zero are ignored.
    pub fn release(&self) {
        let mut remaining = self.inner.remaining.lock();
        if *remaining == 0 {
            log::warn!("completion signal released more times than expected");
            return;
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.inner.zero.notify_all();
        }
    }

    /// Blocks until every expected release has happened.
    pub fn wait(&self) {
        let mut remaining = self.inner.remaining.lock();
        while *remaining > 0 {
            self.inner.zero.wait(&mut remaining);
        }
    }

    /// Like `wait`, but gives up after `timeout`. Returns true if the count reached zero.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let mut remaining = self.inner.remaining.lock();
        while *remaining > 0 {
            if self.inner.zero.wait_for(&mut remaining, timeout).timed_out() {
                return *remaining == 0;
            }
        }
        true
    }

    pub fn remaining(&self) -> usize {
        *self.inner.remaining.lock()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

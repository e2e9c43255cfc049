//! Scripted oracle for tests and demos.
//!
//! Returns queued answers in order, then repeats the last one. Every call is
//! counted so tests can assert how often a pipeline sampled.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::ports::{Oracle, OracleError};

pub struct ScriptedOracle<T> {
    script: Mutex<VecDeque<Result<T, OracleError>>>,
    last: Mutex<Option<Result<T, OracleError>>>,
    calls: AtomicUsize,
}

impl<T: Clone> ScriptedOracle<T> {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Oracle that always answers `value`.
    pub fn always(value: T) -> Self {
        Self::new().then(value)
    }

    /// Queues a successful answer.
    pub fn then(self, value: T) -> Self {
        self.push(Ok(value));
        self
    }

    /// Queues a failure.
    pub fn then_fail(self, error: OracleError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, entry: Result<T, OracleError>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(entry);
    }
}

impl<T: Clone> Default for ScriptedOracle<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Oracle<T> for ScriptedOracle<T>
where
    T: Clone + Send + Sync,
{
    async fn sample(&self) -> Result<T, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        match next {
            Some(entry) => {
                *last = Some(entry.clone());
                entry
            }
            None => last.clone().unwrap_or(Err(OracleError::EmptyTable)),
        }
    }
}

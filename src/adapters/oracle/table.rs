//! Oracle that samples uniformly from a fixed table.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::ports::{Oracle, OracleError};

/// Uniform random choice over a fixed list of canned answers.
pub struct TableOracle<T> {
    entries: Vec<T>,
    rng: Mutex<StdRng>,
}

impl<T> TableOracle<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self {
            entries,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence for reproducible runs.
    pub fn seeded(entries: Vec<T>, seed: u64) -> Self {
        Self {
            entries,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

#[async_trait]
impl<T> Oracle<T> for TableOracle<T>
where
    T: Clone + Send + Sync,
{
    async fn sample(&self) -> Result<T, OracleError> {
        if self.entries.is_empty() {
            return Err(OracleError::EmptyTable);
        }
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..self.entries.len());
        Ok(self.entries[index].clone())
    }
}

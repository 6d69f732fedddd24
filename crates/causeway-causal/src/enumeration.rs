//! Subset enumeration by increasing size, minimality pruning, and the
//! iteration budget that bounds exponential searches.

use std::collections::BTreeSet;

use causeway_core::errors::{CausewayError, CausewayResult};

/// Counts work units against an optional limit.
#[derive(Debug, Clone)]
pub struct IterationBudget {
    operation: &'static str,
    limit: Option<u64>,
    used: u64,
}

impl IterationBudget {
    pub fn new(operation: &'static str, limit: Option<u64>) -> Self {
        Self {
            operation,
            limit,
            used: 0,
        }
    }

    pub fn unbounded(operation: &'static str) -> Self {
        Self::new(operation, None)
    }

    /// Consume one unit. Fails with `BudgetExhausted` once the limit is passed.
    pub fn charge(&mut self) -> CausewayResult<()> {
        if let Some(limit) = self.limit {
            if self.used >= limit {
                return Err(CausewayError::BudgetExhausted {
                    operation: self.operation.to_string(),
                    budget: limit,
                });
            }
        }
        self.used += 1;
        Ok(())
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}

/// Lexicographic `k`-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: bump the rightmost index that still has room.
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// Every subset of `items`, smallest first; lexicographic by position within
/// a size. Yields `2^n` sets, starting with the empty set.
pub fn subsets_by_size(items: &[String]) -> impl Iterator<Item = BTreeSet<String>> + '_ {
    (0..=items.len()).flat_map(move |size| {
        Combinations::new(items.len(), size)
            .map(move |combo| combo.into_iter().map(|i| items[i].clone()).collect())
    })
}

/// Whether `candidate` contains any already accepted set.
pub fn is_superset_of_any(candidate: &BTreeSet<String>, accepted: &[BTreeSet<String>]) -> bool {
    accepted.iter().any(|set| set.is_subset(candidate))
}

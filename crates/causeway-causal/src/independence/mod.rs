//! Independence enumeration: every (conditional) independence a DAG implies,
//! found by brute-force d-separation tests.
//!
//! Three variants:
//! - marginal: every pair, empty conditioning set
//! - single-conditioner: every pair against every single node
//! - subset-conditioner: every pair against every subset of the other nodes,
//!   keeping only minimal conditioning sets

pub mod pairwise;
pub mod subsets;

use std::collections::BTreeSet;
use std::fmt;

use causeway_core::constants::INDEPENDENCE_SYMBOL;
use serde::{Deserialize, Serialize};

pub use pairwise::{
    conditional_independencies, conditional_independencies_with, marginal_independencies,
    marginal_independencies_with,
};
pub use subsets::{conditional_independencies_subsets, conditional_independencies_subsets_with};

/// `a` is independent of `b` given `given`. `a` precedes `b` in node order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndependenceRelation {
    pub a: String,
    pub b: String,
    pub given: BTreeSet<String>,
}

impl IndependenceRelation {
    pub fn new(a: impl Into<String>, b: impl Into<String>, given: BTreeSet<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            given,
        }
    }

    pub fn is_marginal(&self) -> bool {
        self.given.is_empty()
    }
}

impl fmt::Display for IndependenceRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, INDEPENDENCE_SYMBOL, self.b)?;
        if !self.given.is_empty() {
            let given: Vec<&str> = self.given.iter().map(String::as_str).collect();
            write!(f, " | {}", given.join(" "))?;
        }
        Ok(())
    }
}

/// Every minimal conditioning set found for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairIndependencies {
    pub a: String,
    pub b: String,
    /// In discovery order: increasing size, then lexicographic by node order.
    pub conditioning_sets: Vec<BTreeSet<String>>,
}

impl PairIndependencies {
    /// Flatten into one relation per conditioning set.
    pub fn relations(&self) -> Vec<IndependenceRelation> {
        self.conditioning_sets
            .iter()
            .map(|set| IndependenceRelation::new(self.a.clone(), self.b.clone(), set.clone()))
            .collect()
    }
}

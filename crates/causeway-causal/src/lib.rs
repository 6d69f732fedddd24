//! # causeway-causal
//!
//! Structural analysis of causal DAGs:
//! - d-separation through the moralised ancestral graph
//! - enumeration of implied marginal and conditional independencies
//! - minimal back-door adjustment sets for a treatment/outcome pair
//!
//! Every analysis reads through [`ICausalGraph`]; [`CausalDag`] is the
//! petgraph-backed implementation shipped with the crate.

pub mod adjustment;
pub mod analyzer;
pub mod enumeration;
pub mod graph;
pub mod independence;
pub mod separation;

pub use adjustment::{backdoor_paths, find_adjustment_sets};
pub use analyzer::CausalAnalyzer;
pub use causeway_core::ICausalGraph;
pub use graph::dag::CausalDag;
pub use independence::{
    conditional_independencies, conditional_independencies_subsets, marginal_independencies,
    IndependenceRelation, PairIndependencies,
};
pub use separation::{given, is_d_separated, is_d_separated_with};

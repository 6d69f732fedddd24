//! Subset-conditioner enumeration with minimality pruning.

use causeway_core::config::AnalysisConfig;
use causeway_core::constants::operations;
use causeway_core::enumeration_span;
use causeway_core::errors::CausewayResult;
use causeway_core::traits::ICausalGraph;
use tracing::{debug, info};

use super::PairIndependencies;
use crate::enumeration::{is_superset_of_any, subsets_by_size, IterationBudget};
use crate::separation::is_d_separated_with;

/// For every pair, every minimal conditioning set drawn from the other nodes
/// that d-separates it. Pairs with no such set are left out.
///
/// Subsets are tried smallest first; a subset containing an already recorded
/// set for the same pair is skipped. Failures propagate.
pub fn conditional_independencies_subsets<G: ICausalGraph>(
    graph: &G,
) -> CausewayResult<Vec<PairIndependencies>> {
    conditional_independencies_subsets_with(graph, &AnalysisConfig::default())
}

pub fn conditional_independencies_subsets_with<G: ICausalGraph>(
    graph: &G,
    config: &AnalysisConfig,
) -> CausewayResult<Vec<PairIndependencies>> {
    let nodes = graph.nodes();
    let _span = enumeration_span!(operations::SUBSET_CONDITIONER, nodes.len()).entered();

    let mut budget = IterationBudget::new(operations::SUBSET_CONDITIONER, config.iteration_budget);
    let mut pairs = Vec::new();

    for (i1, n1) in nodes.iter().enumerate() {
        for (offset, n2) in nodes[i1 + 1..].iter().enumerate() {
            let i2 = i1 + 1 + offset;
            let remaining: Vec<String> = nodes
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != i1 && i != i2)
                .map(|(_, n)| n.clone())
                .collect();

            let mut found = Vec::new();
            for subset in subsets_by_size(&remaining) {
                if is_superset_of_any(&subset, &found) {
                    continue;
                }
                budget.charge()?;
                if is_d_separated_with(graph, n1, n2, &subset, config.ancestral_closure)? {
                    debug!(a = %n1, b = %n2, ?subset, "minimal separating set");
                    found.push(subset);
                }
            }

            if !found.is_empty() {
                pairs.push(PairIndependencies {
                    a: n1.clone(),
                    b: n2.clone(),
                    conditioning_sets: found,
                });
            }
        }
    }

    info!(
        operation = operations::SUBSET_CONDITIONER,
        pairs = pairs.len(),
        tests = budget.used(),
        "independence enumeration complete"
    );
    Ok(pairs)
}

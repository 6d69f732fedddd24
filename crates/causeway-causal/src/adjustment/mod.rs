//! Minimal back-door adjustment sets for a treatment/outcome pair.

pub mod backdoor;

pub use backdoor::backdoor_paths;

use std::collections::BTreeSet;

use causeway_core::adjustment_span;
use causeway_core::config::AnalysisConfig;
use causeway_core::constants::operations;
use causeway_core::errors::CausewayResult;
use causeway_core::traits::ICausalGraph;
use tracing::{debug, info};

use crate::enumeration::{is_superset_of_any, subsets_by_size, IterationBudget};
use backdoor::{path_is_blocked, DescendantCache};

/// Every minimal set of covariates that blocks all back-door paths from
/// `treatment` to `outcome`.
///
/// Candidates exclude the pair and every descendant of `treatment`, and are
/// tried smallest first; supersets of an accepted set are skipped. With no
/// back-door paths the result is exactly `[{}]`.
pub fn find_adjustment_sets<G: ICausalGraph>(
    graph: &G,
    treatment: &str,
    outcome: &str,
) -> CausewayResult<Vec<BTreeSet<String>>> {
    find_adjustment_sets_with(graph, treatment, outcome, &AnalysisConfig::default())
}

pub fn find_adjustment_sets_with<G: ICausalGraph>(
    graph: &G,
    treatment: &str,
    outcome: &str,
    config: &AnalysisConfig,
) -> CausewayResult<Vec<BTreeSet<String>>> {
    let _span = adjustment_span!(treatment, outcome).entered();

    let paths = backdoor_paths(graph, treatment, outcome)?;
    let forbidden = graph.descendants(treatment)?;
    let remaining: Vec<String> = graph
        .nodes()
        .into_iter()
        .filter(|n| n != treatment && n != outcome && !forbidden.contains(n))
        .collect();
    debug!(
        backdoor_paths = paths.len(),
        candidates = remaining.len(),
        "adjustment search space"
    );

    let mut budget = IterationBudget::new(operations::ADJUSTMENT_SETS, config.iteration_budget);
    let mut descendants = DescendantCache::new(graph);
    let mut accepted: Vec<BTreeSet<String>> = Vec::new();

    for subset in subsets_by_size(&remaining) {
        if is_superset_of_any(&subset, &accepted) {
            continue;
        }
        budget.charge()?;

        let mut blocks_all = true;
        for path in &paths {
            if !path_is_blocked(graph, path, &subset, &mut descendants)? {
                blocks_all = false;
                break;
            }
        }

        if blocks_all {
            debug!(?subset, "accepted adjustment set");
            accepted.push(subset);
        }
    }

    info!(
        treatment,
        outcome,
        sets = accepted.len(),
        evaluated = budget.used(),
        "adjustment search complete"
    );
    Ok(accepted)
}

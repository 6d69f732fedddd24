//! Marginal and single-conditioner enumeration.
//!
//! Under [`ErrorPolicy::Lenient`] a failed test omits that triple and the
//! scan continues; this includes the degenerate triples whose conditioning
//! node is one of the pair. [`ErrorPolicy::Strict`] skips degenerate triples
//! up front and propagates every other failure. Budget exhaustion always
//! aborts.

use std::collections::BTreeSet;

use causeway_core::config::{AnalysisConfig, ErrorPolicy};
use causeway_core::constants::operations;
use causeway_core::enumeration_span;
use causeway_core::errors::CausewayResult;
use causeway_core::traits::ICausalGraph;
use tracing::{debug, info};

use super::IndependenceRelation;
use crate::enumeration::IterationBudget;
use crate::separation::is_d_separated_with;

/// Every pair that is independent with nothing conditioned on.
pub fn marginal_independencies<G: ICausalGraph>(
    graph: &G,
) -> CausewayResult<Vec<IndependenceRelation>> {
    marginal_independencies_with(graph, &AnalysisConfig::default())
}

pub fn marginal_independencies_with<G: ICausalGraph>(
    graph: &G,
    config: &AnalysisConfig,
) -> CausewayResult<Vec<IndependenceRelation>> {
    scan_pairs(graph, config, operations::MARGINAL, |_| {
        vec![BTreeSet::new()]
    })
}

/// Every `(n1, n2, {n3})` with `n1` before `n2` and `n1 _||_ n2 | n3`.
///
/// `n3` ranges over all nodes. Triples with `n3` equal to `n1` or `n2` never
/// appear in the result.
pub fn conditional_independencies<G: ICausalGraph>(
    graph: &G,
) -> CausewayResult<Vec<IndependenceRelation>> {
    conditional_independencies_with(graph, &AnalysisConfig::default())
}

pub fn conditional_independencies_with<G: ICausalGraph>(
    graph: &G,
    config: &AnalysisConfig,
) -> CausewayResult<Vec<IndependenceRelation>> {
    scan_pairs(graph, config, operations::SINGLE_CONDITIONER, |nodes| {
        nodes
            .iter()
            .map(|n| std::iter::once(n.clone()).collect())
            .collect()
    })
}

/// Test every unordered pair (i1 < i2) against each conditioning set.
fn scan_pairs<G, F>(
    graph: &G,
    config: &AnalysisConfig,
    operation: &'static str,
    conditioning_sets: F,
) -> CausewayResult<Vec<IndependenceRelation>>
where
    G: ICausalGraph,
    F: Fn(&[String]) -> Vec<BTreeSet<String>>,
{
    let nodes = graph.nodes();
    let _span = enumeration_span!(operation, nodes.len()).entered();

    let candidates = conditioning_sets(&nodes);
    let mut budget = IterationBudget::new(operation, config.iteration_budget);
    let mut relations = Vec::new();
    let mut skipped = 0usize;

    for (i1, n1) in nodes.iter().enumerate() {
        for n2 in &nodes[i1 + 1..] {
            for given in &candidates {
                let degenerate = given.contains(n1) || given.contains(n2);
                if degenerate && config.error_policy == ErrorPolicy::Strict {
                    continue;
                }
                budget.charge()?;
                match is_d_separated_with(graph, n1, n2, given, config.ancestral_closure) {
                    Ok(true) => relations.push(IndependenceRelation::new(
                        n1.as_str(),
                        n2.as_str(),
                        given.clone(),
                    )),
                    Ok(false) => {}
                    Err(e) if e.is_fatal() || config.error_policy == ErrorPolicy::Strict => {
                        return Err(e)
                    }
                    Err(e) => {
                        skipped += 1;
                        debug!(
                            a = %n1,
                            b = %n2,
                            ?given,
                            error = %e,
                            "separation test failed, omitting"
                        );
                    }
                }
            }
        }
    }

    info!(
        operation,
        found = relations.len(),
        tests = budget.used(),
        skipped,
        "independence enumeration complete"
    );
    Ok(relations)
}

//! d-separation via the moralised ancestral graph.
//!
//! `a` and `b` are d-separated by `given` when they are disconnected in the
//! moral graph of the ancestral set once `given` is removed.
//! [`AncestralClosure`] picks the ancestral set. `Literal` takes
//! `{a, b} ∪ anc(a) ∪ anc(b) ∪ given`. `Standard` also adds `anc(given)`,
//! so a conditioned descendant of a collider brings the collider in with it.

use std::collections::BTreeSet;

use causeway_core::config::AncestralClosure;
use causeway_core::errors::{CausewayResult, GraphError};
use causeway_core::separation_span;
use causeway_core::traits::ICausalGraph;
use tracing::trace;

use crate::graph::moral::MoralGraph;

/// Build a conditioning set from any list of names.
pub fn given<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Whether `a` and `b` are d-separated (conditionally independent) given `given`.
///
/// Every referenced node must exist, otherwise `UnknownNode`. Testing a node
/// against itself reports `false`. A conditioning set that contains `a` or
/// `b` removes that endpoint from the moral graph, leaving no path to query,
/// and fails with `ConditionedEndpoint`. Uses the default
/// [`AncestralClosure`].
pub fn is_d_separated<G: ICausalGraph>(
    graph: &G,
    a: &str,
    b: &str,
    given: &BTreeSet<String>,
) -> CausewayResult<bool> {
    is_d_separated_with(graph, a, b, given, AncestralClosure::default())
}

pub fn is_d_separated_with<G: ICausalGraph>(
    graph: &G,
    a: &str,
    b: &str,
    given: &BTreeSet<String>,
    closure: AncestralClosure,
) -> CausewayResult<bool> {
    let _span = separation_span!(a, b, given.len()).entered();

    graph.require(a)?;
    graph.require(b)?;
    for node in given {
        graph.require(node)?;
    }
    if a == b {
        return Ok(false);
    }

    let mut ancestral = graph.ancestors(a)?;
    ancestral.extend(graph.ancestors(b)?);
    ancestral.insert(a.to_string());
    ancestral.insert(b.to_string());
    for node in given {
        ancestral.insert(node.clone());
        if closure == AncestralClosure::Standard {
            ancestral.extend(graph.ancestors(node)?);
        }
    }

    let subgraph = graph.induced_subgraph(&ancestral)?;
    let mut moral = MoralGraph::from_graph(&subgraph)?;
    moral.remove_nodes(given);
    for endpoint in [a, b] {
        if !moral.contains(endpoint) {
            return Err(GraphError::ConditionedEndpoint {
                name: endpoint.to_string(),
            }
            .into());
        }
    }

    let separated = !moral.has_path(a, b);
    trace!(
        a,
        b,
        ?closure,
        ancestral = ancestral.len(),
        moral_nodes = moral.node_count(),
        moral_edges = moral.edge_count(),
        separated,
        "d-separation test"
    );
    Ok(separated)
}

//! Back-door paths and path blocking.

use std::collections::{BTreeSet, HashMap};

use causeway_core::errors::CausewayResult;
use causeway_core::traits::ICausalGraph;

/// Undirected simple paths from `treatment` to `outcome` whose first edge
/// points into `treatment`.
pub fn backdoor_paths<G: ICausalGraph>(
    graph: &G,
    treatment: &str,
    outcome: &str,
) -> CausewayResult<Vec<Vec<String>>> {
    graph.require(treatment)?;
    graph.require(outcome)?;
    Ok(graph
        .undirected_simple_paths(treatment, outcome)?
        .into_iter()
        .filter(|path| path.len() >= 2 && graph.has_edge(&path[1], treatment))
        .collect())
}

/// Per-call memo of `descendants(node)`.
pub(crate) struct DescendantCache<'g, G> {
    graph: &'g G,
    memo: HashMap<String, BTreeSet<String>>,
}

impl<'g, G: ICausalGraph> DescendantCache<'g, G> {
    pub(crate) fn new(graph: &'g G) -> Self {
        Self {
            graph,
            memo: HashMap::new(),
        }
    }

    pub(crate) fn get(&mut self, node: &str) -> CausewayResult<&BTreeSet<String>> {
        if !self.memo.contains_key(node) {
            let found = self.graph.descendants(node)?;
            self.memo.insert(node.to_string(), found);
        }
        Ok(&self.memo[node])
    }
}

/// Whether conditioning on `adjust` blocks `path`.
///
/// For each intermediate `z` with neighbours `x` and `y` on the path: a
/// collider (`x -> z <- y`) blocks unless `z` or one of its descendants is
/// adjusted for; any other node blocks only when adjusted for. One blocking
/// node blocks the whole path. A path with no intermediate node is never
/// blocked.
pub(crate) fn path_is_blocked<G: ICausalGraph>(
    graph: &G,
    path: &[String],
    adjust: &BTreeSet<String>,
    descendants: &mut DescendantCache<'_, G>,
) -> CausewayResult<bool> {
    for window in path.windows(3) {
        let (x, z, y) = (&window[0], &window[1], &window[2]);
        let blocked = if graph.has_edge(x, z) && graph.has_edge(y, z) {
            !adjust.contains(z) && descendants.get(z)?.is_disjoint(adjust)
        } else {
            adjust.contains(z)
        };
        if blocked {
            return Ok(true);
        }
    }
    Ok(false)
}

use std::collections::BTreeSet;

use crate::errors::{CausewayResult, GraphError};

/// Capability interface over a directed acyclic graph of named nodes.
///
/// Analysis code only ever reads through this trait. Implementations own
/// acyclicity validation at construction time; queries assume it holds.
pub trait ICausalGraph {
    /// All node names in canonical order. Enumerations follow this order.
    fn nodes(&self) -> Vec<String>;

    /// Whether the directed edge `from -> to` exists.
    fn has_edge(&self, from: &str, to: &str) -> bool;

    /// Every node with a directed path into `node`, excluding `node`.
    fn ancestors(&self, node: &str) -> CausewayResult<BTreeSet<String>>;

    /// Every node reachable from `node`, excluding `node`.
    fn descendants(&self, node: &str) -> CausewayResult<BTreeSet<String>>;

    /// A new graph restricted to `keep` and the edges among them.
    fn induced_subgraph(&self, keep: &BTreeSet<String>) -> CausewayResult<Self>
    where
        Self: Sized;

    /// All simple paths between `a` and `b`, ignoring edge direction.
    fn undirected_simple_paths(&self, a: &str, b: &str) -> CausewayResult<Vec<Vec<String>>>;

    // --- Provided ---

    fn contains(&self, node: &str) -> bool {
        self.nodes().iter().any(|n| n == node)
    }

    /// Fails with [`GraphError::UnknownNode`] when `node` is absent.
    fn require(&self, node: &str) -> CausewayResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::unknown(node).into())
        }
    }

    /// Direct parents of `node`, in canonical order.
    fn parents(&self, node: &str) -> CausewayResult<Vec<String>> {
        self.require(node)?;
        Ok(self
            .nodes()
            .into_iter()
            .filter(|p| self.has_edge(p, node))
            .collect())
    }
}

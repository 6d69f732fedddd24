//! Moral graphs: co-parents married, direction dropped.

use std::collections::HashMap;

use causeway_core::errors::CausewayResult;
use causeway_core::traits::ICausalGraph;
use petgraph::algo::has_path_connecting;
use petgraph::stable_graph::{NodeIndex, StableUnGraph};

/// Undirected moral graph over a (usually ancestral) subgraph.
///
/// Built fresh for every query and discarded afterwards.
#[derive(Debug, Clone)]
pub struct MoralGraph {
    graph: StableUnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl MoralGraph {
    /// Moralise `dag`: keep every edge undirected and connect every pair of
    /// nodes that share a child.
    pub fn from_graph<G: ICausalGraph>(dag: &G) -> CausewayResult<Self> {
        let nodes = dag.nodes();
        let mut graph = StableUnGraph::with_capacity(nodes.len(), 0);
        let mut index = HashMap::with_capacity(nodes.len());
        for name in &nodes {
            index.insert(name.clone(), graph.add_node(name.clone()));
        }

        for child in &nodes {
            let parents = dag.parents(child)?;
            let child_idx = index[child];
            for (i, parent) in parents.iter().enumerate() {
                let parent_idx = index[parent];
                graph.update_edge(parent_idx, child_idx, ());
                for spouse in &parents[i + 1..] {
                    graph.update_edge(parent_idx, index[spouse], ());
                }
            }
        }

        Ok(Self { graph, index })
    }

    /// Drop `names` and every edge touching them. Unknown names are ignored.
    pub fn remove_nodes<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for name in names {
            if let Some(idx) = self.index.remove(name) {
                self.graph.remove_node(idx);
            }
        }
    }

    /// Whether `a` and `b` are connected. A missing endpoint is never connected.
    pub fn has_path(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&from), Some(&to)) => has_path_connecting(&self.graph, from, to, None),
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&x), Some(&y)) => self.graph.find_edge(x, y).is_some(),
            _ => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::dag::CausalDag;
    use std::collections::BTreeSet;

    #[test]
    fn marries_co_parents() {
        // A -> C <- B
        let dag = CausalDag::from_edges(["A", "B", "C"], [("A", "C"), ("B", "C")]).unwrap();
        let moral = MoralGraph::from_graph(&dag).unwrap();
        assert!(moral.is_adjacent("A", "B"));
        assert!(moral.is_adjacent("C", "A"));
        assert_eq!(moral.edge_count(), 3);
    }

    #[test]
    fn chain_gains_no_edges() {
        let dag = CausalDag::from_edges(["A", "B", "C"], [("A", "B"), ("B", "C")]).unwrap();
        let moral = MoralGraph::from_graph(&dag).unwrap();
        assert_eq!(moral.edge_count(), 2);
        assert!(!moral.is_adjacent("A", "C"));
    }

    #[test]
    fn removal_disconnects() {
        let dag = CausalDag::from_edges(["A", "B", "C"], [("A", "B"), ("B", "C")]).unwrap();
        let mut moral = MoralGraph::from_graph(&dag).unwrap();
        assert!(moral.has_path("A", "C"));
        let cut: BTreeSet<String> = ["B".to_string()].into_iter().collect();
        moral.remove_nodes(&cut);
        assert!(!moral.has_path("A", "C"));
        assert!(!moral.contains("B"));
        assert_eq!(moral.node_count(), 2);
        assert_eq!(moral.edge_count(), 0);
        // A removed endpoint has no path to anything.
        assert!(!moral.has_path("B", "A"));
    }
}

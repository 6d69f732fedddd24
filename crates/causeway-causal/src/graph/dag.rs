//! Owned DAG of named variables on a petgraph `StableGraph`, with a name index.

use std::collections::{BTreeSet, HashMap};

use causeway_core::errors::{CausewayResult, GraphError};
use causeway_core::traits::ICausalGraph;
use petgraph::algo::all_simple_paths;
use petgraph::graph::UnGraph;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{Dfs, EdgeRef, IntoEdgeReferences, IntoNeighbors, Reversed, Visitable};
use petgraph::Directed;

use super::dag_enforcement;

/// A directed acyclic graph over uniquely named nodes.
///
/// Nodes keep insertion order, which is the canonical order every
/// enumeration follows. Edges carry no weight.
#[derive(Debug, Clone, Default)]
pub struct CausalDag {
    pub(crate) graph: StableGraph<String, (), Directed>,
    index: HashMap<String, NodeIndex>,
    order: Vec<String>,
}

impl CausalDag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a DAG from a node list and an edge list.
    ///
    /// Edge endpoints missing from `nodes` are appended in order of first use.
    pub fn from_edges<N, S, E>(nodes: N, edges: E) -> CausewayResult<Self>
    where
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = (S, S)>,
    {
        let mut dag = Self::new();
        for node in nodes {
            dag.add_node(node.as_ref());
        }
        for (from, to) in edges {
            dag.add_edge(from.as_ref(), to.as_ref())?;
        }
        Ok(dag)
    }

    /// Insert a node if it does not exist. Returns its index either way.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.order.push(name.to_string());
        idx
    }

    /// Insert the edge `from -> to`, creating missing endpoints.
    ///
    /// Self-loops and edges that would close a cycle are rejected and leave
    /// the graph untouched. Re-adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: &str, to: &str) -> CausewayResult<()> {
        if from == to {
            return Err(GraphError::SelfLoop {
                name: from.to_string(),
            }
            .into());
        }

        if let (Some(&src), Some(&tgt)) = (self.index.get(from), self.index.get(to)) {
            if self.graph.find_edge(src, tgt).is_some() {
                return Ok(());
            }
            if let Some(path) = dag_enforcement::cycle_path(self, src, tgt) {
                return Err(GraphError::CyclicGraph {
                    path: path.join(" -> "),
                }
                .into());
            }
        }

        let src = self.add_node(from);
        let tgt = self.add_node(to);
        self.graph.add_edge(src, tgt, ());
        Ok(())
    }

    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn node_name(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges as `(from, to)` name pairs, in insertion order.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.graph
            .edge_references()
            .filter_map(|e| {
                let from = self.node_name(e.source())?;
                let to = self.node_name(e.target())?;
                Some((from.to_string(), to.to_string()))
            })
            .collect()
    }

    fn index_of(&self, name: &str) -> CausewayResult<NodeIndex> {
        self.get_node(name)
            .ok_or_else(|| GraphError::unknown(name).into())
    }

    /// Names of every node reached by a DFS from `start`, excluding `start`.
    fn reach<G>(&self, walk: G, start: NodeIndex) -> BTreeSet<String>
    where
        G: IntoNeighbors<NodeId = NodeIndex> + Visitable,
    {
        let mut dfs = Dfs::new(walk, start);
        let mut found = BTreeSet::new();
        while let Some(idx) = dfs.next(walk) {
            if idx == start {
                continue;
            }
            if let Some(name) = self.node_name(idx) {
                found.insert(name.to_string());
            }
        }
        found
    }

    /// Undirected copy whose node `i` is the `i`-th node in canonical order.
    fn to_undirected(&self) -> (UnGraph<String, ()>, HashMap<NodeIndex, NodeIndex>) {
        let mut un = UnGraph::with_capacity(self.node_count(), self.edge_count());
        let mut mapping = HashMap::with_capacity(self.node_count());
        for name in &self.order {
            if let Some(&idx) = self.index.get(name) {
                mapping.insert(idx, un.add_node(name.clone()));
            }
        }
        for edge in self.graph.edge_references() {
            if let (Some(&a), Some(&b)) = (mapping.get(&edge.source()), mapping.get(&edge.target())) {
                un.add_edge(a, b, ());
            }
        }
        (un, mapping)
    }
}

impl ICausalGraph for CausalDag {
    fn nodes(&self) -> Vec<String> {
        self.order.clone()
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&src), Some(&tgt)) => self.graph.find_edge(src, tgt).is_some(),
            _ => false,
        }
    }

    fn ancestors(&self, node: &str) -> CausewayResult<BTreeSet<String>> {
        let idx = self.index_of(node)?;
        Ok(self.reach(Reversed(&self.graph), idx))
    }

    fn descendants(&self, node: &str) -> CausewayResult<BTreeSet<String>> {
        let idx = self.index_of(node)?;
        Ok(self.reach(&self.graph, idx))
    }

    fn induced_subgraph(&self, keep: &BTreeSet<String>) -> CausewayResult<Self> {
        if let Some(missing) = keep.iter().find(|n| !self.index.contains_key(n.as_str())) {
            return Err(GraphError::unknown(missing.as_str()).into());
        }

        let mut sub = Self::new();
        for name in self.order.iter().filter(|n| keep.contains(*n)) {
            sub.add_node(name);
        }
        // Any subgraph of a DAG is acyclic, so edges skip the cycle check.
        for (from, to) in self.edges() {
            if let (Some(src), Some(tgt)) = (sub.get_node(&from), sub.get_node(&to)) {
                sub.graph.add_edge(src, tgt, ());
            }
        }
        Ok(sub)
    }

    fn undirected_simple_paths(&self, a: &str, b: &str) -> CausewayResult<Vec<Vec<String>>> {
        let src = self.index_of(a)?;
        let tgt = self.index_of(b)?;
        if src == tgt {
            return Ok(Vec::new());
        }

        let (un, mapping) = self.to_undirected();
        let (Some(&from), Some(&to)) = (mapping.get(&src), mapping.get(&tgt)) else {
            return Ok(Vec::new());
        };

        let paths = all_simple_paths::<Vec<_>, _>(&un, from, to, 0, None)
            .map(|path| path.into_iter().map(|idx| un[idx].clone()).collect())
            .collect();
        Ok(paths)
    }

    fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }
}

//! Cycle detection for DAG construction.
//! Every edge insertion is checked; Tarjan's SCC validates whole graphs.

use std::collections::{HashMap, VecDeque};

use causeway_core::errors::{CausewayResult, GraphError};
use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use super::dag::CausalDag;

/// Check whether adding an edge from `source` to `target` would create a cycle.
///
/// Returns `true` if a cycle would be created (edge should be rejected).
pub fn would_create_cycle(dag: &CausalDag, source: NodeIndex, target: NodeIndex) -> bool {
    // Self-loops are always cycles.
    source == target || shortest_path(dag, target, source).is_some()
}

/// The cycle `source -> target -> ... -> source` that adding `source -> target`
/// would close, as node names. `None` if the edge is safe.
pub fn cycle_path(dag: &CausalDag, source: NodeIndex, target: NodeIndex) -> Option<Vec<String>> {
    let back = shortest_path(dag, target, source)?;
    let mut names = Vec::with_capacity(back.len() + 1);
    names.extend(dag.node_name(source).map(str::to_string));
    names.extend(back.iter().filter_map(|&idx| dag.node_name(idx).map(str::to_string)));
    Some(names)
}

/// Find the strongly connected components with more than one node (i.e., cycles).
pub fn find_cycles(dag: &CausalDag) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(&dag.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .collect()
}

/// Fail with [`GraphError::CyclicGraph`] if the graph contains any cycle.
pub fn validate_acyclic(dag: &CausalDag) -> CausewayResult<()> {
    match find_cycles(dag).into_iter().next() {
        None => Ok(()),
        Some(scc) => {
            let path = scc
                .iter()
                .filter_map(|&idx| dag.node_name(idx))
                .collect::<Vec<_>>()
                .join(" -> ");
            Err(GraphError::CyclicGraph { path }.into())
        }
    }
}

/// BFS shortest path from `from` to `to` following edge direction, inclusive
/// of both ends.
fn shortest_path(dag: &CausalDag, from: NodeIndex, to: NodeIndex) -> Option<Vec<NodeIndex>> {
    let mut prev: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    prev.insert(from, from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![to];
            let mut node = to;
            while node != from {
                node = prev[&node];
                path.push(node);
            }
            path.reverse();
            return Some(path);
        }
        for next in dag.graph.neighbors_directed(current, Direction::Outgoing) {
            if !prev.contains_key(&next) {
                prev.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}

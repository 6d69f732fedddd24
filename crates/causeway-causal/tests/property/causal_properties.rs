//! Property tests for causeway-causal over random DAGs.

use std::collections::BTreeSet;

use proptest::prelude::*;

use causeway_causal::graph::dag_enforcement;
use causeway_causal::{
    conditional_independencies, conditional_independencies_subsets, find_adjustment_sets,
    is_d_separated, is_d_separated_with, marginal_independencies, CausalDag, ICausalGraph,
};
use causeway_core::config::AncestralClosure;

/// Build a random DAG on `n` nodes. Edges only run from lower to higher
/// index, so the result is acyclic whatever the input.
fn build_random_dag(n: usize, edges: &[(usize, usize)]) -> CausalDag {
    let names: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
    let mut dag = CausalDag::new();
    for name in &names {
        dag.add_node(name);
    }
    for &(a, b) in edges {
        let (lo, hi) = (a.min(b), a.max(b));
        if lo != hi && hi < n {
            dag.add_edge(&names[lo], &names[hi]).unwrap();
        }
    }
    dag
}

// Strategy to generate random edges for a graph of size n.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

fn subset_strategy(n: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), n)
}

fn pick(dag: &CausalDag, mask: &[bool]) -> BTreeSet<String> {
    dag.nodes()
        .into_iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(name, _)| name)
        .collect()
}

// =============================================================================
// Graph construction
// =============================================================================
proptest! {
    #[test]
    fn random_dags_stay_acyclic(edges in edge_strategy(12)) {
        let dag = build_random_dag(12, &edges);
        prop_assert!(dag_enforcement::find_cycles(&dag).is_empty());
        prop_assert!(dag_enforcement::validate_acyclic(&dag).is_ok());
    }
}

// =============================================================================
// Separation symmetry
// =============================================================================
proptest! {
    #[test]
    fn separation_is_symmetric(
        edges in edge_strategy(7),
        mask in subset_strategy(7),
        a in 0_usize..7,
        b in 0_usize..7,
    ) {
        let dag = build_random_dag(7, &edges);
        let (a, b) = (format!("n{a}"), format!("n{b}"));
        let mut cond = pick(&dag, &mask);
        cond.remove(&a);
        cond.remove(&b);
        prop_assert_eq!(
            is_d_separated(&dag, &a, &b, &cond).unwrap(),
            is_d_separated(&dag, &b, &a, &cond).unwrap()
        );
    }
}

// =============================================================================
// Ancestral closure
// =============================================================================
proptest! {
    /// When every conditioned node is already an ancestor of an endpoint,
    /// adding ancestors of the conditioning set changes nothing.
    #[test]
    fn closures_agree_on_ancestral_conditioning(
        edges in edge_strategy(7),
        mask in subset_strategy(7),
        a in 0_usize..7,
        b in 0_usize..7,
    ) {
        let dag = build_random_dag(7, &edges);
        let (a, b) = (format!("n{a}"), format!("n{b}"));
        let ancestral: BTreeSet<String> = dag
            .ancestors(&a)
            .unwrap()
            .union(&dag.ancestors(&b).unwrap())
            .cloned()
            .collect();
        let cond: BTreeSet<String> = pick(&dag, &mask)
            .intersection(&ancestral)
            .filter(|n| **n != a && **n != b)
            .cloned()
            .collect();
        prop_assert_eq!(
            is_d_separated_with(&dag, &a, &b, &cond, AncestralClosure::Literal).unwrap(),
            is_d_separated_with(&dag, &a, &b, &cond, AncestralClosure::Standard).unwrap()
        );
    }
}

// =============================================================================
// Adjacent nodes are never separated
// =============================================================================
proptest! {
    #[test]
    fn adjacent_nodes_never_separated(
        edges in edge_strategy(7),
        mask in subset_strategy(7),
    ) {
        let dag = build_random_dag(7, &edges);
        for (from, to) in dag.edges() {
            let mut cond = pick(&dag, &mask);
            cond.remove(&from);
            cond.remove(&to);
            prop_assert!(!is_d_separated(&dag, &from, &to, &cond).unwrap());
        }
    }
}

// =============================================================================
// Enumerators report only true separations
// =============================================================================
proptest! {
    #[test]
    fn reported_relations_hold(edges in edge_strategy(6)) {
        let dag = build_random_dag(6, &edges);
        let mut relations = marginal_independencies(&dag).unwrap();
        relations.extend(conditional_independencies(&dag).unwrap());
        for r in &relations {
            prop_assert!(r.given.len() <= 1);
            prop_assert!(is_d_separated(&dag, &r.a, &r.b, &r.given).unwrap(), "{}", r);
        }
    }

    #[test]
    fn minimal_separators_are_minimal(edges in edge_strategy(6)) {
        let dag = build_random_dag(6, &edges);
        for pair in conditional_independencies_subsets(&dag).unwrap() {
            prop_assert!(!pair.conditioning_sets.is_empty());
            for (i, s) in pair.conditioning_sets.iter().enumerate() {
                prop_assert!(is_d_separated(&dag, &pair.a, &pair.b, s).unwrap());
                for earlier in &pair.conditioning_sets[..i] {
                    prop_assert!(!s.is_superset(earlier), "{:?} contains {:?}", s, earlier);
                }
            }
        }
    }

    #[test]
    fn marginal_pairs_have_only_the_empty_separator(edges in edge_strategy(6)) {
        let dag = build_random_dag(6, &edges);
        let marginal: Vec<(String, String)> = marginal_independencies(&dag)
            .unwrap()
            .into_iter()
            .map(|r| (r.a, r.b))
            .collect();
        let empty_only: Vec<(String, String)> = conditional_independencies_subsets(&dag)
            .unwrap()
            .into_iter()
            .filter(|p| p.conditioning_sets == vec![BTreeSet::new()])
            .map(|p| (p.a, p.b))
            .collect();
        prop_assert_eq!(marginal, empty_only);
    }
}

// =============================================================================
// Adjustment sets
// =============================================================================
proptest! {
    #[test]
    fn adjustment_sets_are_minimal_and_exclude_descendants(
        edges in edge_strategy(7),
        t in 0_usize..7,
        o in 0_usize..7,
    ) {
        prop_assume!(t != o);
        let dag = build_random_dag(7, &edges);
        let (treatment, outcome) = (format!("n{t}"), format!("n{o}"));
        let descendants = dag.descendants(&treatment).unwrap();
        let sets = find_adjustment_sets(&dag, &treatment, &outcome).unwrap();
        for (i, s) in sets.iter().enumerate() {
            prop_assert!(s.is_disjoint(&descendants));
            prop_assert!(!s.contains(&treatment) && !s.contains(&outcome));
            for (j, other) in sets.iter().enumerate() {
                if i != j {
                    prop_assert!(!s.is_superset(other), "{:?} contains {:?}", s, other);
                }
            }
        }
    }

    #[test]
    fn root_treatment_needs_no_adjustment(
        edges in edge_strategy(7),
        o in 1_usize..7,
    ) {
        // n0 has no parents, so it has no back-door paths to anything.
        let dag = build_random_dag(7, &edges);
        let sets = find_adjustment_sets(&dag, "n0", &format!("n{o}")).unwrap();
        prop_assert_eq!(sets, vec![BTreeSet::new()]);
    }
}

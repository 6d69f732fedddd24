//! CausalAnalyzer: binds an [`AnalysisConfig`] to every causal query.

use std::collections::BTreeSet;

use causeway_core::config::{AnalysisConfig, CausewayConfig};
use causeway_core::errors::CausewayResult;
use causeway_core::traits::ICausalGraph;

use crate::adjustment;
use crate::independence::{self, IndependenceRelation, PairIndependencies};
use crate::separation;

/// Stateless apart from its config; every call reads the graph afresh.
#[derive(Debug, Clone, Default)]
pub struct CausalAnalyzer {
    config: AnalysisConfig,
}

impl CausalAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &CausewayConfig) -> Self {
        Self::new(config.analysis.clone())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn is_d_separated<G: ICausalGraph>(
        &self,
        graph: &G,
        a: &str,
        b: &str,
        given: &BTreeSet<String>,
    ) -> CausewayResult<bool> {
        separation::is_d_separated_with(graph, a, b, given, self.config.ancestral_closure)
    }

    pub fn marginal_independencies<G: ICausalGraph>(
        &self,
        graph: &G,
    ) -> CausewayResult<Vec<IndependenceRelation>> {
        independence::marginal_independencies_with(graph, &self.config)
    }

    pub fn conditional_independencies<G: ICausalGraph>(
        &self,
        graph: &G,
    ) -> CausewayResult<Vec<IndependenceRelation>> {
        independence::conditional_independencies_with(graph, &self.config)
    }

    pub fn conditional_independencies_subsets<G: ICausalGraph>(
        &self,
        graph: &G,
    ) -> CausewayResult<Vec<PairIndependencies>> {
        independence::conditional_independencies_subsets_with(graph, &self.config)
    }

    pub fn backdoor_paths<G: ICausalGraph>(
        &self,
        graph: &G,
        treatment: &str,
        outcome: &str,
    ) -> CausewayResult<Vec<Vec<String>>> {
        adjustment::backdoor_paths(graph, treatment, outcome)
    }

    pub fn find_adjustment_sets<G: ICausalGraph>(
        &self,
        graph: &G,
        treatment: &str,
        outcome: &str,
    ) -> CausewayResult<Vec<BTreeSet<String>>> {
        adjustment::find_adjustment_sets_with(graph, treatment, outcome, &self.config)
    }
}

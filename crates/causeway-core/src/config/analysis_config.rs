use serde::{Deserialize, Serialize};

use super::defaults;

/// How enumerators treat a failed d-separation test for a single candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Omit the candidate and keep enumerating.
    Lenient,
    /// Abort the enumeration and return the error.
    Strict,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        defaults::DEFAULT_ERROR_POLICY
    }
}

/// Which nodes enter the ancestral set before moralisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AncestralClosure {
    /// `{a, b} ∪ anc(a) ∪ anc(b) ∪ given`. Ancestors of the conditioning
    /// set are left out, so a conditioned descendant of a collider does not
    /// open the collider.
    Literal,
    /// `{a, b} ∪ given` closed under ancestry: also adds `anc(given)`.
    Standard,
}

impl Default for AncestralClosure {
    fn default() -> Self {
        defaults::DEFAULT_ANCESTRAL_CLOSURE
    }
}

/// Causal analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Policy for per-candidate failures in the pairwise enumerators.
    pub error_policy: ErrorPolicy,
    /// Maximum number of separation tests or candidate sets evaluated per call.
    /// `None` means unbounded.
    pub iteration_budget: Option<u64>,
    /// Ancestral set used by every d-separation test.
    pub ancestral_closure: AncestralClosure,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            error_policy: defaults::DEFAULT_ERROR_POLICY,
            iteration_budget: defaults::DEFAULT_ITERATION_BUDGET,
            ancestral_closure: defaults::DEFAULT_ANCESTRAL_CLOSURE,
        }
    }
}

impl AnalysisConfig {
    pub fn strict() -> Self {
        Self {
            error_policy: ErrorPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.iteration_budget = Some(budget);
        self
    }

    pub fn with_closure(mut self, closure: AncestralClosure) -> Self {
        self.ancestral_closure = closure;
        self
    }
}

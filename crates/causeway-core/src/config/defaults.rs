use super::analysis_config::{AncestralClosure, ErrorPolicy};

// Analysis
pub const DEFAULT_ERROR_POLICY: ErrorPolicy = ErrorPolicy::Lenient;
pub const DEFAULT_ITERATION_BUDGET: Option<u64> = None;
pub const DEFAULT_ANCESTRAL_CLOSURE: AncestralClosure = AncestralClosure::Literal;

// Summary
pub const DEFAULT_SUMMARY_PROB: f64 = crate::constants::DEFAULT_INTERVAL_PROB;
pub const DEFAULT_INTERVAL_DECIMALS: usize = 1;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

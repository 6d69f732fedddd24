//! Stable string codes for errors crossing a language or process boundary.

pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const CYCLIC_GRAPH: &str = "CYCLIC_GRAPH";
pub const SELF_LOOP: &str = "SELF_LOOP";
pub const CONDITIONED_ENDPOINT: &str = "CONDITIONED_ENDPOINT";
pub const SUMMARY_ERROR: &str = "SUMMARY_ERROR";
pub const BUDGET_EXHAUSTED: &str = "BUDGET_EXHAUSTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to its stable code.
pub trait CausewayErrorCode {
    fn error_code(&self) -> &'static str;
}

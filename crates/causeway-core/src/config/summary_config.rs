use serde::{Deserialize, Serialize};

use super::defaults;

/// Posterior summary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Probability mass of credible intervals when the caller gives none.
    pub default_prob: f64,
    /// Decimals used in percentile column labels.
    pub interval_decimals: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            default_prob: defaults::DEFAULT_SUMMARY_PROB,
            interval_decimals: defaults::DEFAULT_INTERVAL_DECIMALS,
        }
    }
}

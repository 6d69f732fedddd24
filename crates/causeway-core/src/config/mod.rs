//! Configuration for Causeway, loaded from TOML with per-section defaults.

pub mod analysis_config;
pub mod defaults;
pub mod observability_config;
pub mod summary_config;

pub use analysis_config::{AnalysisConfig, AncestralClosure, ErrorPolicy};
pub use observability_config::ObservabilityConfig;
pub use summary_config::SummaryConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CausewayError, CausewayResult};

/// Root configuration. Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CausewayConfig {
    pub analysis: AnalysisConfig,
    pub summary: SummaryConfig,
    pub observability: ObservabilityConfig,
}

impl CausewayConfig {
    /// Parse a config from TOML text. Missing fields keep their defaults.
    pub fn from_toml(text: &str) -> CausewayResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| CausewayError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no operation can honour.
    pub fn validate(&self) -> CausewayResult<()> {
        let prob = self.summary.default_prob;
        if !(prob > 0.0 && prob < 1.0) {
            return Err(CausewayError::Config {
                reason: format!("summary.default_prob must lie in (0, 1), got {prob}"),
            });
        }
        if self.analysis.iteration_budget == Some(0) {
            return Err(CausewayError::Config {
                reason: "analysis.iteration_budget must be positive when set".to_string(),
            });
        }
        Ok(())
    }
}

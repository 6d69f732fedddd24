use super::error_code::{self, CausewayErrorCode};

/// Errors raised while summarising posterior samples.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummaryError {
    #[error("no samples for site {site}")]
    EmptySamples { site: String },

    #[error("probability must lie in (0, 1], got {prob}")]
    InvalidProbability { prob: f64 },

    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("insufficient samples: need {needed}, have {available}")]
    InsufficientSamples { needed: usize, available: usize },

    #[error("value {value} outside support of {support} categories")]
    OutOfSupport { value: usize, support: usize },
}

impl CausewayErrorCode for SummaryError {
    fn error_code(&self) -> &'static str {
        error_code::SUMMARY_ERROR
    }
}

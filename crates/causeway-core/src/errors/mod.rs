//! Error handling for Causeway.
//! One error enum per concern, `thiserror` only, rolled up into [`CausewayError`].

pub mod error_code;
pub mod graph_error;
pub mod summary_error;

pub use error_code::CausewayErrorCode;
pub use graph_error::GraphError;
pub use summary_error::SummaryError;

/// Top-level error for every fallible Causeway operation.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("summary error: {0}")]
    Summary(#[from] SummaryError),

    #[error("iteration budget of {budget} exhausted during {operation}")]
    BudgetExhausted { operation: String, budget: u64 },

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl CausewayError {
    /// Errors that must reach the caller even under a lenient error policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::BudgetExhausted { .. } | Self::Config { .. })
    }
}

impl CausewayErrorCode for CausewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Summary(e) => e.error_code(),
            Self::BudgetExhausted { .. } => error_code::BUDGET_EXHAUSTED,
            Self::Config { .. } => error_code::CONFIG_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type CausewayResult<T> = Result<T, CausewayError>;

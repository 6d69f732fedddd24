//! # causeway-core
//!
//! Foundation crate for Causeway.
//! Defines the graph adapter trait, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AnalysisConfig, AncestralClosure, CausewayConfig, ErrorPolicy};
pub use errors::{CausewayError, CausewayResult, GraphError, SummaryError};
pub use traits::ICausalGraph;

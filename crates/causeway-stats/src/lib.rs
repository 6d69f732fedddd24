//! # causeway-stats
//!
//! Summaries of posterior samples used alongside causal analysis:
//! - highest-density and quantile intervals
//! - `precis` tables (mean, std dev, central interval per site)
//! - pointwise WAIC from a log-likelihood matrix
//! - the ordered transform and ordered-categorical likelihood

pub mod interval;
pub mod math;
pub mod ordered;
pub mod precis;
pub mod waic;

pub use interval::{hpdi, quantile};
pub use ordered::{OrderedCategorical, OrderedTransform};
pub use precis::{precis, precis_with, Precis, PrecisRow};
pub use waic::waic;

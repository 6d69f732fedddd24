/// Causeway version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default probability mass for credible intervals and `precis` tables.
pub const DEFAULT_INTERVAL_PROB: f64 = 0.89;

/// Separator used when rendering independence relations (`A _||_ B | C`).
pub const INDEPENDENCE_SYMBOL: &str = "_||_";

/// Operation names reported by budget errors and spans.
pub mod operations {
    pub const MARGINAL: &str = "marginal_independencies";
    pub const SINGLE_CONDITIONER: &str = "conditional_independencies";
    pub const SUBSET_CONDITIONER: &str = "conditional_independencies_subsets";
    pub const ADJUSTMENT_SETS: &str = "find_adjustment_sets";
}

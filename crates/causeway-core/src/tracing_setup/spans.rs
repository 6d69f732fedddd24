//! Span definitions per operation: separation, enumeration, adjustment, summary.

/// Create a d-separation span.
#[macro_export]
macro_rules! separation_span {
    ($a:expr, $b:expr, $given_len:expr) => {
        tracing::debug_span!("causeway.separation", a = %$a, b = %$b, given = $given_len)
    };
}

/// Create an independence enumeration span.
#[macro_export]
macro_rules! enumeration_span {
    ($variant:expr, $node_count:expr) => {
        tracing::info_span!("causeway.enumeration", variant = %$variant, nodes = $node_count)
    };
}

/// Create an adjustment-set search span.
#[macro_export]
macro_rules! adjustment_span {
    ($treatment:expr, $outcome:expr) => {
        tracing::info_span!("causeway.adjustment", treatment = %$treatment, outcome = %$outcome)
    };
}

/// Create a posterior summary span.
#[macro_export]
macro_rules! summary_span {
    ($sites:expr) => {
        tracing::debug_span!("causeway.summary", sites = $sites)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEPARATION: &str = "causeway.separation";
    pub const ENUMERATION: &str = "causeway.enumeration";
    pub const ADJUSTMENT: &str = "causeway.adjustment";
    pub const SUMMARY: &str = "causeway.summary";

    pub const ALL: &[&str] = &[SEPARATION, ENUMERATION, ADJUSTMENT, SUMMARY];
}

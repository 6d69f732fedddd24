use super::error_code::{self, CausewayErrorCode};

/// Errors raised by graph construction and graph queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    #[error("cycle detected in causal graph: {path}")]
    CyclicGraph { path: String },

    #[error("self-loop on node {name}")]
    SelfLoop { name: String },

    #[error("node {name} is both tested and conditioned on")]
    ConditionedEndpoint { name: String },
}

impl GraphError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownNode { name: name.into() }
    }
}

impl CausewayErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::CyclicGraph { .. } => error_code::CYCLIC_GRAPH,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
            Self::ConditionedEndpoint { .. } => error_code::CONDITIONED_ENDPOINT,
        }
    }
}

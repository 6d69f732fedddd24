pub mod graph;

pub use graph::ICausalGraph;

//! Graph structures: the owned DAG, acyclicity enforcement, and moral graphs.

pub mod dag;
pub mod dag_enforcement;
pub mod moral;

//! Errors surfaced by the timing-analysis engine.

use sta_graph::GraphError;

/// An error that aborts a timing analysis run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The timing DAG could not be topologically ordered.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

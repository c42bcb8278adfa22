//! The timing DAG: nets as nodes, delay-weighted directed edges, topological order.
//!
//! [`TimingDag`] is built once by the front end and is immutable thereafter;
//! the critical-path extractor works against pruned copies produced by
//! [`TimingDag::without_edges`].

#![warn(missing_docs)]

pub mod graph;
pub mod ids;
pub mod layout;
pub mod topo;

pub use graph::{TimingDag, TimingEdge};
pub use ids::TimingEdgeId;
pub use layout::{levels, normalized_positions};
pub use topo::{topological_order, GraphError};

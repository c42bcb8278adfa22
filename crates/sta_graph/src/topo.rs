//! Kahn's algorithm for topological ordering, with explicit cycle detection.

use crate::graph::TimingDag;
use std::collections::{HashMap, VecDeque};
use sta_common::{InternalError, NetId};

/// An error encountered while computing a topological order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Topological sort was requested on a graph with a directed cycle.
    #[error("graph contains a cycle; topological sort is not possible")]
    CycleDetected,
    /// An edge referenced a net that was never registered as a node; this
    /// indicates a bug in how the `TimingDag` was built, not a cyclic input.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Computes a topological order of the DAG's nodes using Kahn's algorithm.
///
/// Initial in-degrees are computed over all nodes; the queue is seeded with
/// every in-degree-zero node in node-insertion order and processed FIFO. If
/// the resulting order is shorter than the node count, the graph contains a
/// cycle and [`GraphError::CycleDetected`] is returned.
pub fn topological_order(dag: &TimingDag) -> Result<Vec<NetId>, GraphError> {
    let mut indeg: HashMap<NetId, u32> = dag.nodes().iter().map(|&n| (n, 0)).collect();
    for edge in dag.edges() {
        *indeg.get_mut(&edge.to).ok_or_else(|| {
            InternalError::new(format!("edge endpoint {:?} is not a registered node", edge.to))
        })? += 1;
    }

    let mut queue: VecDeque<NetId> = dag
        .nodes()
        .iter()
        .copied()
        .filter(|n| indeg[n] == 0)
        .collect();

    let mut order = Vec::with_capacity(dag.node_count());
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for edge in dag.outgoing_edges(u) {
            let d = indeg.get_mut(&edge.to).ok_or_else(|| {
                InternalError::new(format!("edge endpoint {:?} is not a registered node", edge.to))
            })?;
            *d -= 1;
            if *d == 0 {
                queue.push_back(edge.to);
            }
        }
    }

    if order.len() != dag.node_count() {
        return Err(GraphError::CycleDetected);
    }
    Ok(order)
}

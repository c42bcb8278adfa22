//! Read-only layout queries for external, out-of-tree visualizers.
//!
//! Neither query feeds timing analysis itself; both are pure functions of
//! graph structure plus a topological order, kept here so a renderer can
//! lay the DAG out without reaching into [`TimingDag`]'s internals.

use crate::graph::TimingDag;
use sta_common::{InternalError, NetId, StaResult};

/// Assigns each node a level: startpoints are level 0, and every other node
/// is `1 + max(level(pred))` over its incoming edges.
///
/// `topo_order` must be a valid topological order of `dag` (e.g. from
/// [`crate::topological_order`]); levels are computed by a single forward
/// sweep over it. `net_count` sizes the dense result array and is indexed by
/// [`NetId::as_raw`]. Nodes with no incoming edges anywhere in `dag`
/// (including isolated nodes) are level 0, matching the startpoint case.
///
/// # Errors
///
/// Returns `InternalError` if `net_count` is too small to index a net
/// referenced by `topo_order` or `dag` — a caller passed a topological order
/// that does not actually belong to `dag`.
pub fn levels(dag: &TimingDag, topo_order: &[NetId], net_count: usize) -> StaResult<Vec<u32>> {
    let mut level = vec![0u32; net_count];
    for &v in topo_order {
        let incoming = dag.incoming_edges(v);
        if incoming.is_empty() {
            continue;
        }
        let max_pred = incoming.iter().try_fold(0u32, |acc, e| {
            level
                .get(e.from.as_raw() as usize)
                .map(|&lvl| acc.max(lvl))
                .ok_or_else(|| {
                    InternalError::new(format!(
                        "topo_order/net_count inconsistent with dag at net {v:?}"
                    ))
                })
        })?;
        *level.get_mut(v.as_raw() as usize).ok_or_else(|| {
            InternalError::new(format!("topo_order/net_count inconsistent with dag at net {v:?}"))
        })? = max_pred + 1;
    }
    Ok(level)
}

/// Normalizes each node's level to `[0.0, 1.0]` by dividing by the DAG's
/// maximum level, for positioning in a renderer's layout axis.
///
/// A DAG with a single level (no edges, or every node tied at level 0) maps
/// every node to `0.0`.
pub fn normalized_positions(dag: &TimingDag, topo_order: &[NetId], net_count: usize) -> StaResult<Vec<f64>> {
    let level = levels(dag, topo_order, net_count)?;
    let max_level = level.iter().copied().max().unwrap_or(0);
    if max_level == 0 {
        return Ok(vec![0.0; net_count]);
    }
    Ok(level
        .into_iter()
        .map(|l| l as f64 / max_level as f64)
        .collect())
}

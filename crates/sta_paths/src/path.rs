//! Single critical-path extraction.

use serde::{Deserialize, Serialize};
use sta_common::NetId;
use sta_engine::TimingReport;
use sta_graph::TimingDag;

/// One critical path from a startpoint to an endpoint: the node and edge
/// sequence, total delay, and slack restricted to the path itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Nodes along the path, in startpoint-to-endpoint order.
    pub nodes: Vec<NetId>,
    /// Edges along the path, in startpoint-to-endpoint order.
    pub edges: Vec<(NetId, NetId)>,
    /// Sum of the delays of `edges`.
    pub delay: f64,
    /// Minimum of the path's node and edge slacks.
    pub wns: f64,
    /// Sum of the path's negative node and edge slacks.
    pub tns: f64,
}

fn edge_slack_at(dag: &TimingDag, report: &TimingReport, from: NetId, to: NetId) -> f64 {
    dag.edges()
        .iter()
        .position(|e| e.from == from && e.to == to)
        .map(|i| report.slacks.edge_slack[i])
        .unwrap_or(f64::INFINITY)
}

/// Extracts the single worst-slack path from a startpoint to an endpoint.
///
/// The worst endpoint is the one with minimum node slack among `endpoints`
/// that actually appear in `dag` (ties keep the first endpoint in input
/// order). The path is backtraced via each node's first back-predecessor
/// witness until a startpoint, or a node with no recorded predecessor, is
/// reached. Returns `None` if no endpoint is present in `dag`, or if the
/// backtrace yields fewer than two nodes (no real path exists).
pub fn extract_single_critical_path(
    dag: &TimingDag,
    startpoints: &[NetId],
    endpoints: &[NetId],
    report: &TimingReport,
) -> Option<CriticalPath> {
    let valid_endpoints: Vec<NetId> = endpoints
        .iter()
        .copied()
        .filter(|e| dag.contains_net(*e))
        .collect();
    if valid_endpoints.is_empty() {
        return None;
    }

    let worst_endpoint = *valid_endpoints.iter().min_by(|a, b| {
        let sa = report.slacks.node_slack[a.as_raw() as usize];
        let sb = report.slacks.node_slack[b.as_raw() as usize];
        sa.partial_cmp(&sb).unwrap_or(std::cmp::Ordering::Equal)
    })?;

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut current = worst_endpoint;

    loop {
        nodes.push(current);
        let idx = current.as_raw() as usize;
        let has_backpred = idx < report.backpred.len() && !report.backpred[idx].is_empty();
        if startpoints.contains(&current) || !has_backpred {
            break;
        }
        let pred = report.backpred[idx][0];
        edges.push((pred, current));
        current = pred;
    }

    if nodes.len() < 2 {
        return None;
    }

    nodes.reverse();
    edges.reverse();

    let delay: f64 = edges
        .iter()
        .filter_map(|&(u, v)| dag.outgoing_edges(u).into_iter().find(|e| e.to == v))
        .map(|e| e.delay)
        .sum();

    let node_slacks = nodes
        .iter()
        .map(|n| report.slacks.node_slack[n.as_raw() as usize]);
    let edge_slacks = edges
        .iter()
        .map(|&(u, v)| edge_slack_at(dag, report, u, v));
    let all_slacks: Vec<f64> = node_slacks.chain(edge_slacks).collect();

    let wns = all_slacks.iter().copied().fold(f64::INFINITY, f64::min);
    let tns: f64 = all_slacks.iter().copied().filter(|s| *s < 0.0).sum();

    Some(CriticalPath {
        nodes,
        edges,
        delay,
        wns,
        tns,
    })
}

//! Slack and worst/total negative slack computation.

use serde::{Deserialize, Serialize};
use sta_graph::TimingDag;

/// Per-net and per-edge slack, plus worst negative slack (WNS) and total
/// negative slack (TNS) aggregated over the DAG's own nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackReport {
    /// `node_slack[n] = RT[n] - AT[n]`, dense over the same index space as
    /// the AT/RT arrays. Nets outside the DAG carry `+inf - (-inf) = +inf`.
    pub node_slack: Vec<f64>,
    /// One entry per edge in `dag.edges()`, in the same order:
    /// `edge_slack[i] = RT[to] - AT[from] - delay`.
    pub edge_slack: Vec<f64>,
    /// The minimum finite node slack over the DAG's own nodes, or `+inf` if
    /// the DAG has no nodes or every node slack is infinite.
    pub wns: f64,
    /// The sum of every finite negative node slack over the DAG's own nodes.
    pub tns: f64,
}

/// Computes node slack, edge slack, WNS, and TNS from arrival and required
/// time arrays produced by the forward and backward sweeps.
pub fn compute_slacks(dag: &TimingDag, at: &[f64], rt: &[f64]) -> SlackReport {
    let net_count = at.len();
    let mut node_slack = vec![f64::INFINITY; net_count];
    for i in 0..net_count {
        node_slack[i] = rt[i] - at[i];
    }

    let edge_slack: Vec<f64> = dag
        .edges()
        .iter()
        .map(|e| {
            let from_idx = e.from.as_raw() as usize;
            let to_idx = e.to.as_raw() as usize;
            rt[to_idx] - at[from_idx] - e.delay
        })
        .collect();

    let mut wns = f64::INFINITY;
    let mut tns = 0.0;
    for &n in dag.nodes() {
        let s = node_slack[n.as_raw() as usize];
        if s.is_finite() {
            if s < wns {
                wns = s;
            }
            if s < 0.0 {
                tns += s;
            }
        }
    }

    SlackReport {
        node_slack,
        edge_slack,
        wns,
        tns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sta_common::NetId;

    fn net(i: u32) -> NetId {
        NetId::from_raw(i)
    }

    #[test]
    fn positive_slack_chain() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.02);
        let at = vec![0.0, 0.02];
        let rt = vec![0.90, 0.95];
        let report = compute_slacks(&dag, &at, &rt);
        assert!((report.node_slack[0] - 0.90).abs() < 1e-12);
        assert!((report.node_slack[1] - 0.93).abs() < 1e-12);
        assert!((report.edge_slack[0] - 0.93).abs() < 1e-12);
        assert!((report.wns - 0.90).abs() < 1e-12);
        assert_eq!(report.tns, 0.0);
    }

    #[test]
    fn negative_slack_accumulates_in_tns() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.5);
        dag.add_net(net(2));
        let at = vec![0.0, 0.5, f64::NEG_INFINITY];
        let rt = vec![-0.1, 0.2, f64::INFINITY];
        let report = compute_slacks(&dag, &at, &rt);
        assert!((report.node_slack[0] - (-0.1)).abs() < 1e-12);
        assert!((report.node_slack[1] - (-0.3)).abs() < 1e-12);
        assert!((report.wns - (-0.3)).abs() < 1e-12);
        assert!((report.tns - (-0.4)).abs() < 1e-12);
    }

    #[test]
    fn unreachable_node_excluded_from_aggregates() {
        let mut dag = TimingDag::new();
        dag.add_net(net(0));
        let at = vec![f64::NEG_INFINITY];
        let rt = vec![f64::INFINITY];
        let report = compute_slacks(&dag, &at, &rt);
        assert_eq!(report.wns, f64::INFINITY);
        assert_eq!(report.tns, 0.0);
    }

    #[test]
    fn empty_graph_wns_is_infinite() {
        let dag = TimingDag::new();
        let report = compute_slacks(&dag, &[], &[]);
        assert_eq!(report.wns, f64::INFINITY);
        assert_eq!(report.tns, 0.0);
        assert!(report.node_slack.is_empty());
        assert!(report.edge_slack.is_empty());
    }
}

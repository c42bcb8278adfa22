//! The aggregate result of one timing-analysis run.

use crate::slack::SlackReport;
use serde::{Deserialize, Serialize};
use sta_common::{NetId, StaResult};
use sta_graph::TimingDag;

/// Arrival times, required times, slacks, and topological order produced by
/// one run of [`crate::analyze`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingReport {
    /// Topological order used for both sweeps.
    pub topo_order: Vec<NetId>,
    /// Arrival time per net, indexed by [`NetId::as_raw`].
    pub at: Vec<f64>,
    /// Required time per net, indexed by [`NetId::as_raw`].
    pub rt: Vec<f64>,
    /// Arrival-time back-predecessor witnesses per net, indexed by
    /// [`NetId::as_raw`].
    pub backpred: Vec<Vec<NetId>>,
    /// Per-net slack, per-edge slack, WNS, and TNS.
    pub slacks: SlackReport,
}

impl TimingReport {
    /// The report for a graph with no nodes: empty topological order, no
    /// arrival or required times, `WNS = +inf`, `TNS = 0`.
    pub fn empty() -> Self {
        Self {
            topo_order: Vec::new(),
            at: Vec::new(),
            rt: Vec::new(),
            backpred: Vec::new(),
            slacks: SlackReport {
                node_slack: Vec::new(),
                edge_slack: Vec::new(),
                wns: f64::INFINITY,
                tns: 0.0,
            },
        }
    }

    /// Worst negative slack over the analyzed graph.
    pub fn wns(&self) -> f64 {
        self.slacks.wns
    }

    /// Total negative slack over the analyzed graph.
    pub fn tns(&self) -> f64 {
        self.slacks.tns
    }

    /// Per-net level for visualization: startpoints at 0, every other net at
    /// `1 + max(level(pred))`. Read-only query for an out-of-tree renderer;
    /// not consumed anywhere in this analysis.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if `dag` is not the graph this report was
    /// computed over.
    pub fn levels(&self, dag: &TimingDag) -> StaResult<Vec<u32>> {
        sta_graph::levels(dag, &self.topo_order, self.at.len())
    }

    /// Per-net level normalized to `[0.0, 1.0]` for laying out a renderer's
    /// position axis. See [`TimingReport::levels`].
    pub fn normalized_positions(&self, dag: &TimingDag) -> StaResult<Vec<f64>> {
        sta_graph::normalized_positions(dag, &self.topo_order, self.at.len())
    }
}

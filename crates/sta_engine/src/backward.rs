//! Backward propagation: required times over the min-plus semiring.

use crate::params::TimingParams;
use sta_common::NetId;
use sta_graph::TimingDag;

/// Computes required times (RT) for every net, seeded at `endpoints` and
/// swept backward (reverse topological order), relaxing `RT[u] = min(RT[u],
/// RT[v] - delay(u, v))` over every outgoing edge of `u`.
///
/// This performs the full relaxation on every visited node, not only the
/// initial seed assignment — the known defect in the reference sweep (a
/// commented-out relaxation loop that left RT equal to its seed value for
/// every non-endpoint net) is not reproduced here.
///
/// `net_count` sizes the dense result array identically to
/// [`crate::forward::forward_arrival_times`]. `rt[n]` is `f64::INFINITY`
/// for nets with no path to any endpoint.
pub fn backward_required_times(
    dag: &TimingDag,
    topo_order: &[NetId],
    endpoints: &[NetId],
    params: &TimingParams,
    net_count: usize,
) -> Vec<f64> {
    let mut rt = vec![f64::INFINITY; net_count];

    for &e in endpoints {
        if dag.contains_net(e) {
            rt[e.as_raw() as usize] = params.tclk - params.setup;
        }
    }
    for (&net, &val) in &params.endpoint_overrides {
        if dag.contains_net(net) {
            rt[net.as_raw() as usize] = val;
        }
    }

    for &u in topo_order.iter().rev() {
        let u_idx = u.as_raw() as usize;
        for edge in dag.outgoing_edges(u) {
            let cand = rt[edge.to.as_raw() as usize] - edge.delay;
            if cand < rt[u_idx] {
                rt[u_idx] = cand;
            }
        }
    }

    rt
}

//! Forward propagation: arrival times over the max-plus (longest-path) semiring.

use crate::params::TimingParams;
use sta_common::NetId;
use sta_graph::TimingDag;

/// Computes arrival times (AT) and back-predecessor witnesses for every net,
/// seeded at `startpoints` and swept forward in topological order.
///
/// `net_count` sizes the dense result arrays; it must be at least as large
/// as the highest [`NetId`] referenced by `dag`, `startpoints`, or the
/// override map (in practice, the interner's total net count).
///
/// Returns `(at, backpred)`, both indexed by [`NetId::as_raw`]. `at[n]` is
/// `f64::NEG_INFINITY` for nets never reached from a startpoint.
/// `backpred[n]` lists every predecessor that witnesses `at[n]` within
/// `params.eps`: a strict winner replaces the list, a tie appends to it.
pub fn forward_arrival_times(
    dag: &TimingDag,
    topo_order: &[NetId],
    startpoints: &[NetId],
    params: &TimingParams,
    net_count: usize,
) -> (Vec<f64>, Vec<Vec<NetId>>) {
    let mut at = vec![f64::NEG_INFINITY; net_count];
    let mut backpred: Vec<Vec<NetId>> = vec![Vec::new(); net_count];

    for &s in startpoints {
        if dag.contains_net(s) {
            at[s.as_raw() as usize] = params.clock_to_q;
        }
    }
    for (&net, &val) in &params.startpoint_overrides {
        if dag.contains_net(net) {
            at[net.as_raw() as usize] = val;
        }
    }

    for &u in topo_order {
        let au = at[u.as_raw() as usize];
        if au == f64::NEG_INFINITY {
            continue;
        }
        for edge in dag.outgoing_edges(u) {
            let v_idx = edge.to.as_raw() as usize;
            let cand = au + edge.delay;
            if cand > at[v_idx] + params.eps {
                at[v_idx] = cand;
                backpred[v_idx] = vec![u];
            } else if (cand - at[v_idx]).abs() <= params.eps {
                backpred[v_idx].push(u);
            }
        }
    }

    (at, backpred)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(i: u32) -> NetId {
        NetId::from_raw(i)
    }

    #[test]
    fn linear_chain_arrival() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.02);
        dag.add_edge(net(1), net(2), 0.02);
        dag.add_edge(net(2), net(3), 0.02);
        let topo = sta_graph::topological_order(&dag).unwrap();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let (at, backpred) = forward_arrival_times(&dag, &topo, &[net(0)], &params, 4);
        assert!((at[3] - 0.06).abs() < 1e-12);
        assert_eq!(backpred[3], vec![net(2)]);
    }

    #[test]
    fn unreachable_node_stays_negative_infinity() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.02);
        dag.add_net(net(2));
        let topo = sta_graph::topological_order(&dag).unwrap();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let (at, _) = forward_arrival_times(&dag, &topo, &[net(0)], &params, 3);
        assert_eq!(at[2], f64::NEG_INFINITY);
    }

    #[test]
    fn tie_retains_all_witnesses() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(2), 0.02);
        dag.add_edge(net(1), net(2), 0.02);
        let topo = sta_graph::topological_order(&dag).unwrap();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let (at, backpred) = forward_arrival_times(&dag, &topo, &[net(0), net(1)], &params, 3);
        assert!((at[2] - 0.02).abs() < 1e-12);
        assert_eq!(backpred[2], vec![net(0), net(1)]);
    }

    #[test]
    fn strict_winner_replaces_tie_list() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(2), 0.01);
        dag.add_edge(net(1), net(2), 0.05);
        let topo = sta_graph::topological_order(&dag).unwrap();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let (at, backpred) = forward_arrival_times(&dag, &topo, &[net(0), net(1)], &params, 3);
        assert!((at[2] - 0.05).abs() < 1e-12);
        assert_eq!(backpred[2], vec![net(1)]);
    }

    #[test]
    fn override_wins_over_seed() {
        let mut dag = TimingDag::new();
        dag.add_net(net(0));
        let topo = sta_graph::topological_order(&dag).unwrap();
        let mut params = TimingParams::new(1.0, 0.05, 0.0);
        params.startpoint_overrides.insert(net(0), 0.5);
        let (at, _) = forward_arrival_times(&dag, &topo, &[net(0)], &params, 1);
        assert_eq!(at[0], 0.5);
    }
}

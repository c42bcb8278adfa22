//! Timing DAG data structure: nets as nodes, delay-weighted directed edges.

use crate::ids::TimingEdgeId;
use serde::{Deserialize, Serialize};
use sta_common::NetId;
use std::collections::HashSet;

/// A directed graph of nets and delay-weighted edges between them.
///
/// Nodes are [`NetId`]s; the graph tracks, separately from the interner,
/// which nets actually participate in this particular analysis (a net can
/// be interned without ever appearing in a DAG built from a different
/// netlist). Edges carry a single scalar delay in seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingDag {
    nodes: Vec<NetId>,
    node_set: HashSet<NetId>,
    edges: Vec<TimingEdge>,
}

/// A directed, delay-weighted edge between two nets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingEdge {
    /// The unique ID of this edge.
    pub id: TimingEdgeId,
    /// The source net.
    pub from: NetId,
    /// The destination net.
    pub to: NetId,
    /// The delay along this edge, in seconds. Always finite and non-negative.
    pub delay: f64,
}

impl TimingDag {
    /// Creates an empty timing DAG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a net as a node in the graph, if not already present.
    pub fn add_net(&mut self, net: NetId) {
        if self.node_set.insert(net) {
            self.nodes.push(net);
        }
    }

    /// Adds a directed edge between two nets, registering both as nodes if
    /// necessary, and returns the edge's ID.
    pub fn add_edge(&mut self, from: NetId, to: NetId, delay: f64) -> TimingEdgeId {
        self.add_net(from);
        self.add_net(to);
        let id = TimingEdgeId::from_raw(self.edges.len() as u32);
        self.edges.push(TimingEdge {
            id,
            from,
            to,
            delay,
        });
        id
    }

    /// Returns the nets in this graph, in the order they were first added.
    pub fn nodes(&self) -> &[NetId] {
        &self.nodes
    }

    /// Returns all edges in this graph, in insertion order.
    pub fn edges(&self) -> &[TimingEdge] {
        &self.edges
    }

    /// Returns the number of nodes (nets) in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the given net is a node in this graph.
    pub fn contains_net(&self, net: NetId) -> bool {
        self.node_set.contains(&net)
    }

    /// Returns all edges originating from the given net, in insertion order.
    pub fn outgoing_edges(&self, net: NetId) -> Vec<&TimingEdge> {
        self.edges.iter().filter(|e| e.from == net).collect()
    }

    /// Returns all edges arriving at the given net, in insertion order.
    pub fn incoming_edges(&self, net: NetId) -> Vec<&TimingEdge> {
        self.edges.iter().filter(|e| e.to == net).collect()
    }

    /// Returns all nodes with no incoming edges, in node-insertion order.
    pub fn source_nodes(&self) -> Vec<NetId> {
        let has_incoming: HashSet<NetId> = self.edges.iter().map(|e| e.to).collect();
        self.nodes
            .iter()
            .copied()
            .filter(|n| !has_incoming.contains(n))
            .collect()
    }

    /// Returns all nodes with no outgoing edges, in node-insertion order.
    pub fn sink_nodes(&self) -> Vec<NetId> {
        let has_outgoing: HashSet<NetId> = self.edges.iter().map(|e| e.from).collect();
        self.nodes
            .iter()
            .copied()
            .filter(|n| !has_outgoing.contains(n))
            .collect()
    }

    /// Returns a histogram of edge delay values: each distinct delay present
    /// in the graph, paired with how many edges carry it, sorted by delay
    /// ascending.
    ///
    /// Distinct floating-point delay values are grouped by bitwise equality
    /// (`f64::to_bits`), which is exact for the handful of fixed delay
    /// constants this graph's edges are built from.
    pub fn delay_histogram(&self) -> Vec<(f64, usize)> {
        let mut counts: std::collections::BTreeMap<u64, usize> = std::collections::BTreeMap::new();
        for edge in &self.edges {
            *counts.entry(edge.delay.to_bits()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(bits, count)| (f64::from_bits(bits), count))
            .collect()
    }

    /// Returns a copy of this DAG with the given edges removed (by ID).
    ///
    /// Nodes are shared as-is (they are cheap `Copy` IDs); only the edge list
    /// is filtered. Used by the critical-path extractor to prune already-
    /// emitted edges between iterations without mutating the original DAG.
    pub fn without_edges(&self, removed: &HashSet<TimingEdgeId>) -> TimingDag {
        TimingDag {
            nodes: self.nodes.clone(),
            node_set: self.node_set.clone(),
            edges: self
                .edges
                .iter()
                .filter(|e| !removed.contains(&e.id))
                .copied()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(i: u32) -> NetId {
        NetId::from_raw(i)
    }

    #[test]
    fn empty_graph() {
        let g = TimingDag::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.source_nodes().is_empty());
        assert!(g.sink_nodes().is_empty());
    }

    #[test]
    fn add_edge_registers_nodes() {
        let mut g = TimingDag::new();
        let e = g.add_edge(net(0), net(1), 0.02);
        assert_eq!(e.as_raw(), 0);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn isolated_net_can_be_added() {
        let mut g = TimingDag::new();
        g.add_net(net(5));
        assert_eq!(g.node_count(), 1);
        assert!(g.contains_net(net(5)));
    }

    #[test]
    fn outgoing_and_incoming() {
        let mut g = TimingDag::new();
        g.add_edge(net(0), net(1), 0.02);
        g.add_edge(net(0), net(2), 0.04);
        g.add_edge(net(1), net(2), 0.01);
        assert_eq!(g.outgoing_edges(net(0)).len(), 2);
        assert_eq!(g.outgoing_edges(net(1)).len(), 1);
        assert_eq!(g.incoming_edges(net(2)).len(), 2);
    }

    #[test]
    fn source_and_sink_nodes() {
        let mut g = TimingDag::new();
        g.add_edge(net(0), net(1), 0.02);
        g.add_edge(net(1), net(2), 0.02);
        assert_eq!(g.source_nodes(), vec![net(0)]);
        assert_eq!(g.sink_nodes(), vec![net(2)]);
    }

    #[test]
    fn multi_fanout() {
        let mut g = TimingDag::new();
        g.add_edge(net(0), net(1), 0.01);
        g.add_edge(net(0), net(2), 0.01);
        g.add_edge(net(0), net(3), 0.01);
        assert_eq!(g.outgoing_edges(net(0)).len(), 3);
        assert_eq!(g.source_nodes(), vec![net(0)]);
        assert_eq!(g.sink_nodes().len(), 3);
    }

    #[test]
    fn without_edges_preserves_nodes() {
        let mut g = TimingDag::new();
        let e0 = g.add_edge(net(0), net(1), 0.02);
        let _e1 = g.add_edge(net(1), net(2), 0.03);
        let mut removed = HashSet::new();
        removed.insert(e0);
        let pruned = g.without_edges(&removed);
        assert_eq!(pruned.node_count(), 3);
        assert_eq!(pruned.edge_count(), 1);
        assert!(pruned.contains_net(net(0)));
    }

    #[test]
    fn delay_histogram_groups_and_sorts_by_value() {
        let mut g = TimingDag::new();
        g.add_edge(net(0), net(1), 0.02);
        g.add_edge(net(1), net(2), 0.01);
        g.add_edge(net(2), net(3), 0.02);
        let hist = g.delay_histogram();
        assert_eq!(hist, vec![(0.01, 1), (0.02, 2)]);
    }

    #[test]
    fn delay_histogram_empty_graph() {
        let g = TimingDag::new();
        assert!(g.delay_histogram().is_empty());
    }

    #[test]
    fn graph_serde_roundtrip() {
        let mut g = TimingDag::new();
        g.add_edge(net(0), net(1), 0.5);
        let json = serde_json::to_string(&g).unwrap();
        let restored: TimingDag = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.node_count(), 2);
        assert_eq!(restored.edge_count(), 1);
    }
}

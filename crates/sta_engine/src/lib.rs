//! Timing propagation: arrival times, required times, slack, and the
//! overall analysis orchestration.

#![warn(missing_docs)]

pub mod backward;
pub mod error;
pub mod forward;
pub mod params;
pub mod result;
pub mod slack;

pub use error::EngineError;
pub use params::{TimingParams, DEFAULT_EPS};
pub use result::TimingReport;
pub use slack::SlackReport;

use sta_common::NetId;
use sta_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use sta_graph::TimingDag;
use sta_source::Span;

/// Diagnostic code for a negative worst-negative-slack result.
const NEGATIVE_WNS_CODE: u16 = 101;

/// Runs a full static timing analysis: topological sort, forward arrival
/// propagation, backward required-time propagation, and slack computation.
///
/// `net_count` must be at least as large as the highest [`NetId`] referenced
/// anywhere in `dag`, `startpoints`, `endpoints`, or `params`'s override maps
/// (in practice, the total net count of the interner that produced them).
///
/// A graph with no nodes short-circuits to [`TimingReport::empty`]. If the
/// computed WNS is negative, a warning diagnostic is emitted into `sink`
/// rather than returned as an error — a negative slack is a legitimate
/// analysis result, not a failure of the analysis itself.
pub fn analyze(
    dag: &TimingDag,
    net_count: usize,
    startpoints: &[NetId],
    endpoints: &[NetId],
    params: &TimingParams,
    sink: &DiagnosticSink,
) -> Result<TimingReport, EngineError> {
    if dag.node_count() == 0 {
        return Ok(TimingReport::empty());
    }

    let topo_order = sta_graph::topological_order(dag)?;
    let (at, backpred) =
        forward::forward_arrival_times(dag, &topo_order, startpoints, params, net_count);
    let rt = backward::backward_required_times(dag, &topo_order, endpoints, params, net_count);
    let slacks = slack::compute_slacks(dag, &at, &rt);

    if slacks.wns.is_finite() && slacks.wns < 0.0 {
        sink.emit(Diagnostic::warning(
            DiagnosticCode::new(Category::Timing, NEGATIVE_WNS_CODE),
            format!("worst negative slack is {:.6}", slacks.wns),
            Span::DUMMY,
        ));
    }

    Ok(TimingReport {
        topo_order,
        at,
        rt,
        backpred,
        slacks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(i: u32) -> NetId {
        NetId::from_raw(i)
    }

    #[test]
    fn empty_graph_short_circuits() {
        let dag = TimingDag::new();
        let sink = DiagnosticSink::new();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let report = analyze(&dag, 0, &[], &[], &params, &sink).unwrap();
        assert_eq!(report.wns(), f64::INFINITY);
        assert_eq!(report.tns(), 0.0);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn cycle_propagates_graph_error() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.01);
        dag.add_edge(net(1), net(0), 0.01);
        let sink = DiagnosticSink::new();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let result = analyze(&dag, 2, &[net(0)], &[net(1)], &params, &sink);
        assert!(result.is_err());
    }

    #[test]
    fn negative_wns_emits_warning() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.9);
        let sink = DiagnosticSink::new();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let report = analyze(&dag, 2, &[net(0)], &[net(1)], &params, &sink).unwrap();
        assert!(report.wns() < 0.0);
        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, sta_diagnostics::Severity::Warning);
    }

    #[test]
    fn non_negative_wns_emits_nothing() {
        let mut dag = TimingDag::new();
        dag.add_edge(net(0), net(1), 0.01);
        let sink = DiagnosticSink::new();
        let params = TimingParams::new(1.0, 0.05, 0.0);
        let report = analyze(&dag, 2, &[net(0)], &[net(1)], &params, &sink).unwrap();
        assert!(report.wns() >= 0.0);
        assert!(sink.diagnostics().is_empty());
    }
}

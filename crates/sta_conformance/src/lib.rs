//! Conformance test helpers for the static timing analysis pipeline.
//!
//! Provides a single [`full_pipeline`] entry point that runs source text
//! through parse → propagate → slack → critical-path extraction and returns
//! everything an integration test needs to assert against, without each test
//! wiring up an [`Interner`]/[`DiagnosticSink`]/[`TimingParams`] by hand.

#![warn(missing_docs)]

use sta_common::Interner;
use sta_diagnostics::{Diagnostic, DiagnosticSink};
use sta_engine::{EngineError, TimingParams, TimingReport};
use sta_frontend::ParseOutput;
use sta_paths::CriticalPath;
use sta_source::FileId;

/// Everything produced by running [`full_pipeline`] on one netlist.
pub struct PipelineResult {
    /// The parsed timing DAG and boundary-net sets.
    pub parsed: ParseOutput,
    /// Arrival/required times, slacks, and topological order.
    pub report: TimingReport,
    /// Up to `k` edge-disjoint critical paths, worst first.
    pub paths: Vec<CriticalPath>,
    /// Diagnostics emitted by the parser and engine.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses `source` and runs timing analysis with the given scalar
/// parameters, extracting up to `k` edge-disjoint critical paths.
///
/// # Panics
///
/// Panics if analysis fails (e.g. the netlist contains a combinational
/// cycle) — conformance tests assert on `Err` directly where that is the
/// behavior under test, via [`try_full_pipeline`] instead.
pub fn full_pipeline(source: &str, tclk: f64, setup: f64, clock_to_q: f64, k: usize) -> PipelineResult {
    try_full_pipeline(source, tclk, setup, clock_to_q, k).expect("pipeline failed")
}

/// Like [`full_pipeline`], but surfaces analysis failure instead of panicking.
pub fn try_full_pipeline(
    source: &str,
    tclk: f64,
    setup: f64,
    clock_to_q: f64,
    k: usize,
) -> Result<PipelineResult, EngineError> {
    let interner = Interner::new();
    let sink = DiagnosticSink::new();
    let parsed = sta_frontend::parse(source, FileId::DUMMY, &sink, &interner);
    let params = TimingParams::new(tclk, setup, clock_to_q);
    let net_count = interner.len();

    let report = sta_engine::analyze(
        &parsed.dag,
        net_count,
        &parsed.startpoints,
        &parsed.endpoints,
        &params,
        &sink,
    )?;
    let paths = sta_paths::extract_k_critical_paths(
        &parsed.dag,
        net_count,
        &parsed.startpoints,
        &parsed.endpoints,
        &params,
        &sink,
        k,
    )?;

    Ok(PipelineResult {
        parsed,
        report,
        paths,
        diagnostics: sink.diagnostics(),
    })
}

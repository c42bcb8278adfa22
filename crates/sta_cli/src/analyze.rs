//! `sta analyze` — the parse → propagate → extract → render pipeline.

use std::error::Error;

use sta_common::Interner;
use sta_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};
use sta_engine::TimingParams;
use sta_source::SourceDb;

use crate::{AnalyzeArgs, GlobalArgs, ReportFormat};

/// Runs the `sta analyze` command.
///
/// Loads the netlist, parses it into a timing DAG, runs forward/backward
/// propagation and slack computation, extracts up to `--k` critical paths,
/// and renders the result. Returns exit code 0 if no parse errors were
/// emitted, 1 otherwise.
pub fn run(args: &AnalyzeArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let mut source_db = SourceDb::new();
    let file = source_db.load_file(&args.netlist)?;
    let source_text = source_db
        .get_file(file)
        .expect("just-loaded file is present")
        .content()
        .to_string();

    let interner = Interner::new();
    let sink = DiagnosticSink::new();
    let parsed = sta_frontend::parse(&source_text, file, &sink, &interner);

    if args.stats {
        print_stats(&parsed.dag);
    }

    let params = TimingParams::new(args.tclk, args.setup, args.clock_to_q);
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
        args.k,
    )?;

    match args.format {
        ReportFormat::Text => render_text(global, &report, &paths, &sink, &source_db),
        ReportFormat::Json => render_json(&report, &paths, &sink),
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn print_stats(dag: &sta_graph::TimingDag) {
    let delays: Vec<f64> = dag.edges().iter().map(|e| e.delay).collect();
    if delays.is_empty() {
        println!("no edges in parsed netlist");
        return;
    }
    let min = delays.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = delays.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!("Min edge delay: {min:.6}");
    println!("Max edge delay: {max:.6}");
    println!("Delay distribution:");
    for (delay, count) in dag.delay_histogram() {
        let pct = 100.0 * count as f64 / delays.len() as f64;
        println!("  {delay:.3} ns: {count:5} edges ({pct:.1}%)");
    }
}

fn render_text(
    global: &GlobalArgs,
    report: &sta_engine::TimingReport,
    paths: &[sta_paths::CriticalPath],
    sink: &DiagnosticSink,
    source_db: &SourceDb,
) {
    let diagnostics = sink.diagnostics();
    let renderer = TerminalRenderer::new(global.color, 80);
    for diag in &diagnostics {
        eprintln!("{}", renderer.render(diag, source_db));
    }

    if !global.quiet {
        println!("WNS = {:.6}, TNS = {:.6}", report.wns(), report.tns());
        println!("Found {} critical path(s)", paths.len());
        for (i, path) in paths.iter().enumerate() {
            println!(
                "Path {}: {} node(s), delay = {:.6}, path WNS = {:.6}, path TNS = {:.6}",
                i + 1,
                path.nodes.len(),
                path.delay,
                path.wns,
                path.tns
            );
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        println!("Result: {error_count} error(s), {warning_count} warning(s)");
    }
}

fn render_json(
    report: &sta_engine::TimingReport,
    paths: &[sta_paths::CriticalPath],
    sink: &DiagnosticSink,
) {
    let payload = serde_json::json!({
        "report": report,
        "paths": paths,
        "diagnostics": sink.diagnostics(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
    );
}

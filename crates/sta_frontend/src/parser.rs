//! Line-oriented parser for the restricted Verilog subset.
//!
//! Recognizes continuous assignments, procedural assignments inside
//! `always` blocks, and `MUX2` primitive instances, building a [`TimingDag`]
//! plus the flip-flop Q/D boundary-net sets.

use crate::delay::{classify_gate, GateClass, MUX2_AND_DELAY, MUX2_NOT_DELAY, MUX2_OR_DELAY};
use crate::signal::extract_signals;
use lazy_static::lazy_static;
use regex::Regex;
use sta_common::{Interner, NetId};
use sta_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};
use sta_graph::TimingDag;
use sta_source::{FileId, Span};
use std::collections::BTreeSet;

lazy_static! {
    static ref ASSIGN_RE: Regex = Regex::new(r"^\s*assign\s+(.+?)\s*=\s*(.+?);").unwrap();
    static ref PROC_ASSIGN_RE: Regex =
        Regex::new(r"^\s*([A-Za-z_]\w*(?:\[\d+\])?)\s*(<=|=)\s*(.+?);").unwrap();
    static ref MUX2_RE: Regex = Regex::new(
        r"^\s*MUX2\s+\w+\s*\(\s*\.A\s*\(\s*([^)]+)\s*\)\s*,\s*\.B\s*\(\s*([^)]+)\s*\)\s*,\s*\.S\s*\(\s*([^)]+)\s*\)\s*,\s*\.Y\s*\(\s*([^)]+)\s*\)\s*\);"
    )
    .unwrap();
}

/// Which kind of block, if any, the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    InSeqAlways,
    InCombAlways,
}

/// The nets and DAG produced by parsing one netlist.
pub struct ParseOutput {
    /// The timing DAG built from continuous assignments, combinational
    /// always-block assignments, and expanded `MUX2` instances.
    pub dag: TimingDag,
    /// Left-hand sides of non-blocking assignments in clocked always blocks.
    pub ff_q_nets: BTreeSet<NetId>,
    /// Right-hand-side operands of those same assignments.
    pub d_nets: BTreeSet<NetId>,
    /// Combinational sources ∪ Q-nets, sorted lexicographically by net name.
    pub startpoints: Vec<NetId>,
    /// Combinational sinks ∪ D-nets, sorted lexicographically by net name.
    pub endpoints: Vec<NetId>,
}

/// Parses restricted-Verilog source text into a [`ParseOutput`].
///
/// `file` and `sink` are used to attach source spans to diagnostics emitted
/// for unrecognized lines; unreadable input is the caller's concern (this
/// function only ever receives text already read from disk).
pub fn parse(source: &str, file: FileId, sink: &DiagnosticSink, interner: &Interner) -> ParseOutput {
    let mut dag = TimingDag::new();
    let mut ff_q_nets = BTreeSet::new();
    let mut d_nets = BTreeSet::new();
    let mut state = BlockState::Outside;
    let mut mux2_counter: u32 = 0;

    let mut offset: u32 = 0;
    for raw_line in source.split_inclusive('\n') {
        let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let line_start = offset;
        offset += raw_line.len() as u32;
        let stripped = line.trim();

        if stripped.starts_with("always") {
            if stripped.contains("posedge") || stripped.contains("negedge") {
                state = BlockState::InSeqAlways;
            } else {
                state = BlockState::InCombAlways;
            }
            continue;
        }

        if state != BlockState::Outside && stripped.starts_with("end") {
            state = BlockState::Outside;
            continue;
        }

        match state {
            BlockState::InSeqAlways => {
                if let Some(caps) = PROC_ASSIGN_RE.captures(line) {
                    let lhs = caps.get(1).unwrap().as_str().trim();
                    let rhs = caps.get(3).unwrap().as_str().trim();
                    let q = interner.get_or_intern(lhs);
                    ff_q_nets.insert(q);
                    dag.add_net(q);
                    for tok in extract_signals(rhs) {
                        let d = interner.get_or_intern(&tok);
                        d_nets.insert(d);
                        dag.add_net(d);
                    }
                } else {
                    note_malformed(sink, file, line_start, line);
                }
            }
            BlockState::InCombAlways => {
                if let Some(caps) = PROC_ASSIGN_RE.captures(line) {
                    let lhs = caps.get(1).unwrap().as_str().trim();
                    let rhs = caps.get(3).unwrap().as_str().trim();
                    add_comb_edges(&mut dag, interner, lhs, rhs, true);
                } else {
                    note_malformed(sink, file, line_start, line);
                }
            }
            BlockState::Outside => {
                if let Some(caps) = MUX2_RE.captures(line) {
                    mux2_counter += 1;
                    expand_mux2(&mut dag, interner, &caps, mux2_counter);
                } else if let Some(caps) = ASSIGN_RE.captures(line) {
                    let lhs = caps.get(1).unwrap().as_str().trim();
                    let rhs = caps.get(2).unwrap().as_str().trim();
                    add_comb_edges(&mut dag, interner, lhs, rhs, false);
                } else if !stripped.is_empty() {
                    note_malformed(sink, file, line_start, line);
                }
            }
        }
    }

    let comb_start: BTreeSet<NetId> = dag.source_nodes().into_iter().collect();
    let comb_end: BTreeSet<NetId> = dag.sink_nodes().into_iter().collect();

    let mut startpoints: Vec<NetId> = comb_start.union(&ff_q_nets).copied().collect();
    let mut endpoints: Vec<NetId> = comb_end.union(&d_nets).copied().collect();
    sort_by_name(&mut startpoints, interner);
    sort_by_name(&mut endpoints, interner);

    ParseOutput {
        dag,
        ff_q_nets,
        d_nets,
        startpoints,
        endpoints,
    }
}

fn sort_by_name(nets: &mut [NetId], interner: &Interner) {
    nets.sort_by(|a, b| interner.resolve(*a).cmp(interner.resolve(*b)));
}

fn add_comb_edges(dag: &mut TimingDag, interner: &Interner, lhs: &str, rhs: &str, in_comb_always: bool) {
    let lhs_id = interner.get_or_intern(lhs);
    let tokens = extract_signals(rhs);
    let class = classify_gate(rhs, &tokens);
    let delay = if in_comb_always && class == GateClass::Assign {
        GateClass::CombAlways.delay()
    } else {
        class.delay()
    };
    // Matches the reference parser: a bare-literal RHS with no signal tokens
    // never registers the LHS as a node and produces no edges.
    for tok in tokens {
        let rhs_id = interner.get_or_intern(&tok);
        dag.add_net(rhs_id);
        dag.add_net(lhs_id);
        dag.add_edge(rhs_id, lhs_id, delay);
    }
}

fn expand_mux2(dag: &mut TimingDag, interner: &Interner, caps: &regex::Captures, i: u32) {
    let a = interner.get_or_intern(caps.get(1).unwrap().as_str().trim());
    let b = interner.get_or_intern(caps.get(2).unwrap().as_str().trim());
    let s = interner.get_or_intern(caps.get(3).unwrap().as_str().trim());
    let y = interner.get_or_intern(caps.get(4).unwrap().as_str().trim());

    let n_s = interner.get_or_intern(&format!("nS_{i}"));
    let t0 = interner.get_or_intern(&format!("t0_{i}"));
    let t1 = interner.get_or_intern(&format!("t1_{i}"));

    dag.add_net(a);
    dag.add_net(b);
    dag.add_net(s);
    dag.add_net(n_s);
    dag.add_net(t0);
    dag.add_net(t1);
    dag.add_net(y);

    dag.add_edge(s, n_s, MUX2_NOT_DELAY);
    dag.add_edge(a, t0, MUX2_AND_DELAY);
    dag.add_edge(n_s, t0, MUX2_AND_DELAY);
    dag.add_edge(b, t1, MUX2_AND_DELAY);
    dag.add_edge(s, t1, MUX2_AND_DELAY);
    dag.add_edge(t0, y, MUX2_OR_DELAY);
    dag.add_edge(t1, y, MUX2_OR_DELAY);
}

fn note_malformed(sink: &DiagnosticSink, file: FileId, line_start: u32, line: &str) {
    let span = Span::new(file, line_start, line_start + line.len() as u32);
    let diag = Diagnostic::note(
        DiagnosticCode::new(Category::Parse, 1),
        "line matches no recognized construct, skipped",
        span,
    );
    sink.emit(diag);
}

//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use sta_source::SourceDb;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[G101]: combinational cycle detected
///   --> netlist.v:10:5
///    |
/// 10 | assign a = b;
///    |        ^ involves net 'a'
///    |
///    = note: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The terminal width for line wrapping.
    pub width: u16,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, width: u16) -> Self {
        Self { color, width }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}[{}]: {}\n",
            diag.severity, diag.code, diag.message
        ));

        if !diag.primary_span.is_dummy() {
            if let Some(resolved) = source_db.resolve_span(diag.primary_span) {
                out.push_str(&format!("  --> {resolved}\n"));

                let line_num = format!("{}", resolved.line);
                let padding = " ".repeat(line_num.len());
                let line_content = source_db.snippet(diag.primary_span).unwrap_or_default();

                out.push_str(&format!("{padding} |\n"));
                out.push_str(&format!("{line_num} | {line_content}\n"));

                let span_len = diag.primary_span.len().max(1) as usize;
                let carets = "^".repeat(span_len);
                let col_padding = " ".repeat((resolved.column as usize).saturating_sub(1));

                let primary_msg = diag
                    .labels
                    .iter()
                    .find(|l| l.style == LabelStyle::Primary)
                    .map(|l| format!(" {}", l.message))
                    .unwrap_or_default();

                out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));
            }
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

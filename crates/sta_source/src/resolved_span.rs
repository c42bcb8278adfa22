//! Human-readable rendering of a [`Span`](crate::Span).

use std::fmt;
use std::path::PathBuf;

/// A [`Span`](crate::Span) resolved into a path and 1-indexed line/column
/// coordinates, suitable for display in diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path of the source file, as it was provided when loaded.
    pub path: PathBuf,
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number (byte offset within the line).
    pub column: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let r = ResolvedSpan {
            path: PathBuf::from("netlist.v"),
            line: 12,
            column: 5,
        };
        assert_eq!(format!("{r}"), "netlist.v:12:5");
    }
}

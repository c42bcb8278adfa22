//! Signal-token extraction from right-hand-side expressions.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches an escaped identifier (`\` followed by any run of non-whitespace,
    /// non-`,;` characters) or a plain identifier with an optional `[i]`
    /// subscript. Operators, parentheses, and bare numeric literals never match.
    static ref SIGNAL_RE: Regex = Regex::new(r"(\\[^\s,;]+|[A-Za-z_]\w*(?:\[\d+\])?)").unwrap();
}

/// Extracts signal tokens from a right-hand-side expression.
///
/// A match immediately preceded by `'` is rejected: these are the trailing
/// digits of a sized literal like `4'b0` (`b0` would otherwise look like a
/// plain identifier).
pub fn extract_signals(expr: &str) -> Vec<String> {
    let mut out = Vec::new();
    for m in SIGNAL_RE.find_iter(expr) {
        if m.start() > 0 && expr.as_bytes()[m.start() - 1] == b'\'' {
            continue;
        }
        out.push(m.as_str().to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers() {
        assert_eq!(extract_signals("a & b"), vec!["a", "b"]);
    }

    #[test]
    fn subscripted_identifiers() {
        assert_eq!(extract_signals("a[0] & b[12]"), vec!["a[0]", "b[12]"]);
    }

    #[test]
    fn escaped_identifiers() {
        assert_eq!(extract_signals(r"\acc[0] & b"), vec![r"\acc[0]", "b"]);
    }

    #[test]
    fn negated_signals_still_extracted() {
        assert_eq!(extract_signals("~a & ~b"), vec!["a", "b"]);
    }

    #[test]
    fn sized_literal_tail_is_filtered() {
        assert_eq!(extract_signals("a & 4'b0"), vec!["a"]);
    }

    #[test]
    fn sized_literal_hex_tail_is_filtered() {
        assert_eq!(extract_signals("a | 8'hFF"), vec!["a"]);
    }

    #[test]
    fn no_signals_in_bare_literal() {
        assert!(extract_signals("1'b0").is_empty());
    }
}

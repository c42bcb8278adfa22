//! Gate-class delay table and RHS gate-type classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A `~` followed (modulo whitespace) by a signal token: an escaped
    /// identifier or a plain identifier with optional `[i]` subscript.
    static ref NEGATED_SIGNAL_RE: Regex =
        Regex::new(r"~\s*(?:\\[^\s&|^]+|[A-Za-z_]\w*(?:\[\d+\])?)").unwrap();
}

/// A class of gate inferred from an assignment's right-hand-side expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateClass {
    /// A single inversion: `~a`.
    Not,
    /// AND of two or more terms, at least one possibly inverted.
    And,
    /// OR of two or more terms, at least one possibly inverted.
    Or,
    /// XOR of two or more terms.
    Xor,
    /// NAND, recognized via De Morgan form `~a | ~b`.
    Nand,
    /// NOR, recognized via De Morgan form `~a & ~b`.
    Nor,
    /// Anything else: a plain wire connection or an expression too complex
    /// to classify into a single gate.
    Assign,
    /// An `ASSIGN`-classified expression found inside a combinational
    /// `always` block, which uses a different fallback delay than a
    /// top-level continuous assignment.
    CombAlways,
}

impl GateClass {
    /// Looks up this gate class's delay in seconds from the fixed table.
    pub fn delay(self) -> f64 {
        match self {
            GateClass::Assign => 0.001,
            GateClass::CombAlways => 0.02,
            GateClass::Not => 0.01,
            GateClass::And => 0.02,
            GateClass::Or => 0.04,
            GateClass::Xor => 0.03,
            GateClass::Nand => 0.025,
            GateClass::Nor => 0.045,
        }
    }
}

/// Fixed delay (seconds) for the `S -> nS` inverter in a `MUX2` expansion.
pub const MUX2_NOT_DELAY: f64 = 0.05;
/// Fixed delay (seconds) for either AND gate in a `MUX2` expansion.
pub const MUX2_AND_DELAY: f64 = 0.07;
/// Fixed delay (seconds) for the output OR gate in a `MUX2` expansion.
pub const MUX2_OR_DELAY: f64 = 0.08;

/// Classifies a trimmed right-hand-side expression into a [`GateClass`].
///
/// Applies the decision table in order, first match wins: `NOT`, `NOR`,
/// `NAND`, `XOR`, `AND`, `OR`, else `ASSIGN`. Callers inside a combinational
/// `always` block should remap an `Assign` result to `CombAlways` delay
/// semantics; this function never returns `CombAlways` itself.
pub fn classify_gate(expr: &str, signal_tokens: &[String]) -> GateClass {
    let expr = expr.trim();
    let and_count = expr.matches('&').count();
    let or_count = expr.matches('|').count();
    let xor_count = expr.matches('^').count();
    let not_count = expr.matches('~').count();

    if expr.starts_with('~') && and_count == 0 && or_count == 0 && xor_count == 0 {
        return GateClass::Not;
    }

    let negated_count = NEGATED_SIGNAL_RE.find_iter(expr).count();

    if and_count > 0
        && or_count == 0
        && xor_count == 0
        && not_count >= 2
        && negated_count >= 2
        && negated_count == signal_tokens.len()
    {
        return GateClass::Nor;
    }

    if or_count > 0
        && and_count == 0
        && xor_count == 0
        && not_count >= 2
        && negated_count >= 2
        && negated_count == signal_tokens.len()
    {
        return GateClass::Nand;
    }

    if xor_count > 0 && and_count == 0 && or_count == 0 {
        return GateClass::Xor;
    }

    if and_count > 0 && or_count == 0 && xor_count == 0 {
        return GateClass::And;
    }

    if or_count > 0 && and_count == 0 && xor_count == 0 {
        return GateClass::Or;
    }

    GateClass::Assign
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn not_gate() {
        assert_eq!(classify_gate("~a", &toks(&["a"])), GateClass::Not);
    }

    #[test]
    fn and_gate() {
        assert_eq!(classify_gate("a & b", &toks(&["a", "b"])), GateClass::And);
    }

    #[test]
    fn or_gate() {
        assert_eq!(classify_gate("a | b", &toks(&["a", "b"])), GateClass::Or);
    }

    #[test]
    fn xor_gate() {
        assert_eq!(classify_gate("a ^ b", &toks(&["a", "b"])), GateClass::Xor);
    }

    #[test]
    fn nor_gate() {
        assert_eq!(
            classify_gate("~a & ~b", &toks(&["a", "b"])),
            GateClass::Nor
        );
    }

    #[test]
    fn nand_gate() {
        assert_eq!(
            classify_gate("~a | ~b", &toks(&["a", "b"])),
            GateClass::Nand
        );
    }

    #[test]
    fn and_with_one_inverted_input_stays_and() {
        assert_eq!(classify_gate("a & ~b", &toks(&["a", "b"])), GateClass::And);
    }

    #[test]
    fn or_with_one_inverted_input_stays_or() {
        assert_eq!(classify_gate("a | ~b", &toks(&["a", "b"])), GateClass::Or);
    }

    #[test]
    fn mixed_operators_fall_back_to_assign() {
        assert_eq!(
            classify_gate("(a & b) | c", &toks(&["a", "b", "c"])),
            GateClass::Assign
        );
    }

    #[test]
    fn plain_wire_is_assign() {
        assert_eq!(classify_gate("a", &toks(&["a"])), GateClass::Assign);
    }

    #[test]
    fn delay_table_values() {
        assert_eq!(GateClass::Assign.delay(), 0.001);
        assert_eq!(GateClass::CombAlways.delay(), 0.02);
        assert_eq!(GateClass::Not.delay(), 0.01);
        assert_eq!(GateClass::And.delay(), 0.02);
        assert_eq!(GateClass::Or.delay(), 0.04);
        assert_eq!(GateClass::Xor.delay(), 0.03);
        assert_eq!(GateClass::Nand.delay(), 0.025);
        assert_eq!(GateClass::Nor.delay(), 0.045);
        assert_eq!(MUX2_NOT_DELAY, 0.05);
        assert_eq!(MUX2_AND_DELAY, 0.07);
        assert_eq!(MUX2_OR_DELAY, 0.08);
    }
}

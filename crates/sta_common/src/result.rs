//! Common result and error types for internal (non-user-facing) failures.

/// The standard result type for fallible internal operations.
///
/// `Err` indicates an unrecoverable internal error (a bug in this codebase), not a
/// problem with the user's netlist. User-facing parse/analysis failures are reported
/// through [`sta_diagnostics`](https://docs.rs/sta_diagnostics) or the typed error
/// enums of the graph/analysis crates, not through this type.
pub type StaResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in this codebase, not a user input problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

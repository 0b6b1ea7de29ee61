//! Diagnostics emitted when an invocation is rejected.
//!
//! Every rejection blocks the build; nothing is retried or downgraded. The
//! `#[error]` strings are the compiler-facing messages and are asserted
//! verbatim by the expansion tests and compile-fail fixtures.

use thiserror::Error;

/// Why an invocation was rejected.
///
/// The sign-mismatch messages name the required sign; the other two are
/// shared by both macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The macro was invoked without an argument.
    #[error("Missing macro argument (expected positive numeric literal)")]
    NoArgument,

    /// The argument is not an integer or decimal literal.
    #[error("Argument to macro must be a number literal")]
    NotNumeric,

    /// A `positive!` argument was zero or negative.
    #[error("Argument to macro must be positive numeric literal")]
    NotPositive,

    /// A `negative!` argument was zero or positive.
    #[error("Argument to macro must be negative numeric literal")]
    NotNegative,
}

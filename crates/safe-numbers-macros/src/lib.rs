//! Procedural macros for safe-numbers
//!
//! This crate provides two macros:
//! - `positive!` - Validate a numeric literal as strictly positive at compile time
//! - `negative!` - Validate a numeric literal as strictly negative at compile time
//!
//! Both expand to the validated literal itself, so an accepted value carries
//! no runtime cost. Most users should depend on the `safe-numbers` facade
//! crate, which re-exports both macros.

use proc_macro::TokenStream;

mod constraint;
mod error;
mod expand;
mod number;

use constraint::Constraint;

/// Require a strictly positive integer or decimal literal.
///
/// Expands to the literal unchanged. Zero, negative literals, and anything
/// that is not a numeric literal (variables, expressions, other literal
/// kinds) fail the build with an error at the argument.
///
/// # Example
///
/// ```ignore
/// let answer = positive!(42);
/// assert_eq!(answer, 42);
///
/// let ratio = positive!(123.456);
/// assert_eq!(ratio, 123.456);
/// ```
#[proc_macro]
pub fn positive(input: TokenStream) -> TokenStream {
    run(input, Constraint::Positive)
}

/// Require a strictly negative integer or decimal literal.
///
/// Expands to the literal unchanged. Zero, positive literals, and anything
/// that is not a numeric literal fail the build with an error at the
/// argument.
///
/// # Example
///
/// ```ignore
/// let debt = negative!(-42);
/// assert_eq!(debt, -42);
///
/// let delta = negative!(-123.456);
/// assert_eq!(delta, -123.456);
/// ```
#[proc_macro]
pub fn negative(input: TokenStream) -> TokenStream {
    run(input, Constraint::Negative)
}

fn run(input: TokenStream, constraint: Constraint) -> TokenStream {
    expand::expand(input.into(), constraint)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

//! Expansion engine shared by `positive!` and `negative!`.
//!
//! One terminal transition per invocation: the argument expression is
//! classified, checked against the injected constraint, and either re-emitted
//! as a single literal token or turned into an error anchored at the
//! argument's span. There is no partial expansion.

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Token};

use crate::constraint::Constraint;
use crate::error::ExpandError;
use crate::number::Number;

/// Expand one macro invocation.
///
/// On success the result is the argument literal's canonical rendering as an
/// unsuffixed literal token — no wrapper, no runtime check. On failure the
/// returned error carries the fixed message for the rejection and the
/// argument expression's span (the call site when there is no argument).
pub fn expand(input: TokenStream, constraint: Constraint) -> Result<TokenStream, syn::Error> {
    if input.is_empty() {
        return Err(syn::Error::new(Span::call_site(), ExpandError::NoArgument));
    }

    // Comma-separated argument list; only the first argument is validated.
    // Tokens that do not parse as expressions cannot be numeric literals.
    let args = Punctuated::<Expr, Token![,]>::parse_terminated
        .parse2(input)
        .map_err(|err| syn::Error::new(err.span(), ExpandError::NotNumeric))?;
    let Some(expr) = args.first() else {
        return Err(syn::Error::new(Span::call_site(), ExpandError::NoArgument));
    };

    let number = Number::classify(&spelling(expr))
        .map_err(|err| syn::Error::new_spanned(expr, err))?;
    constraint
        .check(number)
        .map_err(|err| syn::Error::new_spanned(expr, err))?;

    let literal = number.literal();
    Ok(quote!(#literal))
}

/// The expression's source spelling.
///
/// Token rendering inserts spaces between tokens (`-42` prints as `- 42`);
/// numeric spellings contain no whitespace of their own, so it is stripped.
fn spelling(expr: &Expr) -> String {
    expr.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

//! Classification of a literal's source spelling into a numeric value.

use std::fmt;

use proc_macro2::Literal;

use crate::error::ExpandError;

/// A numeric literal the macros accept: a whole number or a decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

impl Number {
    /// Classify a literal's exact source spelling.
    ///
    /// Integer parsing runs before floating-point parsing, so `42` stays
    /// `Integer(42)` and renders back as `42` rather than `42.0`. Spellings
    /// that parse as neither (including non-finite float spellings, which
    /// cannot be rendered as a literal token) are rejected.
    pub fn classify(text: &str) -> Result<Number, ExpandError> {
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Number::Integer(value));
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Decimal(value)),
            _ => Err(ExpandError::NotNumeric),
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Number::Integer(value) => value > 0,
            Number::Decimal(value) => value > 0.0,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Integer(value) => value < 0,
            Number::Decimal(value) => value < 0.0,
        }
    }

    /// Canonical rendering as a single unsuffixed literal token.
    ///
    /// Decimals always keep a fractional part (`1.0`, not `1`), so the
    /// emitted token has the same lexical kind as the classification.
    pub fn literal(self) -> Literal {
        match self {
            Number::Integer(value) => Literal::i64_unsuffixed(value),
            Number::Decimal(value) => Literal::f64_unsuffixed(value),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

//! The sign predicate a macro invocation enforces.

use crate::error::ExpandError;
use crate::number::Number;

/// The sign an invocation requires of its argument.
///
/// Bound by the macro entry point, never dynamic. The two macros differ
/// only in which variant they inject into the shared expansion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Positive,
    Negative,
}

impl Constraint {
    /// Check a classified literal against this constraint.
    ///
    /// Zero satisfies neither constraint.
    pub fn check(self, number: Number) -> Result<(), ExpandError> {
        match self {
            Constraint::Positive if number.is_positive() => Ok(()),
            Constraint::Negative if number.is_negative() => Ok(()),
            Constraint::Positive => Err(ExpandError::NotPositive),
            Constraint::Negative => Err(ExpandError::NotNegative),
        }
    }
}

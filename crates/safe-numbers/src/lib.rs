//! Compile-time sign-checked numeric literals.
//!
//! [`positive!`] and [`negative!`] validate a numeric literal's sign while
//! the code is being compiled and expand to the literal itself. A constant
//! with the wrong sign — or zero, which satisfies neither constraint — never
//! reaches the compiled artifact, and an accepted one costs nothing at
//! runtime.
//!
//! Both macros understand whole-number and decimal literals. Anything else
//! (variables, arithmetic expressions, string literals) is rejected at
//! compile time; there is no runtime validation path.
//!
//! # Examples
//!
//! ```
//! use safe_numbers::{negative, positive};
//!
//! let positive_integer = positive!(42);
//! assert_eq!(positive_integer, 42);
//!
//! let positive_double = positive!(123.456);
//! assert_eq!(positive_double, 123.456);
//!
//! let negative_integer = negative!(-42);
//! assert_eq!(negative_integer, -42);
//!
//! let negative_double = negative!(-123.456);
//! assert_eq!(negative_double, -123.456);
//! ```
//!
//! Wrongly-signed literals fail the build:
//!
//! ```compile_fail
//! # use safe_numbers::positive;
//! let n = positive!(-42);
//! ```
//!
//! So does zero:
//!
//! ```compile_fail
//! # use safe_numbers::negative;
//! let n = negative!(0);
//! ```

pub use safe_numbers_macros::{negative, positive};

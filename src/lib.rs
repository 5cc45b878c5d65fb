//! # Exact fractions
//!
//! A fraction type over any fixed-width integer. Values are always kept in lowest terms, and the
//! zero denominator is given a meaning instead of being an error: `n / 0` is an infinity with the
//! sign of `n`, and `0 / 0` is NaN. Addition, multiplication and their inverses are closed over
//! these values the way they are for floating point numbers, but every finite result is exact.
//!
//! ```
//! use fractional::{Fraction64, Q64};
//!
//! assert_eq!(Q64!(1, 2) + Q64!(1, 4), Q64!(3, 4));
//! assert_eq!(Q64!(1) / Q64!(0), Fraction64::infinity());
//! assert_eq!(Q64!(6, 8).to_string(), "3/4");
//! ```
//!
//! The backing integers are not checked for overflow.
#![warn(missing_docs)]

pub mod error;
pub mod fraction;

pub use error::IntegerConversionError;
pub use fraction::{Fraction, Fraction128, Fraction32, Fraction64, Magnitude, StrideThrough, StrideTo};

//! # Errors
//!
//! Arithmetic on fractions never fails: division by zero and the like produce infinities or NaN.
//! What remains are conversions out of the fraction type that can't represent every value.
use std::error::Error;
use std::fmt;

/// A fraction could not be converted exactly into its backing integer type.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntegerConversionError {
    /// The value is an infinity or NaN.
    NotFinite,
    /// The value is finite, but its denominator isn't one.
    NotIntegral,
}

impl fmt::Display for IntegerConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            IntegerConversionError::NotFinite => "fraction is infinite or NaN",
            IntegerConversionError::NotIntegral => "fraction has a denominator other than one",
        })
    }
}

impl Error for IntegerConversionError {}

//! # Formatting
//!
//! `NaN`, `+Inf` or `-Inf` for the non-finite values, the bare numerator for whole numbers and
//! `numerator/denominator` for everything else.
use std::fmt;

use num_traits::PrimInt;

use crate::fraction::Fraction;

/// `NaN`, `+Inf`, `-Inf`, the numerator alone for whole numbers, `numerator/denominator` otherwise.
impl<N: PrimInt + fmt::Display> fmt::Display for Fraction<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            f.write_str("NaN")
        } else if self.is_infinite() {
            let sign = if *self >= Self::from_integer(N::zero()) { "+" } else { "-" };
            write!(f, "{}Inf", sign)
        } else if self.denominator == N::one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

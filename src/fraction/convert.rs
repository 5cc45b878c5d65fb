//! # Conversions
//!
//! Into and out of integers and floats, and to the unsigned counterpart of the backing type.
use std::ops::{Rem, RemAssign};

use num_traits::{NumCast, PrimInt, Signed, ToPrimitive, Unsigned};

use crate::error::IntegerConversionError;
use crate::fraction::Fraction;

mod creation {
    use super::*;

    impl<N: PrimInt> From<N> for Fraction<N> {
        fn from(value: N) -> Self {
            Self::from_integer(value)
        }
    }

    impl<N: PrimInt> From<(N, N)> for Fraction<N> {
        fn from((numerator, denominator): (N, N)) -> Self {
            Self::new(numerator, denominator)
        }
    }
}

mod float {
    use super::*;

    impl<N: PrimInt> Fraction<N> {
        /// Nearest `f64`, computed as the quotient of the converted numerator and denominator.
        ///
        /// Infinities and NaN map to their `f64` counterparts.
        pub fn to_f64(self) -> f64 {
            let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
            let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);

            numerator / denominator
        }

        /// Nearest `f32`, see `to_f64`.
        pub fn to_f32(self) -> f32 {
            let numerator = self.numerator.to_f32().unwrap_or(f32::NAN);
            let denominator = self.denominator.to_f32().unwrap_or(f32::NAN);

            numerator / denominator
        }
    }

    impl<N: PrimInt> From<Fraction<N>> for f64 {
        fn from(value: Fraction<N>) -> Self {
            value.to_f64()
        }
    }

    impl<N: PrimInt> From<Fraction<N>> for f32 {
        fn from(value: Fraction<N>) -> Self {
            value.to_f32()
        }
    }
}

/// Integer projections truncate towards zero and are `None` for infinities and NaN.
impl<N: PrimInt> ToPrimitive for Fraction<N> {
    fn to_i64(&self) -> Option<i64> {
        self.truncated().and_then(|value| value.to_i64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.truncated().and_then(|value| value.to_i128())
    }

    fn to_u64(&self) -> Option<u64> {
        self.truncated().and_then(|value| value.to_u64())
    }

    fn to_u128(&self) -> Option<u128> {
        self.truncated().and_then(|value| value.to_u128())
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Fraction::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(*self))
    }
}

impl<N: PrimInt> Fraction<N> {
    fn truncated(&self) -> Option<N> {
        self.is_finite().then(|| self.numerator / self.denominator)
    }

    /// Truncated quotient of `self / divisor`.
    ///
    /// Computed exactly on the reduced quotient, so there is no loss of precision for large
    /// values.
    ///
    /// # Return value
    ///
    /// `None` if the quotient is an infinity or NaN.
    pub fn whole_quotient(self, divisor: Self) -> Option<N> {
        (self / divisor).truncated()
    }

    /// Convert the value into another backing type, if both parts fit.
    pub fn cast<M: PrimInt>(self) -> Option<Fraction<M>> {
        let numerator = <M as NumCast>::from(self.numerator)?;
        let denominator = <M as NumCast>::from(self.denominator)?;

        Some(Fraction::new(numerator, denominator))
    }
}

impl<N: PrimInt + Signed> Fraction<N> {
    /// What remains of `self` after taking away `divisor` as many whole times as
    /// `whole_quotient` gives.
    ///
    /// The result has the sign of `self`. NaN if the quotient isn't finite, and for an infinite
    /// `divisor`, because the zero quotient times the infinity is NaN.
    pub fn remainder(self, divisor: Self) -> Self {
        match self.whole_quotient(divisor) {
            Some(quotient) => self - Self::from_integer(quotient) * divisor,
            None => Self::nan(),
        }
    }
}

impl<N: PrimInt + Signed> Rem for Fraction<N> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.remainder(rhs)
    }
}

impl<N: PrimInt + Signed> RemAssign for Fraction<N> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.remainder(rhs);
    }
}

/// Signed integers with an unsigned counterpart of the same width.
pub trait Magnitude: PrimInt + Signed {
    /// The unsigned type of the same width.
    type Unsigned: PrimInt + Unsigned;

    /// The absolute value, which always fits in the unsigned type.
    fn unsigned_magnitude(self) -> Self::Unsigned;
}

impl<N: Magnitude> Fraction<N> {
    /// The absolute value as a fraction over the unsigned counterpart of `N`.
    ///
    /// Negative infinity maps to positive infinity. Unlike `abs`, this can't overflow.
    pub fn magnitude(self) -> Fraction<N::Unsigned> {
        Fraction::new(self.numerator.unsigned_magnitude(), self.denominator.unsigned_magnitude())
    }
}

macro_rules! impl_integer {
    ($signed:ident, $unsigned:ident) => {
        impl Magnitude for $signed {
            type Unsigned = $unsigned;

            fn unsigned_magnitude(self) -> Self::Unsigned {
                self.unsigned_abs()
            }
        }

        impl_integer!($signed);
        impl_integer!($unsigned);
    };
    ($t:ident) => {
        impl TryFrom<Fraction<$t>> for $t {
            type Error = IntegerConversionError;

            fn try_from(value: Fraction<$t>) -> Result<Self, Self::Error> {
                if !value.is_finite() {
                    Err(IntegerConversionError::NotFinite)
                } else if value.denominator != 1 {
                    Err(IntegerConversionError::NotIntegral)
                } else {
                    Ok(value.numerator)
                }
            }
        }
    };
}
impl_integer!(i8, u8);
impl_integer!(i16, u16);
impl_integer!(i32, u32);
impl_integer!(i64, u64);
impl_integer!(i128, u128);
impl_integer!(isize, usize);

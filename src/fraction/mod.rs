//! # Fractions
//!
//! A fraction of two fixed-width integers, always stored in lowest terms with the sign in the
//! numerator. Zero denominators are not an error: they represent the two infinities and NaN, and
//! the arithmetic is closed over these values in the same way floating point arithmetic is.
//!
//! Overflow of the backing integer type is not detected. It behaves like the primitive operators
//! do: a panic in debug builds, wrapping in release builds.
use num_traits::{PrimInt, Signed};

pub use convert::Magnitude;
pub use stride::{StrideThrough, StrideTo};

mod reduce;
mod field;
mod compare;
mod stride;
mod convert;
mod display;
mod codec;
mod macros;

/// A fraction in canonical form.
///
/// For a finite value the numerator and denominator are coprime and the denominator is positive.
/// A zero denominator with numerator `1` or `-1` is an infinity, and `0 / 0` is NaN.
///
/// Equality is structural, so all NaN values are equal to each other and hash identically.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fraction<N> {
    numerator: N,
    denominator: N,
}

/// Fraction backed by 32 bit integers.
pub type Fraction32 = Fraction<i32>;
/// Fraction backed by 64 bit integers.
pub type Fraction64 = Fraction<i64>;
/// Fraction backed by 128 bit integers.
pub type Fraction128 = Fraction<i128>;

impl<N: PrimInt> Fraction<N> {
    /// Create a new fraction, reducing it to canonical form.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any value. Zero gives an infinity, or NaN if the numerator is zero too.
    pub fn new(numerator: N, denominator: N) -> Self {
        let (numerator, denominator) = reduce::reduce(numerator, denominator);

        Self { numerator, denominator }
    }

    /// Create a fraction with denominator one.
    pub fn from_integer(value: N) -> Self {
        Self::new(value, N::one())
    }

    /// The positive infinity.
    pub fn infinity() -> Self {
        Self::new(N::one(), N::zero())
    }

    /// Not a number.
    pub fn nan() -> Self {
        Self::new(N::zero(), N::zero())
    }

    /// The numerator, which carries the sign.
    pub fn numerator(&self) -> N {
        self.numerator
    }

    /// The denominator, never negative.
    pub fn denominator(&self) -> N {
        self.denominator
    }

    /// Whether this value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.denominator != N::zero()
    }

    /// Whether this value is one of the two infinities.
    pub fn is_infinite(&self) -> bool {
        self.denominator == N::zero() && self.numerator != N::zero()
    }

    /// Whether both the numerator and the denominator are zero.
    pub fn is_nan(&self) -> bool {
        self.denominator == N::zero() && self.numerator == N::zero()
    }

    /// Strictly greater than zero, positive infinity included.
    pub fn is_positive(&self) -> bool {
        self.numerator > N::zero()
    }

    /// Strictly smaller than zero, negative infinity included.
    pub fn is_negative(&self) -> bool {
        self.numerator < N::zero()
    }

    /// The multiplicative inverse.
    ///
    /// Zero maps to positive infinity, both infinities map to zero and NaN stays NaN.
    pub fn reciprocal(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }
}

impl<N: PrimInt + Signed> Fraction<N> {
    /// The negative infinity.
    pub fn neg_infinity() -> Self {
        -Self::infinity()
    }

    /// Absolute value in the same backing type.
    ///
    /// See `magnitude` for a conversion to the unsigned counterpart.
    pub fn abs(self) -> Self {
        Self::new(self.numerator.abs(), self.denominator)
    }
}

impl<N: PrimInt> Default for Fraction<N> {
    fn default() -> Self {
        Self::from_integer(N::zero())
    }
}

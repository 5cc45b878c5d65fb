//! # Striding
//!
//! Stepping from one fraction to the next by a fixed fractional amount, and iterators that drive
//! such steps from a start value towards a bound.
use std::iter::FusedIterator;

use log::trace;
use num_traits::{PrimInt, Signed};

use crate::fraction::Fraction;
use crate::fraction::reduce::common_denominator;

impl<N: PrimInt> Fraction<N> {
    /// The value `stride` further along.
    ///
    /// Equal to `self + stride`. When either operand is not finite, the result follows the
    /// addition rules for infinities and NaN.
    pub fn advanced_by(self, stride: Self) -> Self {
        if !(self.is_finite() && stride.is_finite()) {
            return self + stride;
        }

        let (self_numerator, stride_numerator, denominator) = common_denominator(&self, &stride);
        Self::new(self_numerator + stride_numerator, denominator)
    }

    /// Values from `self` up to, but excluding, `end`, taking steps of size `step`.
    ///
    /// A negative step counts down. A zero or NaN step yields nothing.
    pub fn stride_to(self, end: Self, step: Self) -> StrideTo<N> {
        StrideTo { walk: Walk::new(self, end, step) }
    }

    /// Values from `self` up to and including `end`, taking steps of size `step`.
    ///
    /// A negative step counts down. A zero or NaN step yields nothing.
    pub fn stride_through(self, end: Self, step: Self) -> StrideThrough<N> {
        StrideThrough { walk: Walk::new(self, end, step) }
    }
}

impl<N: PrimInt + Signed> Fraction<N> {
    /// The stride that takes `self` to `other`.
    ///
    /// Inverse of `advanced_by`: `x.advanced_by(x.distance_to(y)) == y` for finite `x` and `y`.
    pub fn distance_to(self, other: Self) -> Self {
        other.advanced_by(-self)
    }
}

/// State shared by the two stride iterators.
#[derive(Copy, Clone, Debug)]
struct Walk<N> {
    current: Fraction<N>,
    end: Fraction<N>,
    step: Fraction<N>,
    done: bool,
}

impl<N: PrimInt> Walk<N> {
    fn new(start: Fraction<N>, end: Fraction<N>, step: Fraction<N>) -> Self {
        let stalls = step.is_nan() || step.numerator == N::zero();
        if stalls {
            trace!("Stride step is zero or NaN, the walk yields no values");
        }

        Self { current: start, end, step, done: stalls }
    }

    /// Produce the current value if `in_bounds` accepts it, then step.
    fn next(&mut self, in_bounds: impl Fn(&Fraction<N>, &Fraction<N>, bool) -> bool) -> Option<Fraction<N>> {
        if self.done {
            return None;
        }
        if !in_bounds(&self.current, &self.end, self.step.is_positive()) {
            self.done = true;
            return None;
        }

        let value = self.current;
        self.current = self.current.advanced_by(self.step);
        Some(value)
    }
}

/// Iterator returned by `Fraction::stride_to`.
#[derive(Clone, Debug)]
pub struct StrideTo<N> {
    walk: Walk<N>,
}

impl<N: PrimInt> Iterator for StrideTo<N> {
    type Item = Fraction<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next(|current, end, ascending| {
            if ascending { current < end } else { current > end }
        })
    }
}

impl<N: PrimInt> FusedIterator for StrideTo<N> {}

/// Iterator returned by `Fraction::stride_through`.
#[derive(Clone, Debug)]
pub struct StrideThrough<N> {
    walk: Walk<N>,
}

impl<N: PrimInt> Iterator for StrideThrough<N> {
    type Item = Fraction<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next(|current, end, ascending| {
            if ascending { current <= end } else { current >= end }
        })
    }
}

impl<N: PrimInt> FusedIterator for StrideThrough<N> {}

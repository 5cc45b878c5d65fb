//! # Field operations
//!
//! Arithmetic on fractions, extended to the infinities and NaN.
//!
//! Only the owned `Fraction<N> op Fraction<N>` forms contain logic. All forms taking references,
//! and the assigning forms, copy and forward to those.
use num_traits::PrimInt;

use crate::fraction::Fraction;

/// Implements the reference and assigning variants of a binary operator from the owned one.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, [$($bound:tt)+]) => {
        impl<N: $($bound)+> $imp<&Fraction<N>> for Fraction<N> {
            type Output = Fraction<N>;

            fn $method(self, rhs: &Fraction<N>) -> Self::Output {
                $imp::$method(self, *rhs)
            }
        }

        impl<N: $($bound)+> $imp<Fraction<N>> for &Fraction<N> {
            type Output = Fraction<N>;

            fn $method(self, rhs: Fraction<N>) -> Self::Output {
                $imp::$method(*self, rhs)
            }
        }

        impl<N: $($bound)+> $imp for &Fraction<N> {
            type Output = Fraction<N>;

            fn $method(self, rhs: Self) -> Self::Output {
                $imp::$method(*self, *rhs)
            }
        }

        impl<N: $($bound)+> $assign_imp for Fraction<N> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $imp::$method(*self, rhs);
            }
        }

        impl<N: $($bound)+> $assign_imp<&Fraction<N>> for Fraction<N> {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = $imp::$method(*self, *rhs);
            }
        }
    }
}

mod add {
    use std::iter::Sum;
    use std::ops::{Add, AddAssign};

    use super::*;
    use crate::fraction::reduce::common_denominator;

    impl<N: PrimInt> Add for Fraction<N> {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            if self.is_nan() || rhs.is_nan() {
                return Self::nan();
            }

            match (self.is_finite(), rhs.is_finite()) {
                (true, true) => {
                    let (lhs_numerator, rhs_numerator, denominator) = common_denominator(&self, &rhs);
                    Self::new(lhs_numerator + rhs_numerator, denominator)
                },
                (false, true) => self,
                (true, false) => rhs,
                // Infinities are unit-magnitude, so equal means equal sign.
                (false, false) => if self == rhs { self } else { Self::nan() },
            }
        }
    }

    forward_binop!(Add, add, AddAssign, add_assign, [PrimInt]);

    impl<N: PrimInt> Sum for Fraction<N> {
        fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::default(), Add::add)
        }
    }

    impl<'a, N: PrimInt> Sum<&'a Fraction<N>> for Fraction<N> {
        fn sum<I: Iterator<Item=&'a Fraction<N>>>(iter: I) -> Self {
            iter.fold(Self::default(), Add::add)
        }
    }
}

mod sub {
    use std::ops::{Sub, SubAssign};

    use num_traits::Signed;

    use super::*;

    impl<N: PrimInt + Signed> Sub for Fraction<N> {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            self + -rhs
        }
    }

    forward_binop!(Sub, sub, SubAssign, sub_assign, [PrimInt + Signed]);
}

mod mul {
    use std::iter::Product;
    use std::ops::{Mul, MulAssign};

    use super::*;

    impl<N: PrimInt> Mul for Fraction<N> {
        type Output = Self;

        /// Cross-reduces before multiplying to keep the intermediate values small.
        ///
        /// Zero times an infinity is not special-cased: the zero numerator meets the zero
        /// denominator and the result comes out as NaN.
        fn mul(self, rhs: Self) -> Self::Output {
            let left = Self::new(self.numerator, rhs.denominator);
            let right = Self::new(rhs.numerator, self.denominator);

            Self::new(left.numerator * right.numerator, left.denominator * right.denominator)
        }
    }

    forward_binop!(Mul, mul, MulAssign, mul_assign, [PrimInt]);

    impl<N: PrimInt> Product for Fraction<N> {
        fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
            iter.fold(Self::from_integer(N::one()), Mul::mul)
        }
    }

    impl<'a, N: PrimInt> Product<&'a Fraction<N>> for Fraction<N> {
        fn product<I: Iterator<Item=&'a Fraction<N>>>(iter: I) -> Self {
            iter.fold(Self::from_integer(N::one()), Mul::mul)
        }
    }

    impl<N: PrimInt> Fraction<N> {
        /// Raise to an integer power by repeated squaring.
        ///
        /// A negative exponent gives the reciprocal of the positive power, and any value to the
        /// power zero is one.
        pub fn pow(self, exponent: i32) -> Self {
            let mut result = Self::from_integer(N::one());
            let mut base = self;
            let mut remaining = exponent.unsigned_abs();

            while remaining > 0 {
                if remaining & 1 == 1 {
                    result = result * base;
                }
                remaining >>= 1;
                if remaining > 0 {
                    base = base * base;
                }
            }

            if exponent < 0 { result.reciprocal() } else { result }
        }
    }
}

mod div {
    use std::ops::{Div, DivAssign};

    use num_traits::Inv;

    use super::*;

    impl<N: PrimInt> Div for Fraction<N> {
        type Output = Self;

        fn div(self, rhs: Self) -> Self::Output {
            self * rhs.reciprocal()
        }
    }

    forward_binop!(Div, div, DivAssign, div_assign, [PrimInt]);

    impl<N: PrimInt> Inv for Fraction<N> {
        type Output = Self;

        fn inv(self) -> Self::Output {
            self.reciprocal()
        }
    }
}

mod neg {
    use std::ops::Neg;

    use num_traits::Signed;

    use super::*;

    impl<N: PrimInt + Signed> Neg for Fraction<N> {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self::new(-self.numerator, self.denominator)
        }
    }

    impl<N: PrimInt + Signed> Neg for &Fraction<N> {
        type Output = Fraction<N>;

        fn neg(self) -> Self::Output {
            Neg::neg(*self)
        }
    }
}

mod identities {
    use num_traits::{One, Zero};

    use super::*;

    impl<N: PrimInt> Zero for Fraction<N> {
        fn zero() -> Self {
            Self::from_integer(N::zero())
        }

        fn is_zero(&self) -> bool {
            self.numerator == N::zero() && self.denominator == N::one()
        }
    }

    impl<N: PrimInt> One for Fraction<N> {
        fn one() -> Self {
            Self::from_integer(N::one())
        }

        fn is_one(&self) -> bool {
            self.numerator == N::one() && self.denominator == N::one()
        }
    }
}

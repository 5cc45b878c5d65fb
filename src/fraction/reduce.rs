//! # Reduction
//!
//! Integer helpers that bring a numerator and denominator into canonical form, and that rewrite
//! two fractions over a shared denominator.
//!
//! None of these functions guard against overflow of the backing integer type.
use num_traits::PrimInt;

use crate::fraction::Fraction;

/// Greatest common divisor by the Euclidean algorithm.
///
/// The sign of the result is not normalized. For signed types it follows the truncating `%` and
/// can be negative; callers that scale by it should take its magnitude first.
pub(crate) fn gcd<N: PrimInt>(mut lhs: N, mut rhs: N) -> N {
    while rhs != N::zero() {
        let remainder = lhs % rhs;
        lhs = rhs;
        rhs = remainder;
    }

    lhs
}

/// Least common multiple.
///
/// Zero if either argument is zero.
pub(crate) fn lcm<N: PrimInt>(lhs: N, rhs: N) -> N {
    let divisor = non_negative(gcd(lhs, rhs));
    if divisor == N::zero() {
        return N::zero();
    }

    lhs / divisor * rhs
}

/// Reduce a raw pair to lowest terms with a non-negative denominator.
///
/// # Arguments
///
/// * `numerator`: Any value.
/// * `denominator`: Any value, zero included.
///
/// # Return value
///
/// The canonical pair. `(0, 0)` is returned unchanged, any other pair with a zero denominator
/// collapses to `(±1, 0)`, `N::MIN` included.
pub(crate) fn reduce<N: PrimInt>(numerator: N, denominator: N) -> (N, N) {
    if denominator == N::zero() {
        // Only the sign survives; taking the magnitude of `N::MIN` would overflow.
        let sign = if numerator < N::zero() {
            N::zero() - N::one()
        } else if numerator == N::zero() {
            N::zero()
        } else {
            N::one()
        };
        return (sign, N::zero());
    }

    // Nonzero, as the denominator is.
    let divisor = non_negative(gcd(numerator, denominator));
    let (numerator, denominator) = (numerator / divisor, denominator / divisor);
    if denominator < N::zero() {
        (N::zero() - numerator, N::zero() - denominator)
    } else {
        (numerator, denominator)
    }
}

/// Scale two finite fractions to their least common denominator.
///
/// # Return value
///
/// The scaled numerator of `lhs`, the scaled numerator of `rhs` and the shared denominator.
pub(crate) fn common_denominator<N: PrimInt>(lhs: &Fraction<N>, rhs: &Fraction<N>) -> (N, N, N) {
    debug_assert!(lhs.is_finite() && rhs.is_finite());

    let denominator = lcm(lhs.denominator, rhs.denominator);
    let lhs_numerator = lhs.numerator * (denominator / lhs.denominator);
    let rhs_numerator = rhs.numerator * (denominator / rhs.denominator);

    (lhs_numerator, rhs_numerator, denominator)
}

fn non_negative<N: PrimInt>(value: N) -> N {
    if value < N::zero() {
        N::zero() - value
    } else {
        value
    }
}

//! # Ordering
//!
//! Fractions are ordered like the extended reals. NaN is unordered against every other value,
//! but since equality is structural, NaN does compare equal to NaN. Between two NaN values `<=`
//! and `>=` hold, while `<` and `>` never do.
use std::cmp::Ordering;

use num_traits::PrimInt;

use crate::fraction::Fraction;
use crate::fraction::reduce::common_denominator;

impl<N: PrimInt> PartialOrd for Fraction<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        if self.is_nan() || other.is_nan() {
            return None;
        }

        let ordering = match (self.is_infinite(), other.is_infinite()) {
            (true, true) => self.numerator.cmp(&other.numerator),
            (true, false) => if self.is_positive() { Ordering::Greater } else { Ordering::Less },
            (false, true) => if other.is_positive() { Ordering::Less } else { Ordering::Greater },
            (false, false) => {
                let (lhs_numerator, rhs_numerator, _) = common_denominator(self, other);
                lhs_numerator.cmp(&rhs_numerator)
            },
        };

        Some(ordering)
    }
}

//! # Algebraic properties
//!
//! Checked over many pseudo-random values. The generator is seeded, so failures reproduce.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fractional::Fraction64;

#[allow(missing_docs)]
mod test;

/// Number of values drawn per property.
const SAMPLES: usize = 2_000;

/// Bound on the absolute value of generated numerators and denominators.
///
/// Small enough that no property below can overflow an `i64`.
const BOUND: i64 = 10_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x00F2_AC71_0A11)
}

/// A raw pair with a nonzero denominator, not necessarily reduced.
fn raw_pair(rng: &mut StdRng) -> (i64, i64) {
    let numerator = rng.gen_range(-BOUND..=BOUND);
    let mut denominator = 0;
    while denominator == 0 {
        denominator = rng.gen_range(-BOUND..=BOUND);
    }

    (numerator, denominator)
}

/// A finite fraction.
fn finite(rng: &mut StdRng) -> Fraction64 {
    let (numerator, denominator) = raw_pair(rng);
    Fraction64::new(numerator, denominator)
}

/// A finite fraction other than zero.
fn finite_nonzero(rng: &mut StdRng) -> Fraction64 {
    loop {
        let value = finite(rng);
        if value.numerator() != 0 {
            return value;
        }
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

use std::cmp::Ordering;

use num_traits::{One, Zero};

use fractional::Fraction64;

use super::{finite, finite_nonzero, gcd, raw_pair, rng, SAMPLES};

#[test]
fn reduced_with_positive_denominator() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (numerator, denominator) = raw_pair(&mut rng);
        let value = Fraction64::new(numerator, denominator);

        assert!(value.denominator() > 0);
        assert_eq!(gcd(value.numerator(), value.denominator()), 1);
        // Same rational number.
        assert_eq!(value.numerator() * denominator, numerator * value.denominator());
    }
}

#[test]
fn reciprocal_is_an_involution() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = finite_nonzero(&mut rng);
        assert_eq!(x.reciprocal().reciprocal(), x);
    }
}

#[test]
fn additive_identity_and_inverse() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = finite(&mut rng);
        assert_eq!(x + Fraction64::zero(), x);
        assert_eq!(x + -x, Fraction64::zero());
        assert_eq!(x - x, Fraction64::zero());
    }
}

#[test]
fn multiplicative_identity_and_inverse() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = finite_nonzero(&mut rng);
        assert_eq!(x * Fraction64::one(), x);
        assert_eq!(x * x.reciprocal(), Fraction64::one());
        assert_eq!(x / x, Fraction64::one());
    }
}

#[test]
fn commutative_and_associative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (x, y, z) = (finite(&mut rng), finite(&mut rng), finite(&mut rng));
        assert_eq!(x + y, y + x);
        assert_eq!(x * y, y * x);
        assert_eq!((x + y) + z, x + (y + z));
        assert_eq!(x * (y + z), x * y + x * z);
    }
}

#[test]
fn trichotomy() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (x, y) = (finite(&mut rng), finite(&mut rng));
        let holding = [x < y, x == y, y < x].into_iter().filter(|&holds| holds).count();
        assert_eq!(holding, 1);

        // Agrees with the floating point order wherever the floats differ.
        let (fx, fy) = (x.to_f64(), y.to_f64());
        if fx != fy {
            assert_eq!(x.partial_cmp(&y), fx.partial_cmp(&fy));
        }
    }
}

#[test]
fn nan_propagates_and_is_unordered() {
    let mut rng = rng();
    let nan = Fraction64::nan();
    for _ in 0..SAMPLES {
        let x = finite(&mut rng);
        assert!((nan + x).is_nan());
        assert!((x + nan).is_nan());
        assert!((nan * x).is_nan());
        assert!((x / nan).is_nan());
        assert!(!(nan < x) && !(x < nan));
        assert_eq!(nan.partial_cmp(&x), None);
    }
}

#[test]
fn infinities_dominate_finite_values() {
    let mut rng = rng();
    let (infinity, neg_infinity) = (Fraction64::infinity(), Fraction64::neg_infinity());
    for _ in 0..SAMPLES {
        let x = finite(&mut rng);
        assert_eq!(x + infinity, infinity);
        assert_eq!(x - infinity, neg_infinity);
        assert_eq!(infinity.partial_cmp(&x), Some(Ordering::Greater));
        assert_eq!(neg_infinity.partial_cmp(&x), Some(Ordering::Less));
        assert_eq!(x / infinity, Fraction64::zero());
    }
}

#[test]
fn stride_distance_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (x, y) = (finite(&mut rng), finite(&mut rng));
        assert_eq!(x.advanced_by(x.distance_to(y)), y);
        assert_eq!(x.advanced_by(y), x + y);
    }
}

#[test]
fn remainder_is_bounded_by_divisor() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (x, y) = (finite(&mut rng), finite_nonzero(&mut rng));
        let remainder = x % y;
        assert!(remainder.abs() < y.abs());
        assert!(remainder.is_zero() || remainder.is_negative() == x.is_negative());

        let quotient = x.whole_quotient(y).unwrap();
        assert_eq!(Fraction64::from_integer(quotient) * y + remainder, x);
    }
}

//! # Serialization
//!
//! A fraction is a struct of two integer fields, `numerator` then `denominator`. Decoding passes
//! through the reducing constructor, so non-canonical input such as `6/8` comes out as `3/4`.
use log::trace;
use num_traits::PrimInt;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fraction::Fraction;

impl<N: Serialize> Serialize for Fraction<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Fraction", 2)?;
        state.serialize_field("numerator", &self.numerator)?;
        state.serialize_field("denominator", &self.denominator)?;
        state.end()
    }
}

/// Wire form, before reduction.
#[derive(Deserialize)]
#[serde(rename = "Fraction")]
struct Raw<N> {
    numerator: N,
    denominator: N,
}

impl<'de, N: PrimInt + Deserialize<'de>> Deserialize<'de> for Fraction<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Raw { numerator, denominator } = Raw::deserialize(deserializer)?;

        let fraction = Fraction::new(numerator, denominator);
        if fraction.numerator != numerator || fraction.denominator != denominator {
            trace!("Decoded fraction was not in canonical form and has been reduced");
        }

        Ok(fraction)
    }
}

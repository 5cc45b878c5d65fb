//! # Usage scenarios
//!
//! Whole-API checks the way a caller of the crate would write them: construction, arithmetic,
//! ranges, iteration, conversions and serialized forms.

//! Short Weierstrass curves over prime fields, with runtime parameters.
//!
//! This crate provides a prime field on top of `num-bigint`, affine curve
//! points with the `(0, 0)` encoding of the point at infinity, the `Curve`
//! group law (addition, doubling, double-and-add scalar multiplication), and a
//! rejection sampler for uniform scalars.

mod affine;
mod curve;
mod field;
mod group;
mod random;

pub use affine::Affine;
pub use curve::Curve;
pub use field::{byte_len, PrimeField};
pub use group::Group;
pub use random::RandomBelow;

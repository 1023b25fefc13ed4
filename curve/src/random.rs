use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryRngCore;

use crate::field::byte_len;

/// Helper trait for sampling uniform integers below a bound.
pub trait RandomBelow: Sized {
    /// Rejection-sample a uniform value in `[0, bound)`.
    ///
    /// Every draw reads as many bytes as `bound` occupies and interprets them
    /// big-endian; draws at or above `bound` are discarded rather than reduced.
    /// An RNG failure is returned as is.
    fn random_below<R: TryRngCore + ?Sized>(rng: &mut R, bound: &Self) -> Result<Self, R::Error>;
}

impl RandomBelow for BigUint {
    fn random_below<R: TryRngCore + ?Sized>(rng: &mut R, bound: &Self) -> Result<Self, R::Error> {
        assert!(!bound.is_zero(), "bound must be non-zero");

        let mut buf = vec![0u8; byte_len(bound)];
        loop {
            rng.try_fill_bytes(&mut buf)?;
            let candidate = BigUint::from_bytes_be(&buf);
            if &candidate < bound {
                return Ok(candidate);
            }
        }
    }
}

//! Arithmetic modulo a prime, on top of `num-bigint`.
//!
//! The same type serves as the base field of the curve (modulus `p`) and as
//! the scalar field of the signature scheme (modulus `q`).

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Integers modulo a prime `m`.
///
/// Every operation returns the canonical representative in `[0, m)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`.
    ///
    /// Primality is not checked; `invert` is only meaningful for a prime modulus.
    pub fn new(modulus: BigUint) -> Self {
        assert!(!modulus.is_zero(), "modulus must be non-zero");
        PrimeField { modulus }
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduce an arbitrary non-negative integer.
    #[inline]
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Reduce a signed integer. Negative remainders are lifted by the modulus.
    pub fn reduce_signed(&self, value: &BigInt) -> BigUint {
        let modulus = BigInt::from(self.modulus.clone());
        value.mod_floor(&modulus).into_parts().1
    }

    #[inline]
    pub fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs + rhs) % &self.modulus
    }

    pub fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let lhs = self.reduce(lhs);
        let rhs = self.reduce(rhs);
        if lhs >= rhs {
            lhs - rhs
        } else {
            &self.modulus - (rhs - lhs)
        }
    }

    pub fn neg(&self, value: &BigUint) -> BigUint {
        let value = self.reduce(value);
        if value.is_zero() {
            value
        } else {
            &self.modulus - value
        }
    }

    #[inline]
    pub fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.modulus
    }

    #[inline]
    pub fn square(&self, value: &BigUint) -> BigUint {
        self.mul(value, value)
    }

    /// Multiplicative inverse by Fermat's little theorem, `v^(m-2) mod m`.
    ///
    /// Zero maps to zero.
    pub fn invert(&self, value: &BigUint) -> BigUint {
        if self.modulus <= BigUint::from(2u32) {
            return self.reduce(value);
        }
        let exponent = &self.modulus - 2u32;
        value.modpow(&exponent, &self.modulus)
    }
}

/// Number of bytes in the minimal big-endian encoding of `value` (zero for zero).
#[inline]
pub fn byte_len(value: &BigUint) -> usize {
    value.bits().div_ceil(8) as usize
}

//! Domain parameters: curve, subgroup order and base point.

use curve::{Affine, Curve, PrimeField};
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::constants::{
    GOST_TEST_256_A, GOST_TEST_256_P, GOST_TEST_256_PX, GOST_TEST_256_PY, GOST_TEST_256_Q,
    P192_A, P192_GX, P192_GY, P192_P, P192_Q,
};

/// The public parameters shared by signer and validator.
///
/// `q` must be prime and the base point `P` must have order `q`. Neither is
/// checked here; callers are expected to use vetted parameter sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParameters {
    curve: Curve,
    scalars: PrimeField,
    base: Affine,
}

impl DomainParameters {
    /// Build parameters from `(p, a, q, P)`. A negative `a` is reduced mod `p`.
    pub fn new(p: BigUint, a: BigInt, q: BigUint, base: Affine) -> Self {
        DomainParameters {
            curve: Curve::new(p, &a),
            scalars: PrimeField::new(q),
            base,
        }
    }

    /// The example curve from GOST R 34.10-2012, appendix A.1 (256-bit).
    pub fn gost_test_256() -> Self {
        Self::new(
            BigUint::from_bytes_be(&GOST_TEST_256_P),
            BigInt::from(GOST_TEST_256_A),
            BigUint::from_bytes_be(&GOST_TEST_256_Q),
            Affine::new(
                BigUint::from_bytes_be(&GOST_TEST_256_PX),
                BigUint::from_bytes_be(&GOST_TEST_256_PY),
            ),
        )
    }

    /// NIST P-192, a curve with `a = -3`.
    pub fn nist_p192() -> Self {
        Self::new(
            BigUint::from_bytes_be(&P192_P),
            BigInt::from(P192_A),
            BigUint::from_bytes_be(&P192_Q),
            Affine::new(
                BigUint::from_bytes_be(&P192_GX),
                BigUint::from_bytes_be(&P192_GY),
            ),
        )
    }

    #[inline]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The subgroup order `q`.
    #[inline]
    pub fn order(&self) -> &BigUint {
        self.scalars.modulus()
    }

    /// The base point `P`.
    #[inline]
    pub fn base(&self) -> &Affine {
        &self.base
    }

    /// Integers modulo `q`, where all protocol scalars live.
    #[inline]
    pub fn scalars(&self) -> &PrimeField {
        &self.scalars
    }
}

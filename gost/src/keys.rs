//! Signer and validator for the GOST R 34.10 signature scheme.

use core::fmt;
use core::marker::PhantomData;

use curve::{Affine, Group, RandomBelow, byte_len};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::TryCryptoRng;
use rand::rngs::OsRng;
use tracing::{debug, trace};

use crate::errors::{GostError, Result};
use crate::params::DomainParameters;
use crate::signatures::{Signature, digest_scalar};

/// Holds a private scalar `d` and produces signatures.
///
/// The digest algorithm is the type parameter `D`. Each call hashes with a
/// fresh `D` instance, so one signer may be shared across threads.
///
/// # Example
///
/// ```
/// use gost::{DomainParameters, Signer, Streebog256};
/// use num_bigint::BigUint;
///
/// let params = DomainParameters::gost_test_256();
/// let signer = Signer::<Streebog256>::new(BigUint::from(0xC0FFEEu32), params);
/// let public_key = signer.generate_key();
/// assert_eq!(public_key, signer.generate_key());
/// ```
pub struct Signer<D> {
    key: BigUint,
    params: DomainParameters,
    digest: PhantomData<fn() -> D>,
}

/// Holds a public point `Q` and checks signatures against it.
///
/// # Example
///
/// ```
/// use gost::{DomainParameters, Signer, Streebog256, Validator};
/// use num_bigint::BigUint;
///
/// let params = DomainParameters::gost_test_256();
/// let signer = Signer::<Streebog256>::new(BigUint::from(12345u32), params.clone());
/// let validator = Validator::<Streebog256>::new(signer.generate_key(), params);
///
/// let signature = signer.sign(b"hello there!").expect("signing failed");
/// assert!(validator.validate(b"hello there!", &signature));
/// assert!(!validator.validate(b"hello world!", &signature));
/// ```
pub struct Validator<D> {
    public_key: Affine,
    params: DomainParameters,
    digest: PhantomData<fn() -> D>,
}

impl<D: Digest> Signer<D> {
    /// Creates a signer for the private scalar `private_key`, expected in `[1, q-1]`.
    pub fn new(private_key: BigUint, params: DomainParameters) -> Self {
        Signer {
            key: private_key,
            params,
            digest: PhantomData,
        }
    }

    #[inline]
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    /// Derives the public point `Q = d * P`.
    ///
    /// Deterministic; hand the result to a [`Validator`].
    pub fn generate_key(&self) -> Affine {
        self.params
            .curve()
            .scalar_mul(&self.key, self.params.base())
    }

    /// Builds the validator for this signer's public point.
    pub fn verifying_key(&self) -> Validator<D> {
        Validator::new(self.generate_key(), self.params.clone())
    }

    /// Signs `msg` with nonces drawn from the operating system's RNG.
    ///
    /// Returns the encoded signature `r ‖ s`.
    pub fn sign(&self, msg: &[u8]) -> Result<Vec<u8>> {
        self.sign_with_rng(&mut OsRng, msg)
    }

    /// Signs `msg` with nonces drawn from `rng`.
    pub fn sign_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Vec<u8>> {
        self.sign_prehash_with_rng(rng, &<D as Digest>::digest(msg))
    }

    /// Signs an already computed digest of the message.
    ///
    /// `prehash` is read as a big-endian integer; it normally has the output
    /// size of `D`, but any length is accepted.
    pub fn sign_prehash_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        prehash: &[u8],
    ) -> Result<Vec<u8>> {
        let half_len = <D as Digest>::output_size();
        let e = digest_scalar(prehash, self.params.scalars());
        self.sign_scalar(rng, &e, half_len)
    }

    /// The signing loop. Retries until `r` and `s` are both usable and returns
    /// their encoding; only an RNG failure ends it early.
    fn sign_scalar<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        e: &BigUint,
        half_len: usize,
    ) -> Result<Vec<u8>> {
        let scalars = self.params.scalars();
        let curve = self.params.curve();
        let mut attempt: u64 = 0;

        loop {
            attempt += 1;

            let k = BigUint::random_below(rng, scalars.modulus())
                .map_err(|err| GostError::EntropyFailure(err.to_string()))?;
            if k.is_zero() {
                debug!(attempt, "discarding zero nonce");
                continue;
            }

            let c = curve.scalar_mul(&k, self.params.base());

            let r = scalars.reduce(&c.x);
            if r.is_zero() || byte_len(&r) > half_len {
                debug!(attempt, r_len = byte_len(&r), "discarding nonce: r unusable");
                continue;
            }

            // s = (r * d + k * e) mod q
            let s = scalars.add(&scalars.mul(&r, &self.key), &scalars.mul(&k, e));
            if s.is_zero() {
                debug!(attempt, "discarding nonce: s is zero");
                continue;
            }

            // r already fits, so encoding fails only when s is wider than half_len
            let Some(encoded) = Signature::new(r, s).to_bytes(half_len) else {
                debug!(attempt, "discarding nonce: s too wide");
                continue;
            };

            debug!(attempts = attempt, "signature produced");
            return Ok(encoded);
        }
    }
}

impl<D: Digest> Validator<D> {
    pub fn new(public_key: Affine, params: DomainParameters) -> Self {
        Validator {
            public_key,
            params,
            digest: PhantomData,
        }
    }

    /// The public point `Q`.
    #[inline]
    pub fn public_key(&self) -> &Affine {
        &self.public_key
    }

    #[inline]
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    /// Checks an encoded signature `r ‖ s` over `msg`.
    ///
    /// Every failure, malformed or merely wrong, is reported as `false`.
    pub fn validate(&self, msg: &[u8], signature: &[u8]) -> bool {
        self.validate_prehash(&<D as Digest>::digest(msg), signature)
    }

    /// Like [`Validator::validate`], for an already computed digest.
    pub fn validate_prehash(&self, prehash: &[u8], signature: &[u8]) -> bool {
        let half_len = <D as Digest>::output_size();
        let Some(decoded) = Signature::from_bytes(signature, half_len) else {
            trace!(
                len = signature.len(),
                expected = 2 * half_len,
                "rejecting signature: bad length"
            );
            return false;
        };

        let e = digest_scalar(prehash, self.params.scalars());
        self.verify_scalar(&e, &decoded)
    }

    fn verify_scalar(&self, e: &BigUint, signature: &Signature) -> bool {
        let scalars = self.params.scalars();
        let curve = self.params.curve();
        let q = scalars.modulus();
        let Signature { r, s } = signature;

        if r.is_zero() || r >= q || s.is_zero() || s >= q {
            trace!("rejecting signature: r or s out of range");
            return false;
        }

        // e is in [1, q-1], hence invertible for prime q
        let v = scalars.invert(e);
        let z1 = scalars.mul(s, &v);
        let z2 = scalars.neg(&scalars.mul(r, &v));

        // C = z1 * P + z2 * Q
        let c = curve.add(
            &curve.scalar_mul(&z1, self.params.base()),
            &curve.scalar_mul(&z2, &self.public_key),
        );

        let big_r = scalars.reduce(&c.x);
        if &big_r != r {
            trace!("rejecting signature: R does not match r");
            return false;
        }
        true
    }
}

impl<D: Digest> From<&Signer<D>> for Validator<D> {
    /// Equivalent to calling `signer.verifying_key()`.
    fn from(signer: &Signer<D>) -> Self {
        signer.verifying_key()
    }
}

impl<D> Clone for Signer<D> {
    fn clone(&self) -> Self {
        Signer {
            key: self.key.clone(),
            params: self.params.clone(),
            digest: PhantomData,
        }
    }
}

impl<D> Clone for Validator<D> {
    fn clone(&self) -> Self {
        Validator {
            public_key: self.public_key.clone(),
            params: self.params.clone(),
            digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Signer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<D> fmt::Debug for Validator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("public_key", &self.public_key)
            .field("params", &self.params)
            .finish()
    }
}

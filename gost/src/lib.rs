//! GOST R 34.10-style signatures over short Weierstrass curves.
//!
//! This library implements the signature scheme of GOST R 34.10-2012 using:
//! - Runtime domain parameters `(p, a, q, P)` on top of the `curve` crate
//! - Any RustCrypto [`digest::Digest`] as the message hash (Streebog by default
//!   in GOST, re-exported here)
//! - Rejection-sampled nonces from a caller-supplied or OS random source
//!
//! # Overview
//!
//! A [`Signer`] owns a private scalar `d` and derives the public point
//! `Q = d * P`. A [`Validator`] owns `Q` and checks signatures. Signatures are
//! the byte string `r ‖ s`, each half padded to the digest's output size.
//!
//! # Example
//!
//! ```
//! use gost::{DomainParameters, Signer, Streebog256, Validator};
//! use num_bigint::BigUint;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let params = DomainParameters::gost_test_256();
//! let signer = Signer::<Streebog256>::new(BigUint::from(0xC0FFEEu32), params);
//!
//! // Derive the corresponding validator
//! let validator = Validator::from(&signer);
//!
//! // Sign with an injected RNG (use `sign` for the OS RNG)
//! let mut rng = StdRng::seed_from_u64(42);
//! let signature = signer.sign_with_rng(&mut rng, b"hello there!").expect("signing failed");
//! assert_eq!(signature.len(), 64);
//!
//! assert!(validator.validate(b"hello there!", &signature));
//! assert!(!validator.validate(b"hello world!", &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Domain parameters are not validated; use a vetted parameter set
//! - Arithmetic is not constant time
//! - Nonces must come from a cryptographically secure RNG

mod constants;
mod errors;
mod keys;
mod params;
mod signatures;


pub use curve::Affine;
pub use errors::{GostError, Result};
pub use keys::{Signer, Validator};
pub use params::DomainParameters;
pub use signatures::Signature;
pub use streebog::{Streebog256, Streebog512};

//! Signature type, its wire encoding, and digest-to-scalar conversion.

use curve::{PrimeField, byte_len};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// A signature: the pair `(r, s)`, both in `[1, q-1]` when produced by a signer.
///
/// # Encoding
///
/// On the wire a signature is `r ‖ s`, each half a big-endian integer
/// left-padded with zeros to `half_len` bytes, where `half_len` is the output
/// size of the digest in use. There is no other framing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Encode as `r ‖ s` with `half_len` bytes per half.
    ///
    /// Returns `None` if either value needs more than `half_len` bytes.
    pub fn to_bytes(&self, half_len: usize) -> Option<Vec<u8>> {
        let mut out = Vec::with_capacity(2 * half_len);
        append_padded(&mut out, &self.r, half_len)?;
        append_padded(&mut out, &self.s, half_len)?;
        Some(out)
    }

    /// Split `bytes` at `half_len` and decode both halves big-endian.
    ///
    /// Returns `None` unless `bytes` is exactly `2 * half_len` long. No range
    /// check is made on the decoded values.
    pub fn from_bytes(bytes: &[u8], half_len: usize) -> Option<Self> {
        if bytes.len() != 2 * half_len {
            return None;
        }
        let (r, s) = bytes.split_at(half_len);
        Some(Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }
}

fn append_padded(out: &mut Vec<u8>, value: &BigUint, len: usize) -> Option<()> {
    let width = byte_len(value);
    if width > len {
        return None;
    }
    out.resize(out.len() + (len - width), 0);
    if width > 0 {
        out.extend_from_slice(&value.to_bytes_be());
    }
    Some(())
}

/// Computes `e = h mod q` from a message digest, read as a big-endian integer.
///
/// A zero remainder is replaced by one so the nonce term never vanishes.
pub(crate) fn digest_scalar(digest: &[u8], scalars: &PrimeField) -> BigUint {
    let e = scalars.reduce(&BigUint::from_bytes_be(digest));
    if e.is_zero() { BigUint::one() } else { e }
}

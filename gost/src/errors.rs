//! Error types for the signature scheme.

use thiserror::Error;

/// Errors that can occur while signing.
///
/// Validation never fails: a malformed signature and a wrong one both
/// validate to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GostError {
    /// The random source could not produce a nonce.
    ///
    /// Fatal to the `sign` call that hit it; the call may be repeated later.
    #[error("random source failed: {0}")]
    EntropyFailure(String),
}

pub type Result<T> = core::result::Result<T, GostError>;

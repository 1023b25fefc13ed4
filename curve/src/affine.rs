use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Affine point on a short Weierstrass curve.
///
/// The point at infinity has no affine coordinates; it is encoded as
/// `(0, 0)`, which is never on a curve with non-zero `b`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate, in `[0, p)`
    pub x: BigUint,
    /// The y-coordinate, in `[0, p)`
    pub y: BigUint,
}

impl Affine {
    /// Create a new affine point. Curve membership is not checked.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine { x, y }
    }

    /// The point at infinity (identity element).
    pub fn identity() -> Self {
        Affine {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl From<(u64, u64)> for Affine {
    fn from((x, y): (u64, u64)) -> Self {
        Affine::new(BigUint::from(x), BigUint::from(y))
    }
}

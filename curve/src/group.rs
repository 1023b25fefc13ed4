use num_bigint::BigUint;

/// Additive group law over points of type `Self::Point`.
///
/// Implementors carry whatever parameters the law needs (for a curve, the
/// field modulus and the `a` coefficient), so points stay plain data.
pub trait Group {
    type Point: Clone + PartialEq;

    fn identity(&self) -> Self::Point;
    fn is_identity(&self, point: &Self::Point) -> bool;
    fn double(&self, point: &Self::Point) -> Self::Point;
    fn add(&self, lhs: &Self::Point, rhs: &Self::Point) -> Self::Point;
    fn negate(&self, point: &Self::Point) -> Self::Point;

    /// `scalar * point` by double-and-add, most significant bit first.
    ///
    /// The loop runs once per bit of `scalar`.
    fn scalar_mul(&self, scalar: &BigUint, point: &Self::Point) -> Self::Point {
        let mut result = self.identity();

        for i in (0..scalar.bits()).rev() {
            result = self.double(&result);
            if scalar.bit(i) {
                result = self.add(&result, point);
            }
        }

        result
    }

    fn mul_u64(&self, point: &Self::Point, n: u64) -> Self::Point {
        if n == 0 {
            return self.identity();
        }
        if n == 1 {
            return point.clone();
        }

        let mut result = self.identity();
        let mut temp = point.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = self.add(&result, &temp);
            }
            temp = self.double(&temp);
            bits >>= 1;
        }

        result
    }

    fn multi_scalar_mul(&self, points: &[Self::Point], scalars: &[BigUint]) -> Self::Point {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        let mut result = self.identity();
        for (point, scalar) in points.iter().zip(scalars.iter()) {
            result = self.add(&result, &self.scalar_mul(scalar, point));
        }
        result
    }
}

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{Affine, Group, PrimeField};

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` over `GF(p)`.
///
/// `b` does not appear in the addition or doubling formulas, so it is not
/// stored. Points handed to the group law must lie on the curve; this is not
/// re-checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Curve {
    field: PrimeField,
    a: BigUint,
}

impl Curve {
    /// Create a curve over `GF(p)`. A negative `a` (e.g. `-3`) is reduced into `[0, p)`.
    pub fn new(p: BigUint, a: &BigInt) -> Self {
        let field = PrimeField::new(p);
        let a = field.reduce_signed(a);
        Curve { field, a }
    }

    /// The field modulus `p`.
    #[inline]
    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    /// The `a` coefficient, reduced into `[0, p)`.
    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }
}

impl Group for Curve {
    type Point = Affine;

    #[inline]
    fn identity(&self) -> Affine {
        Affine::identity()
    }

    #[inline]
    fn is_identity(&self, point: &Affine) -> bool {
        point.is_identity()
    }

    /// Point doubling: 2*P.
    fn double(&self, point: &Affine) -> Affine {
        if point.is_identity() {
            return point.clone();
        }

        // A point of order two
        if point.y.is_zero() {
            return Affine::identity();
        }

        let f = &self.field;

        // λ = (3x^2 + a) / (2y)
        let x2 = f.square(&point.x);
        let three_x2 = f.add(&f.add(&x2, &x2), &x2);
        let numerator = f.add(&three_x2, &self.a);
        let denominator = f.add(&point.y, &point.y);
        let lambda = f.mul(&numerator, &f.invert(&denominator));

        // x_r = λ^2 - 2x
        let x_r = f.sub(&f.sub(&f.square(&lambda), &point.x), &point.x);

        // y_r = λ(x - x_r) - y
        let y_r = f.sub(&f.mul(&lambda, &f.sub(&point.x, &x_r)), &point.y);

        Affine::new(x_r, y_r)
    }

    /// Point addition. Coincident operands are routed to `double`.
    fn add(&self, lhs: &Affine, rhs: &Affine) -> Affine {
        if rhs.is_identity() {
            return lhs.clone();
        }
        if lhs.is_identity() {
            return rhs.clone();
        }

        if lhs.x == rhs.x {
            if lhs.y == rhs.y {
                return self.double(lhs);
            } else {
                // Points are inverses
                return Affine::identity();
            }
        }

        let f = &self.field;

        // λ = (y2 - y1) / (x2 - x1)
        let numerator = f.sub(&rhs.y, &lhs.y);
        let denominator = f.sub(&rhs.x, &lhs.x);
        let lambda = f.mul(&numerator, &f.invert(&denominator));

        // x_r = λ^2 - x1 - x2
        let x_r = f.sub(&f.sub(&f.square(&lambda), &lhs.x), &rhs.x);

        // y_r = λ(x1 - x_r) - y1
        let y_r = f.sub(&f.mul(&lambda, &f.sub(&lhs.x, &x_r)), &lhs.y);

        Affine::new(x_r, y_r)
    }

    fn negate(&self, point: &Affine) -> Affine {
        if point.is_identity() {
            return point.clone();
        }
        Affine::new(point.x.clone(), self.field.neg(&point.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// y^2 = x^3 + 2x + 3 over GF(97); (3, 6) generates a subgroup of order 5.
    fn toy() -> (Curve, Affine) {
        (
            Curve::new(BigUint::from(97u32), &BigInt::from(2)),
            Affine::from((3, 6)),
        )
    }

    fn dec(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 10).expect("decimal literal")
    }

    /// The GOST R 34.10-2012 example curve and its base point.
    fn gost() -> (Curve, Affine, BigUint) {
        let p = dec("57896044618658097711785492504343953926634992332820282019728792003956564821041");
        let q = dec("57896044618658097711785492504343953927082934583725450622380973592137631069619");
        let g = Affine::new(
            BigUint::from(2u32),
            dec("4018974056539037503335449422937059775635739389905545080690979365213431566280"),
        );
        (Curve::new(p, &BigInt::from(7)), g, q)
    }

    /// Recover `b` from a known curve point, then test membership against it.
    fn on_curve(curve: &Curve, reference: &Affine, point: &Affine) -> bool {
        let f = curve.field();
        let rhs = |pt: &Affine| {
            let x3 = f.mul(&f.square(&pt.x), &pt.x);
            f.add(&x3, &f.mul(curve.a(), &pt.x))
        };
        let b = f.sub(&f.square(&reference.y), &rhs(reference));
        f.square(&point.y) == f.add(&rhs(point), &b)
    }

    #[test]
    fn test_point_addition_with_identity() {
        let (curve, g) = toy();
        let inf = Affine::identity();

        assert_eq!(curve.add(&g, &inf), g);
        assert_eq!(curve.add(&inf, &g), g);
        assert_eq!(curve.add(&inf, &inf), inf);
        assert_eq!(curve.double(&inf), inf);
    }

    #[test]
    fn test_toy_doubling() {
        let (curve, g) = toy();
        let g2 = curve.double(&g);

        assert_eq!(g2, Affine::from((80, 10)));
        assert_eq!(curve.add(&g, &g), g2);
    }

    #[test]
    fn test_toy_subgroup_order() {
        let (curve, g) = toy();

        assert_eq!(curve.mul_u64(&g, 5), Affine::identity());
        assert_eq!(curve.scalar_mul(&BigUint::from(5u32), &g), Affine::identity());
        assert_eq!(curve.mul_u64(&g, 4), Affine::from((3, 91)));
        assert_eq!(curve.mul_u64(&g, 6), g);
    }

    #[test]
    fn test_double_order_two_point() {
        // y^2 = x^3 - x over GF(23) contains (1, 0)
        let curve = Curve::new(BigUint::from(23u32), &BigInt::from(-1));
        let t = Affine::from((1, 0));

        assert_eq!(curve.a(), &BigUint::from(22u32));
        assert_eq!(curve.double(&t), Affine::identity());
        assert_eq!(curve.add(&t, &t), Affine::identity());
    }

    #[test]
    fn test_point_negation() {
        let (curve, g, _) = gost();
        let neg_g = curve.negate(&g);

        assert!(on_curve(&curve, &g, &neg_g));
        assert_eq!(curve.add(&g, &neg_g), Affine::identity());
        assert_eq!(curve.negate(&Affine::identity()), Affine::identity());
    }

    #[test]
    fn test_gost_small_multiples() {
        let (curve, g, _) = gost();
        let g2 = curve.double(&g);
        let g3 = curve.add(&g2, &g);

        assert_eq!(
            g2,
            Affine::new(
                dec("50606877315091697534123154322587307344885629048178308384543595937323387098984"),
                dec("15188977076580603066883910803631226286486513295669640340329199156223789343231"),
            )
        );
        assert_eq!(
            g3,
            Affine::new(
                dec("30820401120964062475063156042513005394868965472457617979151158257286813569321"),
                dec("21817265262811493584463354756282059005142983368863900707651219316555936083238"),
            )
        );
        assert!(on_curve(&curve, &g, &g2));
        assert!(on_curve(&curve, &g, &g3));
    }

    #[test]
    fn test_scalar_multiplication() {
        let (curve, g, _) = gost();
        let result = curve.scalar_mul(&BigUint::from(5u32), &g);

        // 5*G = G + G + G + G + G
        let mut expected = g.clone();
        for _ in 0..4 {
            expected = curve.add(&expected, &g);
        }
        assert_eq!(result, expected);
        assert!(on_curve(&curve, &g, &result));
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let (curve, g, _) = gost();

        assert_eq!(curve.scalar_mul(&BigUint::zero(), &g), Affine::identity());
        assert_eq!(curve.scalar_mul(&BigUint::from(1u32), &g), g);
    }

    #[test]
    fn test_scalar_mul_by_order() {
        let (curve, g, q) = gost();

        assert_eq!(curve.scalar_mul(&q, &g), Affine::identity());
        assert_eq!(curve.scalar_mul(&(&q + 1u32), &g), g);
    }

    #[test]
    fn test_negative_a_is_reduced() {
        let p = dec("6277101735386680763835789423207666416083908700390324961279");
        let curve = Curve::new(p.clone(), &BigInt::from(-3));
        let g = Affine::new(
            dec("602046282375688656758213480587526111916698976636884684818"),
            dec("174050332293622031404857552280219410364023488927386650641"),
        );

        assert_eq!(curve.a(), &(p - 3u32));
        assert_eq!(
            curve.double(&g),
            Affine::new(
                dec("5369744403678710563432458361254544170966096384586764429448"),
                dec("5429234379789071039750654906915254128254326554272718558123"),
            )
        );
    }

    #[test]
    fn test_multi_scalar_mul() {
        let (curve, g, _) = gost();
        let h = curve.mul_u64(&g, 17);

        let a = BigUint::from(7u32);
        let b = BigUint::from(11u32);

        let result = curve.multi_scalar_mul(&[g.clone(), h.clone()], &[a.clone(), b.clone()]);
        let expected = curve.add(&curve.scalar_mul(&a, &g), &curve.scalar_mul(&b, &h));

        assert_eq!(result, expected);
        assert_eq!(result, curve.mul_u64(&g, 7 + 11 * 17));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn mul_u64_matches_scalar_mul(n in any::<u64>()) {
            let (curve, g, _) = gost();
            prop_assert_eq!(curve.mul_u64(&g, n), curve.scalar_mul(&BigUint::from(n), &g));
        }

        #[test]
        fn scalar_mul_distributes(a in any::<u32>(), b in any::<u32>()) {
            let (curve, g, _) = gost();
            let a = BigUint::from(a);
            let b = BigUint::from(b);

            // (a + b) * G = a*G + b*G
            let left = curve.scalar_mul(&(&a + &b), &g);
            let right = curve.add(&curve.scalar_mul(&a, &g), &curve.scalar_mul(&b, &g));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn double_matches_add(n in 1u64..1_000_000) {
            let (curve, g, _) = gost();
            let point = curve.mul_u64(&g, n);
            prop_assert_eq!(curve.double(&point), curve.add(&point, &point));
            prop_assert!(on_curve(&curve, &g, &curve.double(&point)));
        }
    }
}

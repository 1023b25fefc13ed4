//! Domain parameter presets, as big-endian byte strings.

use hex_literal::hex;

/// Field modulus of the GOST R 34.10-2012 example curve, `2^255 + 0x431`.
pub(crate) const GOST_TEST_256_P: [u8; 32] =
    hex!("8000000000000000000000000000000000000000000000000000000000000431");

/// Linear coefficient `a` of the GOST R 34.10-2012 example curve.
pub(crate) const GOST_TEST_256_A: i64 = 7;

/// Order of the base point of the GOST R 34.10-2012 example curve.
///
/// The curve has cofactor one, so this is also the number of points.
pub(crate) const GOST_TEST_256_Q: [u8; 32] =
    hex!("8000000000000000000000000000000150fe8a1892976154c59cfc193accf5b3");

pub(crate) const GOST_TEST_256_PX: [u8; 32] =
    hex!("0000000000000000000000000000000000000000000000000000000000000002");

pub(crate) const GOST_TEST_256_PY: [u8; 32] =
    hex!("08e2a8a0e65147d4bd6316030e16d19c85c97f0a9ca267122b96abbcea7e8fc8");

/// Field modulus of NIST P-192, `2^192 - 2^64 - 1`.
pub(crate) const P192_P: [u8; 24] = hex!("fffffffffffffffffffffffffffffffeffffffffffffffff");

pub(crate) const P192_A: i64 = -3;

pub(crate) const P192_Q: [u8; 24] = hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831");

pub(crate) const P192_GX: [u8; 24] = hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012");

pub(crate) const P192_GY: [u8; 24] = hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811");

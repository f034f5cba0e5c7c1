/// BLS12-381 Curve Parameters
///
/// The constant table every other module reads from. Three immutable records
/// share one parameter family:
///
/// - [`G1_CURVE`]: `y^2 = x^3 + 4` over `Fq`
/// - [`G2_CURVE`]: the sextic twist `y^2 = x^3 + 4(1 + u)` over `Fq2`
/// - [`GT_CURVE`]: the base equation lifted to `Fq12`, where untwisted G2
///   points live during the Miller loop
///
/// Values are stored as little-endian 64-bit limbs and built on first use.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use once_cell::sync::Lazy;

use crate::fields::{Field, Fq, Fq12, Fq2};

fn from_limbs(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, limb| (acc << 64u32) + *limb)
}

fn fq(limbs: &[u64]) -> Fq {
    Fq::new(from_limbs(limbs))
}

/// Base field modulus q (381 bits).
pub static Q: Lazy<BigUint> = Lazy::new(|| {
    from_limbs(&[
        0xb9feffffffffaaab,
        0x1eabfffeb153ffff,
        0x6730d2a0f6b0f624,
        0x64774b84f38512bf,
        0x4b1ba7b6434bacd7,
        0x1a0111ea397fe69a,
    ])
});

/// Prime order n of G1, G2 and GT (255 bits).
pub static N: Lazy<BigUint> = Lazy::new(|| {
    from_limbs(&[
        0xffffffff00000001,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ])
});

/// Curve seed x. Negative for BLS12-381.
pub const SEED_ABS: u64 = 0xd201000000010000;

pub const EMBEDDING_DEGREE: u32 = 12;

const G1_X: [u64; 6] = [
    0xfb3af00adb22c6bb,
    0x6c55e83ff97a1aef,
    0xa14e3a3f171bac58,
    0xc3688c4f9774b905,
    0x2695638c4fa9ac0f,
    0x17f1d3a73197d794,
];

const G1_Y: [u64; 6] = [
    0x0caa232946c5e7e1,
    0xd03cc744a2888ae4,
    0x00db18cb2c04b3ed,
    0xfcf5e095d5d00af6,
    0xa09e30ed741d8ae4,
    0x08b3f481e3aaa0f1,
];

const G2_X_C0: [u64; 6] = [
    0xd48056c8c121bdb8,
    0x0bac0326a805bbef,
    0xb4510b647ae3d177,
    0xc6e47ad4fa403b02,
    0x260805272dc51051,
    0x024aa2b2f08f0a91,
];

const G2_X_C1: [u64; 6] = [
    0xe5ac7d055d042b7e,
    0x334cf11213945d57,
    0xb5da61bbdc7f5049,
    0x596bd0d09920b61a,
    0x7dacd3a088274f65,
    0x13e02b6052719f60,
];

const G2_Y_C0: [u64; 6] = [
    0xe193548608b82801,
    0x923ac9cc3baca289,
    0x6d429a695160d12c,
    0xadfd9baa8cbdd3a7,
    0x8cc9cdc6da2e351a,
    0x0ce5d527727d6e11,
];

const G2_Y_C1: [u64; 6] = [
    0xaaa9075ff05f79be,
    0x3f370d275cec1da1,
    0x267492ab572e99ab,
    0xcb3e287e85a763af,
    0x32acd2b02bc28b99,
    0x0606c4a02ea734cc,
];

/// sqrt(-3) in Fq.
const SQRT_N3: [u64; 5] = [
    0x5c03fffffffdfffd,
    0xbc2fb026c4140004,
    0xbb675277cdf12d11,
    0x74d38c0ed41eefd5,
    0xbe32ce5fbeed9ca3,
];

/// (sqrt(-3) - 1) / 2, a primitive cube root of unity in Fq.
const SQRT_N3_M1_O2: [u64; 5] = [
    0x2e01fffffffefffe,
    0xde17d813620a0002,
    0xddb3a93be6f89688,
    0xba69c6076a0f77ea,
    0x5f19672fdf76ce51,
];

const G1_COFACTOR: [u64; 2] = [0x8c00aaab0000aaab, 0x396c8c005555e156];

/// Effective cofactor of the twist.
const G2_COFACTOR: [u64; 10] = [
    0xe8020005aaa95551,
    0x59894c0adebbf6b4,
    0xe954cbc06689f6a3,
    0x2ec0ec69d7477c1a,
    0x6d82bf015d1212b0,
    0x329c2f178731db95,
    0x9986ff031508ffe1,
    0x88e2a8e9145ad768,
    0x584c6a0ea91b3528,
    0x0bc69f08f2ee75b3,
];

/// Immutable parameter record for one curve of the family. `a` and `b` live
/// in the coordinate field `F`; everything else is shared by all three curves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams<F: Field> {
    pub name: &'static str,
    pub q: BigUint,
    pub a: F,
    pub b: F,
    pub gx: Fq,
    pub gy: Fq,
    pub g2x: Fq2,
    pub g2y: Fq2,
    pub n: BigUint,
    pub h: BigUint,
    pub x: BigInt,
    pub k: u32,
    pub sqrt_n3: Fq,
    pub sqrt_n3m1o2: Fq,
}

impl<F: Field> CurveParams<F> {
    fn with_coefficients(name: &'static str, a: F, b: F, h: BigUint) -> Self {
        Self {
            name,
            q: Q.clone(),
            a,
            b,
            gx: fq(&G1_X),
            gy: fq(&G1_Y),
            g2x: Fq2::new(fq(&G2_X_C0), fq(&G2_X_C1)),
            g2y: Fq2::new(fq(&G2_Y_C0), fq(&G2_Y_C1)),
            n: N.clone(),
            h,
            x: -BigInt::from(SEED_ABS),
            k: EMBEDDING_DEGREE,
            sqrt_n3: fq(&SQRT_N3),
            sqrt_n3m1o2: fq(&SQRT_N3_M1_O2),
        }
    }

    /// Right-hand side of the curve equation, x^3 + a x + b.
    pub fn rhs(&self, x: &F) -> F {
        x.square() * x + self.a.clone() * x + &self.b
    }
}

pub static G1_CURVE: Lazy<CurveParams<Fq>> = Lazy::new(|| {
    CurveParams::with_coefficients(
        "BLS12-381 G1",
        Fq::zero(),
        Fq::from_u64(4),
        from_limbs(&G1_COFACTOR),
    )
});

pub static G2_CURVE: Lazy<CurveParams<Fq2>> = Lazy::new(|| {
    CurveParams::with_coefficients(
        "BLS12-381 G2",
        Fq2::zero(),
        Fq2::new(Fq::from_u64(4), Fq::from_u64(4)),
        from_limbs(&G2_COFACTOR),
    )
});

/// Untwisted points use the curve equation and `n` of this record. `h` is the
/// G1 cofactor, kept as a placeholder: it is not the cofactor of the curve over
/// Fq12 and nothing reads it.
pub static GT_CURVE: Lazy<CurveParams<Fq12>> = Lazy::new(|| {
    CurveParams::with_coefficients(
        "BLS12-381 over Fq12",
        Fq12::zero(),
        Fq12::from_u64(4),
        from_limbs(&G1_COFACTOR),
    )
});

pub fn parameters() -> &'static CurveParams<Fq> {
    &G1_CURVE
}

pub fn parameters_twist() -> &'static CurveParams<Fq2> {
    &G2_CURVE
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fq as ArkFq, Fr as ArkFr, G1Affine, G2Affine};
    use ark_ec::AffineRepr;
    use ark_ff::{BigInteger, PrimeField};

    fn ark_to_biguint(value: ArkFq) -> BigUint {
        BigUint::from_bytes_be(&value.into_bigint().to_bytes_be())
    }

    #[test]
    fn test_moduli_match_reference() {
        assert_eq!(*Q, BigUint::from_bytes_be(&ArkFq::MODULUS.to_bytes_be()));
        assert_eq!(*N, BigUint::from_bytes_be(&ArkFr::MODULUS.to_bytes_be()));
        assert_eq!(Q.bits(), 381);
        assert_eq!(N.bits(), 255);
    }

    #[test]
    fn test_g1_generator_matches_reference() {
        let g = G1Affine::generator();
        let params = parameters();
        assert_eq!(params.gx.value(), &ark_to_biguint(g.x));
        assert_eq!(params.gy.value(), &ark_to_biguint(g.y));
    }

    #[test]
    fn test_g2_generator_matches_reference() {
        let g = G2Affine::generator();
        let params = parameters_twist();
        assert_eq!(params.g2x.c0.value(), &ark_to_biguint(g.x.c0));
        assert_eq!(params.g2x.c1.value(), &ark_to_biguint(g.x.c1));
        assert_eq!(params.g2y.c0.value(), &ark_to_biguint(g.y.c0));
        assert_eq!(params.g2y.c1.value(), &ark_to_biguint(g.y.c1));
    }

    #[test]
    fn test_generators_satisfy_curve_equations() {
        let g1 = parameters();
        assert_eq!(g1.gy.square(), g1.rhs(&g1.gx));
        let g2 = parameters_twist();
        assert_eq!(g2.g2y.square(), g2.rhs(&g2.g2x));
    }

    #[test]
    fn test_square_root_constants() {
        let params = parameters();
        assert_eq!(params.sqrt_n3.square(), -Fq::from_u64(3));

        let beta = &params.sqrt_n3m1o2;
        assert_ne!(*beta, Fq::one());
        assert_eq!(beta.square() * beta, Fq::one());
        assert_eq!(beta.double() + Fq::one(), params.sqrt_n3);
    }

    #[test]
    fn test_gt_record_lifts_base_equation() {
        let gt = &*GT_CURVE;
        assert_eq!(gt.a, Fq12::zero());
        assert_eq!(gt.b, Fq12::from_fq(&parameters().b));
        assert_eq!(gt.n, parameters().n);
        let x = Fq12::from_fq(&parameters().gx);
        assert_eq!(gt.rhs(&x), Fq12::from_fq(&parameters().rhs(&parameters().gx)));
    }

    #[test]
    fn test_seed_and_embedding_degree() {
        let params = parameters();
        assert_eq!(params.x, -BigInt::from(0xd201000000010000u64));
        assert_eq!(params.k, 12);
        // n = x^4 - x^2 + 1
        let x2 = &params.x * &params.x;
        let n = &x2 * &x2 - &x2 + 1;
        assert_eq!(n, BigInt::from(params.n.clone()));
    }
}

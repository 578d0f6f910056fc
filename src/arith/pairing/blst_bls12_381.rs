use blstrs::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};

use crate::{BackendConfig, BackendId, CurveId, PairingBackend};

/// blst-backed BLS12-381 engine.
#[derive(Debug)]
pub struct BlstBls12_381;

impl PairingBackend for BlstBls12_381 {
    type Scalar = Scalar;
    type G1 = G1Projective;
    type G2 = G2Projective;
    type Target = Gt;

    const CONFIG: BackendConfig = BackendConfig {
        backend: BackendId::Blst,
        curve: CurveId::Bls12_381,
    };

    const G1_DST: &'static [u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";
    const G2_DST: &'static [u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";
    const SCALAR_DST: &'static [u8] = b"BILINEAR_BLS12381FR_XMD:SHA-256_";

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        blstrs::pairing(&G1Affine::from(g1), &G2Affine::from(g2))
    }
}

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};

use crate::{BackendConfig, BackendId, CurveId, PairingBackend};

/// Arkworks BLS12-381 engine.
#[derive(Debug)]
pub struct ArkBls12_381;

impl PairingBackend for ArkBls12_381 {
    type Scalar = Fr;
    type G1 = G1Projective;
    type G2 = G2Projective;
    type Target = PairingOutput<Bls12_381>;

    const CONFIG: BackendConfig = BackendConfig {
        backend: BackendId::Arkworks,
        curve: CurveId::Bls12_381,
    };

    const G1_DST: &'static [u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";
    const G2_DST: &'static [u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";
    const SCALAR_DST: &'static [u8] = b"BILINEAR_BLS12381FR_XMD:SHA-256_";

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Bls12_381::pairing(g1, g2)
    }
}

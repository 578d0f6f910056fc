use ark_bn254::{Bn254, Fr, G1Projective, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};

use crate::{BackendConfig, BackendId, CurveId, PairingBackend};

/// Arkworks BN254 engine.
#[derive(Debug)]
pub struct ArkBn254;

impl PairingBackend for ArkBn254 {
    type Scalar = Fr;
    type G1 = G1Projective;
    type G2 = G2Projective;
    type Target = PairingOutput<Bn254>;

    const CONFIG: BackendConfig = BackendConfig {
        backend: BackendId::Arkworks,
        curve: CurveId::Bn254,
    };

    const G1_DST: &'static [u8] = b"BILINEAR_BN254G1_XMD:SHA-256_TAI_";
    const G2_DST: &'static [u8] = b"BILINEAR_BN254G2_XMD:SHA-256_TAI_";
    const SCALAR_DST: &'static [u8] = b"BILINEAR_BN254FR_XMD:SHA-256_";

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Bn254::pairing(g1, g2)
    }
}

use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::BlstBls12_381;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;
#[cfg(feature = "ark_bls12381")]
pub use ark_bls12_381::ArkBls12_381;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;
#[cfg(feature = "ark_bn254")]
pub use ark_bn254::ArkBn254;

use crate::{BackendConfig, CurvePoint, FieldElement, TargetGroup};

/// Ties a scalar field, two source groups and a target group together with
/// the bilinear map between them.
///
/// Concrete engines ([`BlstBls12_381`], [`ArkBls12_381`], [`ArkBn254`]) are
/// zero-sized markers; the crate erases them behind
/// [`CurveBackend`](crate::backend::CurveBackend) so a curve can be picked at
/// runtime.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(feature = "blst")]
/// # {
/// use bilinear::arith::{BlstBls12_381, CurvePoint, PairingBackend};
///
/// type G1 = <BlstBls12_381 as PairingBackend>::G1;
/// type G2 = <BlstBls12_381 as PairingBackend>::G2;
///
/// // e(G1, G2) -> GT
/// let gt = BlstBls12_381::pairing(&G1::generator(), &G2::generator());
/// assert_eq!(gt, BlstBls12_381::target_generator());
/// # }
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Backend and curve this engine implements.
    const CONFIG: BackendConfig;

    /// Domain separation tags used when hashing into each group.
    const G1_DST: &'static [u8];
    const G2_DST: &'static [u8];
    const SCALAR_DST: &'static [u8];

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// `e(g1, g2)` for the standard generators, which generates GT.
    fn target_generator() -> Self::Target {
        Self::pairing(&Self::G1::generator(), &Self::G2::generator())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::PairingBackend;
    use crate::{CurvePoint, FieldElement, TargetGroup};

    fn bilinearity<B: PairingBackend>() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = B::Scalar::random(&mut rng);
        let b = B::Scalar::random(&mut rng);
        let p = B::G1::random(&mut rng);
        let q = B::G2::random(&mut rng);

        let lhs = B::pairing(&p.mul_scalar(&a), &q.mul_scalar(&b));
        let rhs = B::pairing(&p, &q).mul_scalar(&a.mul(&b));
        assert_eq!(lhs, rhs);

        let gt = B::target_generator();
        assert!(!gt.is_identity());
        assert!(gt.combine(&gt.inverse()).is_identity());
        assert!(B::pairing(&B::G1::identity(), &q).is_identity());

        let bytes = gt.to_bytes();
        assert_eq!(bytes.len(), B::Target::ENCODED_LEN);
        assert_eq!(B::Target::from_bytes(&bytes).unwrap(), gt);
        assert_eq!(B::Target::from_bytes_unchecked(&bytes).unwrap(), gt);
        assert!(B::Target::from_bytes(&bytes[1..]).is_err());

        assert!(B::CONFIG.ensure_supported().is_ok());
    }

    #[cfg(feature = "blst")]
    #[test]
    fn blst_bilinearity() {
        bilinearity::<super::BlstBls12_381>();
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn ark_bls12_381_bilinearity() {
        bilinearity::<super::ArkBls12_381>();
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn ark_bn254_bilinearity() {
        bilinearity::<super::ArkBn254>();
    }
}

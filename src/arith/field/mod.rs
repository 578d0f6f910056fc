use std::fmt::Debug;

use num_bigint::BigUint;
use rand_core::RngCore;
use sha2::{Digest, Sha256};

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the elliptic curve,
/// providing the operations the element layer forwards to the curve library.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(feature = "blst")]
/// # {
/// use bilinear::arith::FieldElement;
/// use blstrs::Scalar;
/// use rand::thread_rng;
///
/// let a = <Scalar as FieldElement>::random(&mut thread_rng());
/// let inv = FieldElement::invert(&a).expect("non-zero element");
/// assert!(FieldElement::is_one(&FieldElement::mul(&a, &inv)));
///
/// let bytes = FieldElement::to_bytes(&a);
/// let recovered = <Scalar as FieldElement>::from_bytes(&bytes).expect("valid bytes");
/// assert_eq!(recovered, a);
/// # }
/// ```
pub trait FieldElement: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Length of the canonical byte encoding.
    const ENCODED_LEN: usize;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Generates a random field element using the provided RNG.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    fn add(&self, other: &Self) -> Self;

    fn sub(&self, other: &Self) -> Self;

    fn neg(&self) -> Self;

    fn mul(&self, other: &Self) -> Self;

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Raises this element to a power given as little-endian 64-bit limbs.
    fn pow(&self, exp: &[u64]) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Canonical integer representative in `[0, r)`.
    fn to_biguint(&self) -> BigUint;

    /// Reduces an arbitrary non-negative integer modulo the field order.
    fn from_biguint(value: &BigUint) -> Self;

    /// Order `r` of the field.
    fn modulus() -> BigUint {
        Self::zero().sub(&Self::one()).to_biguint() + 1u32
    }

    /// Serializes this field element to its canonical byte representation.
    fn to_bytes(&self) -> Vec<u8>;

    /// Deserializes a field element from its canonical byte representation.
    ///
    /// Returns an error if the length is wrong or the value is not reduced
    /// modulo the field order.
    fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Deterministically maps a message to a field element.
    ///
    /// Expands `dst || msg` to 64 bytes with SHA-256 and reduces the result
    /// modulo the field order, so the output bias is negligible.
    fn hash_to_field(dst: &[u8], msg: &[u8]) -> Self {
        let mut wide = [0u8; 64];
        for (block, chunk) in wide.chunks_mut(32).enumerate() {
            let digest = Sha256::new()
                .chain_update([block as u8])
                .chain_update((dst.len() as u64).to_be_bytes())
                .chain_update(dst)
                .chain_update(msg)
                .finalize();
            chunk.copy_from_slice(&digest);
        }
        Self::from_biguint(&BigUint::from_bytes_be(&wide))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{SeedableRng, rngs::StdRng};

    use super::FieldElement;

    fn field_laws<F: FieldElement>() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = F::random(&mut rng);
        let b = F::random(&mut rng);
        assert_eq!(a.add(&b), b.add(&a));
        assert!(a.add(&a.neg()).is_zero());
        assert!(a.mul(&a.invert().expect("non-zero")).is_one());
        assert!(F::zero().invert().is_none());

        let r = F::modulus();
        assert!(F::from_biguint(&r).is_zero());
        assert!(F::from_biguint(&(r.clone() + 5u32)) == F::from_biguint(&BigUint::from(5u32)));
        assert_eq!(F::from_biguint(&a.to_biguint()), a);

        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), F::ENCODED_LEN);
        assert_eq!(F::from_bytes(&bytes).expect("canonical bytes"), a);
        assert!(F::from_bytes(&bytes[1..]).is_err());

        let cube = a.mul(&a).mul(&a);
        assert_eq!(a.pow(&[3]), cube);

        assert_eq!(F::hash_to_field(b"dst", b"msg"), F::hash_to_field(b"dst", b"msg"));
        assert_ne!(F::hash_to_field(b"dst", b"msg"), F::hash_to_field(b"dst2", b"msg"));
    }

    #[cfg(feature = "blst")]
    #[test]
    fn blst_scalar_field_laws() {
        field_laws::<blstrs::Scalar>();
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn ark_bls12_381_scalar_field_laws() {
        field_laws::<ark_bls12_381::Fr>();
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn ark_bn254_scalar_field_laws() {
        field_laws::<ark_bn254::Fr>();
    }
}

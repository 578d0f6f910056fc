use std::fmt::Debug;

use rand_core::RngCore;

use crate::{BackendError, FieldElement};

#[cfg(feature = "blst")]
mod blst_bls12_381;

#[cfg(feature = "ark_bls12381")]
mod ark_bls12_381;

#[cfg(feature = "ark_bn254")]
mod ark_bn254;

/// Elliptic curve point abstraction for the G1 and G2 groups.
///
/// Points are held in projective form; the byte encodings are those of the
/// underlying library's affine representation.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(feature = "blst")]
/// # {
/// use bilinear::arith::{CurvePoint, FieldElement};
/// use blstrs::{G1Projective, Scalar};
/// use rand::thread_rng;
///
/// let scalar = <Scalar as FieldElement>::random(&mut thread_rng());
/// let g = <G1Projective as CurvePoint<Scalar>>::generator();
/// let point = CurvePoint::mul_scalar(&g, &scalar);
///
/// let bytes = CurvePoint::to_compressed(&point);
/// let back = <G1Projective as CurvePoint<Scalar>>::from_compressed(&bytes).unwrap();
/// assert_eq!(back, point);
/// # }
/// ```
pub trait CurvePoint<F: FieldElement>: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Length of the uncompressed (full) affine encoding.
    const UNCOMPRESSED_LEN: usize;
    /// Length of the compressed affine encoding.
    const COMPRESSED_LEN: usize;
    /// Byte index and bit mask of the flag carrying the sign of `y` in the
    /// compressed encoding.
    const Y_SIGN_FLAG: (usize, u8);

    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    fn is_identity(&self) -> bool;

    fn add(&self, other: &Self) -> Self;

    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Samples a uniformly random point of the prime-order subgroup.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::generator().mul_scalar(&F::random(rng))
    }

    /// Deterministically maps `msg` into the prime-order subgroup under the
    /// domain separation tag `dst`.
    fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<Self, BackendError>;

    fn to_uncompressed(&self) -> Vec<u8>;

    /// Decodes an uncompressed point, checking curve and subgroup membership.
    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Decodes an uncompressed point without the subgroup check. Only for
    /// bytes this crate produced itself.
    fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<Self, BackendError>;

    fn to_compressed(&self) -> Vec<u8>;

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Compressed encoding with the `y` sign flag cleared.
    fn to_x_only(&self) -> Vec<u8> {
        let mut bytes = self.to_compressed();
        let (index, mask) = Self::Y_SIGN_FLAG;
        bytes[index] &= !mask;
        bytes
    }

    /// Recovers one of the two points sharing the encoded `x` coordinate.
    fn from_x_only(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != Self::COMPRESSED_LEN {
            return Err(BackendError::Serialization("invalid encoding length"));
        }
        let (index, mask) = Self::Y_SIGN_FLAG;
        if bytes[index] & mask != 0 {
            return Err(BackendError::Serialization("x-only encoding carries a y sign"));
        }
        Self::from_compressed(bytes)
    }

    /// Affine `x` and `y` coordinates as big-endian base field bytes. The
    /// identity reports both coordinates as zero.
    fn coordinates(&self) -> Vec<Vec<u8>>;
}

/// Pairing target group (GT) abstraction.
///
/// GT is a multiplicative subgroup of the extension field; `combine` is the
/// group operation and `mul_scalar` is exponentiation.
pub trait TargetGroup: Clone + Copy + Send + Sync + Debug + PartialEq + 'static {
    /// Scalar field type for scalar multiplication.
    type Scalar: FieldElement;

    /// Length of the byte encoding.
    const ENCODED_LEN: usize;

    /// Returns the multiplicative identity element.
    fn identity() -> Self;

    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Combines (multiplies) two target group elements.
    fn combine(&self, other: &Self) -> Self;

    fn inverse(&self) -> Self;

    /// Performs scalar multiplication (exponentiation in multiplicative notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    fn to_bytes(&self) -> Vec<u8>;

    /// Decodes an element, checking membership of the order-`r` subgroup.
    fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError>;

    /// Decodes an element without the subgroup check.
    fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self, BackendError> {
        Self::from_bytes(bytes)
    }
}

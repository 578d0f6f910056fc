//! Shared plumbing for the Arkworks-backed curves.
//!
//! BLS12-381 and BN254 differ only in constants and in how they hash to the
//! curve, so the trait impls in the per-curve modules delegate to these
//! generic helpers.

use ark_ec::short_weierstrass::{Affine, Projective, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{AdditiveGroup, BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use num_bigint::BigUint;
use rand_core::RngCore;
use sha2::{Digest, Sha256};

use crate::BackendError;

pub(crate) fn sample_field<F: PrimeField, R: RngCore + ?Sized>(rng: &mut R) -> F {
    // 64 bytes keeps the modular bias negligible for fields up to 384 bits
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    F::from_le_bytes_mod_order(&bytes)
}

pub(crate) fn field_to_biguint<F: PrimeField>(value: &F) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

pub(crate) fn field_from_biguint<F: PrimeField>(value: &BigUint) -> F {
    F::from_le_bytes_mod_order(&value.to_bytes_le())
}

pub(crate) fn field_modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
}

pub(crate) fn encode<T: CanonicalSerialize>(value: &T, compress: Compress) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(value.serialized_size(compress));
    value
        .serialize_with_mode(&mut bytes, compress)
        .expect("in-memory serialization should not fail");
    bytes
}

pub(crate) fn decode<T: CanonicalDeserialize + CanonicalSerialize>(
    bytes: &[u8],
    expected_len: usize,
    compress: Compress,
    validate: Validate,
) -> Result<T, BackendError> {
    if bytes.len() != expected_len {
        return Err(BackendError::Serialization("invalid encoding length"));
    }
    T::deserialize_with_mode(bytes, compress, validate)
        .map_err(|_| BackendError::Serialization("bytes do not encode a group element"))
}

/// Affine `x` and `y` of a point as big-endian bytes. Arkworks writes field
/// elements little-endian, so the encodings are reversed.
pub(crate) fn coordinates<P: SWCurveConfig>(point: &Projective<P>) -> Vec<Vec<u8>> {
    let affine = point.into_affine();
    let (x, y) = if affine.is_zero() {
        (<P::BaseField as AdditiveGroup>::ZERO, <P::BaseField as AdditiveGroup>::ZERO)
    } else {
        (affine.x, affine.y)
    };
    [x, y]
        .iter()
        .map(|c| {
            let mut bytes = encode(c, Compress::No);
            bytes.reverse();
            bytes
        })
        .collect()
}

/// Try-and-increment hashing onto a short Weierstrass curve.
///
/// Candidate x coordinates are derived from `SHA-256(dst || counter || msg)`
/// until one lies on the curve; the point is then moved into the prime-order
/// subgroup by clearing the cofactor.
pub(crate) fn try_and_increment<P, X>(
    dst: &[u8],
    msg: &[u8],
    candidate: X,
) -> Result<Projective<P>, BackendError>
where
    P: SWCurveConfig,
    X: Fn(&dyn Fn(u8) -> [u8; 32]) -> P::BaseField,
{
    for counter in 0..=u8::MAX {
        let block = |index: u8| -> [u8; 32] {
            Sha256::new()
                .chain_update((dst.len() as u64).to_be_bytes())
                .chain_update(dst)
                .chain_update([counter, index])
                .chain_update(msg)
                .finalize()
                .into()
        };
        let x = candidate(&block);
        if let Some(point) = Affine::<P>::get_point_from_x_unchecked(x, false) {
            let point = point.clear_cofactor();
            if !point.is_zero() {
                return Ok(point.into_group());
            }
        }
    }
    Err(BackendError::Math("hash to curve found no valid point"))
}

pub(crate) fn point_to_bytes<P: SWCurveConfig>(point: &Projective<P>, compress: Compress) -> Vec<u8> {
    encode(&point.into_affine(), compress)
}

pub(crate) fn point_from_bytes<P: SWCurveConfig>(
    bytes: &[u8],
    expected_len: usize,
    compress: Compress,
    validate: Validate,
) -> Result<Projective<P>, BackendError> {
    decode::<Affine<P>>(bytes, expected_len, compress, validate).map(Affine::into_group)
}

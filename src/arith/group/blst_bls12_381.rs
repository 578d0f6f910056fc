//! blst-backed G1, G2 and GT for BLS12-381.
//!
//! The traits are implemented directly on the `blstrs` projective types.
//! Encodings follow the Zcash BLS12-381 format: the three high bits of the
//! first byte carry the compression, infinity and `y` sign flags.
//!
//! # Feature
//!
//! Compiled when the Cargo feature `blst` is enabled.

use std::io::Cursor;

use blstrs::{Compress, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar};
use group::Group;

use crate::{BackendError, CurvePoint, TargetGroup};

const FLAG_BITS: u8 = 0xe0;

/// Encoding of the GT identity. Torus compression maps `c0 + c1·w` to
/// `(1 + c0) / c1`, which is undefined at the identity (`c1 = 0`) and never
/// zero for an element of norm one.
const GT_IDENTITY: [u8; 288] = [0; 288];

fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], BackendError> {
    bytes
        .try_into()
        .map_err(|_| BackendError::Serialization("invalid encoding length"))
}

fn not_on_curve() -> BackendError {
    BackendError::Serialization("bytes do not encode a group element")
}

fn split_coordinates(mut uncompressed: Vec<u8>) -> Vec<Vec<u8>> {
    uncompressed[0] &= !FLAG_BITS;
    let y = uncompressed.split_off(uncompressed.len() / 2);
    vec![uncompressed, y]
}

impl CurvePoint<Scalar> for G1Projective {
    const UNCOMPRESSED_LEN: usize = 96;
    const COMPRESSED_LEN: usize = 48;
    const Y_SIGN_FLAG: (usize, u8) = (0, 0x20);

    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        *self + other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        *self * scalar
    }

    fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<Self, BackendError> {
        Ok(G1Projective::hash_to_curve(msg, dst, &[]))
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        G1Affine::from(self).to_uncompressed().to_vec()
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let affine: Option<G1Affine> = G1Affine::from_uncompressed(&fixed(bytes)?).into();
        affine.map(Into::into).ok_or_else(not_on_curve)
    }

    fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<Self, BackendError> {
        let affine: Option<G1Affine> =
            G1Affine::from_uncompressed_unchecked(&fixed(bytes)?).into();
        affine.map(Into::into).ok_or_else(not_on_curve)
    }

    fn to_compressed(&self) -> Vec<u8> {
        G1Affine::from(self).to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let affine: Option<G1Affine> = G1Affine::from_compressed(&fixed(bytes)?).into();
        affine.map(Into::into).ok_or_else(not_on_curve)
    }

    fn coordinates(&self) -> Vec<Vec<u8>> {
        split_coordinates(CurvePoint::to_uncompressed(self))
    }
}

impl CurvePoint<Scalar> for G2Projective {
    const UNCOMPRESSED_LEN: usize = 192;
    const COMPRESSED_LEN: usize = 96;
    const Y_SIGN_FLAG: (usize, u8) = (0, 0x20);

    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        *self + other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        *self * scalar
    }

    fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<Self, BackendError> {
        Ok(G2Projective::hash_to_curve(msg, dst, &[]))
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        G2Affine::from(self).to_uncompressed().to_vec()
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let affine: Option<G2Affine> = G2Affine::from_uncompressed(&fixed(bytes)?).into();
        affine.map(Into::into).ok_or_else(not_on_curve)
    }

    fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<Self, BackendError> {
        let affine: Option<G2Affine> =
            G2Affine::from_uncompressed_unchecked(&fixed(bytes)?).into();
        affine.map(Into::into).ok_or_else(not_on_curve)
    }

    fn to_compressed(&self) -> Vec<u8> {
        G2Affine::from(self).to_compressed().to_vec()
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        let affine: Option<G2Affine> = G2Affine::from_compressed(&fixed(bytes)?).into();
        affine.map(Into::into).ok_or_else(not_on_curve)
    }

    fn coordinates(&self) -> Vec<Vec<u8>> {
        split_coordinates(CurvePoint::to_uncompressed(self))
    }
}

impl TargetGroup for Gt {
    type Scalar = Scalar;

    // torus-compressed Fp12
    const ENCODED_LEN: usize = 288;

    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn is_identity(&self) -> bool {
        <Gt as Group>::is_identity(self).into()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + other
    }

    fn inverse(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        *self * scalar
    }

    fn to_bytes(&self) -> Vec<u8> {
        if TargetGroup::is_identity(self) {
            return GT_IDENTITY.to_vec();
        }
        let mut bytes = Vec::with_capacity(Self::ENCODED_LEN);
        self.write_compressed(&mut bytes)
            .expect("in-memory serialization should not fail");
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(BackendError::Serialization("invalid encoding length"));
        }
        if bytes == GT_IDENTITY.as_slice() {
            return Ok(<Gt as Group>::identity());
        }
        Gt::read_compressed(&mut Cursor::new(bytes))
            .map_err(|_| BackendError::Serialization("invalid GT bytes"))
    }
}

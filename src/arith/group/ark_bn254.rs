//! Arkworks BN254 group operations.
//!
//! Implements [`CurvePoint`] for the Arkworks projective points and
//! [`TargetGroup`] for the pairing output. BN254 has no standard isogeny
//! map in Arkworks, so hashing is try-and-increment over SHA-256 followed by
//! cofactor clearing. Compressed encodings carry the Arkworks flags in the top
//! bits of the last byte.
//!
//! # Feature Flag
//!
//! This module is only available when the `ark_bn254` feature is enabled.

use ark_bn254::{g1, g2, Bn254, Fq, Fq2, Fr, G1Projective, G2Projective};
use ark_ec::short_weierstrass::Projective;
use ark_ec::pairing::PairingOutput;
use ark_ec::PrimeGroup;
use ark_ff::{PrimeField, Zero};
use ark_serialize::{Compress, Validate};

use crate::arith::arkworks::{
    coordinates, decode, encode, point_from_bytes, point_to_bytes, try_and_increment,
};
use crate::{BackendError, CurvePoint, TargetGroup};

/// Target group type for the Arkworks BN254 backend.
pub type Gt = PairingOutput<Bn254>;

impl CurvePoint<Fr> for Projective<g1::Config> {
    const UNCOMPRESSED_LEN: usize = 64;
    const COMPRESSED_LEN: usize = 32;
    const Y_SIGN_FLAG: (usize, u8) = (31, 0x80);

    fn identity() -> Self {
        G1Projective::zero()
    }

    fn generator() -> Self {
        <G1Projective as PrimeGroup>::generator()
    }

    fn is_identity(&self) -> bool {
        Zero::is_zero(self)
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

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        *self * scalar
    }

    fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<Self, BackendError> {
        try_and_increment(dst, msg, |block| Fq::from_be_bytes_mod_order(&block(0)))
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        point_to_bytes(self, Compress::No)
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        point_from_bytes(bytes, Self::UNCOMPRESSED_LEN, Compress::No, Validate::Yes)
    }

    fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<Self, BackendError> {
        point_from_bytes(bytes, Self::UNCOMPRESSED_LEN, Compress::No, Validate::No)
    }

    fn to_compressed(&self) -> Vec<u8> {
        point_to_bytes(self, Compress::Yes)
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        point_from_bytes(bytes, Self::COMPRESSED_LEN, Compress::Yes, Validate::Yes)
    }

    fn coordinates(&self) -> Vec<Vec<u8>> {
        coordinates(self)
    }
}

impl CurvePoint<Fr> for Projective<g2::Config> {
    const UNCOMPRESSED_LEN: usize = 128;
    const COMPRESSED_LEN: usize = 64;
    const Y_SIGN_FLAG: (usize, u8) = (63, 0x80);

    fn identity() -> Self {
        G2Projective::zero()
    }

    fn generator() -> Self {
        <G2Projective as PrimeGroup>::generator()
    }

    fn is_identity(&self) -> bool {
        Zero::is_zero(self)
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

    fn mul_scalar(&self, scalar: &Fr) -> Self {
        *self * scalar
    }

    fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<Self, BackendError> {
        try_and_increment(dst, msg, |block| {
            Fq2::new(
                Fq::from_be_bytes_mod_order(&block(0)),
                Fq::from_be_bytes_mod_order(&block(1)),
            )
        })
    }

    fn to_uncompressed(&self) -> Vec<u8> {
        point_to_bytes(self, Compress::No)
    }

    fn from_uncompressed(bytes: &[u8]) -> Result<Self, BackendError> {
        point_from_bytes(bytes, Self::UNCOMPRESSED_LEN, Compress::No, Validate::Yes)
    }

    fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<Self, BackendError> {
        point_from_bytes(bytes, Self::UNCOMPRESSED_LEN, Compress::No, Validate::No)
    }

    fn to_compressed(&self) -> Vec<u8> {
        point_to_bytes(self, Compress::Yes)
    }

    fn from_compressed(bytes: &[u8]) -> Result<Self, BackendError> {
        point_from_bytes(bytes, Self::COMPRESSED_LEN, Compress::Yes, Validate::Yes)
    }

    fn coordinates(&self) -> Vec<Vec<u8>> {
        coordinates(self)
    }
}

impl TargetGroup for Gt {
    type Scalar = Fr;

    // twelve 32-byte base field coefficients
    const ENCODED_LEN: usize = 384;

    fn identity() -> Self {
        <Gt as Zero>::zero()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + other
    }

    fn inverse(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        self.mul_bigint(scalar.into_bigint())
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode(self, Compress::No)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError> {
        decode(bytes, Self::ENCODED_LEN, Compress::No, Validate::Yes)
    }

    fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self, BackendError> {
        decode(bytes, Self::ENCODED_LEN, Compress::No, Validate::No)
    }
}

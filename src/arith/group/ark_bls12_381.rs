//! Arkworks BLS12-381 group operations.
//!
//! Implements [`CurvePoint`] for the Arkworks projective points and
//! [`TargetGroup`] for the pairing output. Hashing uses the RFC 9380
//! `XMD:SHA-256` suites with the Wahby-Boneh isogeny maps, and point
//! encodings are the Zcash-compatible ones `ark-bls12-381` ships.
//!
//! # Feature Flag
//!
//! This module is only available when the `ark_bls12381` feature is enabled.

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective, g1, g2};
use ark_ec::short_weierstrass::Projective;
use ark_ec::hashing::curve_maps::wb::WBMap;
use ark_ec::hashing::map_to_curve_hasher::MapToCurveBasedHasher;
use ark_ec::hashing::HashToCurve;
use ark_ec::pairing::PairingOutput;
use ark_ec::PrimeGroup;
use ark_ff::field_hashers::DefaultFieldHasher;
use ark_ff::{PrimeField, Zero};
use ark_serialize::{Compress, Validate};
use sha2::Sha256;

use crate::arith::arkworks::{coordinates, decode, encode, point_from_bytes, point_to_bytes};
use crate::{BackendError, CurvePoint, TargetGroup};

type G1Hasher = MapToCurveBasedHasher<G1Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g1::Config>>;
type G2Hasher = MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256, 128>, WBMap<g2::Config>>;

/// Target group type for the Arkworks BLS12-381 backend.
pub type Gt = PairingOutput<Bls12_381>;

fn hash_error(_: ark_ec::hashing::HashToCurveError) -> BackendError {
    BackendError::Math("hash to curve failed")
}

impl CurvePoint<Fr> for Projective<g1::Config> {
    const UNCOMPRESSED_LEN: usize = 96;
    const COMPRESSED_LEN: usize = 48;
    const Y_SIGN_FLAG: (usize, u8) = (0, 0x20);

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
        let hasher = G1Hasher::new(dst).map_err(hash_error)?;
        hasher.hash(msg).map(Into::into).map_err(hash_error)
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
    const UNCOMPRESSED_LEN: usize = 192;
    const COMPRESSED_LEN: usize = 96;
    const Y_SIGN_FLAG: (usize, u8) = (0, 0x20);

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
        let hasher = G2Hasher::new(dst).map_err(hash_error)?;
        hasher.hash(msg).map(Into::into).map_err(hash_error)
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

    // twelve 48-byte base field coefficients
    const ENCODED_LEN: usize = 576;

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

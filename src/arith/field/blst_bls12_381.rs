//! blst-backed scalar field for BLS12-381.
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::Scalar;
use ff::Field;
use num_bigint::BigUint;
use rand_core::RngCore;

use crate::{BackendError, FieldElement};

impl FieldElement for Scalar {
    const ENCODED_LEN: usize = 32;

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        <Scalar as Field>::random(rng)
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn pow(&self, exp: &[u64]) -> Self {
        self.pow_vartime(exp)
    }

    fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_bytes_le())
    }

    fn from_biguint(value: &BigUint) -> Self {
        let reduced = value % Self::modulus();
        let mut bytes = [0u8; 32];
        let le = reduced.to_bytes_le();
        bytes[..le.len()].copy_from_slice(&le);
        // reduced < r, so the canonical decoding always succeeds
        Option::<Scalar>::from(Scalar::from_bytes_le(&bytes)).unwrap_or(Scalar::ZERO)
    }

    fn modulus() -> BigUint {
        BigUint::from_bytes_le(&(-Scalar::ONE).to_bytes_le()) + 1u32
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_bytes_be().to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError> {
        let repr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| BackendError::Serialization("invalid scalar length"))?;
        Option::<Scalar>::from(Scalar::from_bytes_be(&repr))
            .ok_or(BackendError::Serialization("invalid scalar bytes"))
    }
}

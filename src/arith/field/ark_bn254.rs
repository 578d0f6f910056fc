use ark_bn254::Fr;
use ark_ff::{Field, One, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;
use rand_core::RngCore;

use crate::arith::arkworks::{field_from_biguint, field_modulus, field_to_biguint, sample_field};
use crate::{BackendError, FieldElement};

impl FieldElement for Fr {
    const ENCODED_LEN: usize = 32;

    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        sample_field(rng)
    }

    fn add(&self, other: &Self) -> Self {
        *self + other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - other
    }

    fn neg(&self) -> Self {
        -*self
    }

    fn mul(&self, other: &Self) -> Self {
        *self * other
    }

    fn invert(&self) -> Option<Self> {
        self.inverse()
    }

    fn pow(&self, exp: &[u64]) -> Self {
        Field::pow(self, exp)
    }

    fn to_biguint(&self) -> BigUint {
        field_to_biguint(self)
    }

    fn from_biguint(value: &BigUint) -> Self {
        field_from_biguint(value)
    }

    fn modulus() -> BigUint {
        field_modulus::<Fr>()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::ENCODED_LEN);
        self.serialize_compressed(&mut bytes)
            .expect("scalar serialization");
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(BackendError::Serialization("invalid scalar length"));
        }
        Self::deserialize_compressed(bytes)
            .map_err(|_| BackendError::Serialization("invalid scalar bytes"))
    }
}

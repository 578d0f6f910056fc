//! Runtime-selectable curve backends.
//!
//! The typed traits in [`arith`](crate::arith) fix the curve at compile time.
//! A [`Pairing`](crate::Pairing) picks its curve from a textual description
//! at runtime, so this module erases them behind the object-safe
//! [`CurveBackend`] trait. Values cross that boundary as byte payloads:
//!
//! - G1, G2: the library's uncompressed affine encoding
//! - GT: the library's encoding of the extension field element
//! - Fr: the canonical 32-byte scalar encoding
//!
//! Payloads are only ever produced by a backend, so they are re-read without
//! subgroup checks. Untrusted bytes go through [`CurveBackend::decode`],
//! which validates them.
//!
//! The backend performs no group-identity checks: callers resolve every
//! operation through [`dispatch`](crate::dispatch) first.

use core::fmt::Debug;
use core::marker::PhantomData;
use std::sync::Arc;

use num_bigint::BigUint;
use rand_core::RngCore;
use tracing::instrument;

use crate::arith::{CurvePoint, FieldElement, PairingBackend, TargetGroup};
use crate::config::{BackendConfig, BackendId, CurveId};
use crate::errors::BackendError;
use crate::group::GroupKind;

/// Byte encodings an element can be exported in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Encoding {
    /// The library's full encoding; available for every group.
    Full,
    /// Compressed point encoding (G1 and G2 only).
    Compressed,
    /// Compressed encoding without the `y` sign (G1 and G2 only). Decoding
    /// recovers the point only up to sign.
    XOnly,
}

/// Byte-level arithmetic over one curve.
///
/// Every method takes the [`GroupKind`] of its operands; the payloads must be
/// of that kind. G1, G2 and GT are treated as groups with a single operation
/// (`add`, `sub`, `neg`, `scale`). Only Fr additionally supports
/// `field_mul`, `field_invert` and `field_pow`.
pub trait CurveBackend: Send + Sync + Debug {
    fn config(&self) -> BackendConfig;

    /// Order `r` shared by G1, G2, GT and Fr.
    fn order(&self) -> &BigUint;

    /// Whether G1 and G2 coincide.
    fn is_symmetric(&self) -> bool {
        false
    }

    /// Length of the given encoding, or `None` where the group has none.
    fn encoded_len(&self, kind: GroupKind, encoding: Encoding) -> Option<usize>;

    /// Identity of the group: the point at infinity, GT's one, or Fr's zero.
    fn identity(&self, kind: GroupKind) -> Vec<u8>;

    /// Standard generator; the multiplicative one for Fr.
    fn generator(&self, kind: GroupKind) -> Vec<u8>;

    fn random(&self, kind: GroupKind, rng: &mut dyn RngCore) -> Vec<u8>;

    /// Deterministically maps `msg` into the group.
    fn hash(&self, kind: GroupKind, msg: &[u8]) -> Result<Vec<u8>, BackendError>;

    fn add(&self, kind: GroupKind, a: &[u8], b: &[u8]) -> Result<Vec<u8>, BackendError>;

    fn sub(&self, kind: GroupKind, a: &[u8], b: &[u8]) -> Result<Vec<u8>, BackendError>;

    fn neg(&self, kind: GroupKind, a: &[u8]) -> Result<Vec<u8>, BackendError>;

    /// Raises a group element to a scalar power, or multiplies two scalars.
    fn scale(&self, kind: GroupKind, a: &[u8], scalar: &[u8]) -> Result<Vec<u8>, BackendError>;

    fn field_mul(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>, BackendError>;

    /// Inverse of a scalar, `None` for zero.
    fn field_invert(&self, a: &[u8]) -> Result<Option<Vec<u8>>, BackendError>;

    /// `a^exp` in Fr for an exponent given as an integer.
    fn field_pow(&self, a: &[u8], exp: &BigUint) -> Result<Vec<u8>, BackendError>;

    /// Reduces a non-negative integer modulo `r` into a scalar payload.
    fn scalar_from_int(&self, value: &BigUint) -> Vec<u8>;

    fn scalar_to_int(&self, scalar: &[u8]) -> Result<BigUint, BackendError>;

    /// `e(g1, g2)`.
    fn pairing(&self, g1: &[u8], g2: &[u8]) -> Result<Vec<u8>, BackendError>;

    /// Exports a payload in the given encoding.
    fn encode(
        &self,
        kind: GroupKind,
        payload: &[u8],
        encoding: Encoding,
    ) -> Result<Vec<u8>, BackendError>;

    /// Validates externally supplied bytes and returns the payload.
    fn decode(
        &self,
        kind: GroupKind,
        bytes: &[u8],
        encoding: Encoding,
    ) -> Result<Vec<u8>, BackendError>;

    /// Affine coordinates of a G1 or G2 payload.
    fn coordinates(&self, kind: GroupKind, payload: &[u8]) -> Result<Vec<Vec<u8>>, BackendError>;
}

/// Builds the backend for `config`, failing when the combination is invalid
/// or not compiled in.
pub fn engine_for(config: &BackendConfig) -> Result<Arc<dyn CurveBackend>, BackendError> {
    config.ensure_supported()?;
    match (config.backend, config.curve) {
        #[cfg(feature = "blst")]
        (BackendId::Blst, CurveId::Bls12_381) => {
            Ok(Arc::new(Engine::<crate::arith::BlstBls12_381>::new()))
        }
        #[cfg(feature = "ark_bls12381")]
        (BackendId::Arkworks, CurveId::Bls12_381) => {
            Ok(Arc::new(Engine::<crate::arith::ArkBls12_381>::new()))
        }
        #[cfg(feature = "ark_bn254")]
        (BackendId::Arkworks, CurveId::Bn254) => {
            Ok(Arc::new(Engine::<crate::arith::ArkBn254>::new()))
        }
        _ => Err(BackendError::UnsupportedFeature(
            "backend is not compiled into this build",
        )),
    }
}

/// A decoded payload.
enum Value<B: PairingBackend> {
    G1(B::G1),
    G2(B::G2),
    Gt(B::Target),
    Fr(B::Scalar),
}

/// [`CurveBackend`] over a typed [`PairingBackend`].
#[derive(Debug)]
pub struct Engine<B: PairingBackend> {
    order: BigUint,
    _backend: PhantomData<B>,
}

impl<B: PairingBackend> Engine<B> {
    pub fn new() -> Self {
        Self {
            order: B::Scalar::modulus(),
            _backend: PhantomData,
        }
    }

    fn load(&self, kind: GroupKind, bytes: &[u8]) -> Result<Value<B>, BackendError> {
        Ok(match kind {
            GroupKind::G1 => Value::G1(B::G1::from_uncompressed_unchecked(bytes)?),
            GroupKind::G2 => Value::G2(B::G2::from_uncompressed_unchecked(bytes)?),
            GroupKind::GT => Value::Gt(B::Target::from_bytes_unchecked(bytes)?),
            GroupKind::Fr => Value::Fr(B::Scalar::from_bytes(bytes)?),
        })
    }

    fn scalar(&self, bytes: &[u8]) -> Result<B::Scalar, BackendError> {
        B::Scalar::from_bytes(bytes)
    }

    fn store(&self, value: &Value<B>) -> Vec<u8> {
        match value {
            Value::G1(p) => p.to_uncompressed(),
            Value::G2(p) => p.to_uncompressed(),
            Value::Gt(t) => t.to_bytes(),
            Value::Fr(s) => s.to_bytes(),
        }
    }

    fn binary(
        &self,
        kind: GroupKind,
        a: &[u8],
        b: &[u8],
        subtract: bool,
    ) -> Result<Vec<u8>, BackendError> {
        let value = match (self.load(kind, a)?, self.load(kind, b)?) {
            (Value::G1(x), Value::G1(y)) if subtract => Value::G1(x.sub(&y)),
            (Value::G1(x), Value::G1(y)) => Value::G1(x.add(&y)),
            (Value::G2(x), Value::G2(y)) if subtract => Value::G2(x.sub(&y)),
            (Value::G2(x), Value::G2(y)) => Value::G2(x.add(&y)),
            (Value::Gt(x), Value::Gt(y)) if subtract => Value::Gt(x.combine(&y.inverse())),
            (Value::Gt(x), Value::Gt(y)) => Value::Gt(x.combine(&y)),
            (Value::Fr(x), Value::Fr(y)) if subtract => Value::Fr(x.sub(&y)),
            (Value::Fr(x), Value::Fr(y)) => Value::Fr(x.add(&y)),
            _ => return Err(BackendError::Math("operands of different groups")),
        };
        Ok(self.store(&value))
    }
}

impl<B: PairingBackend> Default for Engine<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn curve_only(kind: GroupKind) -> BackendError {
    match kind {
        GroupKind::GT => BackendError::UnsupportedFeature("GT elements have no point encoding"),
        _ => BackendError::UnsupportedFeature("scalars have no point encoding"),
    }
}

impl<B: PairingBackend> CurveBackend for Engine<B> {
    fn config(&self) -> BackendConfig {
        B::CONFIG
    }

    fn order(&self) -> &BigUint {
        &self.order
    }

    fn encoded_len(&self, kind: GroupKind, encoding: Encoding) -> Option<usize> {
        match (kind, encoding) {
            (GroupKind::G1, Encoding::Full) => Some(B::G1::UNCOMPRESSED_LEN),
            (GroupKind::G1, _) => Some(B::G1::COMPRESSED_LEN),
            (GroupKind::G2, Encoding::Full) => Some(B::G2::UNCOMPRESSED_LEN),
            (GroupKind::G2, _) => Some(B::G2::COMPRESSED_LEN),
            (GroupKind::GT, Encoding::Full) => Some(B::Target::ENCODED_LEN),
            (GroupKind::Fr, Encoding::Full) => Some(B::Scalar::ENCODED_LEN),
            _ => None,
        }
    }

    fn identity(&self, kind: GroupKind) -> Vec<u8> {
        self.store(&match kind {
            GroupKind::G1 => Value::G1(B::G1::identity()),
            GroupKind::G2 => Value::G2(B::G2::identity()),
            GroupKind::GT => Value::Gt(B::Target::identity()),
            GroupKind::Fr => Value::Fr(B::Scalar::zero()),
        })
    }

    fn generator(&self, kind: GroupKind) -> Vec<u8> {
        self.store(&match kind {
            GroupKind::G1 => Value::G1(B::G1::generator()),
            GroupKind::G2 => Value::G2(B::G2::generator()),
            GroupKind::GT => Value::Gt(B::target_generator()),
            GroupKind::Fr => Value::Fr(B::Scalar::one()),
        })
    }

    fn random(&self, kind: GroupKind, rng: &mut dyn RngCore) -> Vec<u8> {
        self.store(&match kind {
            GroupKind::G1 => Value::G1(B::G1::random(rng)),
            GroupKind::G2 => Value::G2(B::G2::random(rng)),
            GroupKind::GT => Value::Gt(B::target_generator().mul_scalar(&B::Scalar::random(rng))),
            GroupKind::Fr => Value::Fr(B::Scalar::random(rng)),
        })
    }

    #[instrument(level = "trace", skip_all, fields(%kind, len = msg.len()))]
    fn hash(&self, kind: GroupKind, msg: &[u8]) -> Result<Vec<u8>, BackendError> {
        let value = match kind {
            GroupKind::G1 => Value::G1(B::G1::hash_to_curve(B::G1_DST, msg)?),
            GroupKind::G2 => Value::G2(B::G2::hash_to_curve(B::G2_DST, msg)?),
            GroupKind::GT => Value::Gt(
                B::target_generator().mul_scalar(&B::Scalar::hash_to_field(B::SCALAR_DST, msg)),
            ),
            GroupKind::Fr => Value::Fr(B::Scalar::hash_to_field(B::SCALAR_DST, msg)),
        };
        Ok(self.store(&value))
    }

    fn add(&self, kind: GroupKind, a: &[u8], b: &[u8]) -> Result<Vec<u8>, BackendError> {
        self.binary(kind, a, b, false)
    }

    fn sub(&self, kind: GroupKind, a: &[u8], b: &[u8]) -> Result<Vec<u8>, BackendError> {
        self.binary(kind, a, b, true)
    }

    fn neg(&self, kind: GroupKind, a: &[u8]) -> Result<Vec<u8>, BackendError> {
        let value = match self.load(kind, a)? {
            Value::G1(p) => Value::G1(p.negate()),
            Value::G2(p) => Value::G2(p.negate()),
            Value::Gt(t) => Value::Gt(t.inverse()),
            Value::Fr(s) => Value::Fr(s.neg()),
        };
        Ok(self.store(&value))
    }

    fn scale(&self, kind: GroupKind, a: &[u8], scalar: &[u8]) -> Result<Vec<u8>, BackendError> {
        let scalar = self.scalar(scalar)?;
        let value = match self.load(kind, a)? {
            Value::G1(p) => Value::G1(p.mul_scalar(&scalar)),
            Value::G2(p) => Value::G2(p.mul_scalar(&scalar)),
            Value::Gt(t) => Value::Gt(t.mul_scalar(&scalar)),
            Value::Fr(s) => Value::Fr(s.mul(&scalar)),
        };
        Ok(self.store(&value))
    }

    fn field_mul(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>, BackendError> {
        Ok(self.scalar(a)?.mul(&self.scalar(b)?).to_bytes())
    }

    fn field_invert(&self, a: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.scalar(a)?.invert().map(|inv| inv.to_bytes()))
    }

    fn field_pow(&self, a: &[u8], exp: &BigUint) -> Result<Vec<u8>, BackendError> {
        Ok(self.scalar(a)?.pow(&exp.to_u64_digits()).to_bytes())
    }

    fn scalar_from_int(&self, value: &BigUint) -> Vec<u8> {
        B::Scalar::from_biguint(value).to_bytes()
    }

    fn scalar_to_int(&self, scalar: &[u8]) -> Result<BigUint, BackendError> {
        Ok(self.scalar(scalar)?.to_biguint())
    }

    #[instrument(level = "trace", skip_all, fields(curve = B::CONFIG.curve.name()))]
    fn pairing(&self, g1: &[u8], g2: &[u8]) -> Result<Vec<u8>, BackendError> {
        let g1 = B::G1::from_uncompressed_unchecked(g1)?;
        let g2 = B::G2::from_uncompressed_unchecked(g2)?;
        Ok(B::pairing(&g1, &g2).to_bytes())
    }

    fn encode(
        &self,
        kind: GroupKind,
        payload: &[u8],
        encoding: Encoding,
    ) -> Result<Vec<u8>, BackendError> {
        let value = self.load(kind, payload)?;
        match (value, encoding) {
            (value, Encoding::Full) => Ok(self.store(&value)),
            (Value::G1(p), Encoding::Compressed) => Ok(p.to_compressed()),
            (Value::G1(p), Encoding::XOnly) => Ok(p.to_x_only()),
            (Value::G2(p), Encoding::Compressed) => Ok(p.to_compressed()),
            (Value::G2(p), Encoding::XOnly) => Ok(p.to_x_only()),
            _ => Err(curve_only(kind)),
        }
    }

    fn decode(
        &self,
        kind: GroupKind,
        bytes: &[u8],
        encoding: Encoding,
    ) -> Result<Vec<u8>, BackendError> {
        let value = match (kind, encoding) {
            (GroupKind::G1, Encoding::Full) => Value::G1(B::G1::from_uncompressed(bytes)?),
            (GroupKind::G1, Encoding::Compressed) => Value::G1(B::G1::from_compressed(bytes)?),
            (GroupKind::G1, Encoding::XOnly) => Value::G1(B::G1::from_x_only(bytes)?),
            (GroupKind::G2, Encoding::Full) => Value::G2(B::G2::from_uncompressed(bytes)?),
            (GroupKind::G2, Encoding::Compressed) => Value::G2(B::G2::from_compressed(bytes)?),
            (GroupKind::G2, Encoding::XOnly) => Value::G2(B::G2::from_x_only(bytes)?),
            (GroupKind::GT, Encoding::Full) => Value::Gt(B::Target::from_bytes(bytes)?),
            (GroupKind::Fr, Encoding::Full) => Value::Fr(B::Scalar::from_bytes(bytes)?),
            _ => return Err(curve_only(kind)),
        };
        Ok(self.store(&value))
    }

    fn coordinates(&self, kind: GroupKind, payload: &[u8]) -> Result<Vec<Vec<u8>>, BackendError> {
        match self.load(kind, payload)? {
            Value::G1(p) => Ok(p.coordinates()),
            Value::G2(p) => Ok(p.coordinates()),
            _ => Err(curve_only(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn engines() -> Vec<Arc<dyn CurveBackend>> {
        [
            BackendConfig::new(BackendId::Blst, CurveId::Bls12_381),
            BackendConfig::new(BackendId::Arkworks, CurveId::Bls12_381),
            BackendConfig::new(BackendId::Arkworks, CurveId::Bn254),
        ]
        .iter()
        .filter_map(|config| engine_for(config).ok())
        .collect()
    }

    #[test]
    fn registry_reports_its_config() {
        for engine in engines() {
            let config = engine.config();
            assert!(config.ensure_supported().is_ok());
            let order: BigUint = config.curve.group_order().parse().unwrap();
            assert_eq!(engine.order(), &order);
            assert!(!engine.is_symmetric());
        }
        assert!(engine_for(&BackendConfig::new(BackendId::Blst, CurveId::Bn254)).is_err());
    }

    #[test]
    fn payloads_have_full_encoding_length() {
        let mut rng = StdRng::seed_from_u64(5);
        for engine in engines() {
            for kind in GroupKind::ALL {
                let len = engine.encoded_len(kind, Encoding::Full).unwrap();
                assert_eq!(engine.identity(kind).len(), len);
                assert_eq!(engine.generator(kind).len(), len);
                assert_eq!(engine.random(kind, &mut rng).len(), len);
                assert_eq!(engine.hash(kind, b"abc").unwrap().len(), len);
            }
            for kind in [GroupKind::GT, GroupKind::Fr] {
                assert_eq!(engine.encoded_len(kind, Encoding::Compressed), None);
                let payload = engine.generator(kind);
                assert!(engine.encode(kind, &payload, Encoding::XOnly).is_err());
                assert!(engine.coordinates(kind, &payload).is_err());
            }
        }
    }

    #[test]
    fn group_operation_and_inverse() {
        let mut rng = StdRng::seed_from_u64(9);
        for engine in engines() {
            for kind in GroupKind::ALL {
                let a = engine.random(kind, &mut rng);
                let b = engine.random(kind, &mut rng);
                let sum = engine.add(kind, &a, &b).unwrap();
                assert_eq!(sum, engine.add(kind, &b, &a).unwrap());
                assert_eq!(engine.sub(kind, &sum, &b).unwrap(), a);
                let neg = engine.neg(kind, &a).unwrap();
                assert_eq!(engine.add(kind, &a, &neg).unwrap(), engine.identity(kind));
            }
        }
    }

    #[test]
    fn decode_validates_untrusted_bytes() {
        for engine in engines() {
            for kind in GroupKind::ALL {
                let payload = engine.generator(kind);
                assert_eq!(engine.decode(kind, &payload, Encoding::Full).unwrap(), payload);
                assert!(engine.decode(kind, &payload[1..], Encoding::Full).is_err());
            }
            let max = vec![0xffu8; engine.encoded_len(GroupKind::Fr, Encoding::Full).unwrap()];
            assert!(engine.decode(GroupKind::Fr, &max, Encoding::Full).is_err());
        }
    }

    #[test]
    fn scalar_integer_round_trip() {
        for engine in engines() {
            let r = engine.order().clone();
            let seven = engine.scalar_from_int(&BigUint::from(7u32));
            assert_eq!(engine.scalar_to_int(&seven).unwrap(), BigUint::from(7u32));
            let wrapped = engine.scalar_from_int(&(r + 7u32));
            assert_eq!(wrapped, seven);
            let cube = engine.field_pow(&seven, &BigUint::from(3u32)).unwrap();
            assert_eq!(engine.scalar_to_int(&cube).unwrap(), BigUint::from(343u32));
            let zero = engine.identity(GroupKind::Fr);
            assert!(engine.field_invert(&zero).unwrap().is_none());
        }
    }
}

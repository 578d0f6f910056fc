//! Group-tagged elements.
//!
//! An [`Element`] is a value of one of the four groups of a pairing context
//! together with the descriptor of that group. Every binary operation first
//! resolves its operands through [`dispatch`](crate::dispatch), so elements of
//! different groups, or of different contexts, never reach the curve library
//! together.
//!
//! G1, G2 and GT are cyclic groups with a single operation. `add` and `mul`
//! both apply it, `sub` and `div` apply it with the inverse, `neg` and
//! `invert` both return the inverse, and `zero` and `one` are both the
//! identity. Zr is a field, so there the two operations differ and zero has
//! no multiplicative inverse.
//!
//! Textual form: Zr elements are decimal integers in `[0, r)`; G1, G2 and GT
//! elements are the lowercase hex of their full byte encoding.

use core::fmt;
use core::hash::{Hash, Hasher};

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use tracing::instrument;

use crate::backend::{CurveBackend, Encoding};
use crate::dispatch::{self, Operand, Operation, Resolution};
use crate::errors::Error;
use crate::group::{GroupDescriptor, GroupHandle, GroupKind};

/// Element of a runtime [`Pairing`](crate::Pairing) context.
pub type DynElement = Element<GroupHandle>;

/// A value of one group, tagged with the group it belongs to.
#[derive(Clone)]
pub struct Element<D: GroupDescriptor> {
    group: D,
    payload: Vec<u8>,
}

impl<D: GroupDescriptor> Element<D> {
    fn new(group: D, payload: Vec<u8>) -> Self {
        Self { group, payload }
    }

    fn backend(&self) -> &dyn CurveBackend {
        self.group.backend()
    }

    fn with_payload(&self, payload: Vec<u8>) -> Self {
        Self::new(self.group.clone(), payload)
    }

    pub fn group(&self) -> &D {
        &self.group
    }

    pub fn kind(&self) -> GroupKind {
        self.group.kind()
    }

    /// Order `r` of the element's group.
    pub fn order(&self) -> BigUint {
        self.backend().order().clone()
    }

    /// The identity of a group; zero in Zr.
    pub fn zero(group: &D) -> Self {
        Self::new(group.clone(), group.backend().identity(group.kind()))
    }

    /// One in Zr; the identity in G1, G2 and GT.
    pub fn one(group: &D) -> Self {
        let backend = group.backend();
        let payload = match group.kind() {
            GroupKind::Fr => backend.generator(GroupKind::Fr),
            kind => backend.identity(kind),
        };
        Self::new(group.clone(), payload)
    }

    /// Standard generator of the group; GT's is `e(g1, g2)`.
    pub fn generator(group: &D) -> Self {
        Self::new(group.clone(), group.backend().generator(group.kind()))
    }

    /// Uniformly random element drawn from the operating system RNG.
    pub fn random(group: &D) -> Self {
        Self::random_with(group, &mut OsRng)
    }

    pub fn random_with<R: RngCore + CryptoRng>(group: &D, rng: &mut R) -> Self {
        Self::new(group.clone(), group.backend().random(group.kind(), rng))
    }

    /// Zr element congruent to `value` modulo `r`.
    pub fn from_int(group: &D, value: &BigInt) -> Result<Self, Error> {
        let kind = group.kind();
        if kind != GroupKind::Fr {
            return Err(Error::Unsupported {
                op: "from_int",
                group: kind,
            });
        }
        let backend = group.backend();
        let reduced = reduce(value, backend.order());
        Ok(Self::new(group.clone(), backend.scalar_from_int(&reduced)))
    }

    /// Deterministically hashes `msg` into the group.
    #[instrument(level = "trace", skip_all, fields(group = %group, len = msg.len()))]
    pub fn from_hash(group: &D, msg: &[u8]) -> Result<Self, Error> {
        let payload = group.backend().hash(group.kind(), msg)?;
        Ok(Self::new(group.clone(), payload))
    }

    /// Parses the textual form produced by `Display`.
    pub fn from_str(group: &D, text: &str) -> Result<Self, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Parse("empty element string".into()));
        }
        let kind = group.kind();
        let backend = group.backend();
        if kind == GroupKind::Fr {
            let value = BigUint::parse_bytes(text.as_bytes(), 10)
                .ok_or_else(|| Error::Parse(format!("`{text}` is not a decimal integer")))?;
            if &value >= backend.order() {
                return Err(Error::Parse(format!("{value} is not below the group order")));
            }
            return Ok(Self::new(group.clone(), backend.scalar_from_int(&value)));
        }
        let bytes = hex::decode(text)
            .map_err(|e| Error::Parse(format!("invalid hex for {kind} element: {e}")))?;
        let payload = backend
            .decode(kind, &bytes, Encoding::Full)
            .map_err(|e| Error::Parse(format!("invalid {kind} element: {e}")))?;
        Ok(Self::new(group.clone(), payload))
    }

    /// Decodes the full encoding, checking length and group membership.
    pub fn from_bytes(group: &D, bytes: &[u8]) -> Result<Self, Error> {
        Self::decode(group, bytes, Encoding::Full)
    }

    pub fn from_bytes_compressed(group: &D, bytes: &[u8]) -> Result<Self, Error> {
        Self::decode(group, bytes, Encoding::Compressed)
    }

    /// Decodes an x-only encoding. Of the two points with that `x`, an
    /// arbitrary one is returned.
    pub fn from_bytes_x_only(group: &D, bytes: &[u8]) -> Result<Self, Error> {
        Self::decode(group, bytes, Encoding::XOnly)
    }

    fn decode(group: &D, bytes: &[u8], encoding: Encoding) -> Result<Self, Error> {
        let kind = group.kind();
        let backend = group.backend();
        let expected = encoded_len(backend, kind, encoding)?;
        if bytes.len() != expected {
            return Err(Error::Deserialization {
                group: kind,
                reason: format!("expected {expected} bytes, got {}", bytes.len()),
            });
        }
        let payload = backend
            .decode(kind, bytes, encoding)
            .map_err(|e| Error::deserialization(kind, e))?;
        Ok(Self::new(group.clone(), payload))
    }

    /// Length of `encoding` for elements of `group`.
    pub fn encoded_len(group: &D, encoding: Encoding) -> Result<usize, Error> {
        encoded_len(group.backend(), group.kind(), encoding)
    }

    pub fn add(&self, rhs: &Self) -> Result<Self, Error> {
        dispatch::check(Operation::Add, &self.group, &rhs.group)?;
        let sum = self.backend().add(self.kind(), &self.payload, &rhs.payload)?;
        Ok(self.with_payload(sum))
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self, Error> {
        dispatch::check(Operation::Sub, &self.group, &rhs.group)?;
        let difference = self.backend().sub(self.kind(), &self.payload, &rhs.payload)?;
        Ok(self.with_payload(difference))
    }

    pub fn neg(&self) -> Result<Self, Error> {
        let negated = self.backend().neg(self.kind(), &self.payload)?;
        Ok(self.with_payload(negated))
    }

    /// Multiplicative inverse in Zr; the group inverse elsewhere.
    pub fn invert(&self) -> Result<Self, Error> {
        match self.kind() {
            GroupKind::Fr => {
                let inverse = self
                    .backend()
                    .field_invert(&self.payload)?
                    .ok_or(Error::Arithmetic("zero has no multiplicative inverse"))?;
                Ok(self.with_payload(inverse))
            }
            _ => self.neg(),
        }
    }

    /// Group operation for two elements of one group, field multiplication
    /// in Zr, or scaling when exactly one operand is a Zr element. The
    /// result of `scalar * x` lies in the group of `x`.
    pub fn mul(&self, rhs: &Self) -> Result<Self, Error> {
        let resolution = dispatch::check(Operation::Mul, &self.group, &rhs.group)?;
        match resolution {
            Resolution::SameGroup if self.kind() == GroupKind::Fr => {
                let product = self.backend().field_mul(&self.payload, &rhs.payload)?;
                Ok(self.with_payload(product))
            }
            Resolution::SameGroup => self.add(rhs),
            Resolution::ScalarRight => self.scale(&rhs.payload),
            Resolution::ScalarLeft => rhs.scale(&self.payload),
            other => Err(self.unexpected(Operation::Mul, rhs, other)),
        }
    }

    /// Multiplies by an integer reduced modulo `r`.
    pub fn mul_int(&self, value: &BigInt) -> Result<Self, Error> {
        dispatch::resolve(Operation::Mul, self.kind(), Operand::Integer)?;
        let backend = self.backend();
        let scalar = backend.scalar_from_int(&reduce(value, backend.order()));
        self.scale(&scalar)
    }

    /// Inverse operation of [`mul`](Self::mul). Dividing by a zero scalar
    /// fails with [`Error::Arithmetic`].
    pub fn div(&self, rhs: &Self) -> Result<Self, Error> {
        let resolution = dispatch::check(Operation::Div, &self.group, &rhs.group)?;
        match resolution {
            Resolution::SameGroup if self.kind() == GroupKind::Fr => {
                let inverse = rhs.invert().map_err(|_| Error::Arithmetic("division by zero"))?;
                let quotient = self.backend().field_mul(&self.payload, &inverse.payload)?;
                Ok(self.with_payload(quotient))
            }
            Resolution::SameGroup => self.sub(rhs),
            Resolution::ScalarRight => {
                let inverse = rhs.invert().map_err(|_| Error::Arithmetic("division by zero"))?;
                self.scale(&inverse.payload)
            }
            other => Err(self.unexpected(Operation::Div, rhs, other)),
        }
    }

    /// Raises to a Zr exponent: scaling for G1, G2 and GT, and field
    /// exponentiation by the exponent's integer value for a Zr base.
    pub fn pow(&self, exponent: &Self) -> Result<Self, Error> {
        let resolution = dispatch::check(Operation::Pow, &self.group, &exponent.group)?;
        if resolution != Resolution::Exponent {
            return Err(self.unexpected(Operation::Pow, exponent, resolution));
        }
        match self.kind() {
            GroupKind::Fr => {
                let exp = self.backend().scalar_to_int(&exponent.payload)?;
                let power = self.backend().field_pow(&self.payload, &exp)?;
                Ok(self.with_payload(power))
            }
            _ => self.scale(&exponent.payload),
        }
    }

    /// Raises to an integer exponent.
    ///
    /// For G1, G2 and GT the exponent is reduced modulo `r`. For a non-zero
    /// Zr base it is reduced modulo `r - 1`, so negative exponents invert. A
    /// zero Zr base with a negative exponent fails with [`Error::Arithmetic`].
    pub fn pow_int(&self, exponent: &BigInt) -> Result<Self, Error> {
        dispatch::resolve(Operation::Pow, self.kind(), Operand::Integer)?;
        let backend = self.backend();
        if self.kind() != GroupKind::Fr {
            let scalar = backend.scalar_from_int(&reduce(exponent, backend.order()));
            return self.scale(&scalar);
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Err(Error::Arithmetic("zero has no multiplicative inverse"))
            } else if exponent.is_zero() {
                Ok(Self::one(&self.group))
            } else {
                Ok(self.clone())
            };
        }
        let group_order = backend.order() - BigUint::one();
        let power = backend.field_pow(&self.payload, &reduce(exponent, &group_order))?;
        Ok(self.with_payload(power))
    }

    /// Value equality of two elements of the same group.
    pub fn equals(&self, rhs: &Self) -> Result<bool, Error> {
        dispatch::check(Operation::Compare, &self.group, &rhs.group)?;
        Ok(self.payload == rhs.payload)
    }

    pub fn not_equals(&self, rhs: &Self) -> Result<bool, Error> {
        self.equals(rhs).map(|equal| !equal)
    }

    pub fn is_zero(&self) -> bool {
        self.payload == self.backend().identity(self.kind())
    }

    pub fn is_one(&self) -> bool {
        self.payload == Self::one(&self.group).payload
    }

    /// Full encoding; accepted back by [`from_bytes`](Self::from_bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.payload.clone()
    }

    pub fn to_bytes_compressed(&self) -> Result<Vec<u8>, Error> {
        self.encode(Encoding::Compressed)
    }

    /// Compressed encoding with the `y` sign dropped.
    pub fn to_bytes_x_only(&self) -> Result<Vec<u8>, Error> {
        self.encode(Encoding::XOnly)
    }

    fn encode(&self, encoding: Encoding) -> Result<Vec<u8>, Error> {
        encoded_len(self.backend(), self.kind(), encoding)?;
        Ok(self.backend().encode(self.kind(), &self.payload, encoding)?)
    }

    /// Integer value of a Zr element.
    pub fn to_int(&self) -> Result<BigUint, Error> {
        if self.kind() != GroupKind::Fr {
            return Err(Error::Unsupported {
                op: "to_int",
                group: self.kind(),
            });
        }
        Ok(self.backend().scalar_to_int(&self.payload)?)
    }

    /// Number of affine coordinates of a G1 or G2 point.
    pub fn len(&self) -> Result<usize, Error> {
        match self.kind() {
            GroupKind::G1 | GroupKind::G2 => Ok(2),
            kind => Err(Error::NotDimensioned(kind)),
        }
    }

    /// Affine coordinate `index` (0 for `x`, 1 for `y`) as big-endian bytes.
    pub fn coordinate(&self, index: usize) -> Result<Vec<u8>, Error> {
        let len = self.len()?;
        if index >= len {
            return Err(Error::Index { index, len });
        }
        let mut coordinates = self.backend().coordinates(self.kind(), &self.payload)?;
        Ok(coordinates.swap_remove(index))
    }

    fn scale(&self, scalar: &[u8]) -> Result<Self, Error> {
        let scaled = self.backend().scale(self.kind(), &self.payload, scalar)?;
        Ok(self.with_payload(scaled))
    }

    fn unexpected(&self, op: Operation, rhs: &Self, resolution: Resolution) -> Error {
        tracing::trace!(%op, ?resolution, "resolution not applicable");
        Error::GroupMismatch {
            op,
            lhs: self.group.to_string(),
            rhs: rhs.group.to_string(),
        }
    }
}

/// Pairs a G1 and a G2 element of one context, in either order.
#[instrument(level = "trace", skip_all, fields(lhs = %a.group, rhs = %b.group))]
pub(crate) fn pair<D: GroupDescriptor>(a: &Element<D>, b: &Element<D>) -> Result<Element<D>, Error> {
    let (g1, g2) = match dispatch::check(Operation::Pairing, &a.group, &b.group)? {
        Resolution::Paired => (a, b),
        Resolution::PairedSwapped => (b, a),
        other => return Err(a.unexpected(Operation::Pairing, b, other)),
    };
    let payload = a.backend().pairing(&g1.payload, &g2.payload)?;
    Ok(Element::new(a.group.with_kind(GroupKind::GT), payload))
}

fn encoded_len(
    backend: &dyn CurveBackend,
    kind: GroupKind,
    encoding: Encoding,
) -> Result<usize, Error> {
    backend.encoded_len(kind, encoding).ok_or(Error::Unsupported {
        op: match encoding {
            Encoding::Full => "full encoding",
            Encoding::Compressed => "compressed encoding",
            Encoding::XOnly => "x-only encoding",
        },
        group: kind,
    })
}

/// Least non-negative residue of `value` modulo `modulus`.
fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() {
        return BigUint::zero();
    }
    let modulus = BigInt::from(modulus.clone());
    let residue = ((value % &modulus) + &modulus) % &modulus;
    residue.magnitude().clone()
}

impl<D: GroupDescriptor> PartialEq for Element<D> {
    fn eq(&self, other: &Self) -> bool {
        self.group.same_group(&other.group) && self.payload == other.payload
    }
}

impl<D: GroupDescriptor> Eq for Element<D> {}

impl<D: GroupDescriptor> Hash for Element<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.payload.hash(state);
    }
}

impl<D: GroupDescriptor> fmt::Display for Element<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            GroupKind::Fr => {
                let value = self.to_int().map_err(|_| fmt::Error)?;
                write!(f, "{value}")
            }
            _ => f.write_str(&hex::encode(&self.payload)),
        }
    }
}

impl<D: GroupDescriptor> fmt::Debug for Element<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("group", &self.group)
            .field("value", &format_args!("{self}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use num_bigint::{BigInt, BigUint};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::config::CurveId;
    use crate::{Pairing, Parameters};

    fn contexts() -> Vec<Pairing> {
        [CurveId::Bls12_381, CurveId::Bn254]
            .into_iter()
            .filter_map(|curve| Parameters::for_curve(curve).ok())
            .map(|params| Pairing::new(&params).unwrap())
            .collect()
    }

    #[test]
    fn encodings_round_trip() {
        let mut rng = StdRng::seed_from_u64(21);
        for pairing in contexts() {
            for kind in GroupKind::ALL {
                let group = pairing.group(kind);
                let a = Element::random_with(&group, &mut rng);
                assert_eq!(Element::from_bytes(&group, &a.to_bytes()).unwrap(), a);
                assert_eq!(Element::from_str(&group, &a.to_string()).unwrap(), a);

                if kind.is_curve() {
                    let compressed = a.to_bytes_compressed().unwrap();
                    assert_eq!(Element::from_bytes_compressed(&group, &compressed).unwrap(), a);
                    let x_only = a.to_bytes_x_only().unwrap();
                    let b = Element::from_bytes_x_only(&group, &x_only).unwrap();
                    assert!(b == a || b == a.neg().unwrap());
                } else {
                    for err in [a.to_bytes_compressed(), a.to_bytes_x_only()] {
                        assert!(matches!(err, Err(Error::Unsupported { .. })));
                    }
                    let bytes = a.to_bytes();
                    assert!(matches!(
                        Element::from_bytes_compressed(&group, &bytes),
                        Err(Error::Unsupported { .. })
                    ));
                }
            }
        }
    }

    #[test]
    fn decoding_checks_length_and_membership() {
        for pairing in contexts() {
            for kind in GroupKind::ALL {
                let group = pairing.group(kind);
                let bytes = Element::generator(&group).to_bytes();
                let err = Element::from_bytes(&group, &bytes[..bytes.len() - 1]).unwrap_err();
                assert!(matches!(err, Error::Deserialization { group, .. } if group == kind));

                let mut longer = bytes.clone();
                longer.push(0);
                assert!(Element::from_bytes(&group, &longer).is_err());

                let garbage = vec![0xffu8; bytes.len()];
                assert!(Element::from_bytes(&group, &garbage).is_err());
            }
        }
    }

    #[test]
    fn text_form_errors() {
        for pairing in contexts() {
            let zr = pairing.zr();
            assert!(matches!(Element::from_str(&zr, "  "), Err(Error::Parse(_))));
            assert!(matches!(Element::from_str(&zr, "12a"), Err(Error::Parse(_))));
            let r = pairing.order().to_string();
            assert!(matches!(Element::from_str(&zr, &r), Err(Error::Parse(_))));
            assert_eq!(Element::from_str(&zr, "42").unwrap().to_string(), "42");

            let g1 = pairing.g1();
            assert!(matches!(Element::from_str(&g1, "zz"), Err(Error::Parse(_))));
            assert!(matches!(Element::from_str(&g1, "00"), Err(Error::Parse(_))));
        }
    }

    #[test]
    fn group_operation_laws() {
        for pairing in contexts() {
            for kind in GroupKind::ALL {
                let a = pairing.random(kind);
                let b = pairing.random(kind);
                assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
                assert!(a.sub(&a).unwrap().is_zero());
                assert!(a.add(&a.neg().unwrap()).unwrap().is_zero());
                assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
                assert_eq!(a.mul(&b).unwrap().div(&b).unwrap(), a);
                assert!(a.mul(&a.invert().unwrap()).unwrap().is_one());
                assert!(Element::zero(&a.group().clone()).is_zero());
            }
        }
    }

    #[test]
    fn source_and_target_groups_have_one_operation() {
        for pairing in contexts() {
            for kind in [GroupKind::G1, GroupKind::G2, GroupKind::GT] {
                let a = pairing.random(kind);
                let b = pairing.random(kind);
                assert_eq!(a.mul(&b).unwrap(), a.add(&b).unwrap());
                assert_eq!(a.div(&b).unwrap(), a.sub(&b).unwrap());
                assert_eq!(a.invert().unwrap(), a.neg().unwrap());
                assert_eq!(pairing.one(kind), pairing.zero(kind));
            }
        }
    }

    #[test]
    fn scalar_field_arithmetic() {
        for pairing in contexts() {
            let int = |n: i64| pairing.from_int(&BigInt::from(n)).unwrap();
            assert_eq!(int(6).mul(&int(7)).unwrap(), int(42));
            assert_eq!(int(6).add(&int(7)).unwrap(), int(13));
            assert_eq!(int(42).div(&int(6)).unwrap(), int(7));
            assert_eq!(int(-1).add(&int(1)).unwrap(), int(0));
            assert_eq!(int(-1).to_int().unwrap(), pairing.order() - 1u32);
            assert!(int(1).is_one());
            assert!(int(0).is_zero());

            let zero = int(0);
            assert!(matches!(zero.invert(), Err(Error::Arithmetic(_))));
            assert!(matches!(int(5).div(&zero), Err(Error::Arithmetic(_))));
        }
    }

    #[test]
    fn from_int_only_in_zr() {
        for pairing in contexts() {
            for kind in [GroupKind::G1, GroupKind::G2, GroupKind::GT] {
                let err = Element::from_int(&pairing.group(kind), &BigInt::from(3)).unwrap_err();
                assert!(matches!(err, Error::Unsupported { op: "from_int", group } if group == kind));
                assert!(err.is_type_error());
                assert!(pairing.generator(kind).to_int().is_err());
            }
            let r = BigInt::from(pairing.order());
            let wrapped = pairing.from_int(&(r + 5)).unwrap();
            assert_eq!(wrapped.to_int().unwrap(), BigUint::from(5u32));
        }
    }

    #[test]
    fn scalar_actions_on_groups() {
        for pairing in contexts() {
            let three = pairing.from_int(&BigInt::from(3)).unwrap();
            for kind in [GroupKind::G1, GroupKind::G2, GroupKind::GT] {
                let g = pairing.generator(kind);
                let tripled = g.add(&g).unwrap().add(&g).unwrap();
                assert_eq!(g.mul(&three).unwrap(), tripled);
                assert_eq!(three.mul(&g).unwrap(), tripled);
                assert_eq!(three.mul(&g).unwrap().kind(), kind);
                assert_eq!(g.pow(&three).unwrap(), tripled);
                assert_eq!(g.mul_int(&BigInt::from(3)).unwrap(), tripled);
                assert_eq!(g.pow_int(&BigInt::from(3)).unwrap(), tripled);
                assert_eq!(tripled.div(&three).unwrap(), g);

                let r = BigInt::from(pairing.order());
                assert_eq!(g.pow_int(&(r.clone() + 3)).unwrap(), tripled);
                assert_eq!(g.mul_int(&BigInt::from(-3)).unwrap(), tripled.neg().unwrap());
                assert!(g.pow_int(&r).unwrap().is_zero());

                assert!(three.div(&g).unwrap_err().is_type_error());
                let zero = pairing.zero(GroupKind::Fr);
                assert!(matches!(g.div(&zero), Err(Error::Arithmetic(_))));
            }
        }
    }

    #[test]
    fn scalar_powers() {
        for pairing in contexts() {
            let int = |n: i64| pairing.from_int(&BigInt::from(n)).unwrap();
            let two = int(2);
            assert_eq!(two.pow(&int(10)).unwrap(), int(1024));
            assert_eq!(two.pow_int(&BigInt::from(10)).unwrap(), int(1024));
            assert_eq!(two.pow_int(&BigInt::from(-1)).unwrap(), two.invert().unwrap());
            assert!(two.pow_int(&BigInt::from(0)).unwrap().is_one());

            // exponents act modulo r - 1 on scalars
            let r_minus_one = BigInt::from(pairing.order() - 1u32);
            assert!(two.pow_int(&r_minus_one).unwrap().is_one());

            let zero = int(0);
            assert!(zero.pow_int(&BigInt::from(5)).unwrap().is_zero());
            assert!(zero.pow_int(&BigInt::from(0)).unwrap().is_one());
            assert!(matches!(zero.pow_int(&BigInt::from(-2)), Err(Error::Arithmetic(_))));
        }
    }

    #[test]
    fn cross_group_operations_fail() {
        for pairing in contexts() {
            for lhs in GroupKind::ALL {
                for rhs in GroupKind::ALL {
                    if lhs == rhs {
                        continue;
                    }
                    let a = pairing.random(lhs);
                    let b = pairing.random(rhs);
                    for result in [a.add(&b), a.sub(&b)] {
                        let err = result.unwrap_err();
                        assert!(matches!(err, Error::GroupMismatch { .. }), "{lhs} {rhs}");
                        assert!(err.to_string().contains(&a.group().to_string()));
                        assert!(err.to_string().contains(&b.group().to_string()));
                    }
                    assert!(a.equals(&b).unwrap_err().is_type_error());
                    assert!(a.not_equals(&b).is_err());
                    assert_ne!(a, b);
                    if rhs != GroupKind::Fr {
                        assert!(a.pow(&b).unwrap_err().is_type_error());
                    }
                    if lhs != GroupKind::Fr && rhs != GroupKind::Fr {
                        assert!(a.mul(&b).is_err());
                        assert!(a.div(&b).is_err());
                    }
                }
            }
        }
    }

    #[test]
    fn elements_of_distinct_contexts_never_mix() {
        for pairing in contexts() {
            let other = Pairing::new(pairing.parameters()).unwrap();
            for kind in GroupKind::ALL {
                let a = pairing.generator(kind);
                let b = other.generator(kind);
                assert_eq!(a.to_bytes(), b.to_bytes());
                assert_ne!(a, b);
                for result in [a.add(&b), a.sub(&b), a.mul(&b), a.div(&b), a.pow(&b)] {
                    assert!(result.unwrap_err().is_type_error(), "{kind}");
                }
                assert!(a.equals(&b).is_err());
            }
            let p = pairing.generator(GroupKind::G1);
            let q = other.generator(GroupKind::G2);
            assert!(pair(&p, &q).unwrap_err().is_type_error());
        }
    }

    #[test]
    fn hashing_is_deterministic_per_group() {
        for pairing in contexts() {
            for kind in GroupKind::ALL {
                let group = pairing.group(kind);
                let a = Element::from_hash(&group, b"alice").unwrap();
                assert_eq!(a, Element::from_hash(&group, b"alice").unwrap());
                assert_ne!(a, Element::from_hash(&group, b"bob").unwrap());
            }
        }
    }

    #[test]
    fn elements_key_hash_maps() {
        for pairing in contexts() {
            let other = Pairing::new(pairing.parameters()).unwrap();
            let mut seen = HashMap::new();
            for (tag, element) in [
                ("g1", pairing.generator(GroupKind::G1)),
                ("g1 again", pairing.generator(GroupKind::G1)),
                ("foreign g1", other.generator(GroupKind::G1)),
                ("one", pairing.one(GroupKind::Fr)),
            ] {
                seen.entry(element).or_insert(tag);
            }
            assert_eq!(seen.len(), 3);
            assert_eq!(seen[&pairing.generator(GroupKind::G1)], "g1");
        }
    }

    #[test]
    fn coordinates_of_points() {
        for pairing in contexts() {
            for kind in [GroupKind::G1, GroupKind::G2] {
                let p = pairing.random(kind);
                assert_eq!(p.len().unwrap(), 2);
                let x = p.coordinate(0).unwrap();
                let y = p.coordinate(1).unwrap();
                assert_eq!(x.len(), y.len());
                assert_eq!(p.neg().unwrap().coordinate(0).unwrap(), x);
                assert!(matches!(p.coordinate(2), Err(Error::Index { index: 2, len: 2 })));
            }
            for kind in [GroupKind::GT, GroupKind::Fr] {
                let e = pairing.random(kind);
                assert!(matches!(e.len(), Err(Error::NotDimensioned(k)) if k == kind));
                assert!(matches!(e.coordinate(0), Err(Error::NotDimensioned(_))));
            }
        }
    }

    #[test]
    fn generator_of_gt_is_pairing_of_generators() {
        for pairing in contexts() {
            let g = pair(
                &pairing.generator(GroupKind::G1),
                &pairing.generator(GroupKind::G2),
            )
            .unwrap();
            assert_eq!(g, pairing.generator(GroupKind::GT));
            assert_eq!(g.group(), &pairing.gt());
        }
    }
}

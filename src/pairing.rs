//! Runtime pairing contexts.
//!
//! A [`Pairing`] is created from [`Parameters`] and owns the curve backend.
//! Every element made through it carries a [`GroupHandle`] pointing back at
//! the context, so elements of two contexts never mix even when both were
//! created from the same parameters.
//!
//! ```rust
//! # #[cfg(feature = "ark_bn254")]
//! # {
//! use bilinear::GroupKind::{Fr, G1, G2};
//! use bilinear::{Pairing, Parameters};
//!
//! let pairing = Pairing::new(&"type bn".parse::<Parameters>().unwrap()).unwrap();
//! let a = pairing.random(Fr);
//! let (g, h) = (pairing.generator(G1), pairing.generator(G2));
//!
//! let lhs = pairing.apply(&g.pow(&a).unwrap(), &h).unwrap();
//! let rhs = pairing.apply(&g, &h).unwrap().pow(&a).unwrap();
//! assert!(lhs.equals(&rhs).unwrap());
//! # }
//! ```

use core::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use num_bigint::{BigInt, BigUint};
use tracing::instrument;

use crate::backend::{CurveBackend, engine_for};
use crate::config::CurveId;
use crate::dispatch::Operation;
use crate::element::{DynElement, Element, pair};
use crate::errors::Error;
use crate::group::{GroupDescriptor, GroupHandle, GroupKind};
use crate::params::Parameters;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// State shared by a context and every handle made from it.
pub(crate) struct PairingInner {
    pub(crate) id: u64,
    pub(crate) params: Parameters,
    pub(crate) backend: Arc<dyn CurveBackend>,
}

/// A pairing context over one curve.
///
/// Cloning is cheap and yields the same context: elements of the clone and
/// the original interoperate.
#[derive(Clone)]
pub struct Pairing {
    inner: Arc<PairingInner>,
}

impl Pairing {
    /// Creates a new, distinct context for `params`.
    #[instrument(level = "debug", skip_all, fields(curve = %params.curve(), backend = %params.backend()))]
    pub fn new(params: &Parameters) -> Result<Self, Error> {
        let backend = engine_for(&params.config()).map_err(|e| Error::Parse(e.to_string()))?;
        let inner = PairingInner {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            params: *params,
            backend,
        };
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Process-unique number used in diagnostics.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn parameters(&self) -> &Parameters {
        &self.inner.params
    }

    pub fn curve(&self) -> CurveId {
        self.inner.params.curve()
    }

    /// Order `r` of G1, G2, GT and Zr.
    pub fn order(&self) -> BigUint {
        self.inner.backend.order().clone()
    }

    pub fn is_symmetric(&self) -> bool {
        self.inner.backend.is_symmetric()
    }

    pub fn group(&self, kind: GroupKind) -> GroupHandle {
        GroupHandle::new(Arc::clone(&self.inner), kind)
    }

    pub fn g1(&self) -> GroupHandle {
        self.group(GroupKind::G1)
    }

    pub fn g2(&self) -> GroupHandle {
        self.group(GroupKind::G2)
    }

    pub fn gt(&self) -> GroupHandle {
        self.group(GroupKind::GT)
    }

    pub fn zr(&self) -> GroupHandle {
        self.group(GroupKind::Fr)
    }

    /// Applies the pairing to one G1 and one G2 element of this context, in
    /// either order. The result lies in this context's GT.
    pub fn apply(&self, a: &DynElement, b: &DynElement) -> Result<DynElement, Error> {
        let own = self.g1();
        for operand in [a, b] {
            if !operand.group().same_context(&own) {
                return Err(Error::GroupMismatch {
                    op: Operation::Pairing,
                    lhs: a.group().to_string(),
                    rhs: b.group().to_string(),
                });
            }
        }
        pair(a, b)
    }

    pub fn generator(&self, kind: GroupKind) -> DynElement {
        Element::generator(&self.group(kind))
    }

    pub fn zero(&self, kind: GroupKind) -> DynElement {
        Element::zero(&self.group(kind))
    }

    pub fn one(&self, kind: GroupKind) -> DynElement {
        Element::one(&self.group(kind))
    }

    pub fn random(&self, kind: GroupKind) -> DynElement {
        Element::random(&self.group(kind))
    }

    pub fn from_int(&self, value: &BigInt) -> Result<DynElement, Error> {
        Element::from_int(&self.zr(), value)
    }

    pub fn from_hash(&self, kind: GroupKind, msg: &[u8]) -> Result<DynElement, Error> {
        Element::from_hash(&self.group(kind), msg)
    }

    pub fn from_str(&self, kind: GroupKind, text: &str) -> Result<DynElement, Error> {
        Element::from_str(&self.group(kind), text)
    }

    pub fn from_bytes(&self, kind: GroupKind, bytes: &[u8]) -> Result<DynElement, Error> {
        Element::from_bytes(&self.group(kind), bytes)
    }

    pub fn from_bytes_compressed(&self, kind: GroupKind, bytes: &[u8]) -> Result<DynElement, Error> {
        Element::from_bytes_compressed(&self.group(kind), bytes)
    }

    pub fn from_bytes_x_only(&self, kind: GroupKind, bytes: &[u8]) -> Result<DynElement, Error> {
        Element::from_bytes_x_only(&self.group(kind), bytes)
    }
}

impl fmt::Debug for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pairing")
            .field("id", &self.inner.id)
            .field("params", &self.inner.params)
            .finish()
    }
}

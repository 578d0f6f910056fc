//! The process-wide BLS12-381 context.
//!
//! Unlike a [`Pairing`](crate::Pairing), the fixed context is chosen at
//! compile time: blstrs when the `blst` feature is enabled, Arkworks
//! otherwise. Its group descriptors are plain constants and its elements
//! carry no reference to a context object.
//!
//! ```rust
//! use bilinear::fixed::{self, Element, FR, G1};
//!
//! let a = Element::random(&FR);
//! let p = Element::generator(&G1).pow(&a).unwrap();
//! let lhs = fixed::pairing(&p, &fixed::g2()).unwrap();
//! let rhs = fixed::pairing(&fixed::g1(), &fixed::g2()).unwrap().pow(&a).unwrap();
//! assert_eq!(lhs, rhs);
//! ```

use std::sync::OnceLock;

use num_bigint::BigUint;
use tracing::debug;

use crate::backend::{CurveBackend, Engine};
use crate::element::{self, pair};
use crate::errors::Error;
use crate::group::{FixedGroup, GroupKind};

#[cfg(feature = "blst")]
type FixedEngine = crate::arith::BlstBls12_381;

#[cfg(not(feature = "blst"))]
type FixedEngine = crate::arith::ArkBls12_381;

/// Element of the fixed context.
pub type Element = element::Element<FixedGroup>;

pub const G1: FixedGroup = FixedGroup::new(GroupKind::G1);
pub const G2: FixedGroup = FixedGroup::new(GroupKind::G2);
pub const GT: FixedGroup = FixedGroup::new(GroupKind::GT);
pub const FR: FixedGroup = FixedGroup::new(GroupKind::Fr);

static ENGINE: OnceLock<Engine<FixedEngine>> = OnceLock::new();

/// Initialises the fixed context. Idempotent; every other function in this
/// module initialises on first use as well.
pub fn init() {
    engine();
}

pub(crate) fn engine() -> &'static dyn CurveBackend {
    ENGINE.get_or_init(|| {
        let engine = Engine::<FixedEngine>::new();
        debug!(backend = %engine.config().backend, "initialised fixed BLS12-381 context");
        engine
    })
}

/// Order `r` of every group of the fixed context.
pub fn order() -> BigUint {
    engine().order().clone()
}

/// Generator of G1.
pub fn g1() -> Element {
    Element::generator(&G1)
}

/// Generator of G2.
pub fn g2() -> Element {
    Element::generator(&G2)
}

/// `e(a, b)` for one G1 and one G2 element, in either order.
pub fn pairing(a: &Element, b: &Element) -> Result<Element, Error> {
    pair(a, b)
}

//! Group descriptors: which of the four groups an element lives in, and
//! which pairing context that group belongs to.
//!
//! Two descriptor flavours exist. [`FixedGroup`] names a group of the
//! process-wide BLS12-381 context and is a plain `const` value. A
//! [`GroupHandle`] names a group of one runtime [`Pairing`](crate::Pairing);
//! two handles denote the same group only when they point at the very same
//! context, never because two contexts happen to describe the same curve.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::CurveBackend;
use crate::pairing::PairingInner;

/// The four groups of a pairing context.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupKind {
    /// First source group.
    G1,
    /// Second source group.
    G2,
    /// Target group of the pairing.
    GT,
    /// Scalar field of order `r`.
    Fr,
}

impl GroupKind {
    pub const ALL: [GroupKind; 4] = [GroupKind::G1, GroupKind::G2, GroupKind::GT, GroupKind::Fr];

    /// `true` for the elliptic curve groups G1 and G2.
    pub fn is_curve(&self) -> bool {
        matches!(self, GroupKind::G1 | GroupKind::G2)
    }

    pub fn is_field(&self) -> bool {
        *self == GroupKind::Fr
    }

    pub fn name(&self) -> &'static str {
        match self {
            GroupKind::G1 => "G1",
            GroupKind::G2 => "G2",
            GroupKind::GT => "GT",
            GroupKind::Fr => "Zr",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies the group an element belongs to.
///
/// `same_group` is the only notion of group equality the element layer uses.
/// Implementations must keep `Hash` consistent with it.
pub trait GroupDescriptor: Clone + fmt::Debug + fmt::Display + Hash + Send + Sync {
    fn kind(&self) -> GroupKind;

    /// Whether both descriptors belong to the same pairing context.
    fn same_context(&self, other: &Self) -> bool;

    fn same_group(&self, other: &Self) -> bool {
        self.same_context(other) && self.kind() == other.kind()
    }

    /// Curve library implementing this group's arithmetic.
    fn backend(&self) -> &dyn CurveBackend;

    /// The group of the given kind in the same context.
    fn with_kind(&self, kind: GroupKind) -> Self;
}

/// A group of the fixed BLS12-381 context.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FixedGroup(GroupKind);

impl FixedGroup {
    pub const fn new(kind: GroupKind) -> Self {
        FixedGroup(kind)
    }
}

impl fmt::Display for FixedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(any(feature = "blst", feature = "ark_bls12381"))]
impl GroupDescriptor for FixedGroup {
    fn kind(&self) -> GroupKind {
        self.0
    }

    fn same_context(&self, _other: &Self) -> bool {
        true
    }

    fn backend(&self) -> &dyn CurveBackend {
        crate::fixed::engine()
    }

    fn with_kind(&self, kind: GroupKind) -> Self {
        FixedGroup(kind)
    }
}

/// A group of a runtime [`Pairing`](crate::Pairing).
///
/// The handle keeps its context alive; the context never refers back to the
/// handles or elements made from it.
#[derive(Clone)]
pub struct GroupHandle {
    pairing: Arc<PairingInner>,
    kind: GroupKind,
}

impl GroupHandle {
    pub(crate) fn new(pairing: Arc<PairingInner>, kind: GroupKind) -> Self {
        // a symmetric pairing has a single source group
        let kind = if kind == GroupKind::G2 && pairing.backend.is_symmetric() {
            GroupKind::G1
        } else {
            kind
        };
        Self { pairing, kind }
    }
}

impl GroupDescriptor for GroupHandle {
    fn kind(&self) -> GroupKind {
        self.kind
    }

    fn same_context(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pairing, &other.pairing)
    }

    fn backend(&self) -> &dyn CurveBackend {
        self.pairing.backend.as_ref()
    }

    fn with_kind(&self, kind: GroupKind) -> Self {
        GroupHandle::new(Arc::clone(&self.pairing), kind)
    }
}

impl PartialEq for GroupHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_group(other)
    }
}

impl Eq for GroupHandle {}

impl Hash for GroupHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.pairing) as usize).hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Debug for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupHandle")
            .field("kind", &self.kind)
            .field("pairing", &self.pairing.id)
            .finish()
    }
}

impl fmt::Display for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of pairing #{} ({} via {})",
            self.kind,
            self.pairing.id,
            self.pairing.params.curve(),
            self.pairing.params.backend()
        )
    }
}

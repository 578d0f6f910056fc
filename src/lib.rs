//! # bilinear: group-safe elements of pairing-friendly curves
//!
//! `bilinear` wraps the curve libraries (blstrs, Arkworks) in a small
//! value-level API where every element knows which group it belongs to. A
//! bilinear pairing `e: G1 × G2 → GT` comes with four groups of the same
//! prime order `r` (G1, G2, GT and the scalar field Zr), and mixing them up
//! is the classic bug in pairing code. Here every binary operation checks its
//! operands against a single compatibility table before any arithmetic runs.
//!
//! ## Architecture
//!
//! - **[`arith`]**: typed adapters over the curve libraries
//!   ([`FieldElement`], [`CurvePoint`], [`TargetGroup`], [`PairingBackend`]).
//! - **[`backend`]**: the object-safe [`CurveBackend`](backend::CurveBackend)
//!   that lets a curve be chosen at runtime.
//! - **[`dispatch`]**: the table of which operand groups each operation
//!   accepts.
//! - **[`element`]**: [`Element`], generic over its group descriptor.
//! - **[`params`]** and **[`pairing`]**: runtime contexts built from a
//!   textual curve description.
//! - **[`fixed`]**: a process-wide BLS12-381 context with constant
//!   descriptors.
//! - **[`config`]** and **[`errors`]**: backend selection and error types.
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "ark_bn254")]
//! # fn main() -> Result<(), bilinear::Error> {
//! use bilinear::{GroupKind, Pairing, Parameters};
//!
//! let params: Parameters = "type bn\ncurve bn254".parse()?;
//! let pairing = Pairing::new(&params)?;
//!
//! let a = pairing.random(GroupKind::Fr);
//! let b = pairing.random(GroupKind::Fr);
//! let p = pairing.generator(GroupKind::G1).pow(&a)?;
//! let q = pairing.generator(GroupKind::G2).pow(&b)?;
//!
//! // e(aP, bQ) = e(P, Q)^(ab)
//! let lhs = pairing.apply(&p, &q)?;
//! let rhs = pairing.generator(GroupKind::GT).pow(&a.mul(&b)?)?;
//! assert!(lhs.equals(&rhs)?);
//!
//! // G1 and G2 elements do not add
//! assert!(p.add(&q).unwrap_err().is_type_error());
//!
//! // neither do elements of two contexts, even over the same curve
//! let other = Pairing::new(&params)?;
//! assert!(p.add(&other.generator(GroupKind::G1)).is_err());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ark_bn254"))]
//! # fn main() {}
//! ```
//!
//! ## Feature Flags
//!
//! - **`blst`** (default): blstrs backend for BLS12-381; also backs [`fixed`]
//! - **`ark_bls12381`**: Arkworks backend for BLS12-381
//! - **`ark_bn254`** (default): Arkworks backend for BN254

pub mod arith;
pub mod backend;
pub mod config;
pub mod dispatch;
pub mod element;
pub mod errors;
#[cfg(any(feature = "blst", feature = "ark_bls12381"))]
pub mod fixed;
pub mod group;
pub mod pairing;
pub mod params;

pub use arith::{CurvePoint, FieldElement, PairingBackend, TargetGroup};
pub use config::{BackendConfig, BackendId, CurveId};
pub use dispatch::{Operand, Operation, Resolution};
pub use element::{DynElement, Element};
pub use errors::{BackendError, Error};
pub use group::{FixedGroup, GroupDescriptor, GroupHandle, GroupKind};
pub use pairing::Pairing;
pub use params::Parameters;

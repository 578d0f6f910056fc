//! Typed adapters over the curve libraries.
//!
//! This module provides trait abstractions for the primitives the element
//! layer needs, allowing multiple libraries (blstrs, Arkworks) to sit behind
//! one interface.
//!
//! # Architecture
//!
//! - **[`FieldElement`]**: Scalar field operations (Fr) - addition, multiplication, inversion
//! - **[`CurvePoint`]**: Elliptic curve point operations (G1, G2) - addition, scalar multiplication, encodings
//! - **[`TargetGroup`]**: Pairing target group (GT)
//! - **[`PairingBackend`]**: Bilinear pairing operations - `e(G1, G2) -> GT`
//!
//! # Backend Support
//!
//! | Feature | Engine | Library | Curve |
//! |---------|--------|---------|-------|
//! | `blst` (default) | [`BlstBls12_381`] | blstrs | BLS12-381 |
//! | `ark_bls12381` | [`ArkBls12_381`] | Arkworks | BLS12-381 |
//! | `ark_bn254` (default) | [`ArkBn254`] | Arkworks | BN254 |
//!
//! Unlike the element API, these traits perform no group-identity checks:
//! the type system keeps G1 and G2 apart, and nothing else is needed at this
//! level.

#[cfg(feature = "arkworks")]
pub(crate) mod arkworks;

mod field;
pub use field::*;

mod group;
pub use group::*;

mod pairing;
pub use pairing::*;

//! Backend and curve selection.
//!
//! A dynamic [`Pairing`](crate::Pairing) is bound at runtime to one
//! backend/curve combination described by a [`BackendConfig`]. Which
//! combinations are usable depends on the Cargo features the crate was built
//! with.
//!
//! # Example
//!
//! ```rust
//! use bilinear::{BackendConfig, BackendId, CurveId};
//!
//! let config = BackendConfig::new(BackendId::Blst, CurveId::Bn254);
//! // blst only implements BLS12-381
//! assert!(config.ensure_supported().is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BackendError;

/// Supported pairing-friendly elliptic curves.
///
/// - **BLS12-381**: A 381-bit curve providing ~128 bits of security. Supported by
///   both Arkworks and blstrs backends.
/// - **BN254**: A 254-bit curve providing ~100 bits of security. Supported only by
///   the Arkworks backend.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    /// BN254 curve (~100-bit security)
    Bn254,
    /// BLS12-381 curve (~128-bit security, recommended)
    Bls12_381,
}

impl CurveId {
    /// Name used in curve descriptions, e.g. `bls12_381`.
    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Bn254 => "bn254",
            CurveId::Bls12_381 => "bls12_381",
        }
    }

    /// Pairing family the curve belongs to, the `type` line of a description.
    pub fn family(&self) -> &'static str {
        match self {
            CurveId::Bn254 => "bn",
            CurveId::Bls12_381 => "bls12",
        }
    }

    /// Decimal order `r` of the prime-order groups and of the scalar field.
    pub fn group_order(&self) -> &'static str {
        match self {
            CurveId::Bn254 => {
                "21888242871839275222246405745257275088548364400416034343698204186575808495617"
            }
            CurveId::Bls12_381 => {
                "52435875175126190479447740508185965837690552500527637822603658699938581184513"
            }
        }
    }

    /// Decimal modulus of the base field the curve is defined over.
    pub fn base_field_modulus(&self) -> &'static str {
        match self {
            CurveId::Bn254 => {
                "21888242871839275222246405745257275088696311157297823662689037894645226208583"
            }
            CurveId::Bls12_381 => concat!(
                "4002409555221667393417789825735904156556882819939007885332058136",
                "124031650490837864442687629129015664037894272559787"
            ),
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bn254" => Ok(CurveId::Bn254),
            "bls12_381" => Ok(CurveId::Bls12_381),
            other => Err(BackendError::Other(format!("unknown curve `{other}`"))),
        }
    }
}

/// Cryptographic backend implementations.
///
/// - **Arkworks**: Pure Rust implementation supporting both BLS12-381 and BN254 curves.
/// - **blst**: Optimized implementation for BLS12-381 using assembly.
///
/// # Feature Flags
///
/// - `ark_bls12381`: Enable Arkworks with BLS12-381
/// - `ark_bn254` (default): Enable Arkworks with BN254
/// - `blst` (default): Enable blstrs with BLS12-381
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BackendId {
    /// Arkworks backend (pure Rust, supports BLS12-381 and BN254)
    Arkworks,
    /// blstrs backend (optimized assembly, BLS12-381 only)
    Blst,
}

impl BackendId {
    pub fn name(&self) -> &'static str {
        match self {
            BackendId::Arkworks => "arkworks",
            BackendId::Blst => "blst",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendId {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arkworks" => Ok(BackendId::Arkworks),
            "blst" => Ok(BackendId::Blst),
            other => Err(BackendError::Other(format!("unknown backend `{other}`"))),
        }
    }
}

/// Backend and curve configuration.
///
/// Not all combinations are supported - use [`ensure_supported`](BackendConfig::ensure_supported)
/// to validate.
///
/// | Backend    | BLS12-381 | BN254 |
/// |------------|-----------|-------|
/// | Arkworks   | ✓         | ✓     |
/// | blst       | ✓         | ✗     |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BackendConfig {
    /// The cryptographic backend to use
    pub backend: BackendId,
    /// The pairing-friendly curve to use
    pub curve: CurveId,
}

impl BackendConfig {
    /// Creates a new backend configuration.
    pub fn new(backend: BackendId, curve: CurveId) -> Self {
        Self { backend, curve }
    }

    /// Picks the preferred compiled-in backend for `curve`: blstrs for
    /// BLS12-381 when available, Arkworks otherwise.
    pub fn preferred(curve: CurveId) -> Self {
        let backend = match curve {
            CurveId::Bls12_381 if cfg!(feature = "blst") => BackendId::Blst,
            _ => BackendId::Arkworks,
        };
        Self::new(backend, curve)
    }

    /// Validates that this backend/curve combination is supported.
    ///
    /// This checks both that the combination is valid (e.g., blst only supports
    /// BLS12-381) and that the required feature flag is enabled at compile time.
    pub fn ensure_supported(&self) -> Result<(), BackendError> {
        match (self.backend, self.curve) {
            (BackendId::Arkworks, CurveId::Bls12_381) => {
                if cfg!(feature = "ark_bls12381") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bls12381` feature to use Arkworks BLS12-381",
                    ))
                }
            }
            (BackendId::Arkworks, CurveId::Bn254) => {
                if cfg!(feature = "ark_bn254") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `ark_bn254` feature to use Arkworks BN254",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bls12_381) => {
                if cfg!(feature = "blst") {
                    Ok(())
                } else {
                    Err(BackendError::UnsupportedFeature(
                        "compile with `blst` feature to use the blstrs backend",
                    ))
                }
            }
            (BackendId::Blst, CurveId::Bn254) => Err(BackendError::UnsupportedCurve(
                "bn254 is not supported by the blstrs backend",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blst_rejects_bn254() {
        let config = BackendConfig::new(BackendId::Blst, CurveId::Bn254);
        assert!(matches!(
            config.ensure_supported(),
            Err(BackendError::UnsupportedCurve(_))
        ));
    }

    #[test]
    fn names_round_trip() {
        for curve in [CurveId::Bn254, CurveId::Bls12_381] {
            assert_eq!(curve.name().parse::<CurveId>().unwrap(), curve);
        }
        for backend in [BackendId::Arkworks, BackendId::Blst] {
            assert_eq!(backend.name().parse::<BackendId>().unwrap(), backend);
        }
        assert!("secp256k1".parse::<CurveId>().is_err());
    }

    #[test]
    fn config_serde_round_trip() {
        let config = BackendConfig::new(BackendId::Arkworks, CurveId::Bn254);
        let json = serde_json::to_string(&config).unwrap();
        let back: BackendConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "blst")]
    #[test]
    fn preferred_bls_backend_is_blst() {
        let config = BackendConfig::preferred(CurveId::Bls12_381);
        assert_eq!(config.backend, BackendId::Blst);
        assert!(config.ensure_supported().is_ok());
    }
}

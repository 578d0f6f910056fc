//! Textual curve descriptions.
//!
//! A description is a list of `key value` lines. Blank lines and `#` comments
//! are ignored.
//!
//! | key | required | values |
//! |-----|----------|--------|
//! | `type` | yes | `bls12`, `bn` |
//! | `curve` | no | `bls12_381`, `bn254` (must belong to `type`) |
//! | `backend` | no | `blst`, `arkworks` |
//! | `r` | no | decimal group order, checked against the library |
//! | `q` | no | decimal base field modulus, checked against the library |
//!
//! ```rust
//! use bilinear::Parameters;
//!
//! let params: Parameters = "type bn\n# BN254 via arkworks\ncurve bn254".parse().unwrap();
//! let again: Parameters = params.to_string().parse().unwrap();
//! assert_eq!(params, again);
//! ```

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use tracing::debug;

use crate::config::{BackendConfig, BackendId, CurveId};
use crate::errors::Error;

const KEYS: [&str; 5] = ["type", "curve", "backend", "r", "q"];

/// Description of a pairing-friendly curve and the library implementing it.
///
/// Immutable; one value can create any number of [`Pairing`](crate::Pairing)
/// contexts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Parameters {
    config: BackendConfig,
}

impl Parameters {
    /// Parses a description; see the [module documentation](self).
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut values: [Option<&str>; 5] = [None; 5];
        for (number, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let (Some(key), Some(value), None) = (tokens.next(), tokens.next(), tokens.next())
            else {
                return Err(parse_error(format!(
                    "line {}: expected `key value`, found `{line}`",
                    number + 1
                )));
            };
            let slot = KEYS
                .iter()
                .position(|k| *k == key)
                .ok_or_else(|| parse_error(format!("line {}: unknown key `{key}`", number + 1)))?;
            if values[slot].replace(value).is_some() {
                return Err(parse_error(format!("line {}: duplicate key `{key}`", number + 1)));
            }
        }
        let [family, curve, backend, r, q] = values;

        let family = family.ok_or_else(|| parse_error("missing `type` line".into()))?;
        let curve = match curve {
            Some(name) => name.parse::<CurveId>().map_err(|e| parse_error(e.to_string()))?,
            None => default_curve(family)?,
        };
        if curve.family() != family {
            return Err(parse_error(format!(
                "curve {curve} is not of type `{family}`"
            )));
        }
        let config = match backend {
            Some(name) => BackendConfig::new(
                name.parse::<BackendId>().map_err(|e| parse_error(e.to_string()))?,
                curve,
            ),
            None => BackendConfig::preferred(curve),
        };
        config
            .ensure_supported()
            .map_err(|e| parse_error(e.to_string()))?;

        check_constant("r", r, curve.group_order())?;
        check_constant("q", q, curve.base_field_modulus())?;

        debug!(curve = %config.curve, backend = %config.backend, "parsed curve description");
        Ok(Self { config })
    }

    /// Parameters for `curve` on its preferred compiled-in backend.
    pub fn for_curve(curve: CurveId) -> Result<Self, Error> {
        let config = BackendConfig::preferred(curve);
        config
            .ensure_supported()
            .map_err(|e| parse_error(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn curve(&self) -> CurveId {
        self.config.curve
    }

    pub fn backend(&self) -> BackendId {
        self.config.backend
    }

    pub fn config(&self) -> BackendConfig {
        self.config
    }

    /// Order `r` of every group of the curve.
    pub fn order(&self) -> BigUint {
        decimal(self.config.curve.group_order())
    }

    pub fn base_field_modulus(&self) -> BigUint {
        decimal(self.config.curve.base_field_modulus())
    }
}

fn parse_error(message: String) -> Error {
    Error::Parse(message)
}

fn default_curve(family: &str) -> Result<CurveId, Error> {
    match family {
        "bls12" => Ok(CurveId::Bls12_381),
        "bn" => Ok(CurveId::Bn254),
        other => Err(parse_error(format!("unknown pairing type `{other}`"))),
    }
}

fn check_constant(key: &str, given: Option<&str>, expected: &str) -> Result<(), Error> {
    let Some(given) = given else {
        return Ok(());
    };
    let value = BigUint::parse_bytes(given.as_bytes(), 10)
        .ok_or_else(|| parse_error(format!("`{key}` is not a decimal integer")))?;
    if value != decimal(expected) {
        return Err(parse_error(format!(
            "`{key}` does not match the curve's value {expected}"
        )));
    }
    Ok(())
}

fn decimal(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
}

impl FromStr for Parameters {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let curve = self.config.curve;
        writeln!(f, "type {}", curve.family())?;
        writeln!(f, "curve {curve}")?;
        writeln!(f, "backend {}", self.config.backend)?;
        writeln!(f, "r {}", curve.group_order())?;
        write!(f, "q {}", curve.base_field_modulus())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupKind, Pairing};

    fn parse_err(text: &str) -> String {
        match Parameters::parse(text) {
            Err(Error::Parse(message)) => message,
            other => panic!("expected a parse error for {text:?}, got {other:?}"),
        }
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn minimal_description_uses_defaults() {
        let params: Parameters = "type bn".parse().unwrap();
        assert_eq!(params.curve(), CurveId::Bn254);
        assert_eq!(params.backend(), BackendId::Arkworks);
        assert_eq!(
            params.order().to_string(),
            "21888242871839275222246405745257275088548364400416034343698204186575808495617"
        );
    }

    #[test]
    fn display_round_trips() {
        for curve in [CurveId::Bls12_381, CurveId::Bn254] {
            let Ok(params) = Parameters::for_curve(curve) else {
                continue;
            };
            let text = params.to_string();
            let reparsed: Parameters = text.parse().unwrap();
            assert_eq!(reparsed, params);
            assert!(text.contains(&format!("r {}", curve.group_order())));

            let original = Pairing::new(&params).unwrap();
            let rebuilt = Pairing::new(&reparsed).unwrap();
            let e = |pairing: &Pairing| {
                pairing
                    .apply(&pairing.generator(GroupKind::G1), &pairing.generator(GroupKind::G2))
                    .unwrap()
                    .to_bytes()
            };
            assert_eq!(e(&original), e(&rebuilt));
            let h = |pairing: &Pairing| {
                pairing.from_hash(GroupKind::G1, b"round trip").unwrap().to_bytes()
            };
            assert_eq!(h(&original), h(&rebuilt));
        }
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let text = "# a BN curve\n\n  type bn   # family\ncurve bn254\n";
        assert_eq!(Parameters::parse(text).unwrap().curve(), CurveId::Bn254);
    }

    #[test]
    fn malformed_descriptions_are_rejected() {
        assert!(parse_err("").contains("missing `type`"));
        assert!(parse_err("type").contains("expected `key value`"));
        assert!(parse_err("type bn extra").contains("expected `key value`"));
        assert!(parse_err("type bn\nexp2 159").contains("unknown key `exp2`"));
        assert!(parse_err("type bn\ntype bn").contains("duplicate key"));
        assert!(parse_err("type a").contains("unknown pairing type"));
        assert!(parse_err("type bn\ncurve bls12_381").contains("not of type"));
        assert!(parse_err("type bls12\ncurve secp256k1").contains("unknown curve"));
        assert!(parse_err("type bn\nbackend blst").contains("blstrs"));
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn constants_must_match_the_library() {
        let r = CurveId::Bn254.group_order();
        assert!(Parameters::parse(&format!("type bn\nr {r}")).is_ok());
        assert!(parse_err("type bn\nr 7").contains("`r` does not match"));
        assert!(parse_err("type bn\nq 0x30").contains("not a decimal"));
    }
}

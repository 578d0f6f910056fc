//! Which operand groups each binary operation accepts.
//!
//! Every binary operation on elements, and the pairing itself, is resolved
//! here before any curve arithmetic runs. The table is total: each
//! `(operation, left group, right operand)` triple either maps to exactly one
//! [`Resolution`] or is rejected with [`Error::GroupMismatch`].
//!
//! | operation | accepted right operand | resolution |
//! |-----------|------------------------|------------|
//! | add, sub, compare | same group | `SameGroup` |
//! | mul | same group / Zr (left not Zr) / any group (left Zr) / integer | `SameGroup` / `ScalarRight` / `ScalarLeft` / `IntegerRight` |
//! | div | same group / Zr (left not Zr) | `SameGroup` / `ScalarRight` |
//! | pow | Zr / integer | `Exponent` / `IntegerExponent` |
//! | pairing | G2 for G1, G1 for G2 | `Paired` / `PairedSwapped` |

use core::fmt;

use tracing::trace;

use crate::errors::Error;
use crate::group::{GroupDescriptor, GroupKind};

/// Binary operations subject to group checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Compare,
    Pairing,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Pow,
        Operation::Compare,
        Operation::Pairing,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Sub => "subtract",
            Operation::Mul => "multiply",
            Operation::Div => "divide",
            Operation::Pow => "exponentiate",
            Operation::Compare => "compare",
            Operation::Pairing => "pair",
        })
    }
}

/// Right-hand operand of a binary operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operand {
    Element(GroupKind),
    /// A plain integer, interpreted modulo the group order.
    Integer,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Element(kind) => fmt::Display::fmt(kind, f),
            Operand::Integer => f.write_str("integer"),
        }
    }
}

/// How an accepted operation is carried out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Resolution {
    /// Both operands are in the same group; the result stays there.
    SameGroup,
    /// The left element is scaled by the right scalar.
    ScalarRight,
    /// The right element is scaled by the left scalar; the result is in the
    /// right operand's group.
    ScalarLeft,
    /// The left element is scaled by an integer reduced modulo `r`.
    IntegerRight,
    /// Exponentiation by a scalar.
    Exponent,
    /// Exponentiation by an integer.
    IntegerExponent,
    /// Pairing with the operands already in (G1, G2) order.
    Paired,
    /// Pairing whose operands must be swapped into (G1, G2) order.
    PairedSwapped,
}

/// Classifies `lhs op rhs` by group kind alone.
pub fn resolve(op: Operation, lhs: GroupKind, rhs: Operand) -> Result<Resolution, Error> {
    use GroupKind::Fr;
    use Resolution::*;

    let resolution = match (op, rhs) {
        (Operation::Pairing, Operand::Element(rhs)) => return resolve_pairing(lhs, rhs, false),
        (Operation::Add | Operation::Sub | Operation::Compare, Operand::Element(rhs))
            if rhs == lhs =>
        {
            Some(SameGroup)
        }
        (Operation::Mul, Operand::Element(rhs)) => match (lhs, rhs) {
            (l, r) if l == r => Some(SameGroup),
            (_, Fr) => Some(ScalarRight),
            (Fr, _) => Some(ScalarLeft),
            _ => None,
        },
        (Operation::Mul, Operand::Integer) => Some(IntegerRight),
        (Operation::Div, Operand::Element(rhs)) => match (lhs, rhs) {
            (l, r) if l == r => Some(SameGroup),
            (_, Fr) => Some(ScalarRight),
            _ => None,
        },
        (Operation::Pow, Operand::Element(Fr)) => Some(Exponent),
        (Operation::Pow, Operand::Integer) => Some(IntegerExponent),
        _ => None,
    };
    resolution.ok_or_else(|| reject(op, &lhs, &rhs))
}

/// Classifies a pairing of `lhs` with `rhs`.
///
/// An asymmetric pairing needs exactly one G1 and one G2 operand. In a
/// symmetric pairing both source groups coincide, so any two source-group
/// operands are accepted.
pub fn resolve_pairing(
    lhs: GroupKind,
    rhs: GroupKind,
    symmetric: bool,
) -> Result<Resolution, Error> {
    use GroupKind::{G1, G2};

    match (lhs, rhs) {
        (G1, G2) => Ok(Resolution::Paired),
        (G2, G1) => Ok(Resolution::PairedSwapped),
        (l, r) if symmetric && l.is_curve() && r.is_curve() => Ok(Resolution::Paired),
        _ => Err(reject(Operation::Pairing, &lhs, &Operand::Element(rhs))),
    }
}

/// Resolves `lhs op rhs` for two elements, checking first that both belong
/// to the same pairing context.
pub fn check<D: GroupDescriptor>(op: Operation, lhs: &D, rhs: &D) -> Result<Resolution, Error> {
    if !lhs.same_context(rhs) {
        return Err(reject(op, lhs, rhs));
    }
    let resolution = match op {
        Operation::Pairing => {
            resolve_pairing(lhs.kind(), rhs.kind(), lhs.backend().is_symmetric())
        }
        _ => resolve(op, lhs.kind(), Operand::Element(rhs.kind())),
    };
    resolution.map_err(|_| reject(op, lhs, rhs))
}

fn reject(op: Operation, lhs: &dyn fmt::Display, rhs: &dyn fmt::Display) -> Error {
    let (lhs, rhs) = (lhs.to_string(), rhs.to_string());
    trace!(%op, %lhs, %rhs, "operand groups rejected");
    Error::GroupMismatch { op, lhs, rhs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupKind::{Fr, G1, G2, GT};

    fn expected(op: Operation, lhs: GroupKind, rhs: Operand) -> Option<Resolution> {
        use Resolution::*;
        let same = rhs == Operand::Element(lhs);
        match op {
            Operation::Add | Operation::Sub | Operation::Compare => same.then_some(SameGroup),
            Operation::Mul => match rhs {
                Operand::Integer => Some(IntegerRight),
                _ if same => Some(SameGroup),
                Operand::Element(Fr) => Some(ScalarRight),
                Operand::Element(_) if lhs == Fr => Some(ScalarLeft),
                Operand::Element(_) => None,
            },
            Operation::Div => match rhs {
                _ if same => Some(SameGroup),
                Operand::Element(Fr) => Some(ScalarRight),
                _ => None,
            },
            Operation::Pow => match rhs {
                Operand::Element(Fr) => Some(Exponent),
                Operand::Integer => Some(IntegerExponent),
                _ => None,
            },
            Operation::Pairing => match (lhs, rhs) {
                (G1, Operand::Element(G2)) => Some(Paired),
                (G2, Operand::Element(G1)) => Some(PairedSwapped),
                _ => None,
            },
        }
    }

    #[test]
    fn table_is_total_and_matches_rules() {
        let operands: Vec<Operand> = GroupKind::ALL
            .iter()
            .copied()
            .map(Operand::Element)
            .chain([Operand::Integer])
            .collect();
        for op in Operation::ALL {
            for lhs in GroupKind::ALL {
                for &rhs in &operands {
                    let got = resolve(op, lhs, rhs);
                    match expected(op, lhs, rhs) {
                        Some(resolution) => {
                            assert_eq!(got.unwrap(), resolution, "{op} {lhs} {rhs}")
                        }
                        None => assert!(
                            matches!(got, Err(Error::GroupMismatch { .. })),
                            "{op} {lhs} {rhs} should be rejected"
                        ),
                    }
                }
            }
        }
    }

    #[test]
    fn scalar_never_divided_by_group_element() {
        for kind in [G1, G2, GT] {
            assert!(resolve(Operation::Div, Fr, Operand::Element(kind)).is_err());
            assert_eq!(
                resolve(Operation::Mul, Fr, Operand::Element(kind)).unwrap(),
                Resolution::ScalarLeft
            );
        }
    }

    #[test]
    fn rejection_names_both_groups() {
        let err = resolve(Operation::Add, G1, Operand::Element(G2)).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.to_string(), "cannot add G1 and G2");

        let err = resolve(Operation::Pow, GT, Operand::Element(G1)).unwrap_err();
        assert_eq!(err.to_string(), "cannot exponentiate GT and G1");
    }

    #[test]
    fn symmetric_pairing_accepts_any_source_groups() {
        assert_eq!(resolve_pairing(G1, G1, true).unwrap(), Resolution::Paired);
        assert_eq!(resolve_pairing(G2, G1, true).unwrap(), Resolution::PairedSwapped);
        assert!(resolve_pairing(G1, G1, false).is_err());
        assert!(resolve_pairing(G1, GT, true).is_err());
        assert!(resolve_pairing(Fr, G2, true).is_err());
    }
}

//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the concrete
//! curve libraries (Arkworks, blstrs) as well as the high-level `Error` type
//! returned by every element, pairing and parameter operation.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use bilinear::errors::Error;
//!
//! let err = Error::Parse("empty element string".into());
//! assert!(!err.is_type_error());
//! ```

use thiserror::Error;

use crate::{GroupKind, Operation};

/// Errors bubbled up from backend implementations (Arkworks, blstrs, etc.).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),
    #[error("unsupported backend feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
    #[error("{0}")]
    Other(String),
}

/// Errors returned by the element, pairing and parameter APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed textual element or curve description.
    #[error("parse error: {0}")]
    Parse(String),
    /// Binary payload of the wrong length or not a member of the group.
    #[error("cannot deserialize {group} element: {reason}")]
    Deserialization { group: GroupKind, reason: String },
    /// Operands belong to groups that cannot interact under this operation.
    #[error("cannot {op} {lhs} and {rhs}")]
    GroupMismatch {
        op: Operation,
        lhs: String,
        rhs: String,
    },
    /// The operation is not defined for elements of this group.
    #[error("{op} is not defined for {group} elements")]
    Unsupported { op: &'static str, group: GroupKind },
    /// Coordinate access on an element that has no coordinates.
    #[error("{0} elements are not dimensioned")]
    NotDimensioned(GroupKind),
    #[error("index {index} out of range for element with {len} coordinates")]
    Index { index: usize, len: usize },
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

impl Error {
    /// Returns `true` for the errors that signal operands of the wrong group
    /// rather than bad input data.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::GroupMismatch { .. } | Error::Unsupported { .. })
    }

    pub(crate) fn deserialization(group: GroupKind, err: BackendError) -> Self {
        Error::Deserialization {
            group,
            reason: err.to_string(),
        }
    }
}

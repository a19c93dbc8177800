//! Error types for the fallible API surface.
//!
//! Classifying a candidate never fails: a malformed expression is a value
//! carrying an [`InvalidExpression`]. These errors cover misuse of the API
//! (bad offsets) and callers that opt into turning diagnostics into errors.

use thiserror::Error;

use crate::expression::InvalidExpression;

/// Errors returned by candidate construction and document-level policies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A mapped expression failed classification or a required-field check.
    #[error("{0}")]
    Invalid(InvalidExpression),

    /// Offset beyond the end of the source text.
    #[error("offset {offset} is out of bounds for text of length {len}")]
    OffsetOutOfBounds { offset: u32, len: u32 },

    /// Offset that splits a multi-byte character.
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: u32 },

    /// Text that does not have the `&{...}` candidate shape.
    #[error("not a mapped expression candidate: {0:?}")]
    NotACandidate(String),
}

impl ExpressionError {
    /// The diagnostic, if this error came from an invalid expression.
    pub fn diagnostic(&self) -> Option<&InvalidExpression> {
        match self {
            Self::Invalid(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

impl From<InvalidExpression> for ExpressionError {
    fn from(diagnostic: InvalidExpression) -> Self {
        Self::Invalid(diagnostic)
    }
}

//! Parse context tracking for context-aware error messages
//!
//! Each grammar runs in its own context so a failure can say which form of
//! expression it was trying to read.

use super::codes::ErrorCode;

/// The grammar currently being applied to a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// `&{*(fns) key ? "t" : "f"}`
    NormalExpression,
    /// `&{#key}`
    IteratedExpression,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::NormalExpression => "in normal expression",
            Self::IteratedExpression => "in iterated expression",
        }
    }

    /// What the grammar of this context accepts, for "expected ..." text
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::NormalExpression => {
                "'*', a pipe function list, a key, '?', a quoted literal, ':' or '}'"
            }
            Self::IteratedExpression => "a key followed by '}'",
        }
    }

    /// The error code for an out-of-place token in this context
    pub fn unexpected_token_code(&self) -> ErrorCode {
        match self {
            Self::NormalExpression => ErrorCode::E0301,
            Self::IteratedExpression => ErrorCode::E0302,
        }
    }
}

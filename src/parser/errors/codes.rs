//! Error code definitions for mapped expression diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (characters outside the grammar's vocabulary)
//! - E02xx: Structural errors (open/close markers)
//! - E03xx: Grammar errors (tokens in the wrong slot)
//! - E04xx: Missing-data errors (grammar matched, required field absent)

use std::fmt;

/// Error codes for mapped expression diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in the expression
    E0101,
    /// Quoted literal that is unterminated or holds disallowed characters
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Expression does not start with `&{`
    E0201,
    /// Expression is not closed with `}`
    E0202,
    /// Input continues after the closing `}`
    E0203,

    // =========================================================================
    // E03xx: Grammar errors
    // =========================================================================
    /// Unexpected token in a normal expression
    E0301,
    /// Unexpected token in an iterated expression
    E0302,

    // =========================================================================
    // E04xx: Missing-data errors
    // =========================================================================
    /// No mapped key
    E0401,
    /// Ternary operator without a true-branch value
    E0402,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 => "structural error",
            Self::E0301 | Self::E0302 => "grammar error",
            Self::E0401 | Self::E0402 => "missing data",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated quoted literal",
            Self::E0201 => "missing opening '&{'",
            Self::E0202 => "unclosed mapped expression",
            Self::E0203 => "unexpected input after closing '}'",
            Self::E0301 => "unexpected token in normal expression",
            Self::E0302 => "unexpected token in iterated expression",
            Self::E0401 => "missing mapped key",
            Self::E0402 => "missing ternary true value",
        }
    }

    /// Check if this code reports absent data rather than bad syntax
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::E0401 | Self::E0402)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

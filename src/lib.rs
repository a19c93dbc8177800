//! # mapped-expr
//!
//! Recognizer for mapped expressions: the `&{...}` placeholders a template
//! renderer substitutes. This crate finds them, classifies each one, breaks
//! valid ones into their parts and describes invalid ones precisely enough
//! for a template author to fix them. It does not render anything.
//!
//! ```text
//! &{user.name}                           normal
//! &{*(trim,upper) user.email ? "y" : 'n'} normal: optional, piped, ternary
//! &{#items}                              iterated
//! &{user-name}                           invalid: Invalid Syntax
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! document   → Candidate scan, diagnostic policy, parallel classification
//!   ↓
//! expression → MappedExpression, field extraction, validation, ordering
//!   ↓
//! parser     → Logos lexer, recursive-descent grammars, SyntaxError
//!   ↓
//! base       → TextRange/TextSize, LineIndex, Position
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → expression → document)
// ============================================================================

/// Foundation types: offsets and line/column lookup
pub mod base;

/// Parser: Logos lexer and strict grammars for one candidate
pub mod parser;

/// Mapped expression values and their diagnostics
pub mod expression;

/// Whole-document scanning and diagnostic policy
pub mod document;

mod error;

pub use base::{LineCol, LineIndex, Position, TextRange, TextSize, locate};
pub use document::{
    CANDIDATE_PATTERN, DiagnosticPolicy, DocumentOptions, ParsedDocument, candidates,
    parse_document, parse_document_with,
};
pub use error::ExpressionError;
pub use expression::{
    Candidate, ExpressionKind, InvalidExpression, MappedExpression, Problem, sort_expressions,
};

//! Tokenizer and strict grammars for a single mapped expression candidate
//!
//! ## Architecture
//!
//! ```text
//! Candidate text ("&{*(trim) key ? 'y' : 'n'}")
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → Parse::{Normal, Iterated, Invalid}
//! ```
//!
//! The parser only recognizes structure. Interpreting the captures (quote
//! stripping, pipe splitting, missing-data checks) belongs to
//! [`crate::expression`].

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;
mod syntax_kind;

pub use errors::{ErrorCode, ParseContext, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{IteratedSyntax, NormalSyntax, Parse, parse_expression};
pub use syntax_kind::{SyntaxKind, kind_to_name};

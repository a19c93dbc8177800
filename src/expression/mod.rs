//! Mapped expression values
//!
//! [`MappedExpression::new`] runs the whole pipeline for one candidate:
//! classify with the strict grammars, extract the structured fields, then
//! check the fields a usable expression requires. The result is a value, not
//! a `Result`: a malformed candidate yields an expression carrying an
//! [`InvalidExpression`] so one bad placeholder never stops the rest of a
//! document from being processed.

mod candidate;
mod diagnostic;
mod fields;
mod mapped;

pub use candidate::Candidate;
pub use diagnostic::{InvalidExpression, Problem};
pub use fields::{
    ExpressionFields, NormalFields, extract_fields, parse_pipe_functions, select_literal, validate,
};
pub use mapped::{ExpressionKind, MappedExpression, sort_expressions};

//! Foundation types for mapped expression recognition.
//!
//! This module provides the position primitives used by every other layer:
//! - [`TextRange`], [`TextSize`] - Source spans (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Offset to line/column conversion
//! - [`Position`] - 1-based line/column pairs for diagnostics
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;

pub use line_index::{LineCol, LineIndex, locate};
pub use position::Position;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

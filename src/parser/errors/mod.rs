//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages
//! - Hints for common mistakes

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{SyntaxError, format_context_error};

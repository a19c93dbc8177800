//! Syntax kinds for mapped expression tokens
//!
//! A mapped expression is small enough that the parser works directly on the
//! token stream; there are no composite node kinds.

/// All token kinds that can appear inside a candidate `&{...}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0, // one or more spaces (tabs are not trivia here)

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,         // user.name, items_0, .
    PIPE_LIST,     // (trim,upper)
    DOUBLE_QUOTED, // "yes"
    SINGLE_QUOTED, // 'yes'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    OPEN_MARKER, // &{
    R_BRACE,     // }
    HASH,        // #
    STAR,        // *
    QUESTION,    // ?
    COLON,       // :

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
    EOF,
}

impl SyntaxKind {
    /// Check if this is trivia (skipped between grammar slots)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE)
    }

    /// Check if this is a quoted literal of either style
    pub fn is_quoted(self) -> bool {
        matches!(self, Self::DOUBLE_QUOTED | Self::SINGLE_QUOTED)
    }
}

/// Human-readable name of a token kind for error messages
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::WHITESPACE => "whitespace",
        SyntaxKind::IDENT => "identifier",
        SyntaxKind::PIPE_LIST => "pipe function list",
        SyntaxKind::DOUBLE_QUOTED => "double-quoted literal",
        SyntaxKind::SINGLE_QUOTED => "single-quoted literal",
        SyntaxKind::OPEN_MARKER => "'&{'",
        SyntaxKind::R_BRACE => "'}'",
        SyntaxKind::HASH => "'#'",
        SyntaxKind::STAR => "'*'",
        SyntaxKind::QUESTION => "'?'",
        SyntaxKind::COLON => "':'",
        SyntaxKind::ERROR => "invalid input",
        SyntaxKind::EOF => "end of expression",
    }
}

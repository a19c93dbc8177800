//! Logos-based lexer for a single mapped expression candidate
//!
//! The character classes here are the whole of the expression grammar's
//! vocabulary; anything outside them lexes as `ERROR`.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position within the candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire candidate into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r" +")]
    Whitespace,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z0-9_.]+")]
    Ident,

    #[regex(r"\([a-zA-Z0-9_,]*\)")]
    PipeList,

    #[regex(r#""[a-zA-Z0-9_. ]*""#)]
    DoubleQuoted,

    #[regex(r"'[a-zA-Z0-9_. ]*'")]
    SingleQuoted,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("&{")]
    OpenMarker,
    #[token("}")]
    RBrace,
    #[token("#")]
    Hash,
    #[token("*")]
    Star,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::PipeList => SyntaxKind::PIPE_LIST,
            LogosToken::DoubleQuoted => SyntaxKind::DOUBLE_QUOTED,
            LogosToken::SingleQuoted => SyntaxKind::SINGLE_QUOTED,
            LogosToken::OpenMarker => SyntaxKind::OPEN_MARKER,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::Hash => SyntaxKind::HASH,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Colon => SyntaxKind::COLON,
        }
    }
}

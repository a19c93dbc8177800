//! Recursive descent parser for mapped expressions
//!
//! Two strict grammars are tried in order against one candidate:
//!
//! ```text
//! normal   := '&{' '*'? _ PIPE_LIST? _ IDENT? _ '?'? _ DQ? _ SQ? _ ':'? _ DQ? _ SQ? _ '}'
//! iterated := '&{' '#' IDENT? '}'
//! ```
//!
//! `_` is an optional run of spaces. Both grammars are anchored: the closing
//! `}` must be the last character of the candidate. Every slot is optional
//! in the grammar, including the key; a missing key is reported later as
//! missing data, not as a syntax error.

use super::errors::{ErrorCode, ParseContext, SyntaxError, format_context_error};
use super::lexer::{Token, tokenize};
use super::syntax_kind::{SyntaxKind, kind_to_name};
use text_size::{TextRange, TextSize};

/// Raw captures of a candidate that matched the normal grammar
///
/// Literal captures keep their surrounding quotes and the pipe list keeps
/// its parentheses; interpretation happens during field extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalSyntax<'a> {
    /// `*` directly after the opening marker
    pub optional: bool,
    /// `(fn1,fn2)` including parentheses
    pub pipe_list: Option<&'a str>,
    /// The mapped key, absent when the key slot was empty
    pub key: Option<&'a str>,
    /// `?` ternary marker
    pub ternary: bool,
    /// Double-quoted candidate before the separator
    pub true_double: Option<&'a str>,
    /// Single-quoted candidate before the separator
    pub true_single: Option<&'a str>,
    /// `:` separator
    pub separator: bool,
    /// Double-quoted candidate after the separator
    pub false_double: Option<&'a str>,
    /// Single-quoted candidate after the separator
    pub false_single: Option<&'a str>,
}

/// Raw captures of a candidate that matched the iterated grammar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IteratedSyntax<'a> {
    /// The mapped key, absent for `&{#}`
    pub key: Option<&'a str>,
}

/// Classification of one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse<'a> {
    Normal(NormalSyntax<'a>),
    Iterated(IteratedSyntax<'a>),
    Invalid(SyntaxError),
}

impl Parse<'_> {
    /// Check if either grammar matched
    pub fn ok(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// The syntax error, if neither grammar matched
    pub fn error(&self) -> Option<&SyntaxError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Classify a single candidate text
///
/// The normal grammar is tried first, then the iterated grammar. When both
/// fail, the reported error comes from the grammar the candidate was aimed
/// at: iterated if it starts with `&{#`, normal otherwise.
pub fn parse_expression(text: &str) -> Parse<'_> {
    let tokens = tokenize(text);
    let end = TextSize::of(text);

    let normal_err = match Parser::new(&tokens, end, ParseContext::NormalExpression).parse_normal() {
        Ok(syntax) => {
            tracing::trace!(expr = text, "matched normal grammar");
            return Parse::Normal(syntax);
        }
        Err(err) => err,
    };

    let iterated_err = match Parser::new(&tokens, end, ParseContext::IteratedExpression).parse_iterated() {
        Ok(syntax) => {
            tracing::trace!(expr = text, "matched iterated grammar");
            return Parse::Iterated(syntax);
        }
        Err(err) => err,
    };

    let err = if text.starts_with("&{#") {
        iterated_err
    } else {
        normal_err
    };
    tracing::trace!(expr = text, code = %err.code, "matched neither grammar");
    Parse::Invalid(err)
}

/// The parser state for one grammar attempt
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    end: TextSize,
    context: ParseContext,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], end: TextSize, context: ParseContext) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            context,
        }
    }

    // =========================================================================
    // Grammars
    // =========================================================================

    fn parse_normal(mut self) -> Result<NormalSyntax<'a>, SyntaxError> {
        self.expect_open()?;

        // `*` must touch the opening marker: `&{ *key}` is not optional
        let optional = self.eat(SyntaxKind::STAR);
        self.skip_trivia();
        let pipe_list = self.eat_text(SyntaxKind::PIPE_LIST);
        self.skip_trivia();
        let key = self.eat_text(SyntaxKind::IDENT);
        self.skip_trivia();
        let ternary = self.eat(SyntaxKind::QUESTION);
        self.skip_trivia();
        let true_double = self.eat_text(SyntaxKind::DOUBLE_QUOTED);
        self.skip_trivia();
        let true_single = self.eat_text(SyntaxKind::SINGLE_QUOTED);
        self.skip_trivia();
        let separator = self.eat(SyntaxKind::COLON);
        self.skip_trivia();
        let false_double = self.eat_text(SyntaxKind::DOUBLE_QUOTED);
        self.skip_trivia();
        let false_single = self.eat_text(SyntaxKind::SINGLE_QUOTED);
        self.skip_trivia();

        self.expect_close()?;

        Ok(NormalSyntax {
            optional,
            pipe_list,
            key,
            ternary,
            true_double,
            true_single,
            separator,
            false_double,
            false_single,
        })
    }

    fn parse_iterated(mut self) -> Result<IteratedSyntax<'a>, SyntaxError> {
        self.expect_open()?;
        if !self.eat(SyntaxKind::HASH) {
            return Err(self.unexpected());
        }
        let key = self.eat_text(SyntaxKind::IDENT);
        self.expect_close()?;

        Ok(IteratedSyntax { key })
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::EOF)
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(|t| t.range())
            .unwrap_or_else(|| TextRange::empty(self.end))
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'a str> {
        let text = self.current().map(|t| t.text)?;
        self.pos += 1;
        Some(text)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        self.eat_text(kind).is_some()
    }

    fn eat_text(&mut self, kind: SyntaxKind) -> Option<&'a str> {
        if self.at(kind) { self.bump() } else { None }
    }

    fn skip_trivia(&mut self) {
        while self.current_kind().is_trivia() {
            self.pos += 1;
        }
    }

    fn expect_open(&mut self) -> Result<(), SyntaxError> {
        if self.eat(SyntaxKind::OPEN_MARKER) {
            Ok(())
        } else {
            Err(SyntaxError::from_code(ErrorCode::E0201, self.current_range())
                .with_hint("mapped expressions start with '&{'"))
        }
    }

    fn expect_close(&mut self) -> Result<(), SyntaxError> {
        if !self.eat(SyntaxKind::R_BRACE) {
            return Err(self.unexpected());
        }
        if self.at_eof() {
            return Ok(());
        }
        let range = TextRange::new(self.current_range().start(), self.end);
        Err(SyntaxError::from_code(ErrorCode::E0203, range))
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// Describe the token at the current position as out of place
    fn unexpected(&self) -> SyntaxError {
        let range = self.current_range();
        let Some(token) = self.current() else {
            return SyntaxError::from_code(ErrorCode::E0202, range)
                .with_hint("close the expression with '}'");
        };

        match token.kind {
            SyntaxKind::ERROR if token.text.starts_with(['"', '\'']) => {
                SyntaxError::from_code(ErrorCode::E0102, range).with_hint(
                    "quoted literals may only contain letters, digits, '_', '.' and spaces",
                )
            }
            SyntaxKind::ERROR => SyntaxError::new(
                format!("invalid character '{}'", token.text),
                range,
                ErrorCode::E0101,
            ),
            kind => {
                let found = match kind {
                    SyntaxKind::IDENT
                    | SyntaxKind::PIPE_LIST
                    | SyntaxKind::DOUBLE_QUOTED
                    | SyntaxKind::SINGLE_QUOTED => {
                        format!("{} {}", kind_to_name(kind), token.text)
                    }
                    _ => kind_to_name(kind).to_string(),
                };
                let err = format_context_error(&found, range, self.context);
                match self.hint_for(kind) {
                    Some(hint) => err.with_hint(hint),
                    None => err,
                }
            }
        }
    }

    fn hint_for(&self, kind: SyntaxKind) -> Option<&'static str> {
        match (self.context, kind) {
            (ParseContext::NormalExpression, SyntaxKind::STAR) => {
                Some("'*' must directly follow '&{'")
            }
            (ParseContext::NormalExpression, SyntaxKind::HASH) => {
                Some("iterated expressions take the form '&{#key}'")
            }
            (ParseContext::NormalExpression, SyntaxKind::PIPE_LIST) => {
                Some("pipe functions go before the key")
            }
            (ParseContext::IteratedExpression, SyntaxKind::WHITESPACE) => {
                Some("iterated expressions do not allow spaces")
            }
            (ParseContext::IteratedExpression, _) => {
                Some("iterated expressions carry only a key")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal(text: &str) -> NormalSyntax<'_> {
        match parse_expression(text) {
            Parse::Normal(syntax) => syntax,
            other => panic!("expected normal expression for {}, got {:?}", text, other),
        }
    }

    fn invalid(text: &str) -> SyntaxError {
        match parse_expression(text) {
            Parse::Invalid(err) => err,
            other => panic!("expected invalid expression for {}, got {:?}", text, other),
        }
    }

    #[test]
    fn test_simple_key() {
        let syntax = normal("&{user.name}");
        assert_eq!(syntax.key, Some("user.name"));
        assert!(!syntax.optional);
        assert!(!syntax.ternary);
        assert_eq!(syntax.pipe_list, None);
    }

    #[test]
    fn test_all_slots_captured_raw() {
        let syntax = normal(r#"&{*(trim,upper) user.email ? "yes" : 'no'}"#);
        assert!(syntax.optional);
        assert_eq!(syntax.pipe_list, Some("(trim,upper)"));
        assert_eq!(syntax.key, Some("user.email"));
        assert!(syntax.ternary);
        assert_eq!(syntax.true_double, Some(r#""yes""#));
        assert_eq!(syntax.true_single, None);
        assert!(syntax.separator);
        assert_eq!(syntax.false_double, None);
        assert_eq!(syntax.false_single, Some("'no'"));
    }

    #[test]
    fn test_both_quote_styles_in_one_slot() {
        let syntax = normal(r#"&{flag ? "dq" 'sq' : "f"}"#);
        assert_eq!(syntax.true_double, Some(r#""dq""#));
        assert_eq!(syntax.true_single, Some("'sq'"));
        assert_eq!(syntax.false_double, Some(r#""f""#));
    }

    #[test]
    fn test_false_literal_without_separator() {
        let syntax = normal(r#"&{k ? "a" "b"}"#);
        assert_eq!(syntax.true_double, Some(r#""a""#));
        assert!(!syntax.separator);
        assert_eq!(syntax.false_double, Some(r#""b""#));
    }

    #[test]
    fn test_empty_key_is_not_a_syntax_error() {
        assert_eq!(normal("&{}").key, None);
        let syntax = normal("&{?}");
        assert_eq!(syntax.key, None);
        assert!(syntax.ternary);
    }

    #[test]
    fn test_iterated() {
        assert_eq!(
            parse_expression("&{#items}"),
            Parse::Iterated(IteratedSyntax { key: Some("items") })
        );
        assert_eq!(
            parse_expression("&{#}"),
            Parse::Iterated(IteratedSyntax { key: None })
        );
    }

    #[test]
    fn test_iterated_rejects_extras() {
        let err = invalid(r#"&{#key ? "a"}"#);
        assert_eq!(err.code, ErrorCode::E0302);
        assert!(err.has_hint());
        assert_eq!(invalid("&{#(trim)key}").code, ErrorCode::E0302);
        assert_eq!(invalid("&{*#key}").code, ErrorCode::E0301);
    }

    #[test]
    fn test_space_before_star_is_invalid() {
        let err = invalid("&{ *key}");
        assert_eq!(err.code, ErrorCode::E0301);
        assert_eq!(err.range, TextRange::new(TextSize::new(3), TextSize::new(4)));
        assert_eq!(err.hint.as_deref(), Some("'*' must directly follow '&{'"));
    }

    #[test]
    fn test_lexical_errors() {
        let err = invalid("&{user-name}");
        assert_eq!(err.code, ErrorCode::E0101);
        assert_eq!(err.message, "invalid character '-'");

        assert_eq!(invalid(r#"&{k ? "a!"}"#).code, ErrorCode::E0102);
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(invalid("user}").code, ErrorCode::E0201);
        assert_eq!(invalid("&{user").code, ErrorCode::E0202);

        let err = invalid("&{user} tail");
        assert_eq!(err.code, ErrorCode::E0203);
        assert_eq!(err.range, TextRange::new(TextSize::new(7), TextSize::new(12)));
    }

    #[test]
    fn test_grammar_is_anchored_at_start() {
        // A second opening marker inside the candidate is not skipped over
        assert!(!parse_expression("&{a &{b}").ok());
    }

    #[test]
    fn test_slot_order_is_enforced() {
        assert!(!parse_expression("&{key (trim)}").ok());
        assert!(!parse_expression("&{?key}").ok());
        assert!(!parse_expression(r#"&{k ? : "a" "b"}"#).ok());
    }
}

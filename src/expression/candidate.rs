//! A candidate match: the raw text of one `&{...}` occurrence plus enough
//! context to locate it in the document it came from.

use text_size::{TextRange, TextSize};

use crate::error::ExpressionError;

/// One candidate occurrence within a source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    text: &'a str,
    offset: TextSize,
    source: &'a str,
}

impl<'a> Candidate<'a> {
    /// Build a candidate from a range the caller found by its own search
    ///
    /// The range must lie within `source`, fall on character boundaries and
    /// cover text shaped like `&{...}`.
    pub fn from_range(source: &'a str, range: TextRange) -> Result<Self, ExpressionError> {
        let len = TextSize::of(source);
        if range.end() > len {
            return Err(ExpressionError::OffsetOutOfBounds {
                offset: range.end().into(),
                len: len.into(),
            });
        }

        for bound in [range.start(), range.end()] {
            if !source.is_char_boundary(bound.into()) {
                return Err(ExpressionError::NotCharBoundary {
                    offset: bound.into(),
                });
            }
        }

        let text = &source[range];
        if text.len() < 3 || !text.starts_with("&{") || !text.ends_with('}') {
            return Err(ExpressionError::NotACandidate(text.to_string()));
        }

        Ok(Self::new_unchecked(source, range))
    }

    /// Treat an entire text as a single candidate at offset 0
    pub fn whole(text: &'a str) -> Self {
        Self {
            text,
            offset: TextSize::new(0),
            source: text,
        }
    }

    pub(crate) fn new_unchecked(source: &'a str, range: TextRange) -> Self {
        Self {
            text: &source[range],
            offset: range.start(),
            source,
        }
    }

    /// The matched text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Absolute offset of the match within the source
    pub fn offset(&self) -> TextSize {
        self.offset
    }

    /// Half-open span of the match within the source
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    /// The full source text the match was found in
    pub fn source(&self) -> &'a str {
        self.source
    }
}

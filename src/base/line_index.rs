//! Offset to line/column conversion
//!
//! Line breaks are `\n`; a `\r` preceding it stays part of the previous line.
//! Columns count characters, not bytes, so a diagnostic points at the same
//! place an editor cursor would.

use text_size::TextSize;

use super::Position;

/// A 0-based line/column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    /// Convert to the 1-based form used in diagnostics
    pub fn to_position(self) -> Position {
        Position::new(self.line as usize + 1, self.col as usize + 1)
    }
}

/// Precomputed line starts for one source text
///
/// Build it once per document and reuse it for every expression found in
/// that document.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<TextSize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::new(idx as u32 + 1)),
        );
        Self { text, line_starts }
    }

    /// Number of lines in the text (an empty text has one line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Locate `offset`, clamping offsets past the end of text to the end
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(self.text));
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);

        // An offset inside a multi-byte char resolves to that char's column
        let col = self.text[line_start..]
            .char_indices()
            .take_while(|(idx, ch)| line_start + idx + ch.len_utf8() <= end)
            .count();

        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }

    /// 1-based position of `offset`
    pub fn position(&self, offset: TextSize) -> Position {
        self.line_col(offset).to_position()
    }
}

/// One-shot lookup of the 1-based position of `offset` in `text`
pub fn locate(text: &str, offset: TextSize) -> Position {
    LineIndex::new(text).position(offset)
}

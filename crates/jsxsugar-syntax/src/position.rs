//! Line/column positions.
//!
//! Lines are 1-based and columns are 0-based, counted in UTF-16 code units
//! (the unit source maps use). `\r\n`, `\r`, `\n`, U+2028 and U+2029 all
//! terminate a line, both when mapping offsets of the original text and
//! when advancing a cursor over generated text, so the two sides of a
//! mapping entry are always measured the same way.

use serde::{Deserialize, Serialize};

/// A line/column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number
    pub line: u32,
    /// 0-based column in UTF-16 code units
    pub column: u32,
}

impl Position {
    /// The first position of any text.
    pub const START: Position = Position { line: 1, column: 0 };

    pub fn new(line: u32, column: u32) -> Position {
        Position { line, column }
    }

    /// The position immediately after `text` when it is written at `self`.
    ///
    /// A `\r\n` pair split across two calls would count as two line breaks;
    /// node boundaries never fall between the two characters.
    pub fn advance(self, text: &str) -> Position {
        let mut line = self.line;
        let mut column = self.column;
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == '\r' {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                column = 0;
            } else if is_line_terminator(ch) {
                line += 1;
                column = 0;
            } else {
                column += ch.len_utf16() as u32;
            }
        }
        Position { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end positions of a node in the original source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position) -> SourceLocation {
        SourceLocation { start, end }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation {
            start: Position::START,
            end: Position::START,
        }
    }
}

/// ECMAScript line terminators.
#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Byte offset to line/column conversion for one source text.
///
/// Stores the byte offset of every line start; lookups binary-search the
/// line and count UTF-16 units from the line start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn build(text: &str) -> LineMap {
        let mut line_starts = vec![0u32];
        let bytes = text.as_bytes();
        let mut iter = text.char_indices().peekable();
        while let Some((idx, ch)) = iter.next() {
            match ch {
                '\r' => {
                    if bytes.get(idx + 1) == Some(&b'\n') {
                        iter.next();
                        line_starts.push((idx + 2) as u32);
                    } else {
                        line_starts.push((idx + 1) as u32);
                    }
                }
                '\n' => line_starts.push((idx + 1) as u32),
                '\u{2028}' | '\u{2029}' => line_starts.push((idx + ch.len_utf8()) as u32),
                _ => {}
            }
        }
        LineMap { line_starts }
    }

    /// Number of lines in the text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of byte `offset` in `text`. Offsets past the end clamp to the
    /// end of the text; offsets inside a multi-byte character count the
    /// whole character.
    pub fn position_of(&self, text: &str, offset: u32) -> Position {
        let offset = offset.min(text.len() as u32);
        let line_index = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line_index] as usize;
        let column: usize = text
            .get(line_start..)
            .unwrap_or("")
            .char_indices()
            .take_while(|(idx, _)| line_start + idx < offset as usize)
            .map(|(_, ch)| ch.len_utf16())
            .sum();
        Position {
            line: line_index as u32 + 1,
            column: column as u32,
        }
    }
}

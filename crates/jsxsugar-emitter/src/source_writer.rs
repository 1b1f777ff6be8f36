//! Fragment writer.
//!
//! Every emit call builds its output with a `FragmentWriter` that starts at
//! the generated position it was handed and advances a cursor over each
//! piece of text it appends. Mapping entries are recorded against the cursor
//! at the moment a mapped piece is written, so entries come out in
//! generated-position order and always point inside the written text.

use jsxsugar_syntax::Position;
use serde::Serialize;
use std::sync::Arc;

/// One original-to-generated position correspondence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub original: Position,
    pub generated: Position,
    pub source: Arc<str>,
}

/// Output of emitting one (sub)tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedFragment {
    /// Generated position the text was written at.
    pub start: Position,
    pub text: String,
    pub mappings: Vec<MappingEntry>,
    /// Generated position immediately after `text`.
    pub end: Position,
}

impl EmittedFragment {
    pub fn empty(at: Position) -> Self {
        EmittedFragment {
            start: at,
            text: String::new(),
            mappings: Vec::new(),
            end: at,
        }
    }

    /// True when the fragment produced no significant output.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub struct FragmentWriter {
    start: Position,
    cursor: Position,
    text: String,
    mappings: Vec<MappingEntry>,
    source: Arc<str>,
}

impl FragmentWriter {
    pub fn new(at: Position, source: Arc<str>) -> Self {
        FragmentWriter {
            start: at,
            cursor: at,
            text: String::new(),
            mappings: Vec::new(),
            source,
        }
    }

    /// Generated position the next piece of text lands at.
    #[inline]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Write text with no mapping.
    pub fn write(&mut self, text: &str) {
        self.text.push_str(text);
        self.cursor = self.cursor.advance(text);
    }

    /// Write text and map its first character to `original`.
    /// Empty text records nothing.
    pub fn write_mapped(&mut self, text: &str, original: Position) {
        if text.is_empty() {
            return;
        }
        self.map(original);
        self.write(text);
    }

    /// Map the current cursor to `original` without writing.
    pub fn map(&mut self, original: Position) {
        self.mappings.push(MappingEntry {
            original,
            generated: self.cursor,
            source: Arc::clone(&self.source),
        });
    }

    /// Append a child fragment emitted at the current cursor.
    pub fn append(&mut self, fragment: EmittedFragment) {
        debug_assert_eq!(
            fragment.start, self.cursor,
            "child fragment emitted at the wrong position"
        );
        self.text.push_str(&fragment.text);
        self.mappings.extend(fragment.mappings);
        self.cursor = fragment.end;
    }

    pub fn finish(self) -> EmittedFragment {
        EmittedFragment {
            start: self.start,
            text: self.text,
            mappings: self.mappings,
            end: self.cursor,
        }
    }
}

//! JSX text whitespace collapsing.
//!
//! Text between tags is split into physical lines. Blank lines disappear,
//! each remaining line becomes its own string literal, and neighbouring
//! literals are joined with a single space.

use jsxsugar_syntax::is_line_terminator;

/// Concatenation placed between the literals of two surviving lines.
pub const LINE_JOINER: &str = "+' '+";

/// One surviving line of a text node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedLine {
    /// Line number relative to the first line of the text (0-based)
    pub index: usize,
    /// Width of the leading whitespace in UTF-16 units
    pub indent_width: u32,
    /// Quoted literal of the trimmed line
    pub literal: String,
    /// Whether `LINE_JOINER` follows this line's literal
    pub join_next: bool,
}

/// Whitespace JSX text collapsing ignores. Non-breaking space is content.
#[inline]
pub fn is_jsx_whitespace(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\n'
            | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Split on `\r\n`, `\r`, `\n`, U+2028 and U+2029.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();
    while let Some((idx, ch)) = iter.next() {
        if !is_line_terminator(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' && iter.peek().is_some_and(|&(_, next)| next == '\n') {
            iter.next();
            start += 1;
        }
    }
    lines.push(&text[start..]);
    lines
}

pub fn normalize_text(raw: &str) -> Vec<NormalizedLine> {
    let mut lines: Vec<NormalizedLine> = split_lines(raw)
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let content = line.trim_matches(is_jsx_whitespace);
            if content.is_empty() {
                return None;
            }
            let indent = line.len() - line.trim_start_matches(is_jsx_whitespace).len();
            let indent_width = line[..indent].encode_utf16().count() as u32;
            Some(NormalizedLine {
                index,
                indent_width,
                literal: quote_string(content),
                join_next: false,
            })
        })
        .collect();

    let count = lines.len();
    for line in lines.iter_mut().take(count.saturating_sub(1)) {
        line.join_next = true;
    }
    lines
}

/// Double-quoted string literal for `text`.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

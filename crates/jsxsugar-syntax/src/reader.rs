//! Markup reader.
//!
//! Finds JSX islands inside ECMAScript source and builds a full node tree for
//! each of them. Host-language code is not parsed: it is represented by
//! generic nodes (`Program` for the whole file, `Expression` for the inside
//! of `{...}` containers) whose only structured children are the islands
//! nested in them. That is all generic reconstruction needs, since host
//! text between islands is copied verbatim.
//!
//! While scanning host code the reader skips strings, template literals,
//! comments and regular expressions, and tracks whether the previous token
//! ends a value, so that `a < b` is read as a comparison and `(<div/>)` as
//! markup.
//!
//! Statements are not parsed, so a `)` or `]` always counts as the end of a
//! value: markup directly after the condition of `if (x)`, `while (x)` or
//! `for (...)` is read as a comparison and left as is.

use crate::base::{NodeIndex, NodeList};
use crate::error::ParseError;
use crate::kind::SyntaxKind;
use crate::node::{
    GenericData, JsxAttributeData, JsxClosingData, JsxElementData, JsxExpressionData,
    JsxFragmentData, JsxIdentifierData, JsxMemberData, JsxNamespacedNameData, JsxOpeningData,
    JsxOpeningFragmentData, JsxSpreadAttributeData, JsxTextData, Node, NodeArena, NodeData,
};
use crate::position::{LineMap, SourceLocation};
use tracing::debug;

/// Result of reading a source file.
#[derive(Debug)]
pub struct ParsedSource {
    pub arena: NodeArena,
    pub root: NodeIndex,
}

/// Read `source` into a syntax tree rooted at a `Program` node.
pub fn parse(source: &str, file_name: Option<&str>) -> Result<ParsedSource, ParseError> {
    let mut reader = MarkupReader::new(source, file_name);
    let root = reader.read_program()?;
    debug!(
        file = reader.file_label(),
        nodes = reader.arena.len(),
        "read source"
    );
    Ok(ParsedSource {
        arena: reader.arena,
        root,
    })
}

/// Keywords after which an expression (and therefore markup) may start.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "void",
    "delete",
    "yield",
    "await",
    "case",
    "default",
    "in",
    "of",
    "new",
    "do",
    "else",
    "throw",
    "instanceof",
];

/// What the previous host token was, for `<` and `/` disambiguation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prev {
    Start,
    Operator,
    Value,
}

struct MarkupReader<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line_map: LineMap,
    arena: NodeArena,
}

#[inline]
fn is_ident_start_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_part_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[inline]
fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

impl<'a> MarkupReader<'a> {
    fn new(source: &'a str, file_name: Option<&str>) -> Self {
        let arena = match file_name {
            Some(name) => NodeArena::with_file_name(name),
            None => NodeArena::new(),
        };
        MarkupReader {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line_map: LineMap::build(source),
            arena,
        }
    }

    fn file_label(&self) -> &str {
        self.arena.file_name().unwrap_or("<anonymous>")
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    #[inline]
    fn current(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> ParseError {
        let offset = offset.min(self.source.len()) as u32;
        ParseError {
            file: self.file_label().to_string(),
            message: message.into(),
            offset,
            position: self.line_map.position_of(self.source, offset),
        }
    }

    fn expect(&mut self, byte: u8, message: &str) -> Result<(), ParseError> {
        if self.current() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error_at(self.pos, message))
        }
    }

    fn add_node(&mut self, kind: SyntaxKind, pos: usize, end: usize, data: NodeData) -> NodeIndex {
        let loc = SourceLocation::new(
            self.line_map.position_of(self.source, pos as u32),
            self.line_map.position_of(self.source, end as u32),
        );
        self.arena.add(Node {
            kind,
            pos: pos as u32,
            end: end as u32,
            loc,
            data,
        })
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if crate::position::is_line_terminator(ch) {
                return;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 2;
        match memchr::memmem::find(&self.bytes[self.pos..], b"*/") {
            Some(offset) => {
                self.pos += offset + 2;
                Ok(())
            }
            None => Err(self.error_at(start, "unterminated comment")),
        }
    }

    /// Skip whitespace and comments between the parts of a tag.
    fn skip_markup_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.current() {
                Some(b) if is_ascii_space(b) => self.pos += 1,
                Some(b'/') if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                Some(b'/') if self.peek(1) == Some(b'*') => self.skip_block_comment()?,
                Some(b) if b >= 0x80 => match self.current_char() {
                    Some(ch) if ch.is_whitespace() || ch == '\u{feff}' => {
                        self.pos += ch.len_utf8();
                    }
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    // =========================================================================
    // Host code
    // =========================================================================

    fn read_program(&mut self) -> Result<NodeIndex, ParseError> {
        let mut islands = Vec::new();
        self.scan_host(&mut islands, false)?;
        let end = self.source.len();
        Ok(self.add_node(
            SyntaxKind::Program,
            0,
            end,
            NodeData::Generic(GenericData {
                children: NodeList::from(islands),
            }),
        ))
    }

    /// Scan host code, collecting every markup island found at any depth.
    ///
    /// With `stop_at_brace` the scan ends on the unmatched `}` closing the
    /// enclosing container (left unconsumed); otherwise it runs to the end of
    /// input. Returns the end offset of the last token that is neither
    /// whitespace nor a comment, or `None` when there was no such token.
    fn scan_host(
        &mut self,
        islands: &mut Vec<NodeIndex>,
        stop_at_brace: bool,
    ) -> Result<Option<usize>, ParseError> {
        let start = self.pos;
        let mut depth = 0usize;
        let mut prev = Prev::Start;
        let mut last_token_end = None;

        while let Some(b) = self.current() {
            let trivia = self.at_trivia(b);
            match b {
                _ if is_ascii_space(b) => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment()?,
                b'\'' | b'"' => {
                    self.skip_string(b)?;
                    prev = Prev::Value;
                }
                b'`' => {
                    self.skip_template(islands)?;
                    prev = Prev::Value;
                }
                b'/' if prev != Prev::Value => {
                    self.skip_regex()?;
                    prev = Prev::Value;
                }
                b'<' if prev != Prev::Value && self.starts_markup() => {
                    islands.push(self.read_markup()?);
                    prev = Prev::Value;
                }
                b'{' | b'(' | b'[' => {
                    depth += 1;
                    self.pos += 1;
                    prev = Prev::Operator;
                }
                b'}' => {
                    if depth == 0 && stop_at_brace {
                        return Ok(last_token_end);
                    }
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                    prev = Prev::Operator;
                }
                b')' | b']' => {
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                    prev = Prev::Value;
                }
                b'+' | b'-' if prev == Prev::Value && self.peek(1) == Some(b) => {
                    // postfix increment/decrement keeps the value
                    self.pos += 2;
                }
                b'0'..=b'9' => {
                    self.skip_number();
                    prev = Prev::Value;
                }
                _ if is_ident_start_byte(b) => {
                    let word = self.read_word();
                    prev = if EXPRESSION_KEYWORDS.contains(&word) {
                        Prev::Operator
                    } else {
                        Prev::Value
                    };
                }
                _ if b >= 0x80 => {
                    let Some(ch) = self.current_char() else {
                        break;
                    };
                    if ch.is_alphabetic() {
                        self.read_word();
                        prev = Prev::Value;
                    } else {
                        self.pos += ch.len_utf8();
                        if !ch.is_whitespace() && ch != '\u{feff}' {
                            prev = Prev::Operator;
                        }
                    }
                }
                _ => {
                    self.pos += 1;
                    prev = Prev::Operator;
                }
            }
            if !trivia {
                last_token_end = Some(self.pos);
            }
        }

        if stop_at_brace {
            Err(self.error_at(start.saturating_sub(1), "unterminated expression container"))
        } else {
            Ok(last_token_end)
        }
    }

    /// Whitespace or the start of a comment at the current position.
    fn at_trivia(&self, b: u8) -> bool {
        match b {
            _ if is_ascii_space(b) => true,
            b'/' => matches!(self.peek(1), Some(b'/' | b'*')),
            _ if b >= 0x80 => self
                .current_char()
                .is_some_and(|ch| ch.is_whitespace() || ch == '\u{feff}'),
            _ => false,
        }
    }

    fn starts_markup(&self) -> bool {
        match self.peek(1) {
            Some(b'>') => true,
            Some(b) if is_ident_start_byte(b) => true,
            Some(b) if b >= 0x80 => self
                .source
                .get(self.pos + 1..)
                .and_then(|rest| rest.chars().next())
                .is_some_and(char::is_alphabetic),
            _ => false,
        }
    }

    fn read_word(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.current() {
            if is_ident_part_byte(b) {
                self.pos += 1;
            } else if b >= 0x80 {
                match self.current_char() {
                    Some(ch) if ch.is_alphanumeric() => self.pos += ch.len_utf8(),
                    _ => break,
                }
            } else {
                break;
            }
        }
        let source = self.source;
        &source[start..self.pos]
    }

    fn skip_number(&mut self) {
        while let Some(b) = self.current() {
            if is_ident_part_byte(b) || b == b'.' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn skip_string(&mut self, quote: u8) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        while let Some(b) = self.current() {
            match b {
                b'\\' => self.pos += 2,
                b'\n' | b'\r' => break,
                _ if b == quote => {
                    self.pos += 1;
                    return Ok(());
                }
                _ => self.pos += 1,
            }
        }
        Err(self.error_at(start, "unterminated string literal"))
    }

    fn skip_template(&mut self, islands: &mut Vec<NodeIndex>) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        while let Some(b) = self.current() {
            match b {
                b'\\' => self.pos += 2,
                b'`' => {
                    self.pos += 1;
                    return Ok(());
                }
                b'$' if self.peek(1) == Some(b'{') => {
                    self.pos += 2;
                    self.scan_host(islands, true)?;
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        Err(self.error_at(start, "unterminated template literal"))
    }

    fn skip_regex(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut in_class = false;
        while let Some(b) = self.current() {
            match b {
                b'\\' => self.pos += 2,
                b'[' => {
                    in_class = true;
                    self.pos += 1;
                }
                b']' => {
                    in_class = false;
                    self.pos += 1;
                }
                b'/' if !in_class => {
                    self.pos += 1;
                    while self.current().is_some_and(is_ident_part_byte) {
                        self.pos += 1;
                    }
                    return Ok(());
                }
                b'\n' | b'\r' => break,
                _ => self.pos += 1,
            }
        }
        Err(self.error_at(start, "unterminated regular expression"))
    }

    /// Read the inside of a `{...}` container up to (not including) its
    /// closing brace. Returns `None` when it holds only whitespace and
    /// comments.
    ///
    /// The expression node ends at its last token: trailing comments stay
    /// outside of it, so a `// ...` before the closing brace can never
    /// swallow the text generated after the expression.
    fn read_host_expression(&mut self) -> Result<Option<NodeIndex>, ParseError> {
        let content_start = self.pos;
        let mut islands = Vec::new();
        let Some(expression_end) = self.scan_host(&mut islands, true)? else {
            return Ok(None);
        };

        let content = &self.source[content_start..expression_end];
        let leading = content.len() - content.trim_start().len();
        Ok(Some(self.add_node(
            SyntaxKind::Expression,
            content_start + leading,
            expression_end,
            NodeData::Generic(GenericData {
                children: NodeList::from(islands),
            }),
        )))
    }

    // =========================================================================
    // Markup
    // =========================================================================

    /// Read an element or fragment starting at `<`.
    fn read_markup(&mut self) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        self.pos += 1;
        self.skip_markup_trivia()?;

        if self.current() == Some(b'>') {
            return self.read_fragment(start);
        }

        let tag_name = self.read_tag_name()?;
        let mut attributes = Vec::new();
        loop {
            self.skip_markup_trivia()?;
            match self.current() {
                Some(b'/') => {
                    self.pos += 1;
                    self.skip_markup_trivia()?;
                    self.expect(b'>', "expected '>' to close self-closing tag")?;
                    let opening = self.add_node(
                        SyntaxKind::JsxOpeningElement,
                        start,
                        self.pos,
                        NodeData::JsxOpening(JsxOpeningData {
                            tag_name,
                            attributes: NodeList::from(attributes),
                            self_closing: true,
                        }),
                    );
                    return Ok(self.add_node(
                        SyntaxKind::JsxElement,
                        start,
                        self.pos,
                        NodeData::JsxElement(JsxElementData {
                            opening_element: opening,
                            children: NodeList::new(),
                            closing_element: NodeIndex::NONE,
                        }),
                    ));
                }
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'{') => attributes.push(self.read_spread_attribute()?),
                Some(b) if is_ident_start_byte(b) || b >= 0x80 => {
                    attributes.push(self.read_attribute()?)
                }
                Some(_) => return Err(self.error_at(self.pos, "unexpected character in tag")),
                None => return Err(self.error_at(start, "unterminated tag")),
            }
        }

        let opening = self.add_node(
            SyntaxKind::JsxOpeningElement,
            start,
            self.pos,
            NodeData::JsxOpening(JsxOpeningData {
                tag_name,
                attributes: NodeList::from(attributes),
                self_closing: false,
            }),
        );
        let children = self.read_children(start)?;
        let closing = self.read_closing_element(start, tag_name)?;

        Ok(self.add_node(
            SyntaxKind::JsxElement,
            start,
            self.pos,
            NodeData::JsxElement(JsxElementData {
                opening_element: opening,
                children: NodeList::from(children),
                closing_element: closing,
            }),
        ))
    }

    fn read_fragment(&mut self, start: usize) -> Result<NodeIndex, ParseError> {
        self.pos += 1;
        let opening = self.add_node(
            SyntaxKind::JsxOpeningFragment,
            start,
            self.pos,
            NodeData::JsxOpeningFragment(JsxOpeningFragmentData::default()),
        );
        let children = self.read_children(start)?;

        let closing_start = self.pos;
        self.pos += 2;
        self.skip_markup_trivia()?;
        if self.current() != Some(b'>') {
            return Err(self.error_at(
                closing_start,
                "expected corresponding closing tag for fragment",
            ));
        }
        self.pos += 1;
        let closing = self.add_node(
            SyntaxKind::JsxClosingFragment,
            closing_start,
            self.pos,
            NodeData::None,
        );

        Ok(self.add_node(
            SyntaxKind::JsxFragment,
            start,
            self.pos,
            NodeData::JsxFragment(JsxFragmentData {
                opening_fragment: opening,
                children: NodeList::from(children),
                closing_fragment: closing,
            }),
        ))
    }

    /// Read children up to the `</` of the closing tag (left unconsumed).
    fn read_children(&mut self, element_start: usize) -> Result<Vec<NodeIndex>, ParseError> {
        let mut children = Vec::new();
        loop {
            let text_start = self.pos;
            match memchr::memchr2(b'<', b'{', &self.bytes[self.pos..]) {
                Some(offset) => self.pos += offset,
                None => return Err(self.error_at(element_start, "unterminated element")),
            }
            if self.pos > text_start {
                let text = self.source[text_start..self.pos].to_string();
                children.push(self.add_node(
                    SyntaxKind::JsxText,
                    text_start,
                    self.pos,
                    NodeData::JsxText(JsxTextData { text }),
                ));
            }

            if self.current() == Some(b'{') {
                children.push(self.read_expression_container(true)?);
            } else if self.peek(1) == Some(b'/') {
                return Ok(children);
            } else {
                children.push(self.read_markup()?);
            }
        }
    }

    fn read_closing_element(
        &mut self,
        element_start: usize,
        opening_name: NodeIndex,
    ) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        self.pos += 2;
        self.skip_markup_trivia()?;
        let expected = self.arena.tag_name_text(opening_name);
        if self.current() == Some(b'>') {
            return Err(self.error_at(
                start,
                format!("expected corresponding closing tag for <{expected}>"),
            ));
        }
        let tag_name = self.read_tag_name()?;
        self.skip_markup_trivia()?;
        if self.current() != Some(b'>') {
            return Err(self.error_at(element_start, "unterminated closing tag"));
        }
        self.pos += 1;

        let found = self.arena.tag_name_text(tag_name);
        if found != expected {
            return Err(self.error_at(
                start,
                format!("expected corresponding closing tag for <{expected}>, found </{found}>"),
            ));
        }

        Ok(self.add_node(
            SyntaxKind::JsxClosingElement,
            start,
            self.pos,
            NodeData::JsxClosing(JsxClosingData { tag_name }),
        ))
    }

    fn read_identifier(&mut self) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        while let Some(b) = self.current() {
            if is_ident_part_byte(b) || (b == b'-' && self.pos > start) {
                self.pos += 1;
            } else if b >= 0x80 {
                match self.current_char() {
                    Some(ch) if ch.is_alphanumeric() => self.pos += ch.len_utf8(),
                    _ => break,
                }
            } else {
                break;
            }
        }
        let name = &self.source[start..self.pos];
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(self.error_at(start, "expected identifier"));
        }
        let name = name.to_string();
        Ok(self.add_node(
            SyntaxKind::JsxIdentifier,
            start,
            self.pos,
            NodeData::JsxIdentifier(JsxIdentifierData { name }),
        ))
    }

    /// `ident`, `ns:ident` or `a.b.c`.
    fn read_tag_name(&mut self) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        let first = self.read_identifier()?;
        if self.current() == Some(b':') {
            return self.read_namespaced_rest(start, first);
        }

        let mut object = first;
        while self.current() == Some(b'.') {
            self.pos += 1;
            let property = self.read_identifier()?;
            object = self.add_node(
                SyntaxKind::JsxMemberExpression,
                start,
                self.pos,
                NodeData::JsxMember(JsxMemberData { object, property }),
            );
        }
        Ok(object)
    }

    fn read_namespaced_rest(
        &mut self,
        start: usize,
        namespace: NodeIndex,
    ) -> Result<NodeIndex, ParseError> {
        self.pos += 1;
        let name = self.read_identifier()?;
        Ok(self.add_node(
            SyntaxKind::JsxNamespacedName,
            start,
            self.pos,
            NodeData::JsxNamespacedName(JsxNamespacedNameData { namespace, name }),
        ))
    }

    fn read_attribute(&mut self) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        let first = self.read_identifier()?;
        let name = if self.current() == Some(b':') {
            self.read_namespaced_rest(start, first)?
        } else {
            first
        };
        let name_end = self.pos;

        self.skip_markup_trivia()?;
        if self.current() != Some(b'=') {
            self.pos = name_end;
            return Ok(self.add_node(
                SyntaxKind::JsxAttribute,
                start,
                name_end,
                NodeData::JsxAttribute(JsxAttributeData {
                    name,
                    initializer: NodeIndex::NONE,
                }),
            ));
        }
        self.pos += 1;
        self.skip_markup_trivia()?;

        let initializer = match self.current() {
            Some(quote @ (b'"' | b'\'')) => self.read_attribute_string(quote)?,
            Some(b'{') => self.read_expression_container(false)?,
            Some(b'<') if self.starts_markup() => self.read_markup()?,
            _ => return Err(self.error_at(self.pos, "expected attribute value")),
        };

        Ok(self.add_node(
            SyntaxKind::JsxAttribute,
            start,
            self.pos,
            NodeData::JsxAttribute(JsxAttributeData { name, initializer }),
        ))
    }

    /// Attribute strings have no escapes and may span lines.
    fn read_attribute_string(&mut self, quote: u8) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        match memchr::memchr(quote, &self.bytes[start + 1..]) {
            Some(offset) => self.pos = start + 1 + offset + 1,
            None => return Err(self.error_at(start, "unterminated string literal")),
        }
        Ok(self.add_node(
            SyntaxKind::StringLiteral,
            start,
            self.pos,
            NodeData::Generic(GenericData::default()),
        ))
    }

    fn read_spread_attribute(&mut self) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        self.pos += 1;
        self.skip_markup_trivia()?;
        if !self.bytes[self.pos..].starts_with(b"...") {
            return Err(self.error_at(self.pos, "expected '...' in spread attribute"));
        }
        self.pos += 3;

        let Some(expression) = self.read_host_expression()? else {
            return Err(self.error_at(start, "spread attribute requires an argument"));
        };
        self.expect(b'}', "expected '}' to close spread attribute")?;

        Ok(self.add_node(
            SyntaxKind::JsxSpreadAttribute,
            start,
            self.pos,
            NodeData::JsxSpreadAttribute(JsxSpreadAttributeData { expression }),
        ))
    }

    /// `{...}` as a child (`allow_empty`) or as an attribute value, where a
    /// container holding only comments is an error.
    fn read_expression_container(&mut self, allow_empty: bool) -> Result<NodeIndex, ParseError> {
        let start = self.pos;
        self.pos += 1;
        let content_start = self.pos;
        let expression = match self.read_host_expression()? {
            Some(expression) => expression,
            None if !allow_empty => {
                return Err(self.error_at(
                    start,
                    "JSX attributes must only be assigned a non-empty expression",
                ));
            }
            None => self.add_node(
                SyntaxKind::JsxEmptyExpression,
                content_start,
                self.pos,
                NodeData::None,
            ),
        };
        self.expect(b'}', "expected '}' to close expression container")?;

        Ok(self.add_node(
            SyntaxKind::JsxExpressionContainer,
            start,
            self.pos,
            NodeData::JsxExpression(JsxExpressionData { expression }),
        ))
    }
}


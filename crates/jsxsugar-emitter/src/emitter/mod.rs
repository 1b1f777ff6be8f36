//! Node emitter.
//!
//! `Emitter::emit` dispatches on the node kind. JSX kinds have dedicated
//! handlers in `jsx.rs`; everything else is reconstructed from its source
//! text and annotated subnodes in `generic.rs`.
//!
//! Emission never mutates shared state: each call receives the generated
//! position it starts at and returns an `EmittedFragment` carrying its text,
//! its mapping entries and the position right after it.

use crate::annotator::SubnodeTable;
use crate::options::GenerationOptions;
use crate::source_writer::{EmittedFragment, FragmentWriter};
use jsxsugar_syntax::{Node, NodeArena, NodeIndex, Position, SyntaxKind};
use std::sync::Arc;

mod generic;
mod jsx;

pub struct Emitter<'a> {
    source: &'a str,
    arena: &'a NodeArena,
    subnodes: &'a SubnodeTable,
    options: &'a GenerationOptions,
    source_name: Arc<str>,
}

impl<'a> Emitter<'a> {
    pub fn new(
        source: &'a str,
        arena: &'a NodeArena,
        subnodes: &'a SubnodeTable,
        options: &'a GenerationOptions,
    ) -> Self {
        let source_name: Arc<str> = Arc::from(
            arena
                .file_name()
                .unwrap_or(options.source_file_name.as_str()),
        );
        Emitter {
            source,
            arena,
            subnodes,
            options,
            source_name,
        }
    }

    /// Name attached to every mapping entry.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Emit the node at `idx`, starting at generated position `at`.
    pub fn emit(&self, idx: NodeIndex, at: Position) -> EmittedFragment {
        let Some(node) = self.arena.get(idx) else {
            return EmittedFragment::empty(at);
        };

        match node.kind {
            SyntaxKind::JsxElement => self.emit_jsx_element(node, at),
            SyntaxKind::JsxOpeningElement => self.emit_jsx_opening_element(node, at),
            SyntaxKind::JsxClosingElement | SyntaxKind::JsxClosingFragment => {
                EmittedFragment::empty(at)
            }
            SyntaxKind::JsxFragment => self.emit_jsx_fragment(node, at),
            SyntaxKind::JsxOpeningFragment => self.emit_jsx_opening_fragment(node, at),
            SyntaxKind::JsxText => self.emit_jsx_text(node, at),
            SyntaxKind::JsxIdentifier => self.emit_jsx_identifier(node, at),
            SyntaxKind::JsxMemberExpression => self.emit_jsx_member_expression(node, at),
            SyntaxKind::JsxNamespacedName => self.emit_jsx_namespaced_name(node, at),
            SyntaxKind::JsxAttribute => self.emit_jsx_attribute(node, at),
            SyntaxKind::JsxSpreadAttribute => self.emit_jsx_spread_attribute(node, at),
            SyntaxKind::JsxExpressionContainer => self.emit_jsx_expression(node, at),
            SyntaxKind::JsxEmptyExpression => EmittedFragment::empty(at),
            SyntaxKind::Program
            | SyntaxKind::Expression
            | SyntaxKind::StringLiteral
            | SyntaxKind::Unknown => self.emit_generic(idx, node, at),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn writer(&self, at: Position) -> FragmentWriter {
        FragmentWriter::new(at, Arc::clone(&self.source_name))
    }

    /// Source text between two byte offsets, or `""` when out of range.
    fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or("")
    }

    fn node_text(&self, node: &Node) -> &'a str {
        self.slice(node.pos, node.end)
    }

    /// Copy a node's source text unchanged. Used for nodes whose payload
    /// does not match their kind.
    fn emit_verbatim(&self, node: &Node, at: Position) -> EmittedFragment {
        let mut w = self.writer(at);
        w.write_mapped(self.node_text(node), node.loc.start);
        w.finish()
    }
}

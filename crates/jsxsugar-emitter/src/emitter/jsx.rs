use super::Emitter;
use crate::attributes::{AttributeArg, AttributePlan, plan_attributes, quote_key_name};
use crate::source_writer::{EmittedFragment, FragmentWriter};
use crate::tag::{TagClass, classify_tag};
use crate::text::{LINE_JOINER, normalize_text};
use jsxsugar_syntax::{Node, NodeIndex, Position, SyntaxKind};
use tracing::trace;

impl<'a> Emitter<'a> {
    // =========================================================================
    // Elements and fragments
    // =========================================================================

    pub(super) fn emit_jsx_element(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(jsx) = self.arena.get_jsx_element(node) else {
            return self.emit_verbatim(node, at);
        };

        let mut w = self.writer(at);
        w.append(self.emit(jsx.opening_element, w.cursor()));
        if jsx.closing_element.is_some() {
            self.emit_children(&mut w, &jsx.children.nodes);
        }
        self.close_call(&mut w, jsx.closing_element);
        w.finish()
    }

    pub(super) fn emit_jsx_fragment(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(jsx) = self.arena.get_jsx_fragment(node) else {
            return self.emit_verbatim(node, at);
        };

        let mut w = self.writer(at);
        w.append(self.emit(jsx.opening_fragment, w.cursor()));
        if jsx.closing_fragment.is_some() {
            self.emit_children(&mut w, &jsx.children.nodes);
        }
        self.close_call(&mut w, jsx.closing_fragment);
        w.finish()
    }

    /// `factory(` + tag, followed by the attribute argument.
    pub(super) fn emit_jsx_opening_element(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(opening) = self.arena.get_jsx_opening(node) else {
            return self.emit_verbatim(node, at);
        };
        let Some(name_node) = self.arena.get(opening.tag_name) else {
            return self.emit_verbatim(node, at);
        };

        let tag = self.arena.tag_name_text(opening.tag_name);
        let simple = name_node.kind == SyntaxKind::JsxIdentifier;
        let class = classify_tag(&tag, simple, self.options);
        trace!(tag = %tag, ?class, "classified tag");

        let mut w = self.writer(at);
        let needs_comma = match class {
            TagClass::KnownTag | TagClass::ComponentReference { stringify: true } => {
                w.write_mapped(&format!("{}(", self.options.factory), node.loc.start);
                w.write_mapped(&format!("'{tag}'"), name_node.loc.start);
                true
            }
            TagClass::ComponentReference { stringify: false } => {
                w.write_mapped(&format!("{}(", self.options.factory), node.loc.start);
                w.append(self.emit(opening.tag_name, w.cursor()));
                true
            }
            TagClass::PatternSubstitution { callee } => {
                w.write_mapped(&callee, name_node.loc.start);
                w.write("(");
                false
            }
        };

        self.emit_attributes(&mut w, &opening.attributes.nodes, needs_comma, name_node.loc.end);
        w.finish()
    }

    /// `factory(null` followed by the attribute argument.
    pub(super) fn emit_jsx_opening_fragment(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(opening) = self.arena.get_jsx_opening_fragment(node) else {
            return self.emit_verbatim(node, at);
        };

        let mut w = self.writer(at);
        w.write_mapped(&format!("{}(null", self.options.factory), node.loc.start);
        self.emit_attributes(&mut w, &opening.attributes.nodes, true, node.loc.end);
        w.finish()
    }

    /// Children as `,[a,b]` or `,a,b`. Blank children are dropped, and
    /// comment-only holes keep their raw text without counting as a child.
    fn emit_children(&self, w: &mut FragmentWriter, children: &[NodeIndex]) {
        if children.is_empty() {
            return;
        }
        let array = self.options.array_children;
        if array {
            w.write(",[");
        }

        let mut wrote_child = false;
        for &child in children {
            let separator = if !array || wrote_child { "," } else { "" };
            let fragment = self.emit(child, w.cursor().advance(separator));
            if fragment.is_blank() {
                if let Some(hole) = self.empty_expression_of(child) {
                    w.write_mapped(self.node_text(hole), hole.loc.start);
                }
                continue;
            }
            w.write(separator);
            w.append(fragment);
            wrote_child = true;
        }

        if array {
            w.write("]");
        }
    }

    fn close_call(&self, w: &mut FragmentWriter, closing: NodeIndex) {
        match self.arena.get(closing) {
            Some(closing_node) => {
                w.write_mapped(")", closing_node.loc.start);
                w.append(self.emit(closing, w.cursor()));
            }
            None => w.write(")"),
        }
    }

    /// The empty expression inside a `{/* ... */}` child, if `child` is one.
    fn empty_expression_of(&self, child: NodeIndex) -> Option<&'a Node> {
        let node = self.arena.get(child)?;
        let container = self.arena.get_jsx_expression(node)?;
        let inner = self.arena.get(container.expression)?;
        (inner.kind == SyntaxKind::JsxEmptyExpression).then_some(inner)
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    fn emit_attributes(
        &self,
        w: &mut FragmentWriter,
        attributes: &[NodeIndex],
        needs_comma: bool,
        null_at: Position,
    ) {
        let comma = if needs_comma { "," } else { "" };
        match plan_attributes(self.arena, attributes) {
            AttributePlan::Null => w.write_mapped(&format!("{comma}null"), null_at),
            AttributePlan::Object(run) => self.emit_attribute_object(w, comma, &run),
            AttributePlan::Merge(args) => {
                let first = attributes.first().and_then(|&idx| self.arena.get(idx));
                let last = attributes.last().and_then(|&idx| self.arena.get(idx));
                let (Some(first), Some(last)) = (first, last) else {
                    return;
                };

                w.write_mapped(
                    &format!("{comma}{}(", self.options.spread_fn),
                    first.loc.start,
                );
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        w.write(",");
                    }
                    match arg {
                        AttributeArg::EmptyObject => w.write("{}"),
                        AttributeArg::Object(run) => self.emit_attribute_object(w, "", run),
                        AttributeArg::Spread(spread) => {
                            w.append(self.emit(*spread, w.cursor()));
                        }
                    }
                }
                w.write_mapped(")", last.loc.end);
            }
        }
    }

    /// `{a:1,b:2}` for a run of plain attributes.
    fn emit_attribute_object(&self, w: &mut FragmentWriter, prefix: &str, run: &[NodeIndex]) {
        let first = run.first().and_then(|&idx| self.arena.get(idx));
        let last = run.last().and_then(|&idx| self.arena.get(idx));
        let (Some(first), Some(last)) = (first, last) else {
            return;
        };

        w.write_mapped(&format!("{prefix}{{"), first.loc.start);
        for (i, &attr) in run.iter().enumerate() {
            if i > 0 {
                w.write(",");
            }
            w.append(self.emit(attr, w.cursor()));
        }
        w.write_mapped("}", last.loc.end);
    }

    pub(super) fn emit_jsx_attribute(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(attr) = self.arena.get_jsx_attribute(node) else {
            return self.emit_verbatim(node, at);
        };
        let Some(name_node) = self.arena.get(attr.name) else {
            return self.emit_verbatim(node, at);
        };

        let mut w = self.writer(at);
        let key = quote_key_name(&self.arena.tag_name_text(attr.name));
        w.write_mapped(&key, name_node.loc.start);
        w.write(":");
        if attr.initializer.is_none() {
            w.write_mapped("true", name_node.loc.end);
        } else {
            w.append(self.emit(attr.initializer, w.cursor()));
        }
        w.finish()
    }

    pub(super) fn emit_jsx_spread_attribute(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(spread) = self.arena.get_jsx_spread_attribute(node) else {
            return self.emit_verbatim(node, at);
        };
        self.emit(spread.expression, at)
    }

    pub(super) fn emit_jsx_expression(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(container) = self.arena.get_jsx_expression(node) else {
            return self.emit_verbatim(node, at);
        };
        self.emit(container.expression, at)
    }

    // =========================================================================
    // Names
    // =========================================================================

    pub(super) fn emit_jsx_identifier(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(ident) = self.arena.get_jsx_identifier(node) else {
            return self.emit_verbatim(node, at);
        };
        let mut w = self.writer(at);
        w.write_mapped(&ident.name, node.loc.start);
        w.finish()
    }

    pub(super) fn emit_jsx_member_expression(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(member) = self.arena.get_jsx_member(node) else {
            return self.emit_verbatim(node, at);
        };
        let mut w = self.writer(at);
        w.append(self.emit(member.object, w.cursor()));
        w.write(".");
        w.append(self.emit(member.property, w.cursor()));
        w.finish()
    }

    pub(super) fn emit_jsx_namespaced_name(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(ns) = self.arena.get_jsx_namespaced_name(node) else {
            return self.emit_verbatim(node, at);
        };
        let mut w = self.writer(at);
        w.append(self.emit(ns.namespace, w.cursor()));
        w.write(":");
        w.append(self.emit(ns.name, w.cursor()));
        w.finish()
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// One string literal per non-blank line, each mapped to where its
    /// content starts in the original.
    pub(super) fn emit_jsx_text(&self, node: &Node, at: Position) -> EmittedFragment {
        let Some(text) = self.arena.get_jsx_text(node) else {
            return self.emit_verbatim(node, at);
        };

        let mut w = self.writer(at);
        let start = node.loc.start;
        for line in normalize_text(&text.text) {
            let original = if line.index == 0 {
                Position::new(start.line, start.column + line.indent_width)
            } else {
                Position::new(start.line + line.index as u32, line.indent_width)
            };
            w.write_mapped(&line.literal, original);
            if line.join_next {
                w.write(LINE_JOINER);
            }
        }
        w.finish()
    }
}

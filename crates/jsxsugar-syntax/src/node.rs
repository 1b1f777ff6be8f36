//! Node storage.
//!
//! Nodes are stored contiguously in a `NodeArena` and referenced by
//! `NodeIndex`. Each node carries its kind, byte range, line/column
//! location and a kind-specific payload. Payload accessors mirror the
//! per-kind `get_*` pattern: they return `None` when the node is not of the
//! requested shape, so callers can fall back to verbatim emission.

use crate::base::{NodeIndex, NodeList};
use crate::kind::SyntaxKind;
use crate::position::SourceLocation;
use serde::Serialize;

/// Host-language node whose structured children are the markup islands
/// (or other host nodes) nested inside it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenericData {
    pub children: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxElementData {
    pub opening_element: NodeIndex,
    pub children: NodeList,
    /// `NodeIndex::NONE` for self-closing elements
    pub closing_element: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxOpeningData {
    pub tag_name: NodeIndex,
    pub attributes: NodeList,
    pub self_closing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxClosingData {
    pub tag_name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxFragmentData {
    pub opening_fragment: NodeIndex,
    pub children: NodeList,
    pub closing_fragment: NodeIndex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JsxOpeningFragmentData {
    pub attributes: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxTextData {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxIdentifierData {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxMemberData {
    pub object: NodeIndex,
    pub property: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxNamespacedNameData {
    pub namespace: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxAttributeData {
    pub name: NodeIndex,
    /// `NodeIndex::NONE` for boolean attributes (`<input disabled />`)
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxSpreadAttributeData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsxExpressionData {
    pub expression: NodeIndex,
}

/// Kind-specific payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum NodeData {
    None,
    Generic(GenericData),
    JsxElement(JsxElementData),
    JsxOpening(JsxOpeningData),
    JsxClosing(JsxClosingData),
    JsxFragment(JsxFragmentData),
    JsxOpeningFragment(JsxOpeningFragmentData),
    JsxText(JsxTextData),
    JsxIdentifier(JsxIdentifierData),
    JsxMember(JsxMemberData),
    JsxNamespacedName(JsxNamespacedNameData),
    JsxAttribute(JsxAttributeData),
    JsxSpreadAttribute(JsxSpreadAttributeData),
    JsxExpression(JsxExpressionData),
}

/// A syntax tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Start byte offset (inclusive)
    pub pos: u32,
    /// End byte offset (exclusive)
    pub end: u32,
    pub loc: SourceLocation,
    pub data: NodeData,
}

/// Arena-based storage for syntax nodes.
#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    /// Name of the source file the nodes were read from, if known
    pub file_name: Option<String>,
}

macro_rules! payload_accessor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $data:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<'a>(&'a self, node: &'a Node) -> Option<&'a $data> {
            match &node.data {
                NodeData::$variant(data) => Some(data),
                _ => None,
            }
        }
    };
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_file_name(file_name: impl Into<String>) -> NodeArena {
        NodeArena {
            nodes: Vec::new(),
            file_name: Some(file_name.into()),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Add a node to the arena and return its index.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    /// Get a node by index.
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source text covered by the node at `index`, or `""` when the index or
    /// range is invalid for `source`.
    pub fn text_of<'s>(&self, source: &'s str, index: NodeIndex) -> &'s str {
        self.get(index)
            .and_then(|node| source.get(node.pos as usize..node.end as usize))
            .unwrap_or("")
    }

    payload_accessor!(get_generic, Generic, GenericData);
    payload_accessor!(get_jsx_element, JsxElement, JsxElementData);
    payload_accessor!(get_jsx_opening, JsxOpening, JsxOpeningData);
    payload_accessor!(get_jsx_closing, JsxClosing, JsxClosingData);
    payload_accessor!(get_jsx_fragment, JsxFragment, JsxFragmentData);
    payload_accessor!(
        get_jsx_opening_fragment,
        JsxOpeningFragment,
        JsxOpeningFragmentData
    );
    payload_accessor!(get_jsx_text, JsxText, JsxTextData);
    payload_accessor!(get_jsx_identifier, JsxIdentifier, JsxIdentifierData);
    payload_accessor!(get_jsx_member, JsxMember, JsxMemberData);
    payload_accessor!(
        get_jsx_namespaced_name,
        JsxNamespacedName,
        JsxNamespacedNameData
    );
    payload_accessor!(get_jsx_attribute, JsxAttribute, JsxAttributeData);
    payload_accessor!(
        get_jsx_spread_attribute,
        JsxSpreadAttribute,
        JsxSpreadAttributeData
    );
    payload_accessor!(get_jsx_expression, JsxExpression, JsxExpressionData);

    /// Direct structural children of the node at `index`, in traversal order.
    ///
    /// Element children and the closing tag are only visited when a closing
    /// tag exists. Leaves (text, identifiers, empty expressions, closing
    /// tags) have none.
    pub fn structural_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        match &node.data {
            NodeData::Generic(generic) => out.extend_from_slice(&generic.children.nodes),
            NodeData::JsxElement(element) => {
                out.push(element.opening_element);
                if element.closing_element.is_some() {
                    out.extend_from_slice(&element.children.nodes);
                    out.push(element.closing_element);
                }
            }
            NodeData::JsxOpening(opening) => {
                out.push(opening.tag_name);
                out.extend_from_slice(&opening.attributes.nodes);
            }
            NodeData::JsxFragment(fragment) => {
                out.push(fragment.opening_fragment);
                if fragment.closing_fragment.is_some() {
                    out.extend_from_slice(&fragment.children.nodes);
                    out.push(fragment.closing_fragment);
                }
            }
            NodeData::JsxOpeningFragment(opening) => {
                out.extend_from_slice(&opening.attributes.nodes)
            }
            NodeData::JsxMember(member) => {
                out.push(member.object);
                out.push(member.property);
            }
            NodeData::JsxNamespacedName(ns) => {
                out.push(ns.namespace);
                out.push(ns.name);
            }
            NodeData::JsxAttribute(attribute) => {
                out.push(attribute.name);
                if attribute.initializer.is_some() {
                    out.push(attribute.initializer);
                }
            }
            NodeData::JsxSpreadAttribute(spread) => out.push(spread.expression),
            NodeData::JsxExpression(container) => out.push(container.expression),
            NodeData::None
            | NodeData::JsxClosing(_)
            | NodeData::JsxText(_)
            | NodeData::JsxIdentifier(_) => {}
        }
        out.retain(|child| child.is_some());
        out
    }

    /// Printable tag-name text for an identifier, member or namespaced name
    /// node (`div`, `DOM.h1`, `svg:rect`).
    pub fn tag_name_text(&self, index: NodeIndex) -> String {
        let mut out = String::new();
        self.write_tag_name(index, &mut out);
        out
    }

    fn write_tag_name(&self, index: NodeIndex, out: &mut String) {
        let Some(node) = self.get(index) else {
            return;
        };
        match &node.data {
            NodeData::JsxIdentifier(ident) => out.push_str(&ident.name),
            NodeData::JsxMember(member) => {
                self.write_tag_name(member.object, out);
                out.push('.');
                self.write_tag_name(member.property, out);
            }
            NodeData::JsxNamespacedName(ns) => {
                self.write_tag_name(ns.namespace, out);
                out.push(':');
                self.write_tag_name(ns.name, out);
            }
            _ => {}
        }
    }
}

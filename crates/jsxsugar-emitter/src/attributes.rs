//! Attribute flattening.
//!
//! An attribute list becomes either one object literal or a call to the
//! merge function over object literals and spread arguments, in source
//! order, so later keys override earlier ones exactly as written.

use jsxsugar_syntax::{NodeArena, NodeIndex, SyntaxKind};

/// One argument of the merge call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeArg {
    /// `{}` placed first when the list starts with a spread.
    EmptyObject,
    /// A run of consecutive plain attributes.
    Object(Vec<NodeIndex>),
    /// A spread attribute.
    Spread(NodeIndex),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributePlan {
    /// No attributes: `null`.
    Null,
    /// No spreads: a single object literal.
    Object(Vec<NodeIndex>),
    /// At least one spread: `spreadFn(arg, ...)`.
    Merge(Vec<AttributeArg>),
}

pub fn plan_attributes(arena: &NodeArena, attributes: &[NodeIndex]) -> AttributePlan {
    let is_spread = |idx: NodeIndex| arena.kind(idx) == Some(SyntaxKind::JsxSpreadAttribute);

    if attributes.is_empty() {
        return AttributePlan::Null;
    }
    if !attributes.iter().any(|&attr| is_spread(attr)) {
        return AttributePlan::Object(attributes.to_vec());
    }

    let mut args = Vec::new();
    if is_spread(attributes[0]) {
        args.push(AttributeArg::EmptyObject);
    }
    let mut run = Vec::new();
    for &attr in attributes {
        if is_spread(attr) {
            if !run.is_empty() {
                args.push(AttributeArg::Object(std::mem::take(&mut run)));
            }
            args.push(AttributeArg::Spread(attr));
        } else {
            run.push(attr);
        }
    }
    if !run.is_empty() {
        args.push(AttributeArg::Object(run));
    }
    AttributePlan::Merge(args)
}

/// Object-literal key for an attribute name; names that are not plain
/// identifiers (`data-id`, `xlink:href`) are single-quoted.
pub fn quote_key_name(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if plain {
        name.to_string()
    } else {
        format!("'{name}'")
    }
}

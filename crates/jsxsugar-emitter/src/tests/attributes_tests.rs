//! Tests for attribute flattening.

use super::*;
use jsxsugar_syntax::{NodeArena, NodeIndex, parse};

/// Attributes of the first element in `source`.
fn attributes_of(source: &str) -> (NodeArena, Vec<NodeIndex>) {
    let parsed = parse(source, None).unwrap();
    let arena = parsed.arena;
    let attributes = arena
        .nodes
        .iter()
        .find_map(|node| arena.get_jsx_opening(node))
        .map(|opening| opening.attributes.nodes.clone())
        .unwrap();
    (arena, attributes)
}

#[test]
fn test_no_attributes_is_null() {
    let (arena, attributes) = attributes_of("<a/>");
    assert_eq!(plan_attributes(&arena, &attributes), AttributePlan::Null);
}

#[test]
fn test_plain_attributes_form_one_object() {
    let (arena, attributes) = attributes_of(r#"<a x="1" y={2}/>"#);
    assert_eq!(
        plan_attributes(&arena, &attributes),
        AttributePlan::Object(attributes.clone())
    );
}

#[test]
fn test_spread_splits_runs_in_order() {
    let (arena, attributes) = attributes_of(r#"<a x="1" {...b} c="2"/>"#);
    assert_eq!(
        plan_attributes(&arena, &attributes),
        AttributePlan::Merge(vec![
            AttributeArg::Object(vec![attributes[0]]),
            AttributeArg::Spread(attributes[1]),
            AttributeArg::Object(vec![attributes[2]]),
        ])
    );
}

#[test]
fn test_leading_spread_gets_empty_object() {
    let (arena, attributes) = attributes_of(r#"<X {...p} y="2"/>"#);
    assert_eq!(
        plan_attributes(&arena, &attributes),
        AttributePlan::Merge(vec![
            AttributeArg::EmptyObject,
            AttributeArg::Spread(attributes[0]),
            AttributeArg::Object(vec![attributes[1]]),
        ])
    );
}

#[test]
fn test_adjacent_spreads() {
    let (arena, attributes) = attributes_of("<X {...a} {...b}/>");
    assert_eq!(
        plan_attributes(&arena, &attributes),
        AttributePlan::Merge(vec![
            AttributeArg::EmptyObject,
            AttributeArg::Spread(attributes[0]),
            AttributeArg::Spread(attributes[1]),
        ])
    );
}

#[test]
fn test_quote_key_name() {
    assert_eq!(quote_key_name("className"), "className");
    assert_eq!(quote_key_name("_private$1"), "_private$1");
    assert_eq!(quote_key_name("data-id"), "'data-id'");
    assert_eq!(quote_key_name("xlink:href"), "'xlink:href'");
    assert_eq!(quote_key_name("1st"), "'1st'");
}

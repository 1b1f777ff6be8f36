//! Integration tests for the markup reader.

use jsxsugar_syntax::{NodeArena, NodeIndex, Position, SyntaxKind, parse};

fn root_children(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    let node = arena.get(root).expect("root");
    arena
        .get_generic(node)
        .expect("program payload")
        .children
        .nodes
        .clone()
}

fn kinds(arena: &NodeArena, nodes: &[NodeIndex]) -> Vec<SyntaxKind> {
    nodes.iter().filter_map(|&idx| arena.kind(idx)).collect()
}

#[test]
fn test_plain_script_has_no_islands() {
    let source = "const a = b < c && d > e;\nfunction f(x) { return x / 2; }\n";
    let parsed = parse(source, Some("plain.js")).expect("parse");
    let root = parsed.arena.get(parsed.root).unwrap();
    assert_eq!(root.kind, SyntaxKind::Program);
    assert_eq!(root.pos, 0);
    assert_eq!(root.end as usize, source.len());
    assert!(root_children(&parsed.arena, parsed.root).is_empty());
    assert_eq!(parsed.arena.file_name(), Some("plain.js"));
}

#[test]
fn test_markup_like_text_in_strings_comments_and_regex_is_ignored() {
    let source = r#"const s = "<div>";
const t = '<span/>';
// <b>not markup</b>
/* <i/> */
const r = /<p>/g;
"#;
    let parsed = parse(source, None).expect("parse");
    assert!(root_children(&parsed.arena, parsed.root).is_empty());
}

#[test]
fn test_self_closing_element() {
    let parsed = parse("<div/>", None).expect("parse");
    let islands = root_children(&parsed.arena, parsed.root);
    assert_eq!(kinds(&parsed.arena, &islands), vec![SyntaxKind::JsxElement]);

    let arena = &parsed.arena;
    let element = arena.get(islands[0]).unwrap();
    let data = arena.get_jsx_element(element).unwrap();
    assert!(data.closing_element.is_none());
    assert!(data.children.is_empty());

    let opening = arena.get(data.opening_element).unwrap();
    let opening_data = arena.get_jsx_opening(opening).unwrap();
    assert!(opening_data.self_closing);
    assert_eq!(arena.tag_name_text(opening_data.tag_name), "div");
}

#[test]
fn test_member_tag_with_text_and_expression() {
    let source = "<DOM.h1>Hi {x}</DOM.h1>";
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let element = arena.get(islands[0]).unwrap();
    let data = arena.get_jsx_element(element).unwrap();

    let opening = arena.get(data.opening_element).unwrap();
    let tag = arena.get_jsx_opening(opening).unwrap().tag_name;
    assert_eq!(arena.kind(tag), Some(SyntaxKind::JsxMemberExpression));
    assert_eq!(arena.tag_name_text(tag), "DOM.h1");

    assert_eq!(
        kinds(arena, &data.children.nodes),
        vec![SyntaxKind::JsxText, SyntaxKind::JsxExpressionContainer]
    );
    let text = arena.get(data.children.nodes[0]).unwrap();
    assert_eq!(arena.get_jsx_text(text).unwrap().text, "Hi ");

    let container = arena.get(data.children.nodes[1]).unwrap();
    let expression = arena.get_jsx_expression(container).unwrap().expression;
    assert_eq!(arena.kind(expression), Some(SyntaxKind::Expression));
    assert_eq!(arena.text_of(source, expression), "x");
    assert_eq!(arena.kind(data.closing_element), Some(SyntaxKind::JsxClosingElement));
}

#[test]
fn test_attributes_keep_source_order() {
    let source = r#"function f() { return <a href="x" {...props} disabled data-id={id}>t</a>; }"#;
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    assert_eq!(islands.len(), 1);

    let element = arena.get(islands[0]).unwrap();
    let opening_idx = arena.get_jsx_element(element).unwrap().opening_element;
    let opening = arena.get(opening_idx).unwrap();
    let attributes = &arena.get_jsx_opening(opening).unwrap().attributes.nodes;
    assert_eq!(
        kinds(arena, attributes),
        vec![
            SyntaxKind::JsxAttribute,
            SyntaxKind::JsxSpreadAttribute,
            SyntaxKind::JsxAttribute,
            SyntaxKind::JsxAttribute,
        ]
    );

    let href = arena.get_jsx_attribute(arena.get(attributes[0]).unwrap()).unwrap();
    assert_eq!(arena.kind(href.initializer), Some(SyntaxKind::StringLiteral));
    assert_eq!(arena.text_of(source, href.initializer), "\"x\"");

    let spread = arena
        .get_jsx_spread_attribute(arena.get(attributes[1]).unwrap())
        .unwrap();
    assert_eq!(arena.text_of(source, spread.expression), "props");

    let disabled = arena.get_jsx_attribute(arena.get(attributes[2]).unwrap()).unwrap();
    assert!(disabled.initializer.is_none());

    let data_id = arena.get_jsx_attribute(arena.get(attributes[3]).unwrap()).unwrap();
    assert_eq!(arena.tag_name_text(data_id.name), "data-id");
    assert_eq!(
        arena.kind(data_id.initializer),
        Some(SyntaxKind::JsxExpressionContainer)
    );
}

#[test]
fn test_fragment() {
    let parsed = parse("x = <>a<b/></>;", None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let fragment = arena.get(islands[0]).unwrap();
    assert_eq!(fragment.kind, SyntaxKind::JsxFragment);
    let data = arena.get_jsx_fragment(fragment).unwrap();
    assert_eq!(
        kinds(arena, &data.children.nodes),
        vec![SyntaxKind::JsxText, SyntaxKind::JsxElement]
    );
    assert_eq!(
        arena.kind(data.closing_fragment),
        Some(SyntaxKind::JsxClosingFragment)
    );
}

#[test]
fn test_nested_markup_inside_expression_container() {
    let source = "<ul>{items.map(item => <li>{item}</li>)}</ul>";
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let ul = arena.get(islands[0]).unwrap();
    let children = &arena.get_jsx_element(ul).unwrap().children.nodes;
    assert_eq!(children.len(), 1);

    let container = arena.get(children[0]).unwrap();
    let expression = arena.get_jsx_expression(container).unwrap().expression;
    let expression_node = arena.get(expression).unwrap();
    let nested = &arena.get_generic(expression_node).unwrap().children.nodes;
    assert_eq!(kinds(arena, nested), vec![SyntaxKind::JsxElement]);
    assert_eq!(arena.text_of(source, nested[0]), "<li>{item}</li>");
}

#[test]
fn test_markup_inside_template_substitution() {
    let source = "const s = `a ${<b/>} c`;";
    let parsed = parse(source, None).expect("parse");
    let islands = root_children(&parsed.arena, parsed.root);
    assert_eq!(islands.len(), 1);
    assert_eq!(parsed.arena.text_of(source, islands[0]), "<b/>");
}

#[test]
fn test_empty_expression_container() {
    let source = "<div>{/* nothing */}</div>";
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let div = arena.get(islands[0]).unwrap();
    let children = &arena.get_jsx_element(div).unwrap().children.nodes;
    let container = arena.get(children[0]).unwrap();
    let empty = arena.get_jsx_expression(container).unwrap().expression;
    assert_eq!(arena.kind(empty), Some(SyntaxKind::JsxEmptyExpression));
    assert_eq!(arena.text_of(source, empty), "/* nothing */");
}

#[test]
fn test_namespaced_tag_and_attribute() {
    let source = r##"<svg:rect xlink:href="#a"/>"##;
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let element = arena.get(islands[0]).unwrap();
    let opening_idx = arena.get_jsx_element(element).unwrap().opening_element;
    let opening = arena.get_jsx_opening(arena.get(opening_idx).unwrap()).unwrap();
    assert_eq!(arena.kind(opening.tag_name), Some(SyntaxKind::JsxNamespacedName));
    let attribute = arena
        .get_jsx_attribute(arena.get(opening.attributes.nodes[0]).unwrap())
        .unwrap();
    assert_eq!(arena.tag_name_text(attribute.name), "xlink:href");
}

#[test]
fn test_locations_are_line_and_column() {
    let source = "const a = 1;\nconst el = (\n  <p>x</p>\n);";
    let parsed = parse(source, None).expect("parse");
    let islands = root_children(&parsed.arena, parsed.root);
    let p = parsed.arena.get(islands[0]).unwrap();
    assert_eq!(p.loc.start, Position::new(3, 2));
    assert_eq!(p.loc.end, Position::new(3, 10));
}

#[test]
fn test_comparison_after_value_is_not_markup() {
    let source = "if (i < n) { x = i++ <y; }";
    let parsed = parse(source, None).expect("parse");
    assert!(root_children(&parsed.arena, parsed.root).is_empty());
}

#[test]
fn test_mismatched_closing_tag_is_an_error() {
    let err = parse("<div>\n</span>", Some("bad.jsx")).unwrap_err();
    assert!(
        err.message.contains("expected corresponding closing tag for <div>"),
        "unexpected message: {}",
        err.message
    );
    assert_eq!(err.position, Position::new(2, 0));
    assert!(err.to_string().starts_with("bad.jsx:2:0:"));
}

#[test]
fn test_unterminated_element_is_an_error() {
    let err = parse("const a = <div>text", None).unwrap_err();
    assert_eq!(err.message, "unterminated element");
    assert_eq!(err.offset, 10);
}

#[test]
fn test_spread_without_argument_is_an_error() {
    let err = parse("<div {...} />", None).unwrap_err();
    assert_eq!(err.message, "spread attribute requires an argument");
}

#[test]
fn test_unterminated_container_is_an_error() {
    let err = parse("<div>{a</div>", None).unwrap_err();
    assert!(err.message.contains("unterminated"), "{}", err.message);
}

#[test]
fn test_empty_attribute_value_is_an_error() {
    for source in ["<a n={}/>", "<a n={/* c */}/>", "<a n={ // c\n}/>"] {
        let err = parse(source, None).unwrap_err();
        assert_eq!(
            err.message, "JSX attributes must only be assigned a non-empty expression",
            "{source}"
        );
        assert_eq!(err.offset, 5, "{source}");
    }
}

#[test]
fn test_expression_ends_before_trailing_comment() {
    let source = "<p>{x // c\n}{ y /* d */ }</p>";
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let p = arena.get(islands[0]).unwrap();
    let children = &arena.get_jsx_element(p).unwrap().children.nodes;
    let texts: Vec<&str> = children
        .iter()
        .map(|&child| {
            let container = arena.get_jsx_expression(arena.get(child).unwrap()).unwrap();
            arena.text_of(source, container.expression)
        })
        .collect();
    assert_eq!(texts, vec!["x", "y"]);
}

#[test]
fn test_closing_tag_name() {
    let source = "<ui.Panel>x</ui.Panel>";
    let parsed = parse(source, None).expect("parse");
    let arena = &parsed.arena;
    let islands = root_children(arena, parsed.root);
    let element = arena.get_jsx_element(arena.get(islands[0]).unwrap()).unwrap();
    let closing_node = arena.get(element.closing_element).unwrap();
    let closing = arena.get_jsx_closing(closing_node).unwrap();
    assert_eq!(arena.kind(closing.tag_name), Some(SyntaxKind::JsxMemberExpression));
    assert_eq!(arena.tag_name_text(closing.tag_name), "ui.Panel");
    assert_eq!(arena.text_of(source, element.closing_element), "</ui.Panel>");
}

#[test]
fn test_markup_after_closing_paren_is_a_comparison() {
    let source = "if (x) <div/>";
    let parsed = parse(source, None).expect("parse");
    assert!(root_children(&parsed.arena, parsed.root).is_empty());
}

//! Tests for the fragment writer.

use super::*;
use jsxsugar_syntax::Position;
use std::sync::Arc;

fn writer_at(line: u32, column: u32) -> FragmentWriter {
    FragmentWriter::new(Position::new(line, column), Arc::from("test.jsx"))
}

#[test]
fn test_cursor_advances_over_written_text() {
    let mut w = writer_at(1, 0);
    w.write("ab");
    assert_eq!(w.cursor(), Position::new(1, 2));
    w.write("c\r\nde");
    assert_eq!(w.cursor(), Position::new(2, 2));
    w.write("\u{2028}😀");
    assert_eq!(w.cursor(), Position::new(3, 2));
}

#[test]
fn test_write_mapped_records_entry_at_cursor() {
    let mut w = writer_at(2, 4);
    w.write("x");
    w.write_mapped("yz", Position::new(7, 1));
    w.write_mapped("", Position::new(9, 9));
    let fragment = w.finish();

    assert_eq!(fragment.text, "xyz");
    assert_eq!(fragment.start, Position::new(2, 4));
    assert_eq!(fragment.end, Position::new(2, 7));
    assert_eq!(fragment.mappings.len(), 1);
    assert_eq!(fragment.mappings[0].original, Position::new(7, 1));
    assert_eq!(fragment.mappings[0].generated, Position::new(2, 5));
    assert_eq!(&*fragment.mappings[0].source, "test.jsx");
}

#[test]
fn test_append_keeps_child_entries() {
    let mut parent = writer_at(1, 0);
    parent.write_mapped("f(", Position::new(1, 0));

    let mut child = writer_at(1, 2);
    child.write_mapped("a", Position::new(1, 5));
    parent.append(child.finish());
    parent.write(")");

    let fragment = parent.finish();
    assert_eq!(fragment.text, "f(a)");
    assert_eq!(fragment.end, Position::new(1, 4));
    let generated: Vec<Position> = fragment.mappings.iter().map(|m| m.generated).collect();
    assert_eq!(generated, vec![Position::new(1, 0), Position::new(1, 2)]);
}

#[test]
fn test_map_without_text() {
    let mut w = writer_at(1, 3);
    w.map(Position::new(4, 0));
    let fragment = w.finish();
    assert!(fragment.text.is_empty());
    assert_eq!(fragment.mappings[0].generated, Position::new(1, 3));
}

#[test]
fn test_blank_fragments() {
    assert!(EmittedFragment::empty(Position::START).is_blank());
    let mut w = writer_at(1, 0);
    w.write(" \n ");
    assert!(w.finish().is_blank());
}

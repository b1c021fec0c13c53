use listmark::instruction::{LineClass, ListKind, MarkClass};
use listmark::{Payload, Widget};

use crate::helpers::{annotate, annotate_at, rendered, rendered_at};

#[test]
fn hash_items_are_numbered_in_order() {
    similar_asserts::assert_eq!(
        rendered("#. one\n#. two\n#. three"),
        "1. one\n2. two\n3. three"
    );
}

#[test]
fn nested_hash_items_number_per_level() {
    similar_asserts::assert_eq!(
        rendered("#. a\n    #. b\n    #. c\n#. d"),
        "1. a\n    1. b\n    2. c\n2. d"
    );
}

#[test]
fn blank_line_keeps_hash_count() {
    insta::assert_snapshot!(rendered("#. a\n\n#. b").replace('\n', "|"), @"1. a||2. b");
}

#[test]
fn paragraph_restarts_hash_numbering() {
    similar_asserts::assert_eq!(
        rendered("#. a\n#. b\n\nText\n\n#. c"),
        "1. a\n2. b\n\nText\n\n1. c"
    );
}

#[test]
fn fancy_markers_render_as_written() {
    let out = annotate("a. one\n(ii) two\nC) three");
    let markers: Vec<_> = out
        .iter()
        .filter_map(|i| match i.widget() {
            Some(Widget::FancyMarker { marker }) => Some(marker.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(markers, vec!["a.", "(ii)", "C)"]);
}

#[test]
fn continuation_lines_keep_list_context() {
    let text = "#. item\n   more text with H~2~O";
    let out = annotate(text);
    let continuation = out
        .iter()
        .find(|i| {
            matches!(&i.payload, Payload::Line(attrs) if attrs.class == LineClass::Continuation(ListKind::Hash))
        })
        .expect("continuation line attribute");
    assert_eq!(continuation.from, 8);
    similar_asserts::assert_eq!(rendered(text), "1. item\n   more text with H2O");
}

#[test]
fn unindented_line_ends_the_list() {
    let out = annotate("#. item\nnot indented");
    assert!(!out.iter().any(|i| {
        matches!(&i.payload, Payload::Line(attrs) if matches!(attrs.class, LineClass::Continuation(_)))
    }));
}

#[test]
fn markers_inside_code_are_ignored() {
    similar_asserts::assert_eq!(
        rendered("```\n#. not a list\n```\n\n#. real"),
        "```\n#. not a list\n```\n\n1. real"
    );
}

#[test]
fn spans_inside_inline_code_are_ignored() {
    insta::assert_snapshot!(rendered("Use `x^2^` and y^2^"), @"Use `x^2^` and y2");
}

#[test]
fn cursor_on_marker_keeps_it_editable() {
    let text = "#. one";
    for cursor in [0, 1, 2] {
        let out = annotate_at(text, cursor);
        assert!(out.iter().all(|i| i.widget().is_none()), "cursor {cursor}");
        assert!(out.iter().any(|i| {
            matches!(&i.payload, Payload::Mark(m) if m.class == MarkClass::ListMarker(ListKind::Hash))
        }));
    }
    assert_eq!(rendered_at(text, 3), "1. one");
}

#[test]
fn disabled_extensions_render_nothing() {
    let mut config = listmark::Config::default();
    config.extensions.hash_lists = false;
    config.extensions.superscript = false;
    let out = crate::helpers::annotate_with("#. one\n\nx^2^", None, &config);
    assert!(out.is_empty());
}

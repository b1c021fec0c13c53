use std::collections::BTreeSet;

use listmark::code_regions::ExcludedRanges;
use listmark::document::Document;
use listmark::instruction::MarkClass;
use listmark::labels::{ScanScope, scan_example_labels};
use listmark::{Payload, Widget};

use crate::helpers::{annotate, rendered};

#[test]
fn duplicate_label_keeps_first_number() {
    let doc = Document::new("(@good) First\n(@good) Second");
    let excluded = ExcludedRanges::empty();
    let invalid = BTreeSet::new();
    let registry = scan_example_labels(
        &doc,
        ScanScope {
            excluded: &excluded,
            invalid_lines: &invalid,
        },
    );

    assert_eq!(registry.number_for_label("good"), Some(1));
    assert_eq!(registry.number_for_line(1), Some(1));
    assert_eq!(registry.number_for_line(2), Some(2));
    assert_eq!(registry.duplicate_lines.iter().copied().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn unlabeled_items_are_numbered_but_never_duplicates() {
    let text = "(@) one\n(@) two\n(@named) three";
    similar_asserts::assert_eq!(rendered(text), "(1) one\n(2) two\n(3) three");
    assert!(annotate(text).iter().all(|i| match i.widget() {
        Some(Widget::ExampleMarker { duplicate_of, .. }) => duplicate_of.is_none(),
        _ => true,
    }));
}

#[test]
fn references_resolve_to_item_numbers() {
    let text = "(@a) Alpha.\n(@b) Beta.\n\nCompare (@b) with (@a) and (@zzz).";
    similar_asserts::assert_eq!(
        rendered(text),
        "(1) Alpha.\n(2) Beta.\n\nCompare (2) with (1) and (@zzz)."
    );
}

#[test]
fn references_work_before_the_item() {
    insta::assert_snapshot!(
        rendered("See (@later).\n\n(@later) Defined below.").replace('\n', "|"),
        @"See (1).||(1) Defined below."
    );
}

#[test]
fn duplicate_item_carries_first_occurrence() {
    let out = annotate("(@x) First one\n(@x) Second one");
    let widget = out
        .iter()
        .filter_map(|i| i.widget())
        .find(|w| matches!(w, Widget::ExampleMarker { number: 2, .. }))
        .cloned();
    let Some(Widget::ExampleMarker { duplicate_of, .. }) = widget else {
        panic!("second example marker missing");
    };
    let info = duplicate_of.expect("duplicate info");
    assert_eq!(info.first_line, 1);
    assert_eq!(info.first_content, "First one");
}

#[test]
fn duplicate_under_cursor_is_flagged() {
    let out = crate::helpers::annotate_at("(@x) First\n(@x) Second", 12);
    assert!(out.iter().any(|i| {
        matches!(&i.payload, Payload::Mark(m) if m.class == MarkClass::DuplicateLabel && m.duplicate_of.is_some())
    }));
}

#[test]
fn example_lists_continue_across_paragraphs() {
    similar_asserts::assert_eq!(
        rendered("(@) one\n\nSome prose.\n\n(@) two"),
        "(1) one\n\nSome prose.\n\n(2) two"
    );
}

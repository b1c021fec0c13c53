use listmark::{ConfigBuilder, Widget};

use crate::helpers::{annotate_with, render};

fn strict() -> listmark::Config {
    ConfigBuilder::default().strict_pandoc_mode(true).build()
}

#[test]
fn list_without_blank_line_is_left_raw() {
    let text = "Some text\n(@a) first\n\nSee (@a).";
    let out = annotate_with(text, None, &strict());
    similar_asserts::assert_eq!(render(text, &out), "Some text\n(@a) first\n\nSee (@a).");

    // Lenient mode renders the same document
    let out = annotate_with(text, None, &listmark::Config::default());
    similar_asserts::assert_eq!(render(text, &out), "Some text\n(1) first\n\nSee (1).");
}

#[test]
fn invalid_lines_are_not_numbered() {
    let text = "Intro\n(@) skipped\n\n(@) counted";
    let out = annotate_with(text, None, &strict());
    let numbers: Vec<_> = out
        .iter()
        .filter_map(|i| match i.widget() {
            Some(Widget::ExampleMarker { number, .. }) => Some(*number),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![1]);
}

#[test]
fn capital_letter_marker_needs_two_spaces() {
    let text = "A. one\n\nB.  two";
    let out = annotate_with(text, None, &strict());
    let fancy: Vec<_> = out
        .iter()
        .filter(|i| matches!(i.widget(), Some(Widget::FancyMarker { .. })))
        .map(|i| (i.from, i.to))
        .collect();
    assert_eq!(fancy, vec![(8, 11)]);
}

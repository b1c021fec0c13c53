use listmark::Payload;
use listmark::instruction::LineClass;

use crate::helpers::{annotate, rendered};

#[test]
fn definition_markers_become_bullets() {
    similar_asserts::assert_eq!(
        rendered("Apple\n:   A red fruit.\n~   Or a company."),
        "Apple\n•   A red fruit.\n•   Or a company."
    );
}

#[test]
fn term_line_gets_term_attribute() {
    let out = annotate("Apple\n\n: A fruit with x^2^ seeds");
    let terms: Vec<_> = out
        .iter()
        .filter(|i| matches!(&i.payload, Payload::Line(attrs) if attrs.class == LineClass::DefinitionTerm))
        .map(|i| i.from)
        .collect();
    assert_eq!(terms, vec![0]);
    similar_asserts::assert_eq!(
        rendered("Apple\n\n: A fruit with x^2^ seeds"),
        "Apple\n\n• A fruit with x2 seeds"
    );
}

#[test]
fn two_blank_lines_break_the_term() {
    let out = annotate("Apple\n\n\n: A fruit");
    assert!(!out.iter().any(|i| {
        matches!(&i.payload, Payload::Line(attrs) if attrs.class == LineClass::DefinitionTerm)
    }));
}

#[test]
fn subscript_is_not_confused_with_tilde_marker() {
    similar_asserts::assert_eq!(rendered("Water\n~ H~2~O"), "Water\n• H2O");
}

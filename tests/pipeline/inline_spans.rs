use listmark::Widget;

use crate::helpers::{annotate, annotate_at, rendered, rendered_at};

fn widgets(out: &[listmark::RenderingInstruction]) -> Vec<(usize, usize, Widget)> {
    out.iter()
        .filter_map(|i| i.widget().map(|w| (i.from, i.to, w.clone())))
        .collect()
}

#[test]
fn cursor_inside_one_span_frees_the_overlapping_one() {
    // Subscript is 5..10, superscript 7..12
    let text = "Text ~a^b~c^ end";
    assert_eq!(
        widgets(&annotate_at(text, 6)),
        vec![(
            7,
            12,
            Widget::Superscript {
                text: "b~c".to_string()
            }
        )]
    );
    similar_asserts::assert_eq!(rendered_at(text, 6), "Text ~ab~c end");
}

#[test]
fn overlap_goes_to_the_earlier_span_without_cursor() {
    let text = "Text ~a^b~c^ end";
    assert_eq!(
        widgets(&annotate(text)),
        vec![(
            5,
            10,
            Widget::Subscript {
                text: "a^b".to_string()
            }
        )]
    );
}

#[test]
fn unresolved_custom_reference_stays_plain_text() {
    let text = "Text {::Q^2^} here";
    assert_eq!(
        widgets(&annotate(text)),
        vec![(
            9,
            12,
            Widget::Superscript {
                text: "2".to_string()
            }
        )]
    );
    similar_asserts::assert_eq!(rendered(text), "Text {::Q2} here");
}

#[test]
fn resolved_custom_reference_claims_its_span() {
    let text = "{::Q^2^} Defined.\n\nText {::Q^2^} here";
    let out = widgets(&annotate(text));
    assert!(
        out.iter()
            .all(|(_, _, w)| !matches!(w, Widget::Superscript { .. }))
    );
    similar_asserts::assert_eq!(rendered(text), "(Q^2^) Defined.\n\nText (Q^2^) here");
}

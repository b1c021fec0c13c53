//! Invariants that must hold for any input.

use std::collections::BTreeMap;

use listmark::instruction::{LineClass, ListKind};
use listmark::pipeline::assembly::assemble;
use listmark::{Config, DocumentStateStore, Payload, RenderingInstruction, Widget};

const MIXED: &str = "\
Intro with x^2^ and H~2~O.

#. first (@ex)
#. second {::P(#a)}
   continued ^sup^

(@ex) An example.
(@ex) Again.
{::P(#a)} A premise.
{::P(#b)'} Another.

a. letter
(iv) roman

Term
:   Definition with (@ex) and {::P1}.

```
#. code {::P(#z)}
```
Trailing `(@ex)` text ~~struck~~.";

#[test]
fn passes_are_idempotent() {
    let mut store = DocumentStateStore::new();
    let config = Config::default();
    let first = listmark::process(&mut store, "doc.md", MIXED, Some(40), &config);
    let second = listmark::process(&mut store, "doc.md", MIXED, Some(40), &config);
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn instructions_are_ordered_and_in_bounds() {
    for cursor in [None, Some(0), Some(30), Some(MIXED.len())] {
        let mut store = DocumentStateStore::new();
        let out = listmark::process(&mut store, "doc.md", MIXED, cursor, &Config::default());
        assert!(!out.is_empty());
        for pair in out.windows(2) {
            assert!((pair[0].from, pair[0].to) <= (pair[1].from, pair[1].to));
        }
        assert!(out.iter().all(|i| i.in_bounds(MIXED.len())));
    }
}

#[test]
fn replacements_never_overlap() {
    let mut store = DocumentStateStore::new();
    let out = listmark::process(&mut store, "doc.md", MIXED, None, &Config::default());
    let replaces: Vec<&RenderingInstruction> = out.iter().filter(|i| i.widget().is_some()).collect();
    for pair in replaces.windows(2) {
        assert!(
            pair[0].to <= pair[1].from,
            "{:?} overlaps {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn each_line_is_claimed_at_most_once() {
    let mut store = DocumentStateStore::new();
    let out = listmark::process(&mut store, "doc.md", MIXED, None, &Config::default());
    let mut per_line: BTreeMap<usize, usize> = BTreeMap::new();
    for instruction in out.iter().filter(|i| i.is_line()) {
        *per_line.entry(instruction.from).or_default() += 1;
    }
    assert!(per_line.values().all(|&count| count == 1), "{per_line:?}");
}

#[test]
fn nothing_is_rendered_inside_code() {
    let mut store = DocumentStateStore::new();
    let out = listmark::process(&mut store, "doc.md", MIXED, None, &Config::default());
    let fence_start = MIXED.find("```").unwrap();
    let fence_end = MIXED.rfind("```").unwrap() + 3;
    let inline_code = MIXED.find("`(@ex)`").unwrap();

    assert!(out.iter().all(|i| i.to <= fence_start || i.from >= fence_end));
    assert!(!out.iter().any(|i| i.from == inline_code + 1));
}

#[test]
fn mixed_document_summary() {
    let mut store = DocumentStateStore::new();
    let out = listmark::process(&mut store, "doc.md", MIXED, None, &Config::default());

    let hash_numbers: Vec<_> = out
        .iter()
        .filter_map(|i| match i.widget() {
            Some(Widget::HashNumber { number }) => Some(*number),
            _ => None,
        })
        .collect();
    assert_eq!(hash_numbers, vec![1, 2]);

    let continuation = out.iter().any(|i| {
        matches!(&i.payload, Payload::Line(a) if a.class == LineClass::Continuation(ListKind::Hash))
    });
    assert!(continuation);

    let references = out
        .iter()
        .filter(|i| matches!(i.widget(), Some(Widget::ExampleReference { number: 1, .. })))
        .count();
    assert_eq!(references, 2);

    let custom: Vec<_> = out
        .iter()
        .filter_map(|i| match i.widget() {
            Some(Widget::CustomLabelReference { label, .. }) => Some(label.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(custom, vec!["P1", "P1"]);

    let state = store.get("doc.md").unwrap();
    assert_eq!(state.placeholders.placeholder_number("a"), Some(1));
    assert_eq!(state.placeholders.placeholder_number("b"), Some(2));
    assert_eq!(state.placeholders.placeholder_number("z"), None);
}

#[test]
fn out_of_bounds_instructions_are_dropped() {
    let structural = vec![
        RenderingInstruction::replace(0, 3, Widget::HashNumber { number: 1 }),
        RenderingInstruction::replace(2, 50, Widget::HashNumber { number: 2 }),
    ];
    let inline = vec![RenderingInstruction::replace(
        9,
        4,
        Widget::Superscript {
            text: "x".to_string(),
        },
    )];
    let out = assemble(structural, inline, 10);
    assert_eq!(out.len(), 1);
    assert_eq!((out[0].from, out[0].to), (0, 3));
}

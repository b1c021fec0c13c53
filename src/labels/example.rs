use crate::document::Document;
use crate::markers::try_parse_example_marker;

use super::{LabelRegistry, ScanScope, item_content};

/// Numbers every `(@label)` item in the document.
pub fn scan_example_labels(doc: &Document, scope: ScanScope<'_>) -> LabelRegistry {
    let mut registry = LabelRegistry::default();

    for line in doc.lines() {
        let Some(marker) = try_parse_example_marker(line.text) else {
            continue;
        };
        if scope.skips(&line, &marker.span) {
            continue;
        }
        let content = item_content(&line, &marker.span);
        registry.record(line.number, marker.label, content);
    }

    log::debug!(
        "Example scan: {} item(s), {} label(s), {} duplicate(s)",
        registry.item_count(),
        registry.label_numbers.len(),
        registry.duplicate_lines.len()
    );
    registry
}

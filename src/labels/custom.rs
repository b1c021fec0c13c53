use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::Document;
use crate::markers::try_parse_custom_marker;
use crate::placeholder::PlaceholderResolver;

use super::{LabelRegistry, ScanScope, item_content};

/// Custom-label scan result. The inner registry is keyed by processed
/// label text (`P1`), not by what the author wrote (`P(#a)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomLabelRegistry {
    pub labels: LabelRegistry,
    /// Raw label as written → processed label
    pub raw_to_processed: BTreeMap<String, String>,
}

impl CustomLabelRegistry {
    /// Processed label for a raw label that appeared as an item marker.
    pub fn processed(&self, raw: &str) -> Option<&str> {
        self.raw_to_processed.get(raw).map(String::as_str)
    }
}

/// Numbers every `{::LABEL}` item and feeds each label through the
/// document's placeholder resolver.
pub fn scan_custom_labels(
    doc: &Document,
    scope: ScanScope<'_>,
    resolver: &mut PlaceholderResolver,
) -> CustomLabelRegistry {
    let mut registry = CustomLabelRegistry::default();

    for line in doc.lines() {
        let Some(marker) = try_parse_custom_marker(line.text) else {
            continue;
        };
        if scope.skips(&line, &marker.span) {
            continue;
        }

        let content = item_content(&line, &marker.span);
        let raw = marker.label.trim();
        if raw.is_empty() {
            registry.labels.record(line.number, "", content);
            continue;
        }

        let processed = resolver.process_label(raw);
        registry
            .raw_to_processed
            .insert(raw.to_string(), processed.clone());
        registry.labels.record(line.number, &processed, content);
    }

    log::debug!(
        "Custom label scan: {} item(s), {} label(s), {} duplicate(s)",
        registry.labels.item_count(),
        registry.labels.label_numbers.len(),
        registry.labels.duplicate_lines.len()
    );
    registry
}

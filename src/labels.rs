//! Whole-document label scans.
//!
//! Both scanners walk every line once and number each matching item in
//! document order. Unlabeled items are numbered by position only; a label
//! seen a second time marks that line as a duplicate.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::code_regions::ExcludedRanges;
use crate::document::Line;
use crate::markers::MarkerSpan;

pub mod custom;
pub mod example;

pub use custom::{CustomLabelRegistry, scan_custom_labels};
pub use example::scan_example_labels;

/// Where a duplicated label was first introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateInfo {
    pub first_line: usize,
    pub first_content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelRegistry {
    /// Label → number assigned at its first occurrence
    pub label_numbers: BTreeMap<String, usize>,
    /// Label → content of its first occurrence
    pub label_contents: BTreeMap<String, String>,
    /// Label → line of its first occurrence
    pub label_lines: BTreeMap<String, usize>,
    /// Every matched line → its sequence number
    pub line_numbers: BTreeMap<usize, usize>,
    pub duplicate_lines: BTreeSet<usize>,
    /// Label → first occurrence, only for labels that were duplicated
    pub duplicates: BTreeMap<String, DuplicateInfo>,
    #[serde(skip)]
    counter: usize,
}

impl LabelRegistry {
    /// Records one matched item and returns its sequence number.
    pub(crate) fn record(&mut self, line: usize, label: &str, content: &str) -> usize {
        self.counter += 1;
        let number = self.counter;
        self.line_numbers.insert(line, number);

        if label.is_empty() {
            return number;
        }

        if let Some(&first_line) = self.label_lines.get(label) {
            self.duplicate_lines.insert(line);
            if !self.duplicates.contains_key(label) {
                let first_content = self.label_contents.get(label).cloned().unwrap_or_default();
                self.duplicates.insert(
                    label.to_string(),
                    DuplicateInfo {
                        first_line,
                        first_content,
                    },
                );
            }
        } else {
            self.label_numbers.insert(label.to_string(), number);
            self.label_contents
                .insert(label.to_string(), content.to_string());
            self.label_lines.insert(label.to_string(), line);
        }

        number
    }

    pub fn number_for_line(&self, line: usize) -> Option<usize> {
        self.line_numbers.get(&line).copied()
    }

    pub fn number_for_label(&self, label: &str) -> Option<usize> {
        self.label_numbers.get(label).copied()
    }

    pub fn content_for_label(&self, label: &str) -> Option<&str> {
        self.label_contents.get(label).map(String::as_str)
    }

    pub fn is_duplicate_line(&self, line: usize) -> bool {
        self.duplicate_lines.contains(&line)
    }

    pub fn duplicate_of(&self, label: &str) -> Option<&DuplicateInfo> {
        self.duplicates.get(label)
    }

    pub fn item_count(&self) -> usize {
        self.counter
    }
}

/// Lines a scan must ignore.
#[derive(Debug, Clone, Copy)]
pub struct ScanScope<'a> {
    pub excluded: &'a ExcludedRanges,
    pub invalid_lines: &'a BTreeSet<usize>,
}

impl ScanScope<'_> {
    /// Whether a marker found on `line` should be left out of numbering.
    pub fn skips(&self, line: &Line<'_>, marker: &MarkerSpan) -> bool {
        if self.invalid_lines.contains(&line.number) {
            return true;
        }
        if self.excluded.contains(line.from, line.to) {
            return true;
        }
        let range = marker.marker_range();
        self.excluded
            .intersects(line.from + range.start, line.from + range.end)
    }
}

pub(crate) fn item_content<'a>(line: &Line<'a>, marker: &MarkerSpan) -> &'a str {
    line.text
        .get(marker.content_start()..)
        .unwrap_or_default()
        .trim()
}

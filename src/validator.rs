//! Strict Pandoc mode: list markers Pandoc itself would not accept.
//!
//! Lines reported here are skipped by the label scanners and left as raw
//! text by the structural processors.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::code_regions::ExcludedRanges;
use crate::config::Extensions;
use crate::document::Document;
use crate::markers::{
    Delimiter, FancyStyle, extended_marker_span, is_list_item, leading_indent,
    try_parse_custom_marker, try_parse_example_marker, try_parse_fancy_marker,
    try_parse_hash_marker,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub line: usize,
    pub code: &'static str,
    pub message: String,
}

/// Supplies the set of 1-indexed lines to treat as structurally invalid.
pub trait LineValidator {
    fn invalid_lines(&self, doc: &Document, excluded: &ExcludedRanges) -> BTreeSet<usize>;
}

/// Accepts every line.
pub struct NoValidation;

impl LineValidator for NoValidation {
    fn invalid_lines(&self, _doc: &Document, _excluded: &ExcludedRanges) -> BTreeSet<usize> {
        BTreeSet::new()
    }
}

pub struct StrictValidator;

impl StrictValidator {
    pub fn validate(&self, doc: &Document, excluded: &ExcludedRanges) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut in_list = false;
        let mut prev_blank = true;

        for line in doc.lines() {
            if excluded.contains(line.from, line.to) {
                in_list = false;
                prev_blank = false;
                continue;
            }

            if line.is_blank() {
                prev_blank = true;
                continue;
            }

            let mut accepted_item = false;
            if extended_marker_span(line.text).is_some() {
                if !prev_blank && !in_list {
                    issues.push(ValidationIssue {
                        line: line.number,
                        code: "blank-before-list",
                        message: "list must be preceded by a blank line".to_string(),
                    });
                } else if let Some(fancy) = try_parse_fancy_marker(line.text)
                    && fancy.style == FancyStyle::UpperAlpha
                    && fancy.delimiter == Delimiter::Period
                    && fancy.span.spaces_after < 2
                {
                    issues.push(ValidationIssue {
                        line: line.number,
                        code: "capital-letter-spacing",
                        message: "capital letter marker with a period needs two spaces after it"
                            .to_string(),
                    });
                } else {
                    accepted_item = true;
                }
            } else if is_list_item(line.text) && (prev_blank || in_list) {
                accepted_item = true;
            }

            in_list = accepted_item || (in_list && leading_indent(line.text).0 > 0);
            prev_blank = false;
        }

        issues
    }
}

/// Drops issues reported on markers whose list family is turned off.
pub fn retain_enabled(
    issues: &mut Vec<ValidationIssue>,
    doc: &Document,
    extensions: &Extensions,
) {
    issues.retain(|issue| {
        doc.line(issue.line)
            .is_none_or(|line| marker_enabled(line.text, extensions))
    });
}

fn marker_enabled(line: &str, extensions: &Extensions) -> bool {
    if try_parse_hash_marker(line).is_some() {
        extensions.hash_lists
    } else if try_parse_custom_marker(line).is_some() {
        extensions.custom_labels
    } else if try_parse_fancy_marker(line).is_some() {
        extensions.fancy_lists
    } else if try_parse_example_marker(line).is_some() {
        extensions.example_lists
    } else {
        true
    }
}

impl LineValidator for StrictValidator {
    fn invalid_lines(&self, doc: &Document, excluded: &ExcludedRanges) -> BTreeSet<usize> {
        self.validate(doc, excluded)
            .into_iter()
            .map(|issue| issue.line)
            .collect()
    }
}

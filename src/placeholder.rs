//! Placeholder numbering for custom labels.
//!
//! A label such as `P(#a)` contains the placeholder `a`. Every distinct
//! placeholder name gets the next number in first-seen order, shared by all
//! labels of one document, so `P(#a)` becomes `P1` and a later `P(#b)`
//! becomes `P2`. References elsewhere in the document are resolved without
//! mutating any of this state.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#([A-Za-z0-9_-]+)\)").expect("valid placeholder regex"));

// Optional one-letter literal prefix, then operators and punctuation only.
static PURE_EXPRESSION_REST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]?[\s+\-*/=<>(),.]*$").expect("valid expression regex"));

const MODIFIER_CHARS: &[char] = &['\'', '"', '′', '″', '‴'];

/// A `(#name)` token inside a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken<'a> {
    /// Byte range of the whole token, relative to the label
    pub range: Range<usize>,
    pub name: &'a str,
}

pub fn placeholder_tokens(label: &str) -> Vec<PlaceholderToken<'_>> {
    PLACEHOLDER
        .captures_iter(label)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(PlaceholderToken {
                range: whole.range(),
                name: name.as_str(),
            })
        })
        .collect()
}

pub fn has_placeholders(label: &str) -> bool {
    PLACEHOLDER.is_match(label)
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlaceholderResolver {
    numbers: BTreeMap<String, usize>,
    counter: usize,
    processed: BTreeMap<String, String>,
    defined: BTreeSet<String>,
}

impl PlaceholderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers unseen placeholders in `raw`, substitutes all of them and
    /// records the result as a defined label. Repeated calls with the same
    /// `raw` return the memoized result and leave the counter alone.
    pub fn process_label(&mut self, raw: &str) -> String {
        if let Some(processed) = self.processed.get(raw) {
            return processed.clone();
        }

        for token in placeholder_tokens(raw) {
            if !self.numbers.contains_key(token.name) {
                self.counter += 1;
                self.numbers.insert(token.name.to_string(), self.counter);
                log::debug!("Placeholder '{}' -> {}", token.name, self.counter);
            }
        }

        let processed = self.substitute(raw);
        self.processed.insert(raw.to_string(), processed.clone());
        self.defined.insert(processed.clone());
        processed
    }

    pub fn placeholder_number(&self, name: &str) -> Option<usize> {
        self.numbers.get(name).copied()
    }

    /// Resolves a label used as a reference. Returns `None` when the label
    /// cannot be tied to anything the document introduced.
    pub fn processed_label(&self, raw: &str) -> Option<String> {
        if let Some(processed) = self.processed.get(raw) {
            return Some(processed.clone());
        }

        let tokens = placeholder_tokens(raw);
        if tokens.iter().any(|t| !self.numbers.contains_key(t.name)) {
            return None;
        }

        let candidate = self.substitute(raw);

        if !tokens.is_empty() {
            let rest = PLACEHOLDER.replace_all(raw, "");
            if PURE_EXPRESSION_REST.is_match(&rest) {
                return Some(candidate);
            }
        }

        let base = candidate.trim_end_matches(MODIFIER_CHARS);
        if !base.is_empty() && self.defined.iter().any(|label| label.starts_with(base)) {
            return Some(candidate);
        }

        self.defined.contains(&candidate).then_some(candidate)
    }

    pub fn is_defined(&self, processed: &str) -> bool {
        self.defined.contains(processed)
    }

    /// Placeholder names with their numbers, in name order.
    pub fn placeholders(&self) -> impl Iterator<Item = (&str, usize)> {
        self.numbers.iter().map(|(name, n)| (name.as_str(), *n))
    }

    pub fn placeholder_count(&self) -> usize {
        self.counter
    }

    pub fn reset(&mut self) {
        self.numbers.clear();
        self.processed.clear();
        self.defined.clear();
        self.counter = 0;
    }

    fn substitute(&self, raw: &str) -> String {
        PLACEHOLDER
            .replace_all(raw, |caps: &Captures| match self.numbers.get(&caps[1]) {
                Some(n) => n.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

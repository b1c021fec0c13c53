//! Excluded ranges: fenced code blocks and inline code spans.
//!
//! Hosts usually already know where code lives and can build
//! [`ExcludedRanges`] directly; [`detect`] is the fallback used by the
//! standalone entry point and the CLI.

use serde::Serialize;

use crate::document::Document;
use crate::utils::ranges_intersect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CodeRange {
    pub from: usize,
    pub to: usize,
}

/// Sorted, non-overlapping set of byte ranges in which nothing is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExcludedRanges {
    ranges: Vec<CodeRange>,
}

impl ExcludedRanges {
    pub fn new(mut ranges: Vec<CodeRange>) -> Self {
        ranges.retain(|r| r.from < r.to);
        ranges.sort();
        let mut merged: Vec<CodeRange> = Vec::with_capacity(ranges.len());
        for r in ranges {
            match merged.last_mut() {
                Some(last) if r.from <= last.to => last.to = last.to.max(r.to),
                _ => merged.push(r),
            }
        }
        Self { ranges: merged }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeRange> {
        self.ranges.iter()
    }

    /// Whether `[from, to)` overlaps any excluded range.
    pub fn intersects(&self, from: usize, to: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.to <= from);
        self.ranges
            .get(idx)
            .is_some_and(|r| ranges_intersect(from, to.max(from + 1), r.from, r.to))
    }

    /// Whether `[from, to]` lies entirely inside one excluded range.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.to < to);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.from <= from && to <= r.to)
    }
}

fn fence_of(line: &str) -> Option<(u8, usize)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    let ch = *trimmed.as_bytes().first()?;
    if ch != b'`' && ch != b'~' {
        return None;
    }
    let count = trimmed.bytes().take_while(|&b| b == ch).count();
    if count < 3 {
        return None;
    }
    if ch == b'`' && trimmed[count..].contains('`') {
        return None;
    }
    Some((ch, count))
}

/// Length of a code span starting at the beginning of `text`.
fn try_parse_code_span(text: &str) -> Option<usize> {
    let opening = text.bytes().take_while(|&b| b == b'`').count();
    if opening == 0 {
        return None;
    }
    let rest = &text[opening..];
    let mut pos = 0;
    while pos < rest.len() {
        if rest[pos..].starts_with('`') {
            let closing = rest[pos..].bytes().take_while(|&b| b == b'`').count();
            if closing == opening {
                return Some(opening + pos + closing);
            }
            pos += closing;
        } else {
            pos += rest[pos..].chars().next()?.len_utf8();
        }
    }
    None
}

fn collect_code_spans(line_text: &str, line_from: usize, out: &mut Vec<CodeRange>) {
    let mut pos = 0;
    while pos < line_text.len() {
        let rest = &line_text[pos..];
        if rest.starts_with('`') {
            let run = rest.bytes().take_while(|&b| b == b'`').count();
            if let Some(len) = try_parse_code_span(rest) {
                out.push(CodeRange {
                    from: line_from + pos,
                    to: line_from + pos + len,
                });
                pos += len;
            } else {
                pos += run;
            }
        } else if rest.starts_with('\\') && rest.len() > 1 {
            pos += 1 + rest[1..].chars().next().map_or(0, char::len_utf8);
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
}

/// Finds fenced code blocks (whole lines, fences included) and inline code
/// spans. An unclosed fence runs to the end of the document.
pub fn detect(doc: &Document) -> ExcludedRanges {
    let mut ranges = Vec::new();
    let mut open: Option<(u8, usize, usize)> = None;

    for line in doc.lines() {
        match open {
            Some((ch, count, start)) => {
                if let Some((close_ch, close_count)) = fence_of(line.text)
                    && close_ch == ch
                    && close_count >= count
                    && line.text.trim().bytes().all(|b| b == ch)
                {
                    ranges.push(CodeRange {
                        from: start,
                        to: line.to,
                    });
                    open = None;
                }
            }
            None => {
                if let Some((ch, count)) = fence_of(line.text) {
                    open = Some((ch, count, line.from));
                } else {
                    collect_code_spans(line.text, line.from, &mut ranges);
                }
            }
        }
    }

    if let Some((_, _, start)) = open {
        ranges.push(CodeRange {
            from: start,
            to: doc.len(),
        });
    }

    log::debug!("Detected {} code range(s)", ranges.len());
    ExcludedRanges::new(ranges)
}

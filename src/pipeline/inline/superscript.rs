//! Superscript (`^text^`).
//!
//! Rules:
//! - Exactly one caret on each side
//! - Content cannot be empty
//! - No whitespace immediately inside the carets
//! - `^[` opens an inline footnote, not a superscript

use super::{InlineContext, InlineMatch, InlineProcessor, scan_delimited};
use crate::instruction::{RenderingInstruction, Widget};
use crate::pipeline::RegionKind;

/// Try to parse superscript at the start of `text`.
/// Returns: (total_len, inner_content)
pub fn try_parse_superscript(text: &str) -> Option<(usize, &str)> {
    let bytes = text.as_bytes();

    if bytes.first() != Some(&b'^') {
        return None;
    }

    // ^[ is an inline footnote
    if matches!(bytes.get(1), Some(b'[') | Some(b'^')) {
        return None;
    }

    if bytes.get(1).is_some_and(|b| b.is_ascii_whitespace()) {
        return None;
    }

    let close = bytes[1..].iter().position(|&b| b == b'^' || b == b'\n')? + 1;
    if bytes[close] != b'^' {
        return None;
    }

    let content = &text[1..close];
    if content.trim().is_empty() || content.ends_with(char::is_whitespace) {
        return None;
    }

    Some((close + 1, content))
}

pub struct SuperscriptProcessor;

impl InlineProcessor for SuperscriptProcessor {
    fn name(&self) -> &str {
        "superscript"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn supports(&self, _kind: RegionKind) -> bool {
        true
    }

    fn find_matches(&self, text: &str, _ctx: &InlineContext<'_>) -> Vec<InlineMatch> {
        scan_delimited(text, b'^', try_parse_superscript)
    }

    fn build(&self, found: &InlineMatch, _ctx: &InlineContext<'_>) -> Vec<RenderingInstruction> {
        vec![RenderingInstruction::replace(
            found.from,
            found.to,
            Widget::Superscript {
                text: found.text.clone(),
            },
        )]
    }
}

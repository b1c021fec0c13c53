//! Span-level phase.
//!
//! Each content region is sliced out of the document and handed to every
//! processor that supports its kind. Matches a processor does not accept
//! (cursor inside, unknown label) are dropped first and never claim text.
//! The rest are merged and resolved left to right: the earliest start wins,
//! ties go to the processor registered with the lower priority, and anything
//! overlapping an accepted match is dropped.

use super::{ContentRegion, PassContext, RegionKind};
use crate::instruction::RenderingInstruction;

mod custom_ref;
mod example_ref;
mod subscript;
mod superscript;

pub use custom_ref::CustomLabelReferenceProcessor;
pub use example_ref::ExampleReferenceProcessor;
pub use subscript::SubscriptProcessor;
pub use superscript::SuperscriptProcessor;

/// A candidate span. Offsets are region-relative when returned from
/// [`InlineProcessor::find_matches`] and absolute when passed to
/// [`InlineProcessor::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub from: usize,
    pub to: usize,
    /// Captured payload, e.g. the label of a reference
    pub text: String,
}

pub struct InlineContext<'a> {
    pub pass: &'a PassContext<'a>,
    pub region: &'a ContentRegion,
}

pub trait InlineProcessor {
    fn name(&self) -> &str;
    fn priority(&self) -> u32;
    fn supports(&self, kind: RegionKind) -> bool;
    fn find_matches(&self, text: &str, ctx: &InlineContext<'_>) -> Vec<InlineMatch>;
    /// Checked on the absolute match before overlap resolution. A rejected
    /// match stays plain text and does not block overlapping matches.
    fn accepts(&self, found: &InlineMatch, ctx: &InlineContext<'_>) -> bool {
        !cursor_in_match(found, ctx)
    }
    fn build(&self, found: &InlineMatch, ctx: &InlineContext<'_>) -> Vec<RenderingInstruction>;
}

pub(crate) fn run(
    processors: &[Box<dyn InlineProcessor>],
    regions: &[ContentRegion],
    pass: &PassContext<'_>,
) -> Vec<RenderingInstruction> {
    let doc_len = pass.document.len();
    let mut instructions = Vec::new();

    for region in regions {
        if region.from >= region.to || region.to > doc_len {
            continue;
        }
        let Some(text) = pass.document.slice(region.from, region.to) else {
            log::debug!(
                "Skipping region {}..{}: not on a char boundary",
                region.from,
                region.to
            );
            continue;
        };

        let ctx = InlineContext { pass, region };
        let mut candidates: Vec<(usize, InlineMatch)> = Vec::new();
        for (index, processor) in processors.iter().enumerate() {
            if !processor.supports(region.kind) {
                continue;
            }
            for found in processor.find_matches(text, &ctx) {
                let absolute = InlineMatch {
                    from: region.from + found.from,
                    to: region.from + found.to,
                    text: found.text,
                };
                if pass.excluded.intersects(absolute.from, absolute.to) {
                    continue;
                }
                if !processor.accepts(&absolute, &ctx) {
                    log::trace!(
                        "'{}' declined match at {}..{}",
                        processor.name(),
                        absolute.from,
                        absolute.to
                    );
                    continue;
                }
                candidates.push((index, absolute));
            }
        }

        candidates.sort_by_key(|(index, found)| (found.from, *index));

        let mut consumed_to = region.from;
        for (index, found) in candidates {
            if found.from < consumed_to {
                log::trace!(
                    "Dropping overlapping '{}' match at {}..{}",
                    processors[index].name(),
                    found.from,
                    found.to
                );
                continue;
            }
            instructions.extend(processors[index].build(&found, &ctx));
            consumed_to = found.to;
        }
    }

    instructions
}

/// Whether the cursor touches an absolute match span, ends included.
pub(crate) fn cursor_in_match(found: &InlineMatch, ctx: &InlineContext<'_>) -> bool {
    ctx.pass.cursor_within(found.from, found.to)
}

/// Starts of every `delimiter` in `text` not directly preceded by another
/// one, paired with the span parsed from there.
pub(crate) fn scan_delimited<'t>(
    text: &'t str,
    delimiter: u8,
    parse: impl Fn(&'t str) -> Option<(usize, &'t str)>,
) -> Vec<InlineMatch> {
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != delimiter || (pos > 0 && bytes[pos - 1] == delimiter) {
            pos += 1;
            continue;
        }
        match parse(&text[pos..]) {
            Some((len, content)) => {
                matches.push(InlineMatch {
                    from: pos,
                    to: pos + len,
                    text: content.to_string(),
                });
                pos += len;
            }
            None => pos += 1,
        }
    }

    matches
}

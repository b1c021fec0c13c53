use std::sync::LazyLock;

use regex::Regex;

use super::{InlineContext, InlineMatch, InlineProcessor, cursor_in_match};
use crate::instruction::{RenderingInstruction, Widget};
use crate::pipeline::RegionKind;
use crate::utils::truncate_content;

static EXAMPLE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(@([A-Za-z0-9_-]+)\)").expect("valid example reference regex")
});

/// `(@label)` in running text, shown as the example's number.
pub struct ExampleReferenceProcessor;

impl InlineProcessor for ExampleReferenceProcessor {
    fn name(&self) -> &str {
        "example-reference"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn supports(&self, _kind: RegionKind) -> bool {
        true
    }

    fn find_matches(&self, text: &str, _ctx: &InlineContext<'_>) -> Vec<InlineMatch> {
        EXAMPLE_REFERENCE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(InlineMatch {
                    from: whole.start(),
                    to: whole.end(),
                    text: caps.get(1)?.as_str().to_string(),
                })
            })
            .collect()
    }

    fn accepts(&self, found: &InlineMatch, ctx: &InlineContext<'_>) -> bool {
        let registry = ctx.pass.example_labels;
        !cursor_in_match(found, ctx) && registry.number_for_label(&found.text).is_some()
    }

    fn build(&self, found: &InlineMatch, ctx: &InlineContext<'_>) -> Vec<RenderingInstruction> {
        let registry = ctx.pass.example_labels;
        let Some(number) = registry.number_for_label(&found.text) else {
            return Vec::new();
        };
        let tooltip = registry
            .content_for_label(&found.text)
            .filter(|content| !content.is_empty())
            .map(|content| truncate_content(content, ctx.pass.config.tooltip_length));

        vec![RenderingInstruction::replace(
            found.from,
            found.to,
            Widget::ExampleReference { number, tooltip },
        )]
    }
}

use std::sync::LazyLock;

use regex::Regex;

use super::{InlineContext, InlineMatch, InlineProcessor, cursor_in_match};
use crate::instruction::{RenderingInstruction, Widget};
use crate::labels::CustomLabelRegistry;
use crate::pipeline::RegionKind;
use crate::placeholder::PlaceholderResolver;
use crate::utils::truncate_content;

static CUSTOM_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{::([^{}\n]+)\}").expect("valid custom reference regex"));

/// `{::LABEL}` in running text, shown as `(processed label)`.
pub struct CustomLabelReferenceProcessor;

/// Processed form of a referenced label, if it names anything defined.
fn resolve(
    raw: &str,
    registry: &CustomLabelRegistry,
    placeholders: &PlaceholderResolver,
) -> Option<String> {
    if let Some(processed) = registry.processed(raw) {
        return Some(processed.to_string());
    }
    if registry.labels.content_for_label(raw).is_some() || registry.labels.duplicate_of(raw).is_some()
    {
        return Some(raw.to_string());
    }
    placeholders.processed_label(raw)
}

impl InlineProcessor for CustomLabelReferenceProcessor {
    fn name(&self) -> &str {
        "custom-label-reference"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn supports(&self, _kind: RegionKind) -> bool {
        true
    }

    fn find_matches(&self, text: &str, _ctx: &InlineContext<'_>) -> Vec<InlineMatch> {
        CUSTOM_REFERENCE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let label = caps.get(1)?.as_str().trim();
                (!label.is_empty()).then(|| InlineMatch {
                    from: whole.start(),
                    to: whole.end(),
                    text: label.to_string(),
                })
            })
            .collect()
    }

    fn accepts(&self, found: &InlineMatch, ctx: &InlineContext<'_>) -> bool {
        if cursor_in_match(found, ctx) {
            return false;
        }
        let known = resolve(&found.text, ctx.pass.custom_labels, ctx.pass.placeholders).is_some();
        if !known {
            log::trace!("Unresolved custom label reference '{}'", found.text);
        }
        known
    }

    fn build(&self, found: &InlineMatch, ctx: &InlineContext<'_>) -> Vec<RenderingInstruction> {
        let registry = ctx.pass.custom_labels;
        let Some(label) = resolve(&found.text, registry, ctx.pass.placeholders) else {
            return Vec::new();
        };
        let tooltip = registry
            .labels
            .content_for_label(&label)
            .filter(|content| !content.is_empty())
            .map(|content| truncate_content(content, ctx.pass.config.tooltip_length));

        vec![RenderingInstruction::replace(
            found.from,
            found.to,
            Widget::CustomLabelReference { label, tooltip },
        )]
    }
}

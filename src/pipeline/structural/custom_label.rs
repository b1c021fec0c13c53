//! `{::LABEL}` items.
//!
//! The marker has four display states, chosen again on every pass:
//!
//! - *full*: the cursor is on the marker. Delimiters are marked, placeholder
//!   tokens show their numbers except the one being edited.
//! - *semi-expanded*: the label has placeholders and the cursor is elsewhere
//!   on the line. Delimiters are marked, the label shows its processed form.
//! - *collapsed*: marker and trailing space are replaced by `(label) `.
//! - *duplicate*: the marker stays literal and is flagged.

use crate::document::Line;
use crate::instruction::{
    LineClass, ListKind, MarkAttributes, MarkClass, RenderingInstruction, Widget,
};
use crate::markers::{LabeledMarker, try_parse_custom_marker};
use crate::placeholder::{has_placeholders, placeholder_tokens};
use crate::utils::truncate_content;

use super::{
    ContextUpdate, ItemInfo, LineContext, ListContext, StructuralProcessor, StructuralResult,
    item_region, list_item_result, marker_bounds,
};
use crate::pipeline::RegionKind;

const OPEN_DELIMITER_LEN: usize = 3;
const CLOSE_DELIMITER_LEN: usize = 1;

pub struct CustomLabelProcessor;

impl StructuralProcessor for CustomLabelProcessor {
    fn name(&self) -> &str {
        "custom-label"
    }

    fn priority(&self) -> u32 {
        15
    }

    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool {
        try_parse_custom_marker(line.text)
            .is_some_and(|marker| !ctx.pass.marker_excluded(line, &marker.span))
    }

    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult {
        let Some(marker) = try_parse_custom_marker(line.text) else {
            return StructuralResult::untouched();
        };
        let registry = ctx.pass.custom_labels;
        let Some(number) = registry.labels.number_for_line(line.number) else {
            return StructuralResult::untouched();
        };

        let raw = marker.label.trim();
        let processed = if raw.is_empty() {
            number.to_string()
        } else {
            registry
                .processed(raw)
                .map(str::to_string)
                .unwrap_or_else(|| raw.to_string())
        };

        if registry.labels.is_duplicate_line(line.number) {
            return duplicate_result(line, ctx, &marker, &processed);
        }

        let (marker_from, marker_to) = marker_bounds(line, &marker.span);
        if ctx.pass.cursor_within(marker_from, marker_to) {
            return expanded_result(line, ctx, &marker, None);
        }
        if has_placeholders(marker.label) && ctx.pass.cursor_on_line(line) {
            return expanded_result(line, ctx, &marker, Some(processed));
        }

        list_item_result(
            line,
            ctx,
            ListKind::CustomLabel,
            &marker.span,
            Widget::CustomLabel { label: processed },
            MarkAttributes::new(MarkClass::ListMarker(ListKind::CustomLabel)),
        )
    }
}

/// Delimiters stay visible. With `body` the whole label is replaced by it,
/// otherwise each placeholder token is replaced unless the cursor is in it.
fn expanded_result(
    line: &Line<'_>,
    ctx: &LineContext<'_>,
    marker: &LabeledMarker<'_>,
    body: Option<String>,
) -> StructuralResult {
    let (marker_from, marker_to) = marker_bounds(line, &marker.span);
    let label_from = marker_from + OPEN_DELIMITER_LEN;
    let label_to = marker_to - CLOSE_DELIMITER_LEN;

    let mut instructions = vec![
        RenderingInstruction::line(
            line.from,
            LineClass::ListItem(ListKind::CustomLabel),
            marker.span.nesting_level(),
        ),
        RenderingInstruction::mark(
            marker_from,
            label_from,
            MarkAttributes::new(MarkClass::Delimiter),
        ),
    ];

    match body {
        Some(label) if label_from < label_to => {
            instructions.push(RenderingInstruction::replace(
                label_from,
                label_to,
                Widget::CustomLabelBody { label },
            ));
        }
        Some(_) => {}
        None => {
            for token in placeholder_tokens(marker.label) {
                let from = label_from + token.range.start;
                let to = label_from + token.range.end;
                if ctx.pass.cursor_within(from, to) {
                    continue;
                }
                if let Some(number) = ctx.pass.placeholders.placeholder_number(token.name) {
                    instructions.push(RenderingInstruction::replace(
                        from,
                        to,
                        Widget::PlaceholderNumber { number },
                    ));
                }
            }
        }
    }

    instructions.push(RenderingInstruction::mark(
        label_to,
        marker_to,
        MarkAttributes::new(MarkClass::Delimiter),
    ));

    item_result(line, marker, instructions)
}

fn duplicate_result(
    line: &Line<'_>,
    ctx: &LineContext<'_>,
    marker: &LabeledMarker<'_>,
    processed: &str,
) -> StructuralResult {
    let (marker_from, marker_to) = marker_bounds(line, &marker.span);
    let duplicate_of = ctx
        .pass
        .custom_labels
        .labels
        .duplicate_of(processed)
        .map(|info| {
            let mut info = info.clone();
            info.first_content =
                truncate_content(&info.first_content, ctx.pass.config.tooltip_length);
            info
        });

    let instructions = vec![
        RenderingInstruction::line(
            line.from,
            LineClass::ListItem(ListKind::CustomLabel),
            marker.span.nesting_level(),
        ),
        RenderingInstruction::mark(
            marker_from,
            marker_to,
            MarkAttributes {
                class: MarkClass::DuplicateLabel,
                duplicate_of,
            },
        ),
    ];

    item_result(line, marker, instructions)
}

fn item_result(
    line: &Line<'_>,
    marker: &LabeledMarker<'_>,
    instructions: Vec<RenderingInstruction>,
) -> StructuralResult {
    StructuralResult {
        instructions,
        region: Some(item_region(
            line,
            &marker.span,
            RegionKind::ListItem,
            ListKind::CustomLabel,
        )),
        skip_rest: true,
        list_context: ContextUpdate::Set(ListContext::for_item(ListKind::CustomLabel, &marker.span)),
        item: Some(ItemInfo {
            kind: ListKind::CustomLabel,
            level: marker.span.nesting_level(),
        }),
    }
}

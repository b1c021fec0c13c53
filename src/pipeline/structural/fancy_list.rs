use crate::document::Line;
use crate::instruction::{ListKind, Widget};
use crate::markers::try_parse_fancy_marker;

use super::{
    LineContext, StructuralProcessor, StructuralResult, list_item_result, marker_mark,
};

/// Lettered and roman-numeral items. The marker is redrawn as written.
pub struct FancyListProcessor;

impl StructuralProcessor for FancyListProcessor {
    fn name(&self) -> &str {
        "fancy-list"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool {
        try_parse_fancy_marker(line.text)
            .is_some_and(|marker| !ctx.pass.marker_excluded(line, &marker.span))
    }

    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult {
        let Some(marker) = try_parse_fancy_marker(line.text) else {
            return StructuralResult::untouched();
        };
        if ctx.pass.is_invalid(line) {
            return StructuralResult::untouched();
        }

        let text = line.text[marker.span.marker_range()].to_string();
        list_item_result(
            line,
            ctx,
            ListKind::Fancy,
            &marker.span,
            Widget::FancyMarker { marker: text },
            marker_mark(ListKind::Fancy),
        )
    }
}

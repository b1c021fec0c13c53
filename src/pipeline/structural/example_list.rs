use crate::document::Line;
use crate::instruction::{ListKind, MarkAttributes, MarkClass, Widget};
use crate::markers::try_parse_example_marker;
use crate::utils::truncate_content;

use super::{
    LineContext, StructuralProcessor, StructuralResult, list_item_result, marker_mark,
};

/// `(@)` and `(@label)` items, numbered across the whole document.
pub struct ExampleListProcessor;

impl StructuralProcessor for ExampleListProcessor {
    fn name(&self) -> &str {
        "example-list"
    }

    fn priority(&self) -> u32 {
        30
    }

    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool {
        try_parse_example_marker(line.text)
            .is_some_and(|marker| !ctx.pass.marker_excluded(line, &marker.span))
    }

    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult {
        let Some(marker) = try_parse_example_marker(line.text) else {
            return StructuralResult::untouched();
        };
        let registry = ctx.pass.example_labels;
        let Some(number) = registry.number_for_line(line.number) else {
            return StructuralResult::untouched();
        };

        let duplicate_of = if registry.is_duplicate_line(line.number) {
            registry.duplicate_of(marker.label).map(|info| {
                let mut info = info.clone();
                info.first_content =
                    truncate_content(&info.first_content, ctx.pass.config.tooltip_length);
                info
            })
        } else {
            None
        };

        let mut mark = marker_mark(ListKind::Example);
        if duplicate_of.is_some() {
            mark = MarkAttributes {
                class: MarkClass::DuplicateLabel,
                duplicate_of: duplicate_of.clone(),
            };
        }

        list_item_result(
            line,
            ctx,
            ListKind::Example,
            &marker.span,
            Widget::ExampleMarker {
                number,
                duplicate_of,
            },
            mark,
        )
    }
}

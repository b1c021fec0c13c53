use crate::document::Line;
use crate::instruction::{ListKind, Widget};
use crate::markers::try_parse_hash_marker;

use super::{
    LineContext, StructuralProcessor, StructuralResult, list_item_result, marker_mark,
};

/// `#.` items, numbered by position within their list.
pub struct HashListProcessor;

impl StructuralProcessor for HashListProcessor {
    fn name(&self) -> &str {
        "hash-list"
    }

    fn priority(&self) -> u32 {
        10
    }

    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool {
        try_parse_hash_marker(line.text)
            .is_some_and(|marker| !ctx.pass.marker_excluded(line, &marker))
    }

    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult {
        let Some(marker) = try_parse_hash_marker(line.text) else {
            return StructuralResult::untouched();
        };
        if ctx.pass.is_invalid(line) {
            return StructuralResult::untouched();
        }

        let number = ctx.run.next_ordinal(ListKind::Hash, marker.nesting_level());
        list_item_result(
            line,
            ctx,
            ListKind::Hash,
            &marker,
            Widget::HashNumber { number },
            marker_mark(ListKind::Hash),
        )
    }
}

use crate::document::{Document, Line};
use crate::instruction::{LineClass, ListKind, RenderingInstruction, Widget};
use crate::markers::{is_list_item, leading_indent, try_parse_definition_marker};
use crate::pipeline::{ContentRegion, RegionKind};

use super::{
    ContextUpdate, LineContext, StructuralProcessor, StructuralResult, list_item_result,
    marker_mark,
};

/// Definition lists: term lines and their `:`/`~` definitions.
pub struct DefinitionProcessor;

impl DefinitionProcessor {
    fn is_term(doc: &Document, line: &Line<'_>) -> bool {
        if line.is_blank() || leading_indent(line.text).0 > 0 {
            return false;
        }
        if try_parse_definition_marker(line.text).is_some() || is_list_item(line.text) {
            return false;
        }

        let Some(next) = doc.line(line.number + 1) else {
            return false;
        };
        if try_parse_definition_marker(next.text).is_some() {
            return true;
        }
        next.is_blank()
            && doc
                .line(line.number + 2)
                .is_some_and(|after| try_parse_definition_marker(after.text).is_some())
    }
}

impl StructuralProcessor for DefinitionProcessor {
    fn name(&self) -> &str {
        "definition-list"
    }

    fn priority(&self) -> u32 {
        20
    }

    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool {
        if let Some(marker) = try_parse_definition_marker(line.text) {
            return !ctx.pass.marker_excluded(line, &marker);
        }
        Self::is_term(ctx.pass.document, line)
    }

    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult {
        if ctx.pass.is_invalid(line) {
            return StructuralResult::untouched();
        }

        let Some(marker) = try_parse_definition_marker(line.text) else {
            let end = line.from + line.text.trim_end().len();
            return StructuralResult {
                instructions: vec![RenderingInstruction::line(
                    line.from,
                    LineClass::DefinitionTerm,
                    0,
                )],
                region: Some(
                    ContentRegion::new(line.from, end, RegionKind::DefinitionTerm)
                        .with_parent(ListKind::Definition)
                        .with_metadata(line.number, 0),
                ),
                skip_rest: true,
                list_context: ContextUpdate::Clear,
                item: None,
            };
        };

        let mut result = list_item_result(
            line,
            ctx,
            ListKind::Definition,
            &marker,
            Widget::DefinitionBullet,
            marker_mark(ListKind::Definition),
        );
        if let Some(region) = result.region.as_mut() {
            region.kind = RegionKind::Definition;
        }
        result
    }
}

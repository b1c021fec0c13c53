use crate::document::Line;
use crate::instruction::{LineClass, RenderingInstruction};
use crate::markers::leading_indent;
use crate::pipeline::{ContentRegion, RegionKind};

use super::{ContextUpdate, LineContext, StructuralProcessor, StructuralResult};

/// Indented lines that belong to the item above them.
pub struct ContinuationProcessor;

impl StructuralProcessor for ContinuationProcessor {
    fn name(&self) -> &str {
        "continuation"
    }

    fn priority(&self) -> u32 {
        100
    }

    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool {
        if !ctx.list.in_list {
            return false;
        }
        let (cols, _) = leading_indent(line.text);
        cols > 0 && cols >= ctx.list.continuation_threshold()
    }

    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult {
        let Some(kind) = ctx.list.parent_list_kind else {
            return StructuralResult::untouched();
        };
        let (_, indent_bytes) = leading_indent(line.text);
        let level = ctx.list.nesting_level;

        StructuralResult {
            instructions: vec![RenderingInstruction::line(
                line.from,
                LineClass::Continuation(kind),
                level,
            )],
            region: Some(
                ContentRegion::new(line.from + indent_bytes, line.to, RegionKind::Continuation)
                    .with_parent(kind)
                    .with_metadata(line.number, level),
            ),
            skip_rest: true,
            list_context: ContextUpdate::Keep,
            item: None,
        }
    }
}

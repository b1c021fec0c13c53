//! Line-level phase.
//!
//! Processors are consulted in ascending priority order and the first one
//! whose predicate holds claims the line. Unclaimed lines become plain
//! paragraph regions.

use serde::Serialize;

use super::{ContentRegion, PassContext, RegionKind};
use crate::document::Line;
use crate::instruction::{
    LineClass, ListKind, MarkAttributes, MarkClass, RenderingInstruction, Widget,
};
use crate::markers::MarkerSpan;

mod continuation;
mod custom_label;
mod definition;
mod example_list;
mod fancy_list;
mod hash_list;

pub use continuation::ContinuationProcessor;
pub use custom_label::CustomLabelProcessor;
pub use definition::DefinitionProcessor;
pub use example_list::ExampleListProcessor;
pub use fancy_list::FancyListProcessor;
pub use hash_list::HashListProcessor;

/// Continuation lines must be indented at least this far, or up to the
/// item's content column when that is smaller.
const CONTINUATION_MIN_INDENT: usize = 2;

/// State carried from a list item to the indented lines that follow it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListContext {
    pub in_list: bool,
    pub content_start_column: usize,
    pub nesting_level: usize,
    pub parent_list_kind: Option<ListKind>,
}

impl ListContext {
    pub fn for_item(kind: ListKind, marker: &MarkerSpan) -> Self {
        Self {
            in_list: true,
            content_start_column: marker.content_col,
            nesting_level: marker.nesting_level(),
            parent_list_kind: Some(kind),
        }
    }

    pub fn continuation_threshold(&self) -> usize {
        self.content_start_column.min(CONTINUATION_MIN_INDENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextUpdate {
    Keep,
    Set(ListContext),
    Clear,
}

/// Ordinals of consecutive items per nesting level.
///
/// Blank lines do not end a run; any other line that is not an item or a
/// continuation does.
#[derive(Debug, Clone, Default)]
pub struct ListRun {
    levels: Vec<Option<(ListKind, usize)>>,
}

impl ListRun {
    /// Ordinal the next item of `kind` at `level` would get.
    pub fn next_ordinal(&self, kind: ListKind, level: usize) -> usize {
        match self.levels.get(level) {
            Some(Some((k, count))) if *k == kind => count + 1,
            _ => 1,
        }
    }

    fn record(&mut self, kind: ListKind, level: usize) {
        let next = self.next_ordinal(kind, level);
        self.levels.truncate(level + 1);
        while self.levels.len() <= level {
            self.levels.push(None);
        }
        self.levels[level] = Some((kind, next));
    }

    fn reset(&mut self) {
        self.levels.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
    pub kind: ListKind,
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructuralResult {
    pub instructions: Vec<RenderingInstruction>,
    pub region: Option<ContentRegion>,
    /// Stop consulting lower-priority processors for this line
    pub skip_rest: bool,
    pub list_context: ContextUpdate,
    /// Set when the line is a list item
    pub item: Option<ItemInfo>,
}

impl StructuralResult {
    /// Claims the line but renders nothing, leaving the source as typed.
    pub fn untouched() -> Self {
        Self {
            instructions: Vec::new(),
            region: None,
            skip_rest: true,
            list_context: ContextUpdate::Clear,
            item: None,
        }
    }
}

/// What a structural processor sees besides the line itself.
pub struct LineContext<'a> {
    pub pass: &'a PassContext<'a>,
    pub list: &'a ListContext,
    pub run: &'a ListRun,
}

pub trait StructuralProcessor {
    fn name(&self) -> &str;
    /// Lower runs first.
    fn priority(&self) -> u32;
    fn can_process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> bool;
    fn process(&self, line: &Line<'_>, ctx: &LineContext<'_>) -> StructuralResult;
}

#[derive(Debug, Default)]
pub struct StructuralOutput {
    pub instructions: Vec<RenderingInstruction>,
    pub regions: Vec<ContentRegion>,
}

pub(crate) fn run(
    processors: &[Box<dyn StructuralProcessor>],
    pass: &PassContext<'_>,
) -> StructuralOutput {
    let mut output = StructuralOutput::default();
    let mut list = ListContext::default();
    let mut run = ListRun::default();

    for line in pass.document.lines() {
        if pass.excluded.contains(line.from, line.to) {
            list = ListContext::default();
            run.reset();
            continue;
        }

        if line.is_blank() {
            list = ListContext::default();
            continue;
        }

        let mut claimed = false;
        let mut updates = Vec::new();
        {
            let ctx = LineContext {
                pass,
                list: &list,
                run: &run,
            };
            for processor in processors {
                if !processor.can_process(&line, &ctx) {
                    continue;
                }
                log::trace!("Line {} claimed by '{}'", line.number, processor.name());
                let result = processor.process(&line, &ctx);
                claimed = true;
                output.instructions.extend(result.instructions);
                output.regions.extend(result.region);
                updates.push((result.list_context, result.item));
                if result.skip_rest {
                    break;
                }
            }
        }

        if !claimed {
            output
                .regions
                .push(ContentRegion::new(line.from, line.to, RegionKind::Paragraph).with_metadata(line.number, 0));
            list = ListContext::default();
            run.reset();
            continue;
        }

        for (update, item) in updates {
            match update {
                ContextUpdate::Keep => {}
                ContextUpdate::Set(ctx) => list = ctx,
                ContextUpdate::Clear => list = ListContext::default(),
            }
            match item {
                Some(item) => run.record(item.kind, item.level),
                None if update == ContextUpdate::Clear => run.reset(),
                None => {}
            }
        }
    }

    output
}

/// Absolute byte range of the marker token on `line`.
pub(crate) fn marker_bounds(line: &Line<'_>, marker: &MarkerSpan) -> (usize, usize) {
    let range = marker.marker_range();
    (line.from + range.start, line.from + range.end)
}

/// The shared shape of a rendered list item: a line attribute, the marker
/// either kept editable (cursor on it) or replaced by `widget`, and a
/// content region after the marker.
pub(crate) fn list_item_result(
    line: &Line<'_>,
    ctx: &LineContext<'_>,
    kind: ListKind,
    marker: &MarkerSpan,
    widget: Widget,
    mark: MarkAttributes,
) -> StructuralResult {
    let level = marker.nesting_level();
    let (marker_from, marker_to) = marker_bounds(line, marker);

    let mut instructions = vec![RenderingInstruction::line(
        line.from,
        LineClass::ListItem(kind),
        level,
    )];

    if ctx.pass.cursor_within(marker_from, marker_to) {
        instructions.push(RenderingInstruction::mark(marker_from, marker_to, mark));
    } else {
        let replaced = marker.marker_with_space();
        instructions.push(RenderingInstruction::replace(
            line.from + replaced.start,
            line.from + replaced.end,
            widget,
        ));
    }

    StructuralResult {
        instructions,
        region: Some(item_region(line, marker, RegionKind::ListItem, kind)),
        skip_rest: true,
        list_context: ContextUpdate::Set(ListContext::for_item(kind, marker)),
        item: Some(ItemInfo { kind, level }),
    }
}

pub(crate) fn item_region(
    line: &Line<'_>,
    marker: &MarkerSpan,
    region_kind: RegionKind,
    list_kind: ListKind,
) -> ContentRegion {
    let start = (line.from + marker.content_start()).min(line.to);
    ContentRegion::new(start, line.to, region_kind)
        .with_parent(list_kind)
        .with_metadata(line.number, marker.nesting_level())
}

pub(crate) fn marker_mark(kind: ListKind) -> MarkAttributes {
    MarkAttributes::new(MarkClass::ListMarker(kind))
}

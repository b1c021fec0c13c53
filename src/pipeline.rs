//! The annotation pipeline.
//!
//! One pass runs in four steps:
//!
//! 1. Label scans build example and custom-label registries.
//! 2. The structural phase walks lines top to bottom. Each line is claimed
//!    by at most one processor, which emits line-level instructions and
//!    marks the text eligible for inline matching as a content region.
//! 3. The inline phase matches references and spans inside each region and
//!    resolves overlaps left to right.
//! 4. Assembly merges, validates and orders every instruction.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::code_regions::ExcludedRanges;
use crate::config::Config;
use crate::document::{Document, Line};
use crate::instruction::{ListKind, RenderingInstruction};
use crate::labels::{self, CustomLabelRegistry, LabelRegistry, ScanScope};
use crate::markers::MarkerSpan;
use crate::placeholder::PlaceholderResolver;
use crate::state::DocumentState;

pub mod assembly;
pub mod inline;
pub mod structural;

use inline::InlineProcessor;
use structural::StructuralProcessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    /// A line no structural processor claimed
    Paragraph,
    ListItem,
    Continuation,
    DefinitionTerm,
    Definition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionMetadata {
    pub line: usize,
    pub level: usize,
}

/// Half-open span of text eligible for inline matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRegion {
    pub from: usize,
    pub to: usize,
    pub kind: RegionKind,
    pub parent_list_kind: Option<ListKind>,
    pub metadata: Option<RegionMetadata>,
}

impl ContentRegion {
    pub fn new(from: usize, to: usize, kind: RegionKind) -> Self {
        Self {
            from,
            to,
            kind,
            parent_list_kind: None,
            metadata: None,
        }
    }

    pub fn with_parent(mut self, kind: ListKind) -> Self {
        self.parent_list_kind = Some(kind);
        self
    }

    pub fn with_metadata(mut self, line: usize, level: usize) -> Self {
        self.metadata = Some(RegionMetadata { line, level });
        self
    }
}

/// Everything a pass reads from the host.
pub struct PassInput<'a> {
    pub document: &'a Document,
    /// Primary cursor as an absolute byte offset
    pub cursor: Option<usize>,
    pub excluded: &'a ExcludedRanges,
    /// 1-indexed lines flagged by the strict-mode validator
    pub invalid_lines: &'a BTreeSet<usize>,
}

/// Read-only view shared by both phases once the scans are done.
pub struct PassContext<'a> {
    pub document: &'a Document,
    pub cursor: Option<usize>,
    pub excluded: &'a ExcludedRanges,
    pub invalid_lines: &'a BTreeSet<usize>,
    pub config: &'a Config,
    pub example_labels: &'a LabelRegistry,
    pub custom_labels: &'a CustomLabelRegistry,
    pub placeholders: &'a PlaceholderResolver,
}

impl PassContext<'_> {
    /// Whether the cursor sits in `[from, to]`, both ends included.
    pub fn cursor_within(&self, from: usize, to: usize) -> bool {
        self.cursor.is_some_and(|c| from <= c && c <= to)
    }

    pub fn cursor_on_line(&self, line: &Line<'_>) -> bool {
        self.cursor.is_some_and(|c| line.contains(c))
    }

    pub fn is_invalid(&self, line: &Line<'_>) -> bool {
        self.invalid_lines.contains(&line.number)
    }

    /// Whether a marker on `line` overlaps code.
    pub fn marker_excluded(&self, line: &Line<'_>, marker: &MarkerSpan) -> bool {
        let range = marker.marker_range();
        self.excluded
            .intersects(line.from + range.start, line.from + range.end)
    }
}

/// Priority-ordered processor registries plus the pass driver.
#[derive(Default)]
pub struct ProcessingPipeline {
    structural: Vec<Box<dyn StructuralProcessor>>,
    inline: Vec<Box<dyn InlineProcessor>>,
}

impl ProcessingPipeline {
    /// An empty pipeline; hosts register their own processors.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in processors for every extension enabled in `config`.
    pub fn from_config(config: &Config) -> Self {
        let ext = &config.extensions;
        let mut pipeline = Self::new();

        if ext.hash_lists {
            pipeline.register_structural_processor(Box::new(structural::HashListProcessor));
        }
        if ext.custom_labels {
            pipeline.register_structural_processor(Box::new(structural::CustomLabelProcessor));
        }
        if ext.fancy_lists {
            pipeline.register_structural_processor(Box::new(structural::FancyListProcessor));
        }
        if ext.definition_lists {
            pipeline.register_structural_processor(Box::new(structural::DefinitionProcessor));
        }
        if ext.example_lists {
            pipeline.register_structural_processor(Box::new(structural::ExampleListProcessor));
        }
        pipeline.register_structural_processor(Box::new(structural::ContinuationProcessor));

        if ext.example_lists {
            pipeline.register_inline_processor(Box::new(inline::ExampleReferenceProcessor));
        }
        if ext.custom_labels {
            pipeline.register_inline_processor(Box::new(inline::CustomLabelReferenceProcessor));
        }
        if ext.superscript {
            pipeline.register_inline_processor(Box::new(inline::SuperscriptProcessor));
        }
        if ext.subscript {
            pipeline.register_inline_processor(Box::new(inline::SubscriptProcessor));
        }

        pipeline
    }

    /// Adds a structural processor; equal priorities keep registration order.
    pub fn register_structural_processor(&mut self, processor: Box<dyn StructuralProcessor>) {
        log::debug!(
            "Registering structural processor '{}' (priority {})",
            processor.name(),
            processor.priority()
        );
        self.structural.push(processor);
        self.structural.sort_by_key(|p| p.priority());
    }

    /// Adds an inline processor; equal priorities keep registration order.
    pub fn register_inline_processor(&mut self, processor: Box<dyn InlineProcessor>) {
        log::debug!(
            "Registering inline processor '{}' (priority {})",
            processor.name(),
            processor.priority()
        );
        self.inline.push(processor);
        self.inline.sort_by_key(|p| p.priority());
    }

    /// Runs one full pass and returns instructions ordered by `(from, to)`.
    ///
    /// The pass never fails: malformed syntax and unresolved references are
    /// left as text, and bad instructions are logged and dropped.
    pub fn process(
        &self,
        state: &mut DocumentState,
        input: &PassInput<'_>,
        config: &Config,
    ) -> Vec<RenderingInstruction> {
        let doc = input.document;
        log::debug!(
            "Processing pass: {} line(s), {} byte(s), cursor {:?}",
            doc.line_count(),
            doc.len(),
            input.cursor
        );

        let scope = ScanScope {
            excluded: input.excluded,
            invalid_lines: input.invalid_lines,
        };
        state.example_labels = if config.extensions.example_lists {
            labels::scan_example_labels(doc, scope)
        } else {
            LabelRegistry::default()
        };
        state.custom_labels = if config.extensions.custom_labels {
            labels::scan_custom_labels(doc, scope, &mut state.placeholders)
        } else {
            CustomLabelRegistry::default()
        };

        let ctx = PassContext {
            document: doc,
            cursor: input.cursor,
            excluded: input.excluded,
            invalid_lines: input.invalid_lines,
            config,
            example_labels: &state.example_labels,
            custom_labels: &state.custom_labels,
            placeholders: &state.placeholders,
        };

        let structural = structural::run(&self.structural, &ctx);
        let inline = inline::run(&self.inline, &structural.regions, &ctx);

        log::debug!(
            "Pass produced {} structural and {} inline instruction(s) over {} region(s)",
            structural.instructions.len(),
            inline.len(),
            structural.regions.len()
        );

        assembly::assemble(structural.instructions, inline, doc.len())
    }
}

//! Rendering instructions: what the host should draw, and where.

use serde::Serialize;

use crate::labels::DuplicateInfo;

/// List family an item or continuation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    Hash,
    Fancy,
    Example,
    CustomLabel,
    Definition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineClass {
    ListItem(ListKind),
    DefinitionTerm,
    Continuation(ListKind),
}

/// Attributes applied to a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineAttributes {
    pub class: LineClass,
    pub level: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkClass {
    /// Marker left as editable source text
    ListMarker(ListKind),
    /// `{::` and `}` around a custom label
    Delimiter,
    /// A label that was already used earlier in the document
    DuplicateLabel,
}

/// Styling for text that stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkAttributes {
    pub class: MarkClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<DuplicateInfo>,
}

impl MarkAttributes {
    pub fn new(class: MarkClass) -> Self {
        Self {
            class,
            duplicate_of: None,
        }
    }
}

/// Replacement drawn in place of a source span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "kebab-case")]
pub enum Widget {
    HashNumber {
        number: usize,
    },
    FancyMarker {
        marker: String,
    },
    ExampleMarker {
        number: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        duplicate_of: Option<DuplicateInfo>,
    },
    ExampleReference {
        number: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        tooltip: Option<String>,
    },
    /// Collapsed custom-label marker, drawn as `(label) `
    CustomLabel {
        label: String,
    },
    /// Label body between visible delimiters
    CustomLabelBody {
        label: String,
    },
    PlaceholderNumber {
        number: usize,
    },
    CustomLabelReference {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tooltip: Option<String>,
    },
    DefinitionBullet,
    Superscript {
        text: String,
    },
    Subscript {
        text: String,
    },
}

impl Widget {
    /// Text the widget displays.
    pub fn display_text(&self) -> String {
        match self {
            Widget::HashNumber { number } => format!("{number}. "),
            Widget::FancyMarker { marker } => format!("{marker} "),
            Widget::ExampleMarker { number, .. } => format!("({number}) "),
            Widget::ExampleReference { number, .. } => format!("({number})"),
            Widget::CustomLabel { label } => format!("({label}) "),
            Widget::CustomLabelBody { label } => label.clone(),
            Widget::PlaceholderNumber { number } => number.to_string(),
            Widget::CustomLabelReference { label, .. } => format!("({label})"),
            Widget::DefinitionBullet => "• ".to_string(),
            Widget::Superscript { text } | Widget::Subscript { text } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Payload {
    Line(LineAttributes),
    Mark(MarkAttributes),
    Replace(Widget),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderingInstruction {
    pub from: usize,
    pub to: usize,
    pub payload: Payload,
}

impl RenderingInstruction {
    pub fn line(at: usize, class: LineClass, level: usize) -> Self {
        Self {
            from: at,
            to: at,
            payload: Payload::Line(LineAttributes { class, level }),
        }
    }

    pub fn mark(from: usize, to: usize, attributes: MarkAttributes) -> Self {
        Self {
            from,
            to,
            payload: Payload::Mark(attributes),
        }
    }

    pub fn replace(from: usize, to: usize, widget: Widget) -> Self {
        Self {
            from,
            to,
            payload: Payload::Replace(widget),
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self.payload, Payload::Line(_))
    }

    pub fn widget(&self) -> Option<&Widget> {
        match &self.payload {
            Payload::Replace(widget) => Some(widget),
            _ => None,
        }
    }

    /// Whether the instruction lies within a document of `len` bytes.
    pub fn in_bounds(&self, len: usize) -> bool {
        self.from <= self.to && self.to <= len
    }
}

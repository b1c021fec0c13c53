//! List marker recognition for every list family the pipeline knows about.
//!
//! All parsers take a single line (without its line break) and return the
//! marker geometry in line-relative bytes and columns.

use std::ops::Range;

const TAB_STOP: usize = 4;

/// Geometry shared by every list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    pub indent_cols: usize,
    pub indent_bytes: usize,
    pub marker_len: usize,
    pub spaces_after: usize,
    /// Column where item content begins
    pub content_col: usize,
}

impl MarkerSpan {
    fn new(line: &str, indent_cols: usize, indent_bytes: usize, marker_len: usize) -> Self {
        let after = &line[indent_bytes + marker_len..];
        let ws: String = after
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();
        let spaces_after = ws.len();
        let content_col = indent_cols + marker_len + whitespace_cols(&ws, indent_cols + marker_len);
        Self {
            indent_cols,
            indent_bytes,
            marker_len,
            spaces_after,
            content_col,
        }
    }

    /// Bytes of the marker token itself, e.g. `(@a)`.
    pub fn marker_range(&self) -> Range<usize> {
        self.indent_bytes..self.indent_bytes + self.marker_len
    }

    /// Marker token plus at most one following whitespace character.
    pub fn marker_with_space(&self) -> Range<usize> {
        let end = self.indent_bytes + self.marker_len + self.spaces_after.min(1);
        self.indent_bytes..end
    }

    pub fn content_start(&self) -> usize {
        self.indent_bytes + self.marker_len + self.spaces_after
    }

    pub fn nesting_level(&self) -> usize {
        self.indent_cols / TAB_STOP
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FancyStyle {
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Period,
    RightParen,
    Parens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FancyMarker {
    pub span: MarkerSpan,
    pub style: FancyStyle,
    pub delimiter: Delimiter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMarker<'a> {
    pub span: MarkerSpan,
    pub label: &'a str,
}

fn tab_advance(col: usize) -> usize {
    col + (TAB_STOP - (col % TAB_STOP))
}

/// Leading indentation of `line` as (columns, bytes).
pub fn leading_indent(line: &str) -> (usize, usize) {
    let mut cols = 0usize;
    let mut bytes = 0usize;
    for b in line.bytes() {
        match b {
            b' ' => {
                cols += 1;
                bytes += 1;
            }
            b'\t' => {
                cols = tab_advance(cols);
                bytes += 1;
            }
            _ => break,
        }
    }
    (cols, bytes)
}

fn whitespace_cols(ws: &str, start_col: usize) -> usize {
    let mut col = start_col;
    for b in ws.bytes() {
        match b {
            b' ' => col += 1,
            b'\t' => col = tab_advance(col),
            _ => break,
        }
    }
    col - start_col
}

/// A marker must be followed by whitespace or end the line.
fn ends_marker(after_marker: &str) -> bool {
    after_marker.starts_with(' ') || after_marker.starts_with('\t') || after_marker.is_empty()
}

/// `#.` auto-numbered item.
pub fn try_parse_hash_marker(line: &str) -> Option<MarkerSpan> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    let rest = &line[indent_bytes..];
    let after = rest.strip_prefix("#.")?;
    if !ends_marker(after) {
        return None;
    }
    Some(MarkerSpan::new(line, indent_cols, indent_bytes, 2))
}

fn classify_fancy(ordinal: &str) -> Option<FancyStyle> {
    let is_lower_roman = ordinal.chars().all(|c| "ivxlcdm".contains(c));
    let is_upper_roman = ordinal.chars().all(|c| "IVXLCDM".contains(c));
    let single = ordinal.chars().count() == 1;

    if single {
        let c = ordinal.chars().next()?;
        return match c {
            'i' => Some(FancyStyle::LowerRoman),
            'I' => Some(FancyStyle::UpperRoman),
            c if c.is_ascii_lowercase() => Some(FancyStyle::LowerAlpha),
            c if c.is_ascii_uppercase() => Some(FancyStyle::UpperAlpha),
            _ => None,
        };
    }

    if is_lower_roman {
        Some(FancyStyle::LowerRoman)
    } else if is_upper_roman {
        Some(FancyStyle::UpperRoman)
    } else {
        None
    }
}

/// Letter or roman numeral item: `a.`, `B)`, `(iv)`, `IV.`.
pub fn try_parse_fancy_marker(line: &str) -> Option<FancyMarker> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    let rest = &line[indent_bytes..];

    let (ordinal, delimiter, marker_len) = if let Some(inner) = rest.strip_prefix('(') {
        let len = inner.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
        if len == 0 || inner.as_bytes().get(len) != Some(&b')') {
            return None;
        }
        (&inner[..len], Delimiter::Parens, len + 2)
    } else {
        let len = rest.bytes().take_while(|b| b.is_ascii_alphabetic()).count();
        if len == 0 {
            return None;
        }
        let delimiter = match rest.as_bytes().get(len) {
            Some(b'.') => Delimiter::Period,
            Some(b')') => Delimiter::RightParen,
            _ => return None,
        };
        (&rest[..len], delimiter, len + 1)
    };

    if !ends_marker(&rest[marker_len..]) {
        return None;
    }

    let style = classify_fancy(ordinal)?;
    Some(FancyMarker {
        span: MarkerSpan::new(line, indent_cols, indent_bytes, marker_len),
        style,
        delimiter,
    })
}

/// `(@)` or `(@label)` example item.
pub fn try_parse_example_marker(line: &str) -> Option<LabeledMarker<'_>> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    let rest = &line[indent_bytes..];
    let inner = rest.strip_prefix("(@")?;
    let label_len = inner
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
        .count();
    if inner.as_bytes().get(label_len) != Some(&b')') {
        return None;
    }
    let marker_len = label_len + 3;
    if !ends_marker(&rest[marker_len..]) {
        return None;
    }
    Some(LabeledMarker {
        span: MarkerSpan::new(line, indent_cols, indent_bytes, marker_len),
        label: &inner[..label_len],
    })
}

/// `{::LABEL}` custom-label item.
pub fn try_parse_custom_marker(line: &str) -> Option<LabeledMarker<'_>> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    let rest = &line[indent_bytes..];
    let inner = rest.strip_prefix("{::")?;
    let close = inner.find(['{', '}'])?;
    if inner.as_bytes()[close] != b'}' {
        return None;
    }
    let marker_len = close + 4;
    if !ends_marker(&rest[marker_len..]) {
        return None;
    }
    Some(LabeledMarker {
        span: MarkerSpan::new(line, indent_cols, indent_bytes, marker_len),
        label: &inner[..close],
    })
}

/// Definition marker (`:` or `~`) indented 0-3 spaces.
pub fn try_parse_definition_marker(line: &str) -> Option<MarkerSpan> {
    let indent = line.bytes().take_while(|&b| b == b' ').count();
    if indent > 3 {
        return None;
    }
    let after_indent = &line[indent..];
    let marker = after_indent.chars().next()?;
    if !matches!(marker, ':' | '~') {
        return None;
    }
    if !ends_marker(&after_indent[1..]) {
        return None;
    }
    Some(MarkerSpan::new(line, indent, indent, 1))
}

/// Plain Markdown bullet (`*`, `+`, `-`) or decimal (`1.`, `1)`) item.
pub fn try_parse_standard_marker(line: &str) -> Option<MarkerSpan> {
    let (indent_cols, indent_bytes) = leading_indent(line);
    let rest = &line[indent_bytes..];

    if let Some(ch) = rest.chars().next()
        && matches!(ch, '*' | '+' | '-')
        && ends_marker(&rest[1..])
    {
        return Some(MarkerSpan::new(line, indent_cols, indent_bytes, 1));
    }

    let digit_count = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count > 0
        && matches!(rest.as_bytes().get(digit_count), Some(b'.') | Some(b')'))
        && ends_marker(&rest[digit_count + 1..])
    {
        return Some(MarkerSpan::new(
            line,
            indent_cols,
            indent_bytes,
            digit_count + 1,
        ));
    }

    None
}

/// Any list item marker, extended or standard.
pub fn is_list_item(line: &str) -> bool {
    try_parse_hash_marker(line).is_some()
        || try_parse_custom_marker(line).is_some()
        || try_parse_example_marker(line).is_some()
        || try_parse_fancy_marker(line).is_some()
        || try_parse_standard_marker(line).is_some()
}

/// Marker of the extended families only (the ones this crate renders).
pub fn extended_marker_span(line: &str) -> Option<MarkerSpan> {
    try_parse_hash_marker(line)
        .or_else(|| try_parse_custom_marker(line).map(|m| m.span))
        .or_else(|| try_parse_fancy_marker(line).map(|m| m.span))
        .or_else(|| try_parse_example_marker(line).map(|m| m.span))
}

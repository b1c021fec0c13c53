//! Read-only view over a document snapshot.
//!
//! Lines are 1-indexed and addressed by absolute byte offsets into the text.
//! A trailing `\r` belongs to the line break, not to the line text.

use serde::Serialize;

/// One line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line<'a> {
    /// 1-indexed line number
    pub number: usize,
    /// Byte offset of the first character
    pub from: usize,
    /// Byte offset just past the last character (excluding the line break)
    pub to: usize,
    pub text: &'a str,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether `offset` falls on this line, end of line included.
    pub fn contains(&self, offset: usize) -> bool {
        self.from <= offset && offset <= self.to
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the 1-indexed line `number`, or `None` when out of range.
    pub fn line(&self, number: usize) -> Option<Line<'_>> {
        if number == 0 || number > self.line_starts.len() {
            return None;
        }
        let from = self.line_starts[number - 1];
        let mut to = match self.line_starts.get(number) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        if to > from && self.text.as_bytes()[to - 1] == b'\r' {
            to -= 1;
        }
        Some(Line {
            number,
            from,
            to,
            text: &self.text[from..to],
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        (1..=self.line_count()).filter_map(|n| self.line(n))
    }

    /// Slices the text by absolute offsets; `None` when out of bounds or
    /// not on a char boundary.
    pub fn slice(&self, from: usize, to: usize) -> Option<&str> {
        if from > to {
            return None;
        }
        self.text.get(from..to)
    }
}

//! Verse lines
//!
//! A `Line` is one trimmed, non-empty line of verse. `LineSequence` keeps the
//! source order of the lines it was built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single non-empty, trimmed line of verse text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Line(String);

impl Line {
    /// Build a line from raw text, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Line {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Line::new(&value).ok_or_else(|| "verse line must not be empty".to_string())
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.0
    }
}

/// Ordered list of verse lines
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct LineSequence {
    lines: Vec<Line>,
}

impl LineSequence {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Split newline-separated text into lines, dropping blank ones
    pub fn from_text(text: &str) -> Self {
        text.split('\n').filter_map(Line::new).collect()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Plain strings, in order
    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.as_str().to_string()).collect()
    }
}

impl FromIterator<Line> for LineSequence {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl From<Vec<Line>> for LineSequence {
    fn from(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

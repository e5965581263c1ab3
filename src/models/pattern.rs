//! Stanza patterns
//!
//! Declarative descriptions of how consecutive lines are grouped:
//! - `GroupPattern`: cyclic list of group sizes, all single-column
//! - `MixedPattern`: cyclic list of `{count, columns}` blocks
//! - `StanzaSpec`: either of the two, as resolved from a form or directive

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Column arity of a row group
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColumnMode {
    /// One line per row
    #[default]
    Single = 1,
    /// Two lines per row (couplet), with a spacer cell between them
    Double = 2,
}

impl ColumnMode {
    /// Pattern tokens accepted for each mode, in declaration order
    pub const TOKENS: [&'static str; 2] = ["1col", "2col"];

    /// Parse a `1col` / `2col` token
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "1col" => Some(ColumnMode::Single),
            "2col" => Some(ColumnMode::Double),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ColumnMode::Single => "1col",
            ColumnMode::Double => "2col",
        }
    }

    /// Number of lines carried by one row
    pub fn width(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Cyclic list of group sizes, e.g. `4+2`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct GroupPattern {
    sizes: Vec<usize>,
}

impl GroupPattern {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self { sizes }
    }

    /// Raw sizes as given, zeros included
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Whether at least one entry can consume lines
    pub fn has_usable_sizes(&self) -> bool {
        self.sizes.iter().any(|&n| n > 0)
    }
}

impl From<Vec<usize>> for GroupPattern {
    fn from(sizes: Vec<usize>) -> Self {
        Self::new(sizes)
    }
}

impl fmt::Display for GroupPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.sizes.iter().map(|n| n.to_string()).collect();
        f.write_str(&parts.join("+"))
    }
}

/// One block of a mixed pattern
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixedEntry {
    pub count: usize,
    #[serde(default)]
    pub columns: ColumnMode,
}

impl MixedEntry {
    pub fn new(count: usize, columns: ColumnMode) -> Self {
        Self { count, columns }
    }
}

/// Cyclic list of mixed blocks, e.g. `4:2col,2:1col`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct MixedPattern {
    entries: Vec<MixedEntry>,
}

impl MixedPattern {
    pub fn new(entries: Vec<MixedEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MixedEntry] {
        &self.entries
    }

    /// Lines consumed by one full pass of the pattern, saturating at `usize::MAX`
    pub fn pattern_size(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.count)
            .fold(0, usize::saturating_add)
    }
}

impl From<Vec<MixedEntry>> for MixedPattern {
    fn from(entries: Vec<MixedEntry>) -> Self {
        Self::new(entries)
    }
}

impl fmt::Display for MixedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{}:{}", e.count, e.columns))
            .collect();
        f.write_str(&parts.join(","))
    }
}

/// A resolved stanza layout request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "pattern", rename_all = "lowercase")]
pub enum StanzaSpec {
    Fixed(GroupPattern),
    Mixed(MixedPattern),
}

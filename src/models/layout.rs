//! Layout output types
//!
//! The stanza layout engine produces a `LayoutResult`: an ordered list of
//! `RowGroup`s, each one stanza (or one block of a mixed stanza). Nothing here
//! knows about markup; renderers decide how groups and separators look.

use serde::{Deserialize, Serialize};

use super::line::Line;
use super::pattern::ColumnMode;

/// Second slot of a couplet row
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Cell {
    Text(Line),
    /// Placeholder for the missing half of an odd couplet
    Blank,
}

impl Cell {
    pub fn line(&self) -> Option<&Line> {
        match self {
            Cell::Text(line) => Some(line),
            Cell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// One table row of a group
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Row {
    Single { line: Line },
    Pair { first: Line, second: Cell },
}

impl Row {
    /// Lines in this row, blank placeholders skipped
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        let (first, second) = match self {
            Row::Single { line } => (line, None),
            Row::Pair { first, second } => (first, second.line()),
        };
        std::iter::once(first).chain(second)
    }

    /// Number of cells the row occupies (placeholders included)
    pub fn cell_count(&self) -> usize {
        match self {
            Row::Single { .. } => 1,
            Row::Pair { .. } => 2,
        }
    }
}

/// Where a group sits in the layout
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupPosition {
    First,
    Interior,
    Last,
    /// The layout has a single group
    Only,
}

impl GroupPosition {
    pub fn for_index(index: usize, total: usize) -> Self {
        match (index, total) {
            (0, 1) => GroupPosition::Only,
            (0, _) => GroupPosition::First,
            (i, t) if i + 1 == t => GroupPosition::Last,
            _ => GroupPosition::Interior,
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, GroupPosition::Last | GroupPosition::Only)
    }
}

/// A stanza: consecutive rows sharing a column arity
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RowGroup {
    pub index: usize,
    pub columns: ColumnMode,
    pub position: GroupPosition,
    /// Suppresses the trailing separator
    pub is_last: bool,
    pub rows: Vec<Row>,
}

impl RowGroup {
    /// Lines of the group in reading order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.rows.iter().flat_map(|row| row.lines())
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn has_separator_after(&self) -> bool {
        !self.is_last
    }
}

/// Engine output: ordered row groups
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutResult {
    pub groups: Vec<RowGroup>,
}

impl LayoutResult {
    /// Assemble groups from `(columns, rows)` blocks, assigning index and position
    pub fn from_blocks(blocks: Vec<(ColumnMode, Vec<Row>)>) -> Self {
        let total = blocks.len();
        let groups = blocks
            .into_iter()
            .enumerate()
            .map(|(index, (columns, rows))| {
                let position = GroupPosition::for_index(index, total);
                RowGroup {
                    index,
                    columns,
                    position,
                    is_last: position.is_last(),
                    rows,
                }
            })
            .collect();
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of inter-group separators (one between each pair of groups)
    pub fn separator_count(&self) -> usize {
        self.groups.iter().filter(|g| g.has_separator_after()).count()
    }

    /// All lines in reading order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.groups.iter().flat_map(|g| g.lines())
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// The shared column arity, if every group has the same one
    pub fn uniform_columns(&self) -> Option<ColumnMode> {
        let first = self.groups.first()?.columns;
        self.groups
            .iter()
            .all(|g| g.columns == first)
            .then_some(first)
    }
}

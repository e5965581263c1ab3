//! Copy-text projections
//!
//! Plain-text views of a layout for the clipboard. Placeholder cells never
//! contribute text. Writing to the clipboard is the host's job.

use crate::models::{LayoutResult, Row, RowGroup};

/// All lines of the layout, newline-joined
pub fn block_text(layout: &LayoutResult) -> String {
    join(layout.lines().map(|l| l.as_str()))
}

/// Lines of one group, newline-joined
pub fn group_text(group: &RowGroup) -> String {
    join(group.lines().map(|l| l.as_str()))
}

/// Lines of one row (a single line or a couplet), newline-joined
pub fn row_text(row: &Row) -> String {
    join(row.lines().map(|l| l.as_str()))
}

/// Lines of the group at `index`, if it exists
pub fn group_text_at(layout: &LayoutResult, index: usize) -> Option<String> {
    layout.groups.get(index).map(group_text)
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join("\n")
}

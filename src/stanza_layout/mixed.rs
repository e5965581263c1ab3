//! Mixed-pattern grouping
//!
//! A mixed pattern describes one stanza as a run of blocks with their own
//! column arity, e.g. a musaddas laid out as four lines in couplets followed
//! by two lines one per row. The pattern repeats for long poems.

use crate::diagnostics::division::{check_empty_mixed_pattern, check_mixed_division};
use crate::diagnostics::Diagnostics;
use crate::models::{ColumnMode, LayoutResult, LineSequence, MixedPattern};

use super::grouping::cycle_spans;
use super::rows::build_rows;

/// Group lines by a cyclic list of `{count, columns}` blocks
///
/// A line count that is not a multiple of the pattern size records one
/// `uneven_division` warning and the final stanza comes out short. A pattern
/// without any positive count lays everything out as one single-column group.
pub fn group_by_mixed_pattern(
    lines: &LineSequence,
    pattern: &MixedPattern,
    diagnostics: &mut Diagnostics,
) -> LayoutResult {
    diagnostics.extend(check_empty_mixed_pattern(pattern));
    diagnostics.extend(check_mixed_division(lines.len(), pattern));

    if lines.is_empty() {
        return LayoutResult::default();
    }

    let items = lines.as_slice();
    let entries: Vec<(usize, ColumnMode)> = pattern
        .entries()
        .iter()
        .map(|e| (e.count, e.columns))
        .collect();
    let mut spans = cycle_spans(items.len(), &entries);
    if spans.is_empty() {
        spans.push((ColumnMode::Single, 0..items.len()));
    }

    log::debug!(
        "group_by_mixed_pattern: {} lines, pattern {} -> {} groups",
        items.len(),
        pattern,
        spans.len()
    );

    LayoutResult::from_blocks(
        spans
            .into_iter()
            .map(|(columns, range)| (columns, build_rows(&items[range], columns)))
            .collect(),
    )
}

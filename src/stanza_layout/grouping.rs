//! Fixed-pattern grouping
//!
//! Replays a list of group sizes over the lines until every line is
//! consumed. All groups are single-column.

use std::ops::Range;

use crate::diagnostics::division::check_empty_group_pattern;
use crate::diagnostics::Diagnostics;
use crate::models::{ColumnMode, GroupPattern, LayoutResult, LineSequence};

use super::rows::build_rows;

/// Split `len` items into consecutive spans by replaying `entries` cyclically
///
/// Each entry is `(count, tag)`. Zero counts are skipped. Replay stops as
/// soon as the items run out, even in the middle of a pass, so the final span
/// may be short and no span is ever empty. Returns no spans when no entry has
/// a positive count.
pub(crate) fn cycle_spans<T: Copy>(len: usize, entries: &[(usize, T)]) -> Vec<(T, Range<usize>)> {
    let mut spans = Vec::new();
    if !entries.iter().any(|&(count, _)| count > 0) {
        return spans;
    }

    let mut cursor = 0;
    while cursor < len {
        for &(count, tag) in entries {
            if cursor >= len {
                break;
            }
            if count == 0 {
                continue;
            }
            let end = cursor.saturating_add(count).min(len);
            spans.push((tag, cursor..end));
            cursor = end;
        }
    }

    spans
}

/// Group lines by a cyclic list of group sizes
///
/// An empty sequence gives an empty result. A pattern without any positive
/// size lays everything out as one group and records an `empty_pattern`
/// warning.
pub fn group_by_pattern(
    lines: &LineSequence,
    pattern: &GroupPattern,
    diagnostics: &mut Diagnostics,
) -> LayoutResult {
    diagnostics.extend(check_empty_group_pattern(pattern));

    if lines.is_empty() {
        return LayoutResult::default();
    }

    let items = lines.as_slice();
    let entries: Vec<(usize, ())> = pattern.sizes().iter().map(|&n| (n, ())).collect();
    let mut spans = cycle_spans(items.len(), &entries);
    if spans.is_empty() {
        spans.push(((), 0..items.len()));
    }

    log::debug!(
        "group_by_pattern: {} lines, pattern {} -> {} groups",
        items.len(),
        pattern,
        spans.len()
    );

    LayoutResult::from_blocks(
        spans
            .into_iter()
            .map(|((), range)| {
                (
                    ColumnMode::Single,
                    build_rows(&items[range], ColumnMode::Single),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    fn lines(n: usize) -> LineSequence {
        let text: Vec<String> = (1..=n).map(|i| format!("Line {}", i)).collect();
        LineSequence::from_text(&text.join("\n"))
    }

    fn sizes(result: &LayoutResult) -> Vec<usize> {
        result.groups.iter().map(|g| g.line_count()).collect()
    }

    #[test]
    fn test_cycle_spans_stops_mid_pass() {
        let spans = cycle_spans(5, &[(4, 'a'), (2, 'b')]);
        assert_eq!(spans, vec![('a', 0..4), ('b', 4..5)]);
    }

    #[test]
    fn test_cycle_spans_skips_zero_counts() {
        let spans = cycle_spans(4, &[(0, 'z'), (2, 'b')]);
        assert_eq!(spans, vec![('b', 0..2), ('b', 2..4)]);
    }

    #[test]
    fn test_cycle_spans_huge_count_takes_the_rest() {
        let spans = cycle_spans(3, &[(2, ()), (usize::MAX, ())]);
        assert_eq!(spans, vec![((), 0..2), ((), 2..3)]);
    }

    #[test]
    fn test_cycle_spans_all_zero_is_empty() {
        assert!(cycle_spans(4, &[(0, ()), (0, ())]).is_empty());
    }

    #[test]
    fn test_groups_of_five() {
        let mut diags = Diagnostics::new();
        let result = group_by_pattern(&lines(10), &GroupPattern::new(vec![5]), &mut diags);
        assert_eq!(sizes(&result), vec![5, 5]);
        assert_eq!(result.separator_count(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_four_plus_two() {
        let mut diags = Diagnostics::new();
        let result = group_by_pattern(&lines(12), &GroupPattern::new(vec![4, 2]), &mut diags);
        assert_eq!(sizes(&result), vec![4, 2, 4, 2]);
        assert_eq!(result.separator_count(), 3);
    }

    #[test]
    fn test_partial_final_group() {
        let mut diags = Diagnostics::new();
        let result = group_by_pattern(&lines(7), &GroupPattern::new(vec![3, 2]), &mut diags);
        assert_eq!(sizes(&result), vec![3, 2, 2]);
        assert!(result.groups[2].is_last);
    }

    #[test]
    fn test_empty_input() {
        let mut diags = Diagnostics::new();
        let result = group_by_pattern(&LineSequence::new(), &GroupPattern::new(vec![4]), &mut diags);
        assert!(result.is_empty());
    }

    #[test]
    fn test_huge_size_does_not_overflow() {
        let mut diags = Diagnostics::new();
        let result = group_by_pattern(&lines(3), &GroupPattern::new(vec![2, usize::MAX]), &mut diags);
        assert_eq!(sizes(&result), vec![2, 1]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_all_zero_pattern_is_single_group() {
        let mut diags = Diagnostics::new();
        let result = group_by_pattern(&lines(6), &GroupPattern::new(vec![0, 0]), &mut diags);
        assert_eq!(sizes(&result), vec![6]);
        assert_eq!(diags.count_of(DiagnosticKind::EmptyPattern), 1);
    }
}

// Stanza layout properties over the public Rust API

use justify_wasm::diagnostics::{DiagnosticKind, Diagnostics};
use justify_wasm::forms::form;
use justify_wasm::models::{ColumnMode, GroupPattern, LineSequence, MixedEntry, MixedPattern, Row};
use justify_wasm::stanza_layout::{
    block_text, group_by_mixed_pattern, group_by_pattern, group_text_at, layout,
};

fn lines(n: usize) -> LineSequence {
    let text: Vec<String> = (1..=n).map(|i| format!("Line {}", i)).collect();
    LineSequence::from_text(&text.join("\n"))
}

fn musaddas_mixed() -> MixedPattern {
    MixedPattern::new(vec![
        MixedEntry::new(4, ColumnMode::Double),
        MixedEntry::new(2, ColumnMode::Single),
    ])
}

fn group_sizes(result: &justify_wasm::models::LayoutResult) -> Vec<usize> {
    result.groups.iter().map(|g| g.line_count()).collect()
}

#[test]
fn test_grouping_preserves_every_line_in_order() {
    for n in 0..20 {
        for sizes in [vec![2], vec![4, 2], vec![5], vec![3, 0, 1], vec![6]] {
            let input = lines(n);
            let result = group_by_pattern(&input, &GroupPattern::new(sizes.clone()), &mut Diagnostics::new());
            let output: Vec<String> = result.lines().map(|l| l.to_string()).collect();
            assert_eq!(output, input.to_strings(), "n={} sizes={:?}", n, sizes);
        }
    }
}

#[test]
fn test_empty_input_is_empty_layout() {
    let result = group_by_pattern(&LineSequence::new(), &GroupPattern::new(vec![4]), &mut Diagnostics::new());
    assert!(result.is_empty());
    assert_eq!(result.separator_count(), 0);

    let mixed = group_by_mixed_pattern(&LineSequence::new(), &musaddas_mixed(), &mut Diagnostics::new());
    assert!(mixed.is_empty());
}

#[test]
fn test_mukhammas_ten_lines() {
    let result = group_by_pattern(&lines(10), &GroupPattern::new(vec![5]), &mut Diagnostics::new());
    assert_eq!(group_sizes(&result), vec![5, 5]);
    assert_eq!(result.separator_count(), 1);
}

#[test]
fn test_musaddas_twelve_lines() {
    let result = group_by_pattern(&lines(12), &GroupPattern::new(vec![4, 2]), &mut Diagnostics::new());
    assert_eq!(group_sizes(&result), vec![4, 2, 4, 2]);
    assert_eq!(result.separator_count(), 3);
    assert!(result.groups.last().unwrap().is_last);
    assert!(result.groups[..3].iter().all(|g| !g.is_last));
}

#[test]
fn test_short_final_group() {
    let result = group_by_pattern(&lines(7), &GroupPattern::new(vec![4]), &mut Diagnostics::new());
    assert_eq!(group_sizes(&result), vec![4, 3]);
}

#[test]
fn test_mixed_six_lines() {
    let mut diags = Diagnostics::new();
    let result = group_by_mixed_pattern(&lines(6), &musaddas_mixed(), &mut diags);

    assert_eq!(result.groups.len(), 2);
    assert_eq!(result.groups[0].columns, ColumnMode::Double);
    assert!(result.groups[0].rows.iter().all(|r| matches!(r, Row::Pair { .. })));
    assert_eq!(result.groups[0].rows.len(), 2);
    assert_eq!(result.groups[1].columns, ColumnMode::Single);
    assert!(result.groups[1].rows.iter().all(|r| matches!(r, Row::Single { .. })));
    assert_eq!(result.groups[1].rows.len(), 2);
    assert_eq!(result.separator_count(), 1);
    assert!(diags.is_empty());
}

#[test]
fn test_mixed_twelve_lines() {
    let result = group_by_mixed_pattern(&lines(12), &musaddas_mixed(), &mut Diagnostics::new());
    assert_eq!(result.groups.len(), 4);
    assert_eq!(result.separator_count(), 3);
    assert_eq!(result.line_count(), 12);
    let columns: Vec<ColumnMode> = result.groups.iter().map(|g| g.columns).collect();
    assert_eq!(
        columns,
        vec![ColumnMode::Double, ColumnMode::Single, ColumnMode::Double, ColumnMode::Single]
    );
}

#[test]
fn test_non_dividing_mixed_pattern_warns_once() {
    for n in [1, 5, 7, 11, 13] {
        let mut diags = Diagnostics::new();
        let result = group_by_mixed_pattern(&lines(n), &musaddas_mixed(), &mut diags);
        assert_eq!(diags.count_of(DiagnosticKind::UnevenDivision), 1, "n={}", n);
        assert_eq!(diags.len(), 1);
        assert_eq!(result.line_count(), n);
    }
}

#[test]
fn test_pattern_without_positive_entries() {
    let mut diags = Diagnostics::new();
    let result = group_by_pattern(&lines(5), &GroupPattern::new(vec![0, 0]), &mut diags);
    assert_eq!(group_sizes(&result), vec![5]);
    assert_eq!(diags.count_of(DiagnosticKind::EmptyPattern), 1);
}

#[test]
fn test_layout_is_idempotent() {
    let spec = &form("musaddas-mixed").unwrap().spec;
    let input = lines(9);
    let first = layout(&input, spec);
    let second = layout(&input, spec);
    assert_eq!(first, second);
}

#[test]
fn test_copy_projections() {
    let result = group_by_pattern(&lines(6), &GroupPattern::new(vec![4, 2]), &mut Diagnostics::new());
    assert_eq!(
        block_text(&result),
        "Line 1\nLine 2\nLine 3\nLine 4\nLine 5\nLine 6"
    );
    assert_eq!(group_text_at(&result, 1).as_deref(), Some("Line 5\nLine 6"));
    assert_eq!(group_text_at(&result, 2), None);
}

#[test]
fn test_sher2_odd_line_leaves_blank_cell_out_of_copy_text() {
    let spec = &form("sher2").unwrap().spec;
    let result = layout(&lines(3), spec).layout;
    assert_eq!(result.groups.len(), 2);
    match &result.groups[1].rows[0] {
        Row::Pair { second, .. } => assert!(second.is_blank()),
        other => panic!("expected pair row, got {:?}", other),
    }
    assert_eq!(block_text(&result), "Line 1\nLine 2\nLine 3");
}

#[test]
fn test_layout_serializes_columns_as_numbers() {
    let result = group_by_mixed_pattern(&lines(6), &musaddas_mixed(), &mut Diagnostics::new());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["groups"][0]["columns"], 2);
    assert_eq!(json["groups"][1]["columns"], 1);
    assert_eq!(json["groups"][1]["isLast"], true);
}

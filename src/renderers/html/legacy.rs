//! Plain-text table helpers
//!
//! `tabulate` and `tabulate2` take newline-separated verse text directly,
//! without a source tree. Empty text yields the bare placeholder string.

use crate::diagnostics::Diagnostics;
use crate::models::{ColumnMode, GroupPattern, LayoutResult, LineSequence, MixedEntry, MixedPattern};
use crate::stanza_layout::{group_by_mixed_pattern, group_by_pattern};

use super::{HtmlRenderer, RenderError, TableSplit};

/// One line per row, a spacer after every `gap_every` lines
pub fn tabulate(renderer: &HtmlRenderer, text: &str, gap_every: usize) -> Result<String, RenderError> {
    let lines = LineSequence::from_text(text);
    if lines.is_empty() {
        return Ok(renderer.config().placeholder.clone());
    }

    let mut diagnostics = Diagnostics::new();
    let layout = group_by_pattern(&lines, &GroupPattern::new(vec![gap_every]), &mut diagnostics);
    diagnostics.emit_to_log();
    renderer.render(&layout, "sher", renderer.config().copy_mode, TableSplit::Joined)
}

/// Couplets side by side, a spacer after every couplet
pub fn tabulate2(renderer: &HtmlRenderer, text: &str) -> Result<String, RenderError> {
    let lines = LineSequence::from_text(text);
    if lines.is_empty() {
        return Ok(renderer.config().placeholder.clone());
    }

    let mut diagnostics = Diagnostics::new();
    let layout = couplet_layout(&lines, &mut diagnostics);
    diagnostics.emit_to_log();
    renderer.render(&layout, "sher2", renderer.config().copy_mode, TableSplit::Joined)
}

fn couplet_layout(lines: &LineSequence, diagnostics: &mut Diagnostics) -> LayoutResult {
    let pattern = MixedPattern::new(vec![MixedEntry::new(2, ColumnMode::Double)]);
    group_by_mixed_pattern(lines, &pattern, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_tabulate_empty_text_is_placeholder() {
        let renderer = HtmlRenderer::default();
        assert_eq!(
            tabulate(&renderer, "  \n ", 2).unwrap(),
            renderer.config().placeholder
        );
        assert_eq!(tabulate2(&renderer, "").unwrap(), renderer.config().placeholder);
    }

    #[test]
    fn test_tabulate_gap_every() {
        let html = tabulate(&HtmlRenderer::default(), "1\n2\n3\n4\n5\n6", 3).unwrap();
        assert_eq!(html.matches(r#"<tr class="spacer">"#).count(), 1);
    }

    #[test]
    fn test_tabulate2_pairs_lines() {
        let html = tabulate2(&HtmlRenderer::default(), "1\n2\n3").unwrap();
        assert!(html.contains(r#"class="sj-table sher2""#));
        assert_eq!(html.matches(r#"class="spacer-cell""#).count(), 2);
        assert_eq!(html.matches(r#"class="sj-blank""#).count(), 1);
    }

    #[test]
    fn test_couplet_layout_reports_odd_line_count() {
        let mut diagnostics = Diagnostics::new();
        let layout = couplet_layout(&LineSequence::from_text("1\n2\n3"), &mut diagnostics);
        assert_eq!(layout.groups.len(), 2);
        assert_eq!(diagnostics.count_of(DiagnosticKind::UnevenDivision), 1);

        let mut diagnostics = Diagnostics::new();
        couplet_layout(&LineSequence::from_text("1\n2\n3\n4"), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_tabulate2_keeps_couplets_in_one_table() {
        let html = tabulate2(&HtmlRenderer::default(), "1\n2\n3\n4\n5\n6").unwrap();
        assert_eq!(html.matches("<table").count(), 1);
        assert_eq!(html.matches(r#"<tr class="spacer">"#).count(), 2);
    }
}

//! Stanza Layout Engine
//!
//! Turns a flat `LineSequence` into row groups according to a stanza
//! pattern. The engine is pure: it never sees markup, and the same input
//! always yields the same `LayoutResult`. Recoverable problems are reported
//! through `Diagnostics`.

pub mod rows;
pub mod grouping;
pub mod mixed;
pub mod copy_text;

pub use grouping::group_by_pattern;
pub use mixed::group_by_mixed_pattern;
pub use copy_text::{block_text, group_text, group_text_at, row_text};

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::models::{LayoutResult, LineSequence, StanzaSpec};

/// Layout together with the warnings raised while producing it
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StanzaLayout {
    pub layout: LayoutResult,
    pub diagnostics: Diagnostics,
}

/// Lay out lines according to a resolved stanza spec
pub fn layout(lines: &LineSequence, spec: &StanzaSpec) -> StanzaLayout {
    let mut diagnostics = Diagnostics::new();
    let layout = layout_with(lines, spec, &mut diagnostics);
    StanzaLayout { layout, diagnostics }
}

/// Same as [`layout`], reporting into an existing collector
pub fn layout_with(
    lines: &LineSequence,
    spec: &StanzaSpec,
    diagnostics: &mut Diagnostics,
) -> LayoutResult {
    match spec {
        StanzaSpec::Fixed(pattern) => group_by_pattern(lines, pattern, diagnostics),
        StanzaSpec::Mixed(pattern) => group_by_mixed_pattern(lines, pattern, diagnostics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupPattern, MixedEntry, MixedPattern, ColumnMode};

    #[test]
    fn test_layout_dispatches_on_spec() {
        let lines = LineSequence::from_text("1\n2\n3\n4\n5\n6");

        let fixed = layout(&lines, &StanzaSpec::Fixed(GroupPattern::new(vec![3])));
        assert_eq!(fixed.layout.groups.len(), 2);

        let mixed = layout(
            &lines,
            &StanzaSpec::Mixed(MixedPattern::new(vec![MixedEntry::new(6, ColumnMode::Double)])),
        );
        assert_eq!(mixed.layout.groups.len(), 1);
        assert_eq!(mixed.layout.groups[0].rows.len(), 3);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let lines = LineSequence::from_text("a\nb\nc\nd\ne\nf\ng");
        let spec = StanzaSpec::Mixed(MixedPattern::new(vec![
            MixedEntry::new(4, ColumnMode::Double),
            MixedEntry::new(2, ColumnMode::Single),
        ]));
        assert_eq!(layout(&lines, &spec), layout(&lines, &spec));
    }
}

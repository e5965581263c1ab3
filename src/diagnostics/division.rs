//! Pattern-size checks run before layout
//!
//! A mixed pattern describes one full stanza. When the line count is not a
//! multiple of the stanza size the final stanza comes out short; layout still
//! proceeds, but the author is told.

use crate::models::{GroupPattern, MixedPattern};

use super::{Diagnostic, DiagnosticKind};

/// Check that `line_count` divides evenly into the mixed pattern
///
/// Returns at most one warning. Patterns of size zero are reported by
/// [`check_empty_mixed_pattern`] instead.
pub fn check_mixed_division(line_count: usize, pattern: &MixedPattern) -> Option<Diagnostic> {
    let size = pattern.pattern_size();
    if size == 0 || line_count % size == 0 {
        return None;
    }

    Some(Diagnostic::warning(
        DiagnosticKind::UnevenDivision,
        format!(
            "{} lines do not divide evenly into pattern \"{}\" ({} lines per stanza); last stanza has {} lines",
            line_count,
            pattern,
            size,
            line_count % size
        ),
    ))
}

/// Report a fixed pattern that cannot consume any line
pub fn check_empty_group_pattern(pattern: &GroupPattern) -> Option<Diagnostic> {
    if pattern.has_usable_sizes() {
        return None;
    }

    Some(Diagnostic::warning(
        DiagnosticKind::EmptyPattern,
        format!(
            "pattern \"{}\" has no positive group size; lines are laid out as a single group",
            pattern
        ),
    ))
}

/// Report a mixed pattern that cannot consume any line
pub fn check_empty_mixed_pattern(pattern: &MixedPattern) -> Option<Diagnostic> {
    if pattern.pattern_size() > 0 {
        return None;
    }

    Some(Diagnostic::warning(
        DiagnosticKind::EmptyPattern,
        format!(
            "mixed pattern \"{}\" has no positive count; lines are laid out as a single group",
            pattern
        ),
    ))
}

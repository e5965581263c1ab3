//! Pattern attribute parsing
//!
//! Grammar of the two declarative pattern attributes:
//! - fixed: `4+2`, positive integers joined by `+`
//! - mixed: `4:2col,2:1col`, comma-separated `count:mode` pairs
//!
//! Mixed patterns may also arrive as an array of `{count, columns}`
//! objects; [`mixed_pattern_from_entries`] validates those the same way.
//!
//! Bad tokens never fail the parse. They are dropped (or, for an unknown
//! column mode, replaced with `1col`) and reported in `Diagnostics`.

use serde::Deserialize;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::models::{ColumnMode, GroupPattern, MixedEntry, MixedPattern};

/// Parse a positive integer token
fn parse_count(token: &str) -> Option<usize> {
    token.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

/// Parse a fixed pattern such as `4+2`
pub fn parse_group_pattern(text: &str, diagnostics: &mut Diagnostics) -> GroupPattern {
    let text = text.trim();
    if text.is_empty() {
        return GroupPattern::default();
    }

    let mut sizes = Vec::new();
    for token in text.split('+') {
        match parse_count(token) {
            Some(n) => sizes.push(n),
            None => diagnostics.add(
                Diagnostic::warning(
                    DiagnosticKind::MalformedPatternEntry,
                    format!(
                        "ignoring group size \"{}\" in pattern \"{}\"; sizes must be positive integers",
                        token.trim(),
                        text
                    ),
                )
                .with_token(token.trim()),
            ),
        }
    }

    GroupPattern::new(sizes)
}

/// Parse a mixed pattern such as `4:2col,2:1col`
pub fn parse_mixed_pattern(text: &str, diagnostics: &mut Diagnostics) -> MixedPattern {
    let text = text.trim();
    if text.is_empty() {
        return MixedPattern::default();
    }

    let mut entries = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        let (count_token, mode_token) = match part.split_once(':') {
            Some((count, mode)) => (count.trim(), mode.trim()),
            None => (part, ""),
        };

        let Some(count) = parse_count(count_token) else {
            diagnostics.add(
                Diagnostic::warning(
                    DiagnosticKind::MalformedPatternEntry,
                    format!(
                        "ignoring block \"{}\" in mixed pattern \"{}\"; count must be a positive integer",
                        part, text
                    ),
                )
                .with_token(count_token),
            );
            continue;
        };

        let columns = ColumnMode::from_token(mode_token).unwrap_or_else(|| {
            diagnostics.add(unknown_column_mode(mode_token, part));
            ColumnMode::Single
        });

        entries.push(MixedEntry::new(count, columns));
    }

    MixedPattern::new(entries)
}

fn unknown_column_mode(token: &str, block: &str) -> Diagnostic {
    Diagnostic::warning(
        DiagnosticKind::UnknownColumnMode,
        format!(
            "invalid column mode \"{}\" in \"{}\"; expected one of {}; using {}",
            token,
            block,
            ColumnMode::TOKENS.join(", "),
            ColumnMode::Single
        ),
    )
    .with_token(token)
}

/// One `{count, columns}` block as supplied by a host, not yet validated
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RawMixedEntry {
    #[serde(default)]
    pub count: Value,
    #[serde(default)]
    pub columns: Value,
}

/// Non-negative whole number, whether it arrived as an integer or a float
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

fn token_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// Validate host-supplied mixed blocks
///
/// `columns` may be `1`, `2`, `"1col"` or `"2col"`; when omitted it is one
/// column. Any other mode becomes one column with an `unknown_column_mode`
/// warning, and a block without a positive integer count is dropped with a
/// `malformed_pattern_entry` warning.
pub fn mixed_pattern_from_entries(raw: &[RawMixedEntry], diagnostics: &mut Diagnostics) -> MixedPattern {
    let mut entries = Vec::with_capacity(raw.len());
    for entry in raw {
        let block = format!("{{count: {}, columns: {}}}", entry.count, entry.columns);

        let count = whole_number(&entry.count)
            .filter(|&n| n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX));
        let Some(count) = count else {
            diagnostics.add(
                Diagnostic::warning(
                    DiagnosticKind::MalformedPatternEntry,
                    format!("ignoring block {}; count must be a positive integer", block),
                )
                .with_token(token_of(&entry.count)),
            );
            continue;
        };

        let columns = match &entry.columns {
            Value::Null => Some(ColumnMode::Single),
            Value::String(token) => ColumnMode::from_token(token),
            number => match whole_number(number) {
                Some(1) => Some(ColumnMode::Single),
                Some(2) => Some(ColumnMode::Double),
                _ => None,
            },
        };
        let columns = columns.unwrap_or_else(|| {
            diagnostics.add(unknown_column_mode(&token_of(&entry.columns), &block));
            ColumnMode::Single
        });

        entries.push(MixedEntry::new(count, columns));
    }

    MixedPattern::new(entries)
}

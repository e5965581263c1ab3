//! Diagnostics module for pattern and layout warnings
//!
//! Nothing in extraction or layout is fatal. Problems such as a malformed
//! pattern token or a line count that does not divide evenly into a mixed
//! pattern are recorded here and returned next to the result, so callers can
//! surface them without the engine throwing.

pub mod division;

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
}

/// What went wrong
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Non-numeric, zero or missing count in a pattern
    MalformedPatternEntry,
    /// Column mode token other than `1col` / `2col`
    UnknownColumnMode,
    /// Line count is not a multiple of the mixed pattern size
    UnevenDivision,
    /// Pattern has no entry able to consume lines
    EmptyPattern,
}

/// A single reported problem
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub kind: DiagnosticKind,
    /// The offending input token, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a warning
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            kind,
            token: None,
            message: message.into(),
        }
    }

    /// Attach the offending token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Collection of diagnostics for one layout request
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Extend with multiple diagnostics
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.entries.extend(diagnostics);
    }

    /// Shorthand for adding a warning
    pub fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.add(Diagnostic::warning(kind, message));
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Warning)
    }

    /// Count diagnostics of one kind
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mirror every entry to the `log` facade
    pub fn emit_to_log(&self) {
        for d in &self.entries {
            match d.severity {
                DiagnosticSeverity::Warning => log::warn!("{}", d.message),
            }
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let d = Diagnostic::warning(DiagnosticKind::UnknownColumnMode, "bad mode").with_token("3col");

        assert_eq!(d.severity, DiagnosticSeverity::Warning);
        assert_eq!(d.kind, DiagnosticKind::UnknownColumnMode);
        assert_eq!(d.token.as_deref(), Some("3col"));
    }

    #[test]
    fn test_diagnostics_counts() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_warnings());
        assert!(diags.is_empty());

        diags.warn(DiagnosticKind::UnevenDivision, "uneven");
        diags.warn(DiagnosticKind::MalformedPatternEntry, "bad");
        diags.warn(DiagnosticKind::MalformedPatternEntry, "bad again");

        assert!(diags.has_warnings());
        assert_eq!(diags.len(), 3);
        assert_eq!(diags.count_of(DiagnosticKind::MalformedPatternEntry), 2);
        assert_eq!(diags.count_of(DiagnosticKind::EmptyPattern), 0);
    }

    #[test]
    fn test_serialized_kind_is_snake_case() {
        let d = Diagnostic::warning(DiagnosticKind::UnevenDivision, "x");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "uneven_division");
        assert_eq!(json["severity"], "warning");
        assert!(json.get("token").is_none());
        assert!(serde_json::from_value::<DiagnosticSeverity>(serde_json::json!("info")).is_err());
    }
}

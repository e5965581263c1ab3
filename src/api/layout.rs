//! Extraction and layout operations for the WASM API
//!
//! Pure functions over plain data: a serialized source node or an array of
//! lines in, lines or a `{layout, diagnostics}` object out. Warnings are
//! returned to the caller and also mirrored to the console.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, lines_from_js, serialize};
use crate::diagnostics::Diagnostics;
use crate::forms::form;
use crate::models::{GroupPattern, MixedPattern, StanzaSpec};
use crate::parse::{mixed_pattern_from_entries, parse_group_pattern, parse_mixed_pattern, RawMixedEntry};
use crate::stanza_layout::{group_by_mixed_pattern, group_by_pattern, layout, StanzaLayout};
use crate::text::{extract_node_lines, SourceNode};
use crate::wasm_log;

// ============================================================================
// Line Extraction
// ============================================================================

/// Extract verse lines from a serialized source node
///
/// # Parameters
/// * `node` - `{kind: "element", tag, attributes, children}` snapshot
///
/// # Returns
/// Array of trimmed, non-empty lines in source order
#[wasm_bindgen(js_name = extractLines)]
pub fn extract_lines_js(node: JsValue) -> Result<JsValue, JsValue> {
    let node: SourceNode = deserialize(node, "Invalid source node")?;
    let lines = extract_node_lines(&node);
    wasm_log!("extractLines: {} lines", lines.len());
    serialize(&lines, "Failed to serialize lines")
}

// ============================================================================
// Pattern Parsing
// ============================================================================

/// Parse a fixed pattern such as `"4+2"`
///
/// # Returns
/// `{pattern: number[], diagnostics}`
#[wasm_bindgen(js_name = parsePattern)]
pub fn parse_pattern_js(text: &str) -> Result<JsValue, JsValue> {
    let mut diagnostics = Diagnostics::new();
    let pattern = parse_group_pattern(text, &mut diagnostics);
    report(&diagnostics);
    serialize(&Parsed { pattern, diagnostics }, "Failed to serialize pattern")
}

/// Parse a mixed pattern such as `"4:2col,2:1col"`
///
/// # Returns
/// `{pattern: {count, columns}[], diagnostics}`
#[wasm_bindgen(js_name = parseMixedPattern)]
pub fn parse_mixed_pattern_js(text: &str) -> Result<JsValue, JsValue> {
    let mut diagnostics = Diagnostics::new();
    let pattern = parse_mixed_pattern(text, &mut diagnostics);
    report(&diagnostics);
    serialize(&Parsed { pattern, diagnostics }, "Failed to serialize pattern")
}

#[derive(serde::Serialize)]
struct Parsed<P> {
    pattern: P,
    diagnostics: Diagnostics,
}

// ============================================================================
// Grouping
// ============================================================================

/// Group lines by a fixed pattern
///
/// # Parameters
/// * `lines` - array of strings; blank entries are dropped
/// * `pattern` - pattern text (`"4+2"`) or an array of sizes
///
/// # Returns
/// `{layout, diagnostics}`
#[wasm_bindgen(js_name = groupByPattern)]
pub fn group_by_pattern_js(lines: JsValue, pattern: JsValue) -> Result<JsValue, JsValue> {
    let lines = lines_from_js(lines)?;
    let mut diagnostics = Diagnostics::new();
    let pattern: GroupPattern = match pattern.as_string() {
        Some(text) => parse_group_pattern(&text, &mut diagnostics),
        None => deserialize(pattern, "Expected pattern text or an array of sizes")?,
    };

    let layout = group_by_pattern(&lines, &pattern, &mut diagnostics);
    finish(StanzaLayout { layout, diagnostics })
}

/// Group lines by a mixed pattern
///
/// # Parameters
/// * `lines` - array of strings; blank entries are dropped
/// * `pattern` - pattern text (`"4:2col,2:1col"`) or an array of
///   `{count, columns}` with `columns` 1 or 2; other modes fall back to 1
///   with a warning
///
/// # Returns
/// `{layout, diagnostics}`
#[wasm_bindgen(js_name = groupByMixedPattern)]
pub fn group_by_mixed_pattern_js(lines: JsValue, pattern: JsValue) -> Result<JsValue, JsValue> {
    let lines = lines_from_js(lines)?;
    let mut diagnostics = Diagnostics::new();
    let pattern: MixedPattern = match pattern.as_string() {
        Some(text) => parse_mixed_pattern(&text, &mut diagnostics),
        None => {
            let raw: Vec<RawMixedEntry> =
                deserialize(pattern, "Expected pattern text or an array of {count, columns}")?;
            mixed_pattern_from_entries(&raw, &mut diagnostics)
        }
    };

    let layout = group_by_mixed_pattern(&lines, &pattern, &mut diagnostics);
    finish(StanzaLayout { layout, diagnostics })
}

/// Lay out lines using a named form (`sher`, `musaddas`, ...)
///
/// # Returns
/// `{layout, diagnostics}`; throws for an unknown form name
#[wasm_bindgen(js_name = layoutForm)]
pub fn layout_form_js(name: &str, lines: JsValue) -> Result<JsValue, JsValue> {
    let spec: &StanzaSpec = form(name)
        .map(|f| &f.spec)
        .ok_or_else(|| js_error("Unknown form", name))?;
    let lines = lines_from_js(lines)?;
    finish(layout(&lines, spec))
}

fn report(diagnostics: &Diagnostics) {
    if !diagnostics.is_empty() {
        wasm_log!("{} pattern/layout warnings", diagnostics.len());
    }
    diagnostics.emit_to_log();
}

fn finish(result: StanzaLayout) -> Result<JsValue, JsValue> {
    report(&result.diagnostics);
    wasm_log!(
        "layout: {} lines in {} groups",
        result.layout.line_count(),
        result.layout.groups.len()
    );
    serialize(&result, "Failed to serialize layout")
}

//! Rendering and copy-text operations for the WASM API
//!
//! These take a layout produced by the layout operations (or
//! `justifyHtml`) and turn it into HTML, JSON or clipboard text.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error, renderer_from_js, serialize};
use crate::justify::justify_markup;
use crate::models::{CopyMode, LayoutResult};
use crate::renderers::{tabulate, tabulate2, TableSplit};
use crate::stanza_layout::{block_text, group_text_at};
use crate::{wasm_error, wasm_info, wasm_log};

// ============================================================================
// HTML Rendering
// ============================================================================

/// Render a layout to HTML
///
/// # Parameters
/// * `layout` - `LayoutResult` object
/// * `form` - class put on the rendered tables (`"sher"`, `"pattern"`, ...)
/// * `copy_mode` - `"all"`, `"row"` or `"both"`; omitted uses the config default
/// * `config` - optional partial `RenderConfig`
/// * `split` - `"joined"` (default) keeps same-arity groups in one table,
///   `"per-group"` gives every group its own table
#[wasm_bindgen(js_name = renderLayout)]
pub fn render_layout(
    layout: JsValue,
    form: &str,
    copy_mode: Option<String>,
    config: JsValue,
    split: Option<String>,
) -> Result<String, JsValue> {
    let layout: LayoutResult = deserialize(layout, "Invalid layout")?;
    let renderer = renderer_from_js(config)?;
    let copy_mode = match copy_mode {
        Some(value) => CopyMode::from_attribute(Some(&value)),
        None => renderer.config().copy_mode,
    };
    let split = match split.as_deref() {
        None => TableSplit::default(),
        Some(name) => TableSplit::from_name(name).ok_or_else(|| {
            js_error(
                "Invalid table split",
                format!("\"{}\"; expected \"joined\" or \"per-group\"", name),
            )
        })?,
    };

    let html = renderer
        .render(&layout, form, copy_mode, split)
        .map_err(|e| js_error("Render failed", e))?;
    wasm_log!("renderLayout: {} groups -> {} bytes", layout.groups.len(), html.len());
    Ok(html)
}

/// Justify every verse container in an HTML fragment
///
/// # Returns
/// Array of `{form, copyMode, lines, layout, html, diagnostics}`, one per
/// container in document order
#[wasm_bindgen(js_name = justifyHtml)]
pub fn justify_html(markup: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let renderer = renderer_from_js(config)?;
    let justified = justify_markup(markup, &renderer).map_err(|e| {
        wasm_error!("justifyHtml failed: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    wasm_info!("justifyHtml: {} containers", justified.len());
    serialize(&justified, "Failed to serialize justified containers")
}

/// One line per row with a spacer after every `gap_every` lines (default 2)
#[wasm_bindgen(js_name = tabulate)]
pub fn tabulate_js(text: &str, gap_every: Option<u32>, config: JsValue) -> Result<String, JsValue> {
    let renderer = renderer_from_js(config)?;
    let gap_every = gap_every.unwrap_or(2) as usize;
    tabulate(&renderer, text, gap_every).map_err(|e| js_error("tabulate failed", e))
}

/// Couplets side by side with a spacer after every couplet
#[wasm_bindgen(js_name = tabulate2)]
pub fn tabulate2_js(text: &str, config: JsValue) -> Result<String, JsValue> {
    let renderer = renderer_from_js(config)?;
    tabulate2(&renderer, text).map_err(|e| js_error("tabulate2 failed", e))
}

// ============================================================================
// Copy Text
// ============================================================================

/// Newline-joined text of every line in the layout
#[wasm_bindgen(js_name = blockCopyText)]
pub fn block_copy_text(layout: JsValue) -> Result<String, JsValue> {
    let layout: LayoutResult = deserialize(layout, "Invalid layout")?;
    Ok(block_text(&layout))
}

/// Newline-joined text of one group; `undefined` when the index is out of range
#[wasm_bindgen(js_name = groupCopyText)]
pub fn group_copy_text(layout: JsValue, index: u32) -> Result<Option<String>, JsValue> {
    let layout: LayoutResult = deserialize(layout, "Invalid layout")?;
    Ok(group_text_at(&layout, index as usize))
}

// ============================================================================
// Inspection
// ============================================================================

/// Pretty-printed JSON of a layout, for debugging
#[wasm_bindgen(js_name = layoutToJson)]
pub fn layout_to_json(layout: JsValue) -> Result<String, JsValue> {
    let layout: LayoutResult = deserialize(layout, "Invalid layout")?;
    serde_json::to_string_pretty(&layout).map_err(|e| js_error("JSON serialization failed", e))
}

//! Live document operations for the WASM API
//!
//! Installs the stylesheet and rewrites verse containers in place. Each
//! container's DOM subtree is snapshotted into a `SourceNode` tree first,
//! so the rest of the pipeline never touches the browser.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::helpers::{js_error, renderer_from_js};
use crate::forms::{container_selector, ContainerDirectives};
use crate::justify::justify_with;
use crate::renderers::{HtmlRenderer, STYLESHEET, STYLE_ELEMENT_ID};
use crate::text::{Element, SourceNode};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Marker set on containers that have already been rewritten
const APPLIED_ATTRIBUTE: &str = "data-sj-applied";

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

// ============================================================================
// Stylesheet
// ============================================================================

/// Insert the verse stylesheet into `<head>` unless it is already there
///
/// # Returns
/// `true` when the stylesheet was inserted by this call
#[wasm_bindgen(js_name = ensureStylesInstalled)]
pub fn ensure_styles_installed() -> Result<bool, JsValue> {
    let document = document()?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head>"))?;
    head.append_child(&style)?;

    wasm_log!("stylesheet installed as #{}", STYLE_ELEMENT_ID);
    Ok(true)
}

// ============================================================================
// Document Pass
// ============================================================================

/// Justify every verse container in the current document
///
/// Containers nested in another container, and containers rewritten by an
/// earlier call, are skipped.
///
/// # Returns
/// Number of containers rewritten
#[wasm_bindgen(js_name = apply)]
pub fn apply(config: JsValue) -> Result<u32, JsValue> {
    let renderer = renderer_from_js(config)?;
    ensure_styles_installed()?;

    let selector = container_selector();
    let nodes = document()?.query_selector_all(&selector)?;

    let mut applied = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if element.has_attribute(APPLIED_ATTRIBUTE) || is_nested(&element, &selector)? {
            continue;
        }
        if apply_to(&element, &renderer)? {
            applied += 1;
        }
    }

    wasm_info!("justify-wasm v{}: {} containers justified", env!("CARGO_PKG_VERSION"), applied);
    Ok(applied)
}

fn is_nested(element: &web_sys::Element, selector: &str) -> Result<bool, JsValue> {
    match element.parent_element() {
        Some(parent) => Ok(parent.closest(selector)?.is_some()),
        None => Ok(false),
    }
}

fn apply_to(element: &web_sys::Element, renderer: &HtmlRenderer) -> Result<bool, JsValue> {
    let snapshot = snapshot_element(element);
    let directives = ContainerDirectives::from_element(&snapshot);

    let justified = justify_with(&snapshot, &directives, renderer)
        .map_err(|e| js_error(&format!("Failed to justify <{}>", snapshot.tag), e))?;
    let Some(justified) = justified else {
        return Ok(false);
    };

    justified.diagnostics.emit_to_log();
    element.set_inner_html(&justified.html);
    element.set_attribute(APPLIED_ATTRIBUTE, "true")?;
    Ok(true)
}

// ============================================================================
// DOM Snapshot
// ============================================================================

/// Copy a DOM element and its subtree into a `SourceNode` element
fn snapshot_element(element: &web_sys::Element) -> Element {
    let mut snapshot = Element::new(&element.tag_name());
    for name in element.get_attribute_names().iter().filter_map(|n| n.as_string()) {
        if let Some(value) = element.get_attribute(&name) {
            snapshot.attributes.insert(name.to_ascii_lowercase(), value);
        }
    }

    let children = element.child_nodes();
    for i in 0..children.length() {
        if let Some(child) = children.item(i).and_then(|n| snapshot_node(&n)) {
            snapshot.children.push(child);
        }
    }
    snapshot
}

fn snapshot_node(node: &web_sys::Node) -> Option<SourceNode> {
    match node.node_type() {
        web_sys::Node::TEXT_NODE | web_sys::Node::CDATA_SECTION_NODE => {
            Some(SourceNode::text(node.text_content().unwrap_or_default()))
        }
        web_sys::Node::ELEMENT_NODE => node
            .dyn_ref::<web_sys::Element>()
            .map(|e| SourceNode::Element(snapshot_element(e))),
        web_sys::Node::COMMENT_NODE => Some(SourceNode::Comment {
            text: node.text_content().unwrap_or_default(),
        }),
        _ => None,
    }
}

// ============================================================================
// Clipboard
// ============================================================================

/// Log a failed clipboard write reported by the host
#[wasm_bindgen(js_name = reportClipboardFailure)]
pub fn report_clipboard_failure(err: JsValue) {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    wasm_warn!("Clipboard write failed: {}", message);
}

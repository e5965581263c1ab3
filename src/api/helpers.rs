//! Shared helpers for WASM API operations
//!
//! Serialization, argument decoding and error conversion used by every
//! exported function, plus the console logging macros for the JS boundary.

use std::fmt::Display;

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Line, LineSequence};
use crate::renderers::{HtmlRenderer, RenderConfig};

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [Justify] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [Justify] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [Justify] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [Justify] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[Justify] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[Justify] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[Justify] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[Justify] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(error_context, e))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(error_context, e))
}

/// Log an error and turn it into a JS exception value
pub fn js_error(context: &str, err: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log_error(&msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Argument Decoding
// ============================================================================

/// `undefined` or `null`, i.e. an omitted optional argument
pub fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// Decode an optional render config; omitted fields take their defaults
pub fn config_from_js(value: JsValue) -> Result<RenderConfig, JsValue> {
    if is_absent(&value) {
        return Ok(RenderConfig::default());
    }
    deserialize(value, "Invalid render config")
}

/// Build a renderer from an optional JS config
pub fn renderer_from_js(value: JsValue) -> Result<HtmlRenderer, JsValue> {
    config_from_js(value).map(HtmlRenderer::new)
}

/// Decode an array of strings into lines, dropping blank entries
pub fn lines_from_js(value: JsValue) -> Result<LineSequence, JsValue> {
    let raw: Vec<String> = deserialize(value, "Expected an array of strings")?;
    Ok(raw.iter().filter_map(|s| Line::new(s)).collect())
}

//! Verse Justification WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, argument decoding, error conversion and console logging
//! - `layout`: line extraction, pattern parsing and grouping
//! - `render`: HTML rendering, copy text and JSON inspection
//! - `dom`: stylesheet installation and the in-place document pass

pub mod helpers;
pub mod layout;
pub mod render;
pub mod dom;

pub use layout::{
    extract_lines_js, group_by_mixed_pattern_js, group_by_pattern_js, layout_form_js,
    parse_mixed_pattern_js, parse_pattern_js,
};
pub use render::{
    block_copy_text, group_copy_text, justify_html, layout_to_json, render_layout, tabulate2_js,
    tabulate_js,
};
pub use dom::{apply, ensure_styles_installed, report_clipboard_failure};

//! Verse Justification WASM Module
//!
//! Lays out Urdu/Nastaliq verse as justified, right-to-left tables. Lines are
//! extracted from a verse container, grouped into stanzas by a named form or
//! an explicit pattern, and rendered to HTML with copy-to-clipboard buttons.

pub mod models;
pub mod diagnostics;
pub mod parse;
pub mod text;
pub mod stanza_layout;
pub mod forms;
pub mod renderers;
pub mod justify;
pub mod api;

// Re-export commonly used types
pub use models::{
    Cell, ColumnMode, CopyMode, GroupPattern, LayoutResult, Line, LineSequence, MixedEntry,
    MixedPattern, Row, RowGroup, StanzaSpec,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use stanza_layout::{group_by_mixed_pattern, group_by_pattern, layout, StanzaLayout};
pub use text::{extract_lines, Element, SourceNode};
pub use justify::{justify, justify_markup, Justified, JustifyError};
pub use renderers::{HtmlRenderer, RenderConfig};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
        }
    }

    log::info!("Verse justification WASM module initialized");
}

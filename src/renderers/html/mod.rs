//! HTML table renderer
//!
//! Reference renderer for layout results, producing the justified tables
//! the stylesheet in [`crate::renderers::styles`] is written for. Markup
//! comes from a mustache template; all verse text goes through the
//! template's HTML escaping.
//!
//! ## Related Files
//!
//! - `context.rs` - layout → template context (table split, spacers, copy buttons)
//! - `templates/stanza.html.mustache` - the markup
//! - `legacy.rs` - `tabulate` / `tabulate2` helpers over plain text

pub mod config;
pub mod context;
pub mod legacy;

pub use config::{RenderConfig, DEFAULT_PLACEHOLDER};
pub use context::{RenderContext, TableSplit};
pub use legacy::{tabulate, tabulate2};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{CopyMode, LayoutResult};

/// Rendering failures (template problems only; layout data always renders)
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] mustache::Error),

    #[error("Template failed to compile: {0}")]
    Compile(String),
}

/// Get the stanza template source
pub fn get_template_content() -> &'static str {
    include_str!("templates/stanza.html.mustache")
}

// Compiled on first render and shared by every renderer
static STANZA_TEMPLATE: Lazy<Result<mustache::Template, String>> =
    Lazy::new(|| mustache::compile_str(get_template_content()).map_err(|e| e.to_string()));

fn stanza_template() -> Result<&'static mustache::Template, RenderError> {
    STANZA_TEMPLATE
        .as_ref()
        .map_err(|message| RenderError::Compile(message.clone()))
}

/// Renders layout results to HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a layout as one or more tables tagged with `form`
    pub fn render(
        &self,
        layout: &LayoutResult,
        form: &str,
        copy_mode: CopyMode,
        split: TableSplit,
    ) -> Result<String, RenderError> {
        let context = RenderContext::build(layout, form, copy_mode, split, &self.config);
        Ok(stanza_template()?.render_to_string(&context)?)
    }
}

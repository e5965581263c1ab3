//! Renderers module for the verse justification engine
//!
//! Turns layout results into output formats. The layout engine never
//! depends on anything here.

pub mod html;
pub mod styles;

// Re-export commonly used types
pub use html::{tabulate, tabulate2, HtmlRenderer, RenderConfig, RenderError, TableSplit};
pub use styles::{STYLESHEET, STYLE_ELEMENT_ID};

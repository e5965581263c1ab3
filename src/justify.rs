//! Justify pipeline
//!
//! One verse container in, one rendered block out:
//! directives → lines → layout → HTML, with every warning collected on the
//! way. The DOM pass in the API layer and `justifyHtml` both go through here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::Diagnostics;
use crate::forms::{resolve, ContainerDirectives};
use crate::models::{CopyMode, LayoutResult, LineSequence};
use crate::parse::markup::{parse_markup, MarkupError};
use crate::renderers::{HtmlRenderer, RenderError, TableSplit};
use crate::stanza_layout::layout_with;
use crate::text::{extract_lines, Element};

/// Errors from the markup-to-HTML path
#[derive(Debug, Error)]
pub enum JustifyError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A justified verse container
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Justified {
    /// Form class the tables were tagged with
    pub form: String,
    pub copy_mode: CopyMode,
    pub lines: LineSequence,
    pub layout: LayoutResult,
    pub html: String,
    pub diagnostics: Diagnostics,
}

/// Justify one container element
///
/// Returns `Ok(None)` when the element is not a verse container.
pub fn justify(container: &Element, renderer: &HtmlRenderer) -> Result<Option<Justified>, RenderError> {
    let directives = ContainerDirectives::from_element(container);
    justify_with(container, &directives, renderer)
}

/// Justify a container whose directives were read separately (e.g. from a live DOM element)
pub fn justify_with(
    container: &Element,
    directives: &ContainerDirectives,
    renderer: &HtmlRenderer,
) -> Result<Option<Justified>, RenderError> {
    let mut diagnostics = Diagnostics::new();
    let Some(resolved) = resolve(directives, &mut diagnostics) else {
        return Ok(None);
    };

    let lines = extract_lines(container);
    let layout = layout_with(&lines, &resolved.spec, &mut diagnostics);
    let copy_mode = directives.copy_mode(renderer.config().copy_mode);
    let split = TableSplit::for_stanza(&resolved.spec, &resolved.form);
    let html = renderer.render(&layout, &resolved.form, copy_mode, split)?;

    log::debug!(
        "justified {} container: {} lines in {} groups, {} diagnostics",
        resolved.form,
        lines.len(),
        layout.groups.len(),
        diagnostics.len()
    );

    Ok(Some(Justified {
        form: resolved.form,
        copy_mode,
        lines,
        layout,
        html,
        diagnostics,
    }))
}

/// Parse an HTML fragment and justify every verse container in it
///
/// Containers are visited in document order; a container nested inside
/// another is treated as part of the outer one's content.
pub fn justify_markup(markup: &str, renderer: &HtmlRenderer) -> Result<Vec<Justified>, JustifyError> {
    let root = parse_markup(markup)?;
    let containers = root.find_all(&|e: &Element| ContainerDirectives::from_element(e).is_verse_container());

    let mut justified = Vec::with_capacity(containers.len());
    for container in containers {
        if let Some(result) = justify(container, renderer)? {
            justified.push(result);
        }
    }
    Ok(justified)
}

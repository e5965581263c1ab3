//! Render configuration
//!
//! Every field has a default, so the host may pass a partial object (or
//! nothing at all).

use serde::{Deserialize, Serialize};

use crate::models::CopyMode;

/// Shown instead of a table when a container has no verse lines
pub const DEFAULT_PLACEHOLDER: &str = "یہاں اک شعر ہونا چاہیے تھا۔";

/// Configuration for HTML rendering
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Text shown for an empty container
    pub placeholder: String,

    /// Emit a hidden newline span after every line so that selecting and
    /// copying the table yields one verse line per text line
    pub hidden_newlines: bool,

    /// Label of the whole-block copy button
    pub copy_label: String,

    /// Label of the per-row copy buttons
    pub row_copy_label: String,

    /// Copy mode for containers without a `data-copy` attribute
    pub copy_mode: CopyMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            hidden_newlines: true,
            copy_label: "📋".to_string(),
            row_copy_label: "📋".to_string(),
            copy_mode: CopyMode::All,
        }
    }
}

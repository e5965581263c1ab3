//! Models module for the verse justification engine
//!
//! This module contains the data types shared by extraction, layout and
//! rendering: verse lines, stanza patterns and the layout result.

pub mod line;
pub mod pattern;
pub mod layout;
pub mod copy_mode;

// Re-export commonly used types
pub use line::{Line, LineSequence};
pub use pattern::{ColumnMode, GroupPattern, MixedEntry, MixedPattern, StanzaSpec};
pub use layout::{Cell, GroupPosition, LayoutResult, Row, RowGroup};
pub use copy_mode::CopyMode;

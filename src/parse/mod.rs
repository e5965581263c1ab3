//! Parsing module for the verse justification engine
//!
//! - `pattern`: stanza pattern attributes (`4+2`, `4:2col,2:1col`)
//! - `markup`: lenient HTML fragment reader producing a source tree

pub mod pattern;
pub mod markup;

// Re-export commonly used items
pub use pattern::{mixed_pattern_from_entries, parse_group_pattern, parse_mixed_pattern, RawMixedEntry};
pub use markup::{parse_markup, MarkupError, FRAGMENT_TAG};

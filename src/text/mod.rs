//! Source text handling
//!
//! - `node`: immutable snapshot of a verse container's content
//! - `extract`: flattening that snapshot into verse lines

pub mod node;
pub mod extract;

pub use node::{Element, SourceNode};
pub use extract::{extract_lines, extract_node_lines};

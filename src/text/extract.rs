//! Line extraction
//!
//! Flattens a container's content into verse lines. Line breaks (`<br>`)
//! and the end of every block wrapper (`<p>`, `<div>`, `<li>`) separate
//! lines; newlines inside text do too. Runs of separators collapse, every
//! line is trimmed, and blank lines are dropped. The tree is never modified.

use crate::models::LineSequence;

use super::node::{Element, SourceNode};

const SEPARATOR: char = '\n';

/// Extract the lines of a container element
///
/// The container itself does not add a trailing separator; only its
/// descendants do.
pub fn extract_lines(container: &Element) -> LineSequence {
    let mut buffer = String::new();
    for child in &container.children {
        flatten(child, &mut buffer);
    }
    LineSequence::from_text(&buffer)
}

/// Extract the lines of any node (a bare text node yields its own lines)
pub fn extract_node_lines(node: &SourceNode) -> LineSequence {
    match node {
        SourceNode::Element(element) => extract_lines(element),
        other => {
            let mut buffer = String::new();
            flatten(other, &mut buffer);
            LineSequence::from_text(&buffer)
        }
    }
}

fn flatten(node: &SourceNode, buffer: &mut String) {
    match node {
        SourceNode::Text { text } => buffer.push_str(text),
        SourceNode::Comment { .. } => {}
        SourceNode::Element(element) => {
            if element.is_line_break() {
                buffer.push(SEPARATOR);
                return;
            }
            for child in &element.children {
                flatten(child, buffer);
            }
            if element.is_block() {
                buffer.push(SEPARATOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn div() -> Element {
        Element::new("div").with_attribute("class", "sher")
    }

    #[test]
    fn test_text_with_newlines() {
        let container = div().with_text("\n    Line 1\n    Line 2\n\n\n    Line 3\n  ");
        assert_eq!(
            extract_lines(&container).to_strings(),
            vec!["Line 1", "Line 2", "Line 3"]
        );
    }

    #[test]
    fn test_line_breaks() {
        let container = div()
            .with_text("Line 1")
            .with_child(Element::new("br"))
            .with_text("Line 2")
            .with_child(Element::new("br"))
            .with_child(Element::new("br"))
            .with_text("Line 3");
        assert_eq!(
            extract_lines(&container).to_strings(),
            vec!["Line 1", "Line 2", "Line 3"]
        );
    }

    #[test]
    fn test_blocks_end_lines() {
        let container = div()
            .with_child(Element::new("p").with_text("Line 1"))
            .with_child(Element::new("p").with_text("Line 2"))
            .with_child(Element::new("p"))
            .with_child(Element::new("div").with_child(Element::new("p")))
            .with_child(Element::new("li").with_text("Line 3"));
        assert_eq!(
            extract_lines(&container).to_strings(),
            vec!["Line 1", "Line 2", "Line 3"]
        );
    }

    #[test]
    fn test_inline_elements_join_their_line() {
        let container = div()
            .with_text("دل ")
            .with_child(Element::new("b").with_text("ناداں"))
            .with_text(" تجھے")
            .with_child(SourceNode::Comment { text: "skip".into() })
            .with_child(Element::new("br"))
            .with_text("ہوا کیا ہے");
        assert_eq!(
            extract_lines(&container).to_strings(),
            vec!["دل ناداں تجھے", "ہوا کیا ہے"]
        );
    }

    #[test]
    fn test_extraction_does_not_touch_source() {
        let container = div()
            .with_child(Element::new("p").with_text("a"))
            .with_child(Element::new("br"));
        let before = container.clone();
        let _ = extract_lines(&container);
        assert_eq!(container, before);
    }

    #[test]
    fn test_bare_text_node() {
        let node = SourceNode::text("x\n\ny");
        assert_eq!(extract_node_lines(&node).to_strings(), vec!["x", "y"]);
    }

    #[test]
    fn test_empty_container() {
        assert!(extract_lines(&div()).is_empty());
        assert!(extract_lines(&div().with_text("   \n  ")).is_empty());
    }
}

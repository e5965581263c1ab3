//! Immutable source tree
//!
//! A snapshot of a verse container's content: text, elements and comments.
//! The browser host serializes a DOM subtree into this shape, and
//! `parse::markup` builds it from an HTML fragment. Extraction only ever
//! reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tags that force a line break
const LINE_BREAK_TAGS: &[&str] = &["br"];

/// Tags whose content ends with an implicit line break
const BLOCK_TAGS: &[&str] = &["p", "div", "li"];

/// A node of the source tree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceNode {
    Text {
        text: String,
    },
    Element(Element),
    Comment {
        #[serde(default)]
        text: String,
    },
}

impl SourceNode {
    pub fn text(text: impl Into<String>) -> Self {
        SourceNode::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            SourceNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl From<Element> for SourceNode {
    fn from(element: Element) -> Self {
        SourceNode::Element(element)
    }
}

/// An element with its attributes and children
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<SourceNode>,
}

impl Element {
    /// Create an element; the tag name is lowercased
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Builder: append a child node
    pub fn with_child(mut self, child: impl Into<SourceNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder: append a text child
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(SourceNode::text(text))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whitespace-separated entries of the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or("")
            .split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn is_line_break(&self) -> bool {
        LINE_BREAK_TAGS.contains(&self.tag.as_str())
    }

    pub fn is_block(&self) -> bool {
        BLOCK_TAGS.contains(&self.tag.as_str())
    }

    /// Descendant elements matching `predicate`, in document order
    ///
    /// The search does not descend into a match, so nested matches are left
    /// to the outer element. The element itself is not considered.
    pub fn find_all<'a, F>(&'a self, predicate: &F) -> Vec<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.collect_matches(predicate, &mut found);
        found
    }

    fn collect_matches<'a, F>(&'a self, predicate: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        for child in &self.children {
            if let SourceNode::Element(element) = child {
                if predicate(element) {
                    found.push(element);
                } else {
                    element.collect_matches(predicate, found);
                }
            }
        }
    }
}

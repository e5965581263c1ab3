//! Lenient HTML fragment reader
//!
//! Builds a `SourceNode` tree from the kind of markup authors put inside a
//! verse container: unclosed `<br>`, `<p>` runs, stray end tags, the odd
//! HTML entity. It is not a conforming HTML parser; it handles:
//! - void elements (`<br>`, `<hr>`, ...) that never take children
//! - end tags closing the nearest matching open element (others ignored)
//! - `<p>` / `<li>` implicitly closed by a following sibling of the same kind
//! - elements left open at the end of input
//! - a handful of named entities common in Urdu text (`&zwnj;`, `&nbsp;`, ...)

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::text::{Element, SourceNode};

/// Tag of the synthetic root wrapping a parsed fragment
pub const FRAGMENT_TAG: &str = "#fragment";

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

/// Markup that cannot be tokenized at all
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Invalid markup at byte {position}: {message}")]
    Syntax { position: usize, message: String },
}

/// Parse an HTML fragment into a tree rooted at a synthetic `#fragment` element
pub fn parse_markup(markup: &str) -> Result<Element, MarkupError> {
    let mut reader = Reader::from_str(markup);
    reader.trim_text(false);
    reader.check_end_names(false);

    let mut stack: Vec<Element> = vec![Element::new(FRAGMENT_TAG)];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let element = start_element(e);
                close_implied(&mut stack, &element.tag);
                if VOID_TAGS.contains(&element.tag.as_str()) {
                    append(&mut stack, element.into());
                } else {
                    stack.push(element);
                }
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e);
                close_implied(&mut stack, &element.tag);
                append(&mut stack, element.into());
            }
            Ok(Event::End(ref e)) => {
                let name = lowercase_name(e.name().as_ref());
                close_element(&mut stack, &name);
            }
            Ok(Event::Text(ref e)) => {
                append(&mut stack, SourceNode::text(decode_text(e)));
            }
            Ok(Event::CData(ref e)) => {
                append(&mut stack, SourceNode::text(String::from_utf8_lossy(e).into_owned()));
            }
            Ok(Event::Comment(ref e)) => {
                append(
                    &mut stack,
                    SourceNode::Comment {
                        text: String::from_utf8_lossy(e).into_owned(),
                    },
                );
            }
            Ok(Event::Eof) => break,
            // Declarations, processing instructions and doctypes carry no verse text
            Ok(_) => {}
            Err(err) => {
                return Err(MarkupError::Syntax {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                })
            }
        }
    }

    Ok(finish(stack))
}

fn lowercase_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).to_ascii_lowercase()
}

fn start_element(e: &BytesStart) -> Element {
    let mut element = Element::new(&lowercase_name(e.name().as_ref()));
    for attr in e.html_attributes().flatten() {
        let key = lowercase_name(attr.key.as_ref());
        let value = match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        element.attributes.insert(key, value);
    }
    element
}

fn resolve_entity(name: &str) -> Option<&'static str> {
    match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{00A0}"),
        "zwnj" => Some("\u{200C}"),
        "zwj" => Some("\u{200D}"),
        "rlm" => Some("\u{200F}"),
        "lrm" => Some("\u{200E}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "hellip" => Some("\u{2026}"),
        _ => None,
    }
}

fn decode_text(e: &BytesText) -> String {
    match e.unescape_with(resolve_entity) {
        Ok(text) => text.into_owned(),
        // Unknown entity: keep the raw text rather than lose the line
        Err(_) => String::from_utf8_lossy(e).into_owned(),
    }
}

/// Attach a node to the innermost open element
fn append(stack: &mut [Element], node: SourceNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

/// Pop the innermost open element into its parent
fn pop_into_parent(stack: &mut Vec<Element>) {
    if stack.len() <= 1 {
        return;
    }
    if let Some(element) = stack.pop() {
        append(stack, element.into());
    }
}

/// `<p>` and `<li>` end where a sibling of the same kind starts
fn close_implied(stack: &mut Vec<Element>, starting: &str) {
    let open = match stack.last() {
        Some(top) if stack.len() > 1 => top.tag.as_str(),
        _ => return,
    };
    let implied = match starting {
        "li" => open == "li",
        "p" | "div" | "ul" | "ol" => open == "p",
        _ => false,
    };
    if implied {
        pop_into_parent(stack);
    }
}

/// Close the nearest open element named `name`; unmatched end tags are ignored
fn close_element(stack: &mut Vec<Element>, name: &str) {
    let Some(depth) = stack.iter().skip(1).rposition(|e| e.tag == name) else {
        return;
    };
    // rposition over the skipped iterator is relative to index 1
    let target = depth + 1;
    while stack.len() > target {
        pop_into_parent(stack);
    }
}

fn finish(mut stack: Vec<Element>) -> Element {
    while stack.len() > 1 {
        pop_into_parent(&mut stack);
    }
    stack.pop().unwrap_or_else(|| Element::new(FRAGMENT_TAG))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_element(root: &Element) -> &Element {
        root.children
            .iter()
            .find_map(|c| c.as_element())
            .expect("fragment should contain an element")
    }

    #[test]
    fn test_parses_nested_elements_and_attributes() {
        let root = parse_markup(r#"<div class="sher" data-copy="row"><p>Line 1</p></div>"#).unwrap();
        assert_eq!(root.tag, FRAGMENT_TAG);

        let div = only_element(&root);
        assert_eq!(div.tag, "div");
        assert!(div.has_class("sher"));
        assert_eq!(div.attribute("data-copy"), Some("row"));

        let p = only_element(div);
        assert_eq!(p.tag, "p");
        assert_eq!(p.children, vec![SourceNode::text("Line 1")]);
    }

    #[test]
    fn test_unclosed_br_is_void() {
        let root = parse_markup("<div>a<br>b<BR>c</div>").unwrap();
        let div = only_element(&root);
        assert_eq!(div.children.len(), 5);
        assert!(div.children[1].as_element().unwrap().is_line_break());
        assert!(div.children[3].as_element().unwrap().is_line_break());
    }

    #[test]
    fn test_implied_paragraph_close() {
        let root = parse_markup("<div><p>one<p>two</div>").unwrap();
        let div = only_element(&root);
        let paragraphs: Vec<&Element> = div.children.iter().filter_map(|c| c.as_element()).collect();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[1].children, vec![SourceNode::text("two")]);
    }

    #[test]
    fn test_stray_end_tag_is_ignored() {
        let root = parse_markup("<div>a</span>b</div>").unwrap();
        let div = only_element(&root);
        assert_eq!(div.children.len(), 2);
    }

    #[test]
    fn test_unclosed_elements_are_closed_at_eof() {
        let root = parse_markup("<div class=\"qata\"><p>a").unwrap();
        let div = only_element(&root);
        assert_eq!(div.tag, "div");
        assert_eq!(only_element(div).tag, "p");
    }

    #[test]
    fn test_entities() {
        let root = parse_markup("<p>a&zwnj;b &amp; c&nbsp;d</p>").unwrap();
        let p = only_element(&root);
        assert_eq!(p.children, vec![SourceNode::text("a\u{200C}b & c\u{00A0}d")]);
    }

    #[test]
    fn test_comments_are_kept_as_comment_nodes() {
        let root = parse_markup("<div><!-- note -->x</div>").unwrap();
        let div = only_element(&root);
        assert!(matches!(div.children[0], SourceNode::Comment { .. }));
    }
}

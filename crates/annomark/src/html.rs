//! HTML parsing support.
//!
//! Wraps `scraper` (html5ever underneath) so malformed markup is recovered
//! with standard HTML error-recovery rules and character references are
//! decoded during parsing. Parsing never fails; the worst input yields an
//! empty tree.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Elements whose content must never reach the output.
const STRIPPED_TAGS: &[&str] = &["script", "style", "meta", "link"];

/// Parse an HTML fragment (or full document) into a [`Node`] tree.
///
/// The returned node is a container whose children are the top-level
/// content. `script`, `style`, `meta` and `link` elements are dropped
/// entirely, as are comments.
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

fn scraper_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(el) => {
                if STRIPPED_TAGS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            // Comments, doctypes and processing instructions are dropped.
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fragment() {
        let node = parse_html("<p>Hello World</p>");
        assert!(node.is_element());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_empty_input_yields_empty_tree() {
        let node = parse_html("");
        assert_eq!(node.text_content(), "");
    }

    #[test]
    fn test_entities_are_decoded() {
        let node = parse_html("<p>&amp; &lt; &gt;</p>");
        assert_eq!(node.text_content(), "& < >");
    }

    #[test]
    fn test_script_and_style_are_stripped() {
        let node = parse_html("<script>alert(1)</script><style>p{}</style><p>kept</p>");
        assert_eq!(node.text_content(), "kept");
    }

    #[test]
    fn test_malformed_markup_recovers() {
        let node = parse_html("<p>Unclosed paragraph<p>Another");
        assert_eq!(node.text_content(), "Unclosed paragraphAnother");
    }

    #[test]
    fn test_comments_are_dropped() {
        let node = parse_html("<p>a<!-- hidden -->b</p>");
        assert_eq!(node.text_content(), "ab");
    }
}

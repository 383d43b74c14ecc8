//! Node tree produced by the HTML parser and consumed by the renderer.
//!
//! A node is either raw text or an element owning its children. The tree is
//! built once per conversion and discarded after rendering; there are no
//! parent pointers and no shared references.

/// A single node in the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, entity-decoded by the parser.
    Text(String),
    /// An element with its attributes and children.
    Element(Element),
}

/// An element node: tag name, attribute bag, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create an element node without attributes.
    pub fn element(tag: &str) -> Self {
        Node::Element(Element {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Create an element node with attributes.
    pub fn element_with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element {
            tag: tag.to_lowercase(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// The element form of this node, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Append a child to an element node. No-op on text nodes.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(el) = self {
            el.children.push(child);
        }
    }

    /// Concatenated raw text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Text of all descendants with each text node trimmed before joining.
    ///
    /// Used for math extraction, where surrounding markup whitespace is
    /// noise but internal newlines still decide block-ness.
    pub fn compact_text(&self) -> String {
        match self {
            Node::Text(text) => text.trim().to_string(),
            Node::Element(el) => el.children.iter().map(Node::compact_text).collect(),
        }
    }
}

impl Element {
    /// Tag name, always lowercase.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains the given class token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|t| t == class))
            .unwrap_or(false)
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Direct children that are elements with the given tag.
    pub fn children_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(move |el| el.tag() == tag)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn compact_text(&self) -> String {
        self.children.iter().map(Node::compact_text).collect()
    }
}

/// Minimal DOM-like tree handed to the word extractor.
///
/// Parsers (see `input::html`) build this from book markup; the extractor only
/// needs element names, children and text content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub body: Option<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercase local tag name ("p", "h1", "br").
    pub tag: String,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self { body: Some(body) }
    }

    pub fn empty() -> Self {
        Self { body: None }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            children: Vec::new(),
        }
    }

    pub fn with_children(tag: impl Into<String>, children: Vec<Node>) -> Self {
        let mut element = Self::new(tag);
        element.children = children;
        element
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => stack.extend(element.children.iter().rev()),
            }
        }
        out
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::with_children(tag, children))
    }
}

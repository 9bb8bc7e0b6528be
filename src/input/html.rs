use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::entities::resolve_entity;
use super::text::{read_text_file, single_section};
use super::{ensure_exists, LoadError, LoadedDocument};
use crate::reading::document::{Document, Element, Node};
use crate::reading::extract_words_from_doc;

/// Elements that never have content, even when written without `/>`.
const VOID_TAGS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"param", b"source", b"track", b"wbr",
];

/// Extract local name from namespaced XML name (e.g., "xhtml:p" -> "p").
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

fn tag_string(name: &[u8]) -> String {
    String::from_utf8_lossy(local_name(name)).to_ascii_lowercase()
}

/// Open elements inside `<body>`; index 0 is the body itself.
struct TreeBuilder {
    stack: Vec<Element>,
    body: Option<Element>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            body: None,
        }
    }

    fn in_body(&self) -> bool {
        !self.stack.is_empty()
    }

    fn open(&mut self, tag: String) {
        if self.in_body() {
            self.stack.push(Element::new(tag));
        } else if tag == "body" && self.body.is_none() {
            self.stack.push(Element::new(tag));
        }
    }

    fn empty(&mut self, tag: String) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(Node::Element(Element::new(tag)));
        }
    }

    fn text(&mut self, text: &str) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if let Some(Node::Text(existing)) = parent.children.last_mut() {
            existing.push_str(text);
        } else if !text.is_empty() {
            parent.children.push(Node::text(text));
        }
    }

    fn close_top(&mut self) {
        let Some(element) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None => self.body = Some(element),
        }
    }

    /// Closes back to the nearest open element named `tag`. End tags with no
    /// matching open element are ignored.
    fn close(&mut self, tag: &str) {
        if let Some(pos) = self.stack.iter().rposition(|element| element.tag == tag) {
            while self.stack.len() > pos {
                self.close_top();
            }
        }
    }

    fn finish(mut self) -> Document {
        while self.in_body() {
            self.close_top();
        }
        Document { body: self.body }
    }
}

/// Parses an XHTML chapter into a [`Document`] holding only its `<body>`.
///
/// Namespace prefixes are dropped, mismatched end tags are tolerated and
/// HTML void elements may omit their closing slash. A chapter with no body
/// gives an empty document, not an error.
pub fn parse_document(xhtml: &str) -> Result<Document, LoadError> {
    let mut reader = Reader::from_str(xhtml);
    reader.config_mut().trim_text(false);
    reader.config_mut().check_end_names = false;

    let mut builder = TreeBuilder::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                if VOID_TAGS.contains(&local_name(name.as_ref())) {
                    builder.empty(tag_string(name.as_ref()));
                } else {
                    builder.open(tag_string(name.as_ref()));
                }
            }
            Ok(Event::Empty(e)) => {
                let name = e.name();
                builder.empty(tag_string(name.as_ref()));
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                builder.close(&tag_string(name.as_ref()));
            }
            Ok(Event::Text(e)) => {
                builder.text(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::CData(e)) => {
                builder.text(&String::from_utf8_lossy(&e));
            }
            Ok(Event::GeneralRef(e)) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                match resolve_entity(&entity) {
                    Some(c) => builder.text(c.encode_utf8(&mut [0; 4])),
                    None => builder.text(&format!("&{};", entity)),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(LoadError::XhtmlParse(format!(
                    "at byte {}: {}",
                    reader.error_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(builder.finish())
}

/// Loads a stand-alone XHTML or HTML file as a one-chapter book.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    ensure_exists(path)?;
    let markup = read_text_file(path)?;
    let tokens = extract_words_from_doc(&parse_document(&markup)?);
    Ok(LoadedDocument {
        sections: single_section(path, &tokens),
        tokens,
        source: format!("html:{}", path.display()),
    })
}

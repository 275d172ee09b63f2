//! Minimal owned XML tree.
//!
//! The registry is read once into an [`Element`] tree so the loader can
//! walk it multiple times in its fixed pass order. `quick_xml` supplies
//! the event stream; comments, processing instructions, and the document
//! declaration are dropped during assembly.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use vkgen_types::{LoadError, Result};

/// A node in the element tree: a child element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An owned XML element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub nodes: Vec<Node>,
}

impl Element {
    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|e| e.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |e| e.name == name)
    }

    /// All child elements, in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated direct text of this element (child elements excluded).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            if let Node::Text(t) = node {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(t);
            }
        }
        out
    }

    /// Text of the first child element with the given name.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(|e| e.text())
    }

    /// Concatenated text of this element and all descendants.
    pub fn deep_text(&self) -> String {
        let mut out = String::new();
        collect_deep_text(self, &mut out);
        out
    }
}

fn collect_deep_text(element: &Element, out: &mut String) {
    for node in &element.nodes {
        match node {
            Node::Text(t) => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(t);
            }
            Node::Element(e) => collect_deep_text(e, out),
        }
    }
}

/// Parse a complete document and return its root element.
pub fn parse_document(source: &str) -> Result<Element> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start)?;
                place(Node::Element(element), &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| LoadError::Xml("unmatched closing tag".into()))?;
                place(Node::Element(element), &mut stack, &mut root)?;
            }
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|e| LoadError::Xml(e.to_string()))?
                    .into_owned();
                if !text.is_empty() {
                    if let Some(top) = stack.last_mut() {
                        top.nodes.push(Node::Text(text));
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Comments, CDATA, declarations, PIs, doctype.
            Ok(_) => {}
            Err(e) => return Err(LoadError::Xml(e.to_string())),
        }
    }

    if !stack.is_empty() {
        return Err(LoadError::Xml("unterminated element".into()));
    }
    root.ok_or_else(|| LoadError::Xml("document has no root element".into()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| LoadError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| LoadError::Xml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        nodes: Vec::new(),
    })
}

fn place(node: Node, stack: &mut Vec<Element>, root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.nodes.push(node),
        None => match node {
            Node::Element(e) if root.is_none() => *root = Some(e),
            Node::Element(_) => return Err(LoadError::Xml("multiple root elements".into())),
            Node::Text(_) => {}
        },
    }
    Ok(())
}

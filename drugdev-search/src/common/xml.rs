//! Addressable XML node tree
//!
//! EFetch payloads are small (one batch of at most a hundred articles), so
//! the whole document is read into a tree with `quick_xml::Reader` and then
//! queried by tag name. Queries walk descendants in document (pre-order)
//! order, so [`XmlNode::first`] returns the same element a CSS selector
//! lookup would.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{Result, SearchError};

/// Child of an element: a nested element or a run of text
#[derive(Debug, Clone, PartialEq)]
pub enum XmlContent {
    Element(XmlNode),
    Text(String),
}

/// An element with its attributes and ordered children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlContent>,
}

impl XmlNode {
    fn from_start(e: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr in e.attributes() {
            let attr = attr.map_err(|err| SearchError::XmlError(err.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|err| SearchError::XmlError(err.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Value of the attribute `key`
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter_map(|child| match child {
            XmlContent::Element(node) => Some(node),
            XmlContent::Text(_) => None,
        })
    }

    /// All descendant elements in document order, excluding `self`
    pub fn elements(&self) -> Descendants<'_> {
        let mut stack: Vec<&XmlNode> = self.child_elements().collect();
        stack.reverse();
        Descendants { stack }
    }

    /// First descendant element named `name`
    pub fn first(&self, name: &str) -> Option<&XmlNode> {
        self.elements().find(|node| node.name == name)
    }

    /// Every descendant element named `name`, in document order
    pub fn descendants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.elements().filter(move |node| node.name == name)
    }

    /// Concatenated text of this element and its descendants, trimmed
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlContent::Text(text) => out.push_str(text),
                XmlContent::Element(node) => node.collect_text(out),
            }
        }
    }

    /// Trimmed text of the first descendant named `name`, `None` when the
    /// element is missing or blank
    pub fn first_text(&self, name: &str) -> Option<String> {
        self.first(name)
            .map(XmlNode::text)
            .filter(|text| !text.is_empty())
    }
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    stack: Vec<&'a XmlNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(node.child_elements());
        self.stack[start..].reverse();
        Some(node)
    }
}

/// Parse a document into a tree
///
/// The returned node is an unnamed document root whose children are the
/// top-level elements. Mismatched or unclosed tags are reported as
/// [`SearchError::XmlError`].
pub fn parse_document(xml: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut stack = vec![XmlNode::default()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(XmlNode::from_start(e)?),
            Ok(Event::Empty(ref e)) => {
                let node = XmlNode::from_start(e)?;
                push_child(&mut stack, XmlContent::Element(node))?;
            }
            Ok(Event::End(ref e)) => {
                if stack.len() < 2 {
                    return Err(SearchError::XmlError(format!(
                        "unexpected closing tag </{}> at position {}",
                        String::from_utf8_lossy(e.name().as_ref()),
                        reader.buffer_position()
                    )));
                }
                if let Some(node) = stack.pop() {
                    push_child(&mut stack, XmlContent::Element(node))?;
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| SearchError::XmlError(err.to_string()))?;
                if !text.is_empty() {
                    push_child(&mut stack, XmlContent::Text(text.into_owned()))?;
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                push_child(&mut stack, XmlContent::Text(text))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SearchError::XmlError(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            // Declarations, DOCTYPE, comments and processing instructions
            Ok(_) => {}
        }
    }

    if stack.len() > 1 {
        let unclosed = stack.last().map(|node| node.name.clone()).unwrap_or_default();
        return Err(SearchError::XmlError(format!(
            "unclosed element <{unclosed}> at end of document"
        )));
    }

    let root = stack.pop().unwrap_or_default();
    debug!(top_level_elements = root.child_elements().count(), "Parsed XML document");
    Ok(root)
}

fn push_child(stack: &mut [XmlNode], child: XmlContent) -> Result<()> {
    let parent = stack
        .last_mut()
        .ok_or_else(|| SearchError::XmlError("element outside of document".to_string()))?;
    parent.children.push(child);
    Ok(())
}

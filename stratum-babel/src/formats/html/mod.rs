//! HTML format implementation (import only)
//!
//! # Library Choice
//!
//! HTML is parsed with `html5ever` into a `markup5ever_rcdom` tree. html5ever
//! is a browser-grade HTML5 parser that recovers from malformed input the way
//! browsers do, so every input produces a document: there is no syntax error
//! path. The resulting DOM always has an `<html>` root with `<head>` and
//! `<body>`, which therefore show up in the imported tree.
//!
//! The DOM is adapted to [`SourceTree`] and imported with the same rules as
//! XML (see [`crate::common::import`]). Element names are local names.

use crate::common::import::{import_document, ImportOptions, SourceTree};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Node;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// An element of an rcdom tree.
#[derive(Clone)]
pub struct HtmlElement(pub Handle);

impl HtmlElement {
    fn is_element(handle: &Handle) -> bool {
        matches!(handle.data, NodeData::Element { .. })
    }
}

impl SourceTree for HtmlElement {
    fn tag(&self) -> String {
        match &self.0.data {
            NodeData::Element { name, .. } => name.local.to_string(),
            _ => String::new(),
        }
    }

    fn attributes(&self) -> Vec<(String, String)> {
        match &self.0.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children
            .borrow()
            .iter()
            .filter(|child| Self::is_element(child))
            .cloned()
            .map(HtmlElement)
            .collect()
    }

    fn text(&self) -> Option<String> {
        let mut text = String::new();
        for child in self.0.children.borrow().iter() {
            match &child.data {
                NodeData::Text { contents } => text.push_str(&contents.borrow()),
                NodeData::Element { .. } => break,
                _ => {}
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Parses `source` as an HTML document and imports it with `options`.
pub fn parse_html(source: &str, options: &ImportOptions) -> Result<Node, FormatError> {
    let dom = parse_document(RcDom::default(), Default::default()).one(source);
    let root = dom
        .document
        .children
        .borrow()
        .iter()
        .find(|child| HtmlElement::is_element(child))
        .cloned()
        .map(HtmlElement)
        .ok_or_else(|| FormatError::Syntax("HTML document has no root element".to_string()))?;
    Ok(import_document(&root, options)?)
}

/// Format implementation for HTML documents
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: ImportOptions,
}

impl HtmlFormat {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 documents (import only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parse_html(source, &self.options)
    }
}

//! XML format implementation (import only)
//!
//! XML is read with `roxmltree`, a read-only DOM that keeps the whole document
//! in memory and exposes exactly what the importer needs: element names,
//! ordered attributes, ordered children and text. The DOM is adapted to
//! [`SourceTree`] and handed to [`crate::common::import`].
//!
//! # Mapping
//!
//! | XML                               | Node                                  |
//! |-----------------------------------|---------------------------------------|
//! | root element `<project>`          | single top-level key `project`        |
//! | child element                     | entry keyed by the local tag name     |
//! | repeated sibling tags             | sequence in document order            |
//! | text-only element                 | scalar (trimmed)                      |
//! | text next to child elements       | `#text` entry                         |
//! | attributes                        | dropped, or `@name` entries if enabled |
//! | comments, processing instructions | dropped                               |
//!
//! Namespaces are stripped: `<m:project xmlns:m="...">` imports as `project`.
//! Only the text before the first child element is considered, text between
//! or after child elements is ignored.

use crate::common::import::{import_document, ImportOptions, SourceTree};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Node;

/// An element of a parsed roxmltree document.
#[derive(Debug, Clone, Copy)]
pub struct XmlElement<'a, 'input>(pub roxmltree::Node<'a, 'input>);

impl<'a, 'input> SourceTree for XmlElement<'a, 'input> {
    fn tag(&self) -> String {
        self.0.tag_name().name().to_string()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .children()
            .filter(|child| child.is_element())
            .map(XmlElement)
            .collect()
    }

    fn text(&self) -> Option<String> {
        self.0.text().map(str::to_string)
    }
}

/// Parses `source` as XML and imports it with `options`.
pub fn parse_xml(source: &str, options: &ImportOptions) -> Result<Node, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::Syntax(format!("XML parsing error: {e}")))?;
    let root = XmlElement(doc.root_element());
    Ok(import_document(&root, options)?)
}

/// Format implementation for XML documents
#[derive(Debug, Clone, Default)]
pub struct XmlFormat {
    options: ImportOptions,
}

impl XmlFormat {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }
}

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "XML documents (import only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml", "pom"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parse_xml(source, &self.options)
    }
}

//! Conversion of hierarchical documents into indented outlines
//!
//!     This crate reads tree-shaped documents (XML, HTML, JSON, indented outline text) into a
//!     single generic tree, the Node, and writes that tree back out as outline text, JSON or a
//!     visual tree. The typical use is turning a Maven pom.xml into something that reads like
//!     YAML.
//!
//!     TLDR: For format authors:
//!         - Babel never parses markup itself, it relies on the format's library (roxmltree, html5ever, serde_json)
//!         - Element based formats only adapt their DOM to the SourceTree trait, the import rules live in common/import.rs
//!         - The outline format is the one format we parse and serialize by hand (formats/outline)
//!         - Each format carries unit tests next to the code, cross format scenarios live in tests/
//!
//! Architecture
//!
//!     The goal here is to, as much as possible, split what is the common logic for multiple formats
//!     into a format agnostic layer. Every format reads into and writes from the Node tree
//!     (./ir/nodes.rs), and the shared algorithms (importing element trees, normalizing outlines)
//!     live in ./common. Format code stays focused on adapting its library's data model.
//!
//!     This is a pure lib, that is, it powers the stratum cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it to std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation (when hand written)
//!     │   │   ├── serializer.rs   # Serializer implementation (when hand written)
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!     ├── ir                      # The Node tree
//!     ├── common                  # Import and normalization
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Parsing an outline is a single pass over the lines with a stack of open blocks. Blocks are
//!     parsed as mappings and bare values land in a leaf bucket on the enclosing mapping, since a
//!     block cannot know whether it is a list until it is closed. Normalization (./common/normalize.rs)
//!     then turns every mapping holding only bucketed leaves into a sequence.
//!
//!     Importing element trees (./common/import.rs) is the other half: element names become keys,
//!     repeated sibling names become sequences and text-only elements become scalars.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. formats should have a
//!     parse() and serialize() method, a name and file extensions. See the trait def [./format.rs ]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: outline, xml, html, json, treeviz
//!
//!     Round tripping is structural and only holds for outline text: the markup formats are import
//!     only and drop attributes, comments and mixed content.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub mod common;
pub mod ir;

pub use error::{FormatError, ImportError, ParseError};
pub use format::Format;
pub use ir::nodes::Node;
pub use registry::FormatRegistry;

/// Parses outline text into a normalized Node tree.
///
/// Blocks holding only bare values come back as sequences.
pub fn parse_outline(source: &str) -> Result<Node, ParseError> {
    formats::outline::parser::parse_str(source).map(common::normalize::normalize)
}

/// Converts an XML document to outline text with default settings.
///
/// Attributes, comments and processing instructions are dropped.
pub fn xml_to_outline(source: &str) -> Result<String, FormatError> {
    let node = formats::xml::parse_xml(source, &common::import::ImportOptions::default())?;
    Ok(formats::outline::serializer::serialize(&node))
}

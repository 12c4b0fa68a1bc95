//! Source-tree import
//!
//! Converts any tag/attributes/children/text tree (an XML or HTML document, or
//! a hand-built [`Element`]) into the generic [`Node`] model.
//!
//! # Shape Rules
//!
//! - Children become mapping entries keyed by their tag, in document order.
//! - A tag seen a second time among siblings turns its entry into a sequence
//!   holding every occurrence in order. A tag seen once stays a plain entry:
//!   repetition, not cardinality, decides.
//! - Text that is not pure whitespace is trimmed. An element with no entries
//!   collapses to that text as a scalar; otherwise the text is stored under
//!   the text key (`#text` by default).
//! - Attributes are dropped unless [`ImportOptions::include_attributes`] is
//!   set, in which case each one is stored as `<prefix><name>` before the
//!   children.
//!
//! ```text
//! <a><x>1</x><y/><x>2</x></a>    ->    a:
//!                                         x:
//!                                           - 1
//!                                           - 2
//!                                         y:
//! ```

use crate::error::ImportError;
use crate::ir::nodes::{Mapping, Node};
use std::collections::HashMap;

/// Recursion bound used when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A hierarchical document owned by someone else.
///
/// Implementors must describe an acyclic tree; the importer only guards
/// against cycles with a depth bound.
pub trait SourceTree: Sized {
    /// Tag name of this node
    fn tag(&self) -> String;

    /// Attributes in document order
    fn attributes(&self) -> Vec<(String, String)>;

    /// Child elements in document order
    fn children(&self) -> Vec<Self>;

    /// Text preceding the first child element, if any
    fn text(&self) -> Option<String>;
}

/// An owned, in-memory source tree.
///
/// Imported through `&Element`, so children are visited by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl<'e> SourceTree for &'e Element {
    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.attributes.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }
}

/// Knobs for the importer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Keep attributes as prefixed scalar entries
    pub include_attributes: bool,
    /// Prefix prepended to attribute names when they are kept
    pub attribute_prefix: String,
    /// Key under which text is stored next to child entries
    pub text_key: String,
    /// Deepest nesting accepted before the tree is declared cyclic
    pub max_depth: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            include_attributes: false,
            attribute_prefix: "@".to_string(),
            text_key: "#text".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Imports `node` with the default options.
pub fn import_tree<T: SourceTree>(node: &T) -> Result<Node, ImportError> {
    import_tree_with_options(node, &ImportOptions::default())
}

/// Imports the contents of `node`: its children, text and (optionally)
/// attributes. The node's own tag is not part of the result.
pub fn import_tree_with_options<T: SourceTree>(
    node: &T,
    options: &ImportOptions,
) -> Result<Node, ImportError> {
    import_node(node, options, 0)
}

/// Imports a whole document, keeping the root tag as the single top-level key.
pub fn import_document<T: SourceTree>(
    root: &T,
    options: &ImportOptions,
) -> Result<Node, ImportError> {
    let tag = root.tag();
    tracing::debug!(root = %tag, "importing source tree");
    let mut document = Mapping::new();
    document.insert(tag, import_node(root, options, 0)?);
    Ok(Node::Mapping(document))
}

fn import_node<T: SourceTree>(
    node: &T,
    options: &ImportOptions,
    depth: usize,
) -> Result<Node, ImportError> {
    if depth > options.max_depth {
        return Err(ImportError::CyclicTree {
            tag: node.tag(),
            max_depth: options.max_depth,
        });
    }

    let mut entries = Entries::default();

    if options.include_attributes {
        for (name, value) in node.attributes() {
            entries.set(
                format!("{}{}", options.attribute_prefix, name),
                Node::Scalar(value),
            );
        }
    }

    for child in node.children() {
        let value = import_node(&child, options, depth + 1)?;
        entries.append(child.tag(), value);
    }

    let text = node
        .text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    Ok(match text {
        Some(text) if entries.is_empty() => Node::Scalar(text),
        Some(text) => {
            entries.set(options.text_key.clone(), Node::Scalar(text));
            entries.into_node()
        }
        None => entries.into_node(),
    })
}

/// Sibling entries of one element, indexed by key while they are collected.
#[derive(Default)]
struct Entries {
    items: Vec<(String, Node)>,
    positions: HashMap<String, usize>,
}

impl Entries {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stores `value` under `key`, replacing an earlier value in place.
    fn set(&mut self, key: String, value: Node) {
        match self.positions.get(&key) {
            Some(&index) => self.items[index].1 = value,
            None => self.push(key, value),
        }
    }

    /// Adds `value` under `key`, promoting the entry to a sequence on repetition.
    fn append(&mut self, key: String, value: Node) {
        let Some(&index) = self.positions.get(&key) else {
            self.push(key, value);
            return;
        };
        match &mut self.items[index].1 {
            Node::Sequence(items) => items.push(value),
            existing => {
                let first = std::mem::replace(existing, Node::Sequence(Vec::new()));
                *existing = Node::Sequence(vec![first, value]);
            }
        }
    }

    fn push(&mut self, key: String, value: Node) {
        self.positions.insert(key.clone(), self.items.len());
        self.items.push((key, value));
    }

    fn into_node(self) -> Node {
        Node::Mapping(Mapping::from_unique_entries(self.items))
    }
}

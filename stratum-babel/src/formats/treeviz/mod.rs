//! Treeviz formatter for Node trees
//!
//! Treeviz is a read-only visual representation of a tree, one node per line,
//! meant for inspecting imported documents in a terminal.
//!
//! - mapping keys are branches, labelled with the key
//! - a key holding a scalar is a leaf, labelled `key: value`
//! - bare scalars (sequence items, leftover leaves) are leaves labelled with the value
//! - mappings and sequences inside a sequence are expanded into the parent,
//!   so a list of records shows the records' keys directly under the list key
//!
//! Each level is indented by two columns and drawn with box connectors:
//!
//! ```text
//! └─ project
//!   ├─ modelVersion: 4.0.0
//!   └─ dependencies
//!     ├─ groupId: org.springframework.boot
//!     └─ groupId: org.projectlombok
//! ```

use crate::error::FormatError;
use crate::format::{bool_option, reject_unknown_options, usize_option, Format};
use crate::ir::nodes::Node;
use std::collections::HashMap;

/// Rendering switches for the tree view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Show scalar values. When off, keys are shown alone and bare values are hidden.
    pub show_scalars: bool,
    /// Number of levels to draw; deeper branches are drawn without children.
    pub max_depth: Option<usize>,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            show_scalars: true,
            max_depth: None,
        }
    }
}

enum Row<'n> {
    Branch(&'n str, &'n Node),
    Leaf(String),
}

fn collect_rows<'n>(node: &'n Node, options: &TreevizOptions, rows: &mut Vec<Row<'n>>) {
    match node {
        Node::Mapping(mapping) => {
            for (key, value) in mapping.iter() {
                match value {
                    Node::Scalar(text) if options.show_scalars => {
                        rows.push(Row::Leaf(format!("{key}: {text}")))
                    }
                    Node::Scalar(_) => rows.push(Row::Leaf(key.to_string())),
                    Node::Mapping(_) | Node::Sequence(_) => rows.push(Row::Branch(key, value)),
                }
            }
            if let Some(bucket) = mapping.leaf_bucket() {
                for item in bucket.iter() {
                    collect_item(item, options, rows);
                }
            }
        }
        Node::Sequence(items) => {
            for item in items {
                collect_item(item, options, rows);
            }
        }
        Node::Scalar(_) => collect_item(node, options, rows),
    }
}

fn collect_item<'n>(item: &'n Node, options: &TreevizOptions, rows: &mut Vec<Row<'n>>) {
    match item {
        Node::Scalar(text) => {
            if options.show_scalars {
                rows.push(Row::Leaf(text.clone()));
            }
        }
        Node::Mapping(_) | Node::Sequence(_) => collect_rows(item, options, rows),
    }
}

fn format_rows(
    node: &Node,
    prefix: &str,
    depth: usize,
    options: &TreevizOptions,
    output: &mut String,
) {
    let mut rows = Vec::new();
    collect_rows(node, options, &mut rows);

    let count = rows.len();
    for (index, row) in rows.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        match row {
            Row::Leaf(label) => output.push_str(&format!("{prefix}{connector} {label}\n")),
            Row::Branch(key, value) => {
                output.push_str(&format!("{prefix}{connector} {key}\n"));
                if options.max_depth.map_or(true, |max| depth < max) {
                    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
                    format_rows(value, &child_prefix, depth + 1, options, output);
                }
            }
        }
    }
}

/// Renders `node` as a connector tree with default options.
pub fn to_treeviz_str(node: &Node) -> String {
    to_treeviz_str_with_options(node, &TreevizOptions::default())
}

/// Renders `node` as a connector tree.
pub fn to_treeviz_str_with_options(node: &Node, options: &TreevizOptions) -> String {
    let mut output = String::new();
    format_rows(node, "", 1, options, &mut output);
    output
}

/// Format implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormat {
    options: TreevizOptions,
}

impl TreevizFormat {
    pub fn new(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(node, &self.options))
    }

    /// # Parameters
    ///
    /// - `"show-scalars"`: `"false"` hides scalar values
    /// - `"max-depth"`: number of levels to draw
    fn serialize_with_options(
        &self,
        node: &Node,
        params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), params, &["show-scalars", "max-depth"])?;
        let options = TreevizOptions {
            show_scalars: bool_option(params, "show-scalars")?.unwrap_or(self.options.show_scalars),
            max_depth: usize_option(params, "max-depth")?.or(self.options.max_depth),
        };
        Ok(to_treeviz_str_with_options(node, &options))
    }
}

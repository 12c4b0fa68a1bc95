//! Outline serialization (Node → indented text)
//!
//! | Node                       | Output                                 |
//! |----------------------------|----------------------------------------|
//! | mapping entry, scalar      | `key: value`                           |
//! | mapping entry, container   | `key:` then the value one level deeper |
//! | sequence item, scalar      | `- value`                              |
//! | sequence item, container   | `-` then the item one level deeper     |
//! | top-level scalar           | `value`                                |
//!
//! Nothing is quoted or escaped. A scalar containing `": "`, starting with
//! `"- "` or spanning several lines will not read back as the same tree.

use crate::ir::nodes::{LeafBucket, Mapping, Node};

/// Indent unit used when none is given
pub const DEFAULT_INDENT_UNIT: usize = 2;

/// Renders `node` with the default two-space indent.
pub fn serialize(node: &Node) -> String {
    serialize_with_indent(node, DEFAULT_INDENT_UNIT)
}

/// Renders `node` with `indent_unit` spaces per level (at least one).
pub fn serialize_with_indent(node: &Node, indent_unit: usize) -> String {
    let mut serializer = OutlineSerializer::new(indent_unit);
    serializer.write_node(node, 0);
    serializer.output
}

struct OutlineSerializer {
    indent_unit: usize,
    output: String,
}

impl OutlineSerializer {
    fn new(indent_unit: usize) -> Self {
        Self {
            indent_unit: indent_unit.max(1),
            output: String::new(),
        }
    }

    fn pad(&mut self, depth: usize) {
        self.output
            .extend(std::iter::repeat(' ').take(depth * self.indent_unit));
    }

    fn write_node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Mapping(mapping) => self.write_mapping(mapping, depth),
            Node::Sequence(items) => self.write_items(items.iter(), depth),
            Node::Scalar(value) => {
                self.pad(depth);
                self.output.push_str(value);
                self.output.push('\n');
            }
        }
    }

    fn write_mapping(&mut self, mapping: &Mapping, depth: usize) {
        for (key, value) in mapping.iter() {
            self.pad(depth);
            self.output.push_str(key);
            match value {
                Node::Scalar(text) => {
                    self.output.push_str(": ");
                    self.output.push_str(text);
                    self.output.push('\n');
                }
                Node::Mapping(_) | Node::Sequence(_) => {
                    self.output.push_str(":\n");
                    self.write_node(value, depth + 1);
                }
            }
        }
        if let Some(bucket) = mapping.leaf_bucket() {
            self.write_bucket(bucket, depth);
        }
    }

    fn write_bucket(&mut self, bucket: &LeafBucket, depth: usize) {
        self.write_items(bucket.iter(), depth);
    }

    fn write_items<'n>(&mut self, items: impl Iterator<Item = &'n Node>, depth: usize) {
        for item in items {
            self.pad(depth);
            match item {
                Node::Scalar(text) => {
                    self.output.push_str("- ");
                    self.output.push_str(text);
                    self.output.push('\n');
                }
                Node::Mapping(_) | Node::Sequence(_) => {
                    self.output.push_str("-\n");
                    self.write_node(item, depth + 1);
                }
            }
        }
    }
}

//! Core data structures for the generic tree.
//!
//! A [`Node`] is one of three variants. Mappings keep their keys in insertion
//! order and never hold the same key twice. The parser's deferred "is this
//! block a list?" decision lives in [`LeafBucket`], a field of the mapping
//! rather than a magic key, so no document key can ever be mistaken for it.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Key used when a mixed mapping's leaf bucket is exported to key/value formats.
pub const LEAF_BUCKET_EXPORT_KEY: &str = "-";

/// A generic tree value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Scalar(String),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(value.into())
    }

    pub fn empty_mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Looks up `key` when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Short name of the variant, used in diagnostics and tree views.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(_) => "scalar",
        }
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Node::Mapping(mapping)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Object(object) => Node::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::String(text) => Node::Scalar(text),
            Value::Number(number) => Node::Scalar(number.to_string()),
            Value::Bool(flag) => Node::Scalar(flag.to_string()),
            Value::Null => Node::Scalar(String::new()),
        }
    }
}

/// Leaf values collected under a mapping before it is known whether the
/// enclosing block is a plain list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafBucket(Vec<Node>);

impl LeafBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl FromIterator<Node> for LeafBucket {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        LeafBucket(iter.into_iter().collect())
    }
}

impl IntoIterator for LeafBucket {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Ordered string-keyed entries plus an optional pending leaf bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
    leaves: Option<LeafBucket>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(entries: Vec<(String, Node)>, leaves: Option<LeafBucket>) -> Self {
        let mut mapping = Mapping {
            entries: Vec::with_capacity(entries.len()),
            leaves,
        };
        for (key, value) in entries {
            mapping.insert(key, value);
        }
        mapping
    }

    /// Builds a mapping from entries whose keys are already distinct.
    pub(crate) fn from_unique_entries(entries: Vec<(String, Node)>) -> Self {
        Mapping {
            entries,
            leaves: None,
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// An existing key keeps its position and has its value replaced; the old
    /// value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of keyed entries (the leaf bucket is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are neither keyed entries nor a leaf bucket.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.leaves.is_none()
    }

    pub fn leaf_bucket(&self) -> Option<&LeafBucket> {
        self.leaves.as_ref()
    }

    /// Appends a leaf, creating the bucket on first use.
    pub fn push_leaf(&mut self, node: Node) {
        self.leaves.get_or_insert_with(LeafBucket::new).push(node);
    }

    /// True when the only content is the leaf bucket, i.e. the block turned
    /// out to be a plain list.
    pub fn is_pure_leaf_bucket(&self) -> bool {
        self.entries.is_empty() && self.leaves.is_some()
    }

    pub fn into_parts(self) -> (Vec<(String, Node)>, Option<LeafBucket>) {
        (self.entries, self.leaves)
    }
}

impl FromIterator<(String, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(mapping) => mapping.serialize(serializer),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Scalar(value) => serializer.serialize_str(value),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + usize::from(self.leaves.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        if let Some(bucket) = &self.leaves {
            map.serialize_entry(LEAF_BUCKET_EXPORT_KEY, &bucket.0)?;
        }
        map.end()
    }
}

//! Leaf-bucket normalization.
//!
//! The outline parser cannot know, when it opens a block, whether the block
//! will hold keyed entries or only bare values. It therefore opens every block
//! as a [`Mapping`] and parks bare values in the mapping's leaf bucket. This
//! pass resolves that ambiguity after the fact:
//!
//! ```text
//! root:              {root: {<bucket>: [x, y]}}   ->   {root: [x, y]}
//!   x
//!   y
//! ```
//!
//! Children are normalized before their parent, so a collapsed sequence can
//! itself contain collapsed sequences. A mapping that holds keyed entries *and*
//! a bucket keeps both: only a pure bucket is a list.

use crate::ir::nodes::{LeafBucket, Mapping, Node};

/// Collapses every pure leaf-bucket mapping into a sequence.
///
/// Total and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(node: Node) -> Node {
    match node {
        Node::Mapping(mapping) => normalize_mapping(mapping),
        Node::Sequence(items) => Node::Sequence(items.into_iter().map(normalize).collect()),
        Node::Scalar(value) => Node::Scalar(value),
    }
}

fn normalize_mapping(mapping: Mapping) -> Node {
    let (entries, leaves) = mapping.into_parts();
    let entries: Vec<(String, Node)> = entries
        .into_iter()
        .map(|(key, value)| (key, normalize(value)))
        .collect();
    let leaves: Option<LeafBucket> =
        leaves.map(|bucket| bucket.into_iter().map(normalize).collect());

    match leaves {
        Some(bucket) if entries.is_empty() => {
            tracing::trace!(items = bucket.len(), "collapsing leaf bucket into sequence");
            Node::Sequence(bucket.into_vec())
        }
        leaves => Node::Mapping(Mapping::from_parts(entries, leaves)),
    }
}

/// Reports whether `node` contains no mapping that [`normalize`] would collapse.
pub fn is_normalized(node: &Node) -> bool {
    match node {
        Node::Mapping(mapping) => {
            !mapping.is_pure_leaf_bucket()
                && mapping.iter().all(|(_, value)| is_normalized(value))
                && mapping
                    .leaf_bucket()
                    .map_or(true, |bucket| bucket.iter().all(is_normalized))
        }
        Node::Sequence(items) => items.iter().all(is_normalized),
        Node::Scalar(_) => true,
    }
}

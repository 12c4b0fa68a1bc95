//! The generic tree model shared by every format.
//!
//! Parsers and importers build [`nodes::Node`] trees; the normalizer and the
//! serializers read them. Nothing else in the crate holds document state.

pub mod nodes;

pub use nodes::{LeafBucket, Mapping, Node};

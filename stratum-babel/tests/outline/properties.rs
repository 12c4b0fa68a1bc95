//! Property tests for parse, normalize and serialize.

use proptest::prelude::*;
use stratum_babel::common::normalize::{is_normalized, normalize};
use stratum_babel::formats::outline::parser::parse;
use stratum_babel::formats::outline::serializer::{serialize, serialize_with_indent};
use stratum_babel::ir::nodes::{LeafBucket, Mapping};
use stratum_babel::{parse_outline, Node};

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn scalar() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9._]{0,8}:?"
}

/// Trees the outline format can represent: no empty containers and no
/// scalars that would read back as syntax.
fn node() -> impl Strategy<Value = Node> {
    scalar()
        .prop_map(Node::Scalar)
        .prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 1..4).prop_map(Node::Sequence),
                prop::collection::vec((key(), inner), 1..4)
                    .prop_map(|entries| Node::Mapping(entries.into_iter().collect::<Mapping>())),
            ]
        })
}

fn document() -> impl Strategy<Value = Node> {
    prop::collection::vec((key(), node()), 1..4)
        .prop_map(|entries| Node::Mapping(entries.into_iter().collect::<Mapping>()))
}

/// Trees as the parser leaves them: mappings may carry a leaf bucket, alone
/// or next to keyed entries, and bucket items may hold buckets of their own.
fn raw_node() -> impl Strategy<Value = Node> {
    scalar()
        .prop_map(Node::Scalar)
        .prop_recursive(4, 48, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Node::Sequence),
                (
                    prop::collection::vec((key(), inner.clone()), 0..3),
                    prop::option::of(prop::collection::vec(inner, 1..4)),
                )
                    .prop_map(|(entries, leaves)| {
                        let bucket = leaves.map(|items| items.into_iter().collect::<LeafBucket>());
                        Node::Mapping(Mapping::from_parts(entries, bucket))
                    }),
            ]
        })
}

/// Arbitrary outline lines, valid or not.
fn outline_line() -> impl Strategy<Value = String> {
    let body = prop_oneof![
        Just("-".to_string()),
        scalar().prop_map(|value| format!("- {value}")),
        key().prop_map(|key| format!("{key}:")),
        (key(), scalar()).prop_map(|(key, value)| format!("{key}: {value}")),
        scalar(),
        Just(String::new()),
    ];
    (0usize..4, body).prop_map(|(level, body)| format!("{}{}", "  ".repeat(level), body))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(doc in document()) {
        let once = normalize(doc);
        prop_assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn normalize_is_idempotent_on_bucket_trees(raw in raw_node()) {
        let once = normalize(raw);
        prop_assert!(is_normalized(&once));
        prop_assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn serialized_trees_parse_back(doc in document(), indent in 1usize..5) {
        let text = serialize_with_indent(&doc, indent);
        prop_assert_eq!(parse_outline(&text).unwrap(), doc);
    }

    #[test]
    fn parse_then_normalize_leaves_no_bucket_block(lines in prop::collection::vec(outline_line(), 0..12)) {
        if let Ok(raw) = parse(&lines) {
            let normalized = normalize(raw);
            prop_assert!(is_normalized(&normalized));
            prop_assert_eq!(normalize(normalized.clone()), normalized);
        }
    }

    #[test]
    fn serialize_is_stable_after_one_pass(doc in document()) {
        let text = serialize(&doc);
        let again = serialize(&parse_outline(&text).unwrap());
        prop_assert_eq!(again, text);
    }
}

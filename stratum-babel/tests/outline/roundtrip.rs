use stratum_babel::formats::outline::serializer::serialize;
use stratum_babel::ir::nodes::Mapping;
use stratum_babel::{parse_outline, FormatRegistry, Node};

const POM_OUTLINE: &str = "\
project:
  modelVersion: 4.0.0
  parent:
    groupId: org.springframework.boot
    version: 3.2.0
  modules:
    - api
    - web
  dependencies:
    dependency:
      -
        groupId: org.springframework.boot
        artifactId: spring-boot-starter-web
      -
        groupId: org.projectlombok
        artifactId: lombok
";

#[test]
fn test_canonical_text_is_reproduced() {
    let node = parse_outline(POM_OUTLINE).unwrap();
    assert_eq!(serialize(&node), POM_OUTLINE);
}

#[test]
fn test_structure_survives_reindenting() {
    let registry = FormatRegistry::with_defaults();
    let node = registry.parse(POM_OUTLINE, "outline").unwrap();

    let mut options = std::collections::HashMap::new();
    options.insert("indent-unit".to_string(), "4".to_string());
    let wide = registry
        .serialize_with_options(&node, "outline", &options)
        .unwrap();

    assert!(wide.contains("\n    modelVersion: 4.0.0\n"));
    assert_eq!(registry.parse(&wide, "outline").unwrap(), node);
}

#[test]
fn test_scalar_with_trailing_colon_round_trips() {
    let mut inner = Mapping::new();
    inner.insert("k", Node::scalar("foo:"));
    inner.insert("z", Node::scalar("1"));
    let mut root = Mapping::new();
    root.insert("root", Node::Mapping(inner));
    let doc = Node::Mapping(root);

    let text = serialize(&doc);
    assert_eq!(text, "root:\n  k: foo:\n  z: 1\n");
    assert_eq!(parse_outline(&text).unwrap(), doc);
}

#[test]
fn test_bare_leaves_come_back_as_dash_items() {
    let node = parse_outline("root:\n  x\n  y\n").unwrap();
    assert_eq!(serialize(&node), "root:\n  - x\n  - y\n");
}

#[test]
fn test_empty_sequence_does_not_round_trip() {
    let mut root = Mapping::new();
    root.insert("items", Node::Sequence(vec![]));
    root.insert("after", Node::scalar("1"));

    let text = serialize(&Node::Mapping(root));
    assert_eq!(text, "items:\nafter: 1\n");
    assert_eq!(
        parse_outline(&text).unwrap().get("items"),
        Some(&Node::empty_mapping())
    );
}

use stratum_babel::common::normalize::{is_normalized, normalize};
use stratum_babel::formats::outline::parser::{parse, parse_with_options, ParseOptions};
use stratum_babel::ir::nodes::Mapping;
use stratum_babel::{parse_outline, FormatRegistry, Node, ParseError};

fn mapping(entries: Vec<(&str, Node)>) -> Node {
    Node::Mapping(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<Mapping>(),
    )
}

fn seq(items: &[&str]) -> Node {
    Node::Sequence(items.iter().map(|item| Node::scalar(*item)).collect())
}

#[test]
fn test_keyed_entries() {
    let node = normalize(parse(["root:", "  a: 1", "  b: 2"]).unwrap());
    assert_eq!(
        node,
        mapping(vec![(
            "root",
            mapping(vec![("a", Node::scalar("1")), ("b", Node::scalar("2"))])
        )])
    );
}

#[test]
fn test_pure_leaf_block_becomes_sequence() {
    let node = normalize(parse(["root:", "  x", "  y"]).unwrap());
    assert_eq!(node, mapping(vec![("root", seq(&["x", "y"]))]));
}

#[test]
fn test_single_leaf_stays_a_sequence() {
    let node = normalize(parse(["root:", "  child:", "    x"]).unwrap());
    assert_eq!(
        node,
        mapping(vec![("root", mapping(vec![("child", seq(&["x"]))]))])
    );
}

#[test]
fn test_raw_parse_keeps_the_bucket() {
    let raw = parse(["root:", "  x"]).unwrap();
    assert!(!is_normalized(&raw));
    assert!(is_normalized(&normalize(raw)));
}

#[test]
fn test_dash_items_and_records() {
    let text = "\
project:
  modules:
    - api
    - web
  dependencies:
    -
      groupId: org.projectlombok
      optional: true
";
    let node = parse_outline(text).unwrap();
    let project = node.get("project").unwrap();

    assert_eq!(project.get("modules"), Some(&seq(&["api", "web"])));
    assert_eq!(
        project.get("dependencies"),
        Some(&Node::Sequence(vec![mapping(vec![
            ("groupId", Node::scalar("org.projectlombok")),
            ("optional", Node::scalar("true")),
        ])]))
    );
}

#[test]
fn test_blank_lines_are_ignored() {
    let node = parse_outline("root:\n\n  a: 1\n   \n  b: 2\n").unwrap();
    assert_eq!(node.get("root").and_then(|r| r.get("b")), Some(&Node::scalar("2")));
}

#[test]
fn test_value_split_at_first_separator() {
    let node = parse_outline("url: http://host: 80\n").unwrap();
    assert_eq!(node.get("url"), Some(&Node::scalar("http://host: 80")));
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(Vec::<String>::new()), Err(ParseError::EmptyDocument));
    assert_eq!(parse(["", "   "]), Err(ParseError::EmptyDocument));
}

#[test]
fn test_indented_first_line_is_malformed() {
    assert!(matches!(
        parse(["  a: 1"]),
        Err(ParseError::MalformedIndentation { line: 1, .. })
    ));
}

#[test]
fn test_duplicate_key_is_malformed() {
    assert!(matches!(
        parse(["root:", "  a: 1", "  a: 2"]),
        Err(ParseError::MalformedIndentation { line: 3, .. })
    ));
}

#[test]
fn test_strict_dedent() {
    let lines = ["root:", "    a: 1", "  b: 2"];
    assert!(parse(lines).is_ok());

    let strict = ParseOptions {
        strict_dedent: true,
    };
    assert!(matches!(
        parse_with_options(lines, &strict),
        Err(ParseError::MalformedIndentation { line: 3, .. })
    ));
}

#[test]
fn test_registry_parses_outline() {
    let registry = FormatRegistry::with_defaults();
    let node = registry.parse("root:\n  x\n", "outline").unwrap();
    assert_eq!(node, mapping(vec![("root", seq(&["x"]))]));
}

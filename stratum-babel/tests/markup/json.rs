use stratum_babel::{FormatRegistry, Node};

#[test]
fn test_xml_to_json() {
    let registry = FormatRegistry::with_defaults();
    let node = registry
        .parse(
            "<project><modules><module>api</module><module>web</module></modules></project>",
            "xml",
        )
        .unwrap();
    let json = registry.serialize(&node, "json").unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"project": {"modules": {"module": ["api", "web"]}}})
    );
}

#[test]
fn test_json_to_outline() {
    let registry = FormatRegistry::with_defaults();
    let node = registry
        .parse(r#"{"server": {"port": 8080, "hosts": ["a", "b"]}}"#, "json")
        .unwrap();

    assert_eq!(
        registry.serialize(&node, "outline").unwrap(),
        "server:\n  port: 8080\n  hosts:\n    - a\n    - b\n"
    );
}

#[test]
fn test_json_scalars_are_text() {
    let registry = FormatRegistry::with_defaults();
    let node = registry.parse("[1, true]", "json").unwrap();
    assert_eq!(
        node,
        Node::Sequence(vec![Node::scalar("1"), Node::scalar("true")])
    );
}

use stratum_babel::common::import::ImportOptions;
use stratum_babel::formats::xml::{parse_xml, XmlFormat};
use stratum_babel::{xml_to_outline, Format, FormatError, FormatRegistry, Node};

const POM: &str = include_str!("fixtures/pom.xml");

#[test]
fn test_pom_to_outline() {
    let outline = xml_to_outline(POM).expect("Failed to convert");
    insta::assert_snapshot!(outline, @r###"
    project:
      modelVersion: 4.0.0
      parent:
        groupId: org.springframework.boot
        artifactId: spring-boot-starter-parent
        version: 3.2.0
        relativePath:
      groupId: com.example
      artifactId: demo
      version: 0.0.1-SNAPSHOT
      properties:
        java.version: 17
      dependencies:
        dependency:
          -
            groupId: org.springframework.boot
            artifactId: spring-boot-starter-web
          -
            groupId: org.projectlombok
            artifactId: lombok
            optional: true
      build:
        plugins:
          plugin:
            groupId: org.springframework.boot
            artifactId: spring-boot-maven-plugin
    "###);
}

#[test]
fn test_pom_outline_reads_back() {
    let registry = FormatRegistry::with_defaults();
    let imported = registry.parse(POM, "xml").unwrap();
    let text = registry.serialize(&imported, "outline").unwrap();

    assert_eq!(registry.parse(&text, "outline").unwrap(), imported);
}

#[test]
fn test_repeated_tags_become_sequence() {
    let node = parse_xml(
        "<modules><module>api</module><module>web</module></modules>",
        &ImportOptions::default(),
    )
    .unwrap();
    assert_eq!(
        node.get("modules").and_then(|m| m.get("module")),
        Some(&Node::Sequence(vec![Node::scalar("api"), Node::scalar("web")]))
    );
}

#[test]
fn test_attributes_are_optional() {
    let source = r#"<plugin enabled="true"><id>x</id></plugin>"#;

    let plain = parse_xml(source, &ImportOptions::default()).unwrap();
    assert_eq!(plain.get("plugin").and_then(|p| p.get("@enabled")), None);

    let options = ImportOptions {
        include_attributes: true,
        ..Default::default()
    };
    let with_attrs = XmlFormat::new(options).parse(source).unwrap();
    let keys: Vec<&str> = with_attrs
        .get("plugin")
        .and_then(Node::as_mapping)
        .map(|m| m.keys().collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["@enabled", "id"]);
}

#[test]
fn test_mixed_text_goes_under_text_key() {
    let node = parse_xml("<note>hello<b>x</b></note>", &ImportOptions::default()).unwrap();
    let note = node.get("note").unwrap();
    assert_eq!(note.get("#text"), Some(&Node::scalar("hello")));
    assert_eq!(note.get("b"), Some(&Node::scalar("x")));
}

#[test]
fn test_depth_limit() {
    let options = ImportOptions {
        max_depth: 2,
        ..Default::default()
    };
    let result = parse_xml("<a><b><c><d/></c></b></a>", &options);
    assert!(matches!(result, Err(FormatError::Import(_))));
}

#[test]
fn test_malformed_xml() {
    let result = xml_to_outline("<project><version>1</project>");
    assert!(matches!(result, Err(FormatError::Syntax(_))));
}

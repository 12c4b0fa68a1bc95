use stratum_babel::{FormatRegistry, Node};

#[test]
fn test_html_page_to_outline() {
    let html = r#"<!DOCTYPE html>
<html>
  <head><title>Release notes</title></head>
  <body>
    <h1>3.2.0</h1>
    <ul>
      <li>faster startup</li>
      <li>fewer allocations</li>
    </ul>
  </body>
</html>"#;

    let registry = FormatRegistry::with_defaults();
    let node = registry.parse(html, "html").expect("Failed to parse");
    let outline = registry.serialize(&node, "outline").unwrap();

    insta::assert_snapshot!(outline, @r###"
    html:
      head:
        title: Release notes
      body:
        h1: 3.2.0
        ul:
          li:
            - faster startup
            - fewer allocations
    "###);
}

#[test]
fn test_broken_html_still_imports() {
    let registry = FormatRegistry::with_defaults();
    let node = registry.parse("<div><p>open", "html").unwrap();
    assert_eq!(
        node.get("html")
            .and_then(|h| h.get("body"))
            .and_then(|b| b.get("div"))
            .and_then(|d| d.get("p")),
        Some(&Node::scalar("open"))
    );
}

#[test]
fn test_detect_html_from_extension() {
    let registry = FormatRegistry::with_defaults();
    assert_eq!(
        registry.detect_format_from_filename("index.html"),
        Some("html".to_string())
    );
}

//! JSON format implementation
//!
//! JSON is the structured exchange format of the tree: objects become
//! mappings (key order preserved), arrays become sequences and every other
//! value becomes a scalar holding its textual form. `null` imports as an
//! empty scalar. Exporting writes every scalar as a JSON string, so numbers
//! and booleans do not keep their type across a round trip.
//!
//! A mapping that still carries bare leaves next to its keys exports them as
//! an array under the `"-"` key.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Node;

/// Format implementation for JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON documents"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        let value: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| FormatError::Syntax(format!("JSON parsing error: {e}")))?;
        tracing::debug!("parsed JSON document");
        Ok(Node::from(value))
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        let mut text = serde_json::to_string_pretty(node)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        text.push('\n');
        Ok(text)
    }
}

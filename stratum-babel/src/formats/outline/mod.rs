//! Outline format implementation
//!
//! The outline format is a deliberately small, indentation-only subset of
//! YAML-looking text: no quoting, no escaping, no inline collections and no
//! trailing comments. It exists so that hierarchical data can be written and
//! read by hand without a full YAML stack.
//!
//! ```text
//! project:
//!   modelVersion: 4.0.0
//!   dependencies:
//!     -
//!       groupId: org.springframework.boot
//!     -
//!       groupId: org.projectlombok
//!   modules:
//!     - api
//!     - web
//! ```
//!
//! Parsing goes through [`parser`] and then [`crate::common::normalize`], so
//! blocks holding only bare values come back as sequences. Serialization is
//! in [`serializer`].
//!
//! Round tripping is structural, not textual: indent widths, blank lines and
//! `- value` versus bare `value` list lines are not preserved.

pub mod parser;
pub mod serializer;

use crate::common::normalize::normalize;
use crate::error::FormatError;
use crate::format::{reject_unknown_options, usize_option, Format};
use crate::ir::nodes::Node;
use parser::ParseOptions;
use serializer::DEFAULT_INDENT_UNIT;
use std::collections::HashMap;

/// Format implementation for indented outline text
#[derive(Debug, Clone)]
pub struct OutlineFormat {
    parse_options: ParseOptions,
    indent_unit: usize,
}

impl OutlineFormat {
    pub fn new(parse_options: ParseOptions, indent_unit: usize) -> Self {
        Self {
            parse_options,
            indent_unit,
        }
    }
}

impl Default for OutlineFormat {
    fn default() -> Self {
        Self::new(ParseOptions::default(), DEFAULT_INDENT_UNIT)
    }
}

impl Format for OutlineFormat {
    fn name(&self) -> &str {
        "outline"
    }

    fn description(&self) -> &str {
        "Indented outline text (restricted YAML-like subset)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yml", "yaml", "outline"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        let raw = parser::parse_with_options(source.lines(), &self.parse_options)?;
        Ok(normalize(raw))
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        Ok(serializer::serialize_with_indent(node, self.indent_unit))
    }

    fn serialize_with_options(
        &self,
        node: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, &["indent-unit"])?;
        let indent_unit = usize_option(options, "indent-unit")?.unwrap_or(self.indent_unit);
        Ok(serializer::serialize_with_indent(node, indent_unit))
    }
}

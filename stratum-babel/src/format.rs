//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading documents into the generic
//! [`Node`] tree and writing them back out.

use crate::error::FormatError;
use crate::ir::nodes::Node;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and the Node tree.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Node, FormatError> {
///         // Parse source to Node
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "outline", "xml", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["yml", "yaml"], ["xml"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Node)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Node → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Node tree
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Node tree into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _node: &Node) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a Node tree, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation,
    /// which delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        node: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(node)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reads a boolean extra parameter, accepting the usual spellings.
pub(crate) fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<bool>, FormatError> {
    options
        .get(key)
        .map(|raw| match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(FormatError::SerializationError(format!(
                "invalid boolean '{other}' for parameter '{key}'"
            ))),
        })
        .transpose()
}

/// Reads an unsigned integer extra parameter.
pub(crate) fn usize_option(
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<usize>, FormatError> {
    options
        .get(key)
        .map(|raw| {
            raw.parse::<usize>().map_err(|_| {
                FormatError::SerializationError(format!(
                    "invalid number '{raw}' for parameter '{key}'"
                ))
            })
        })
        .transpose()
}

/// Rejects parameters a format does not understand.
pub(crate) fn reject_unknown_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not understand parameter(s): {}",
        unknown.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_option_spellings() {
        let mut options = HashMap::new();
        options.insert("flag".to_string(), "Yes".to_string());
        assert_eq!(bool_option(&options, "flag"), Ok(Some(true)));
        assert_eq!(bool_option(&options, "missing"), Ok(None));

        options.insert("flag".to_string(), "maybe".to_string());
        assert!(bool_option(&options, "flag").is_err());
    }

    #[test]
    fn test_usize_option() {
        let mut options = HashMap::new();
        options.insert("indent-unit".to_string(), "4".to_string());
        assert_eq!(usize_option(&options, "indent-unit"), Ok(Some(4)));

        options.insert("indent-unit".to_string(), "-1".to_string());
        assert!(usize_option(&options, "indent-unit").is_err());
    }

    #[test]
    fn test_reject_unknown_options() {
        let mut options = HashMap::new();
        options.insert("indent-unit".to_string(), "4".to_string());
        assert!(reject_unknown_options("outline", &options, &["indent-unit"]).is_ok());

        options.insert("zeta".to_string(), "1".to_string());
        options.insert("alpha".to_string(), "1".to_string());
        let err = reject_unknown_options("outline", &options, &["indent-unit"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation not supported: Format 'outline' does not understand parameter(s): alpha, zeta"
        );
    }
}

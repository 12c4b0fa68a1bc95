//! Error types for parsing, importing and format operations

use thiserror::Error;

/// Errors raised by the indented outline parser.
///
/// A parse error aborts the whole document: no partially built tree is ever
/// returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input held no non-blank lines
    #[error("document has no content")]
    EmptyDocument,
    /// A line could not be placed in the container stack
    #[error("malformed indentation at line {line}: {reason}")]
    MalformedIndentation { line: usize, reason: String },
}

impl ParseError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        ParseError::MalformedIndentation {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors raised while importing an external source tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The recursion went deeper than the configured bound; the tree is
    /// either cyclic or pathologically deep
    #[error("source tree exceeds the maximum depth of {max_depth} at <{tag}>; it may be cyclic")]
    CyclicTree { tag: String, max_depth: usize },
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The foreign document itself is not well formed (XML, JSON, ...)
    #[error("Syntax error: {0}")]
    Syntax(String),
    /// The indented outline could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// The source tree could not be imported
    #[error("Import error: {0}")]
    Import(#[from] ImportError),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

//! Error types for XML document operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing record documents.
#[derive(Debug, Error)]
pub enum XmlError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The underlying XML is not well formed.
    #[error("malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    /// Document ended before the root element closed.
    #[error("unexpected end of document")]
    UnexpectedEof,

    /// Document has no `<Document>` root.
    #[error("missing <Document> root")]
    MissingRoot,

    /// Root element is not `<Document>`.
    #[error("expected <Document> root, found <{found}>")]
    UnexpectedRoot { found: String },

    /// A car element lacks one of its three fields.
    #[error("car element {index}: missing <{field}>")]
    MissingField { index: usize, field: &'static str },

    /// Price text does not parse as a 32-bit integer.
    #[error("car element {index}: malformed price {value:?}")]
    MalformedPrice { index: usize, value: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for XML operations.
pub type Result<T> = std::result::Result<T, XmlError>;

impl XmlError {
    /// Create a MissingField error.
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }

    /// Create a MalformedPrice error.
    pub fn malformed_price(index: usize, value: impl Into<String>) -> Self {
        Self::MalformedPrice {
            index,
            value: value.into(),
        }
    }
}

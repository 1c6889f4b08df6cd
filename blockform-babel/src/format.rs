//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing block documents.

use crate::error::FormatError;
use blockform_core::BlockDocument;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and a [BlockDocument].
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
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &BlockDocument) -> Result<String, FormatError> {
///         Ok(format!("{} blocks", doc.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markup", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → BlockDocument)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (BlockDocument → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a BlockDocument
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<BlockDocument, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a BlockDocument into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &BlockDocument) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize with format-specific string options
    ///
    /// Formats without options ignore them.
    fn serialize_with_options(
        &self,
        doc: &BlockDocument,
        _options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(doc)
    }
}

/// Read a boolean option, accepting `true`/`false`/`1`/`0`/`yes`/`no`
pub(crate) fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<bool>, FormatError> {
    match options.get(key).map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(value) => match value.as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(FormatError::InvalidInput(format!(
                "option '{}' expects a boolean, got '{}'",
                key, value
            ))),
        },
    }
}

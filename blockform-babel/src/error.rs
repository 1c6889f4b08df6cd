//! Error types for format operations

use thiserror::Error;

/// Errors raised while looking up, parsing or serializing a format
///
/// Ugly-but-parseable HTML is never an error: the lenient parser's recovery is accepted as is.
/// These variants cover unknown formats, unsupported directions and structurally invalid
/// input such as a persisted tree that is not a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

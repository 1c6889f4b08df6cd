//! Errors for block tree operations

use crate::ast::ContentType;
use thiserror::Error;

/// Violations of the block node payload invariant
///
/// A node carries either text/html `content` or child blocks, never both, and only in the
/// slot its content type names. Trees built by the forward transcoder always satisfy this;
/// trees read from persisted JSON are not checked unless the caller asks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("<{tag_name}> has content type '{content_type}' but carries {found}")]
    PayloadConflict {
        tag_name: String,
        content_type: ContentType,
        found: &'static str,
    },
}

//! Comment-delimited block markup
//!
//! Serialization only. Each block becomes an HTML comment span whose opening comment carries
//! the block's attributes as JSON, with child blocks nested inside:
//!
//! ```text
//! <!-- wp:blockform/element {"tagName":"section","className":"hero","contentType":"blocks",...} -->
//!   <!-- wp:blockform/element {"tagName":"h1","contentType":"text",...,"content":"Hi",...} -->
//!   <!-- /wp:blockform/element -->
//! <!-- /wp:blockform/element -->
//! ```
//!
//! A block with no children whose content type is `empty`, or is `text`/`html` with empty
//! content, is written as one self-closing comment (`/-->`). There is no parser for this
//! dialect; reading it back is left to the editor.

mod serializer;

pub use serializer::{serialize_markup, BLOCK_MARKER};

use crate::error::FormatError;
use crate::format::Format;
use blockform_core::BlockDocument;

pub struct MarkupFormat;

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "Comment-delimited block markup for the block editor"
    }

    fn file_extensions(&self) -> &[&str] {
        &["blocks", "markup"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &BlockDocument) -> Result<String, FormatError> {
        serialize_markup(&doc.blocks)
    }
}

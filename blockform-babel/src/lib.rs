//! Format interoperability for block trees
//!
//!     This crate provides a uniform interface for converting between the block tree
//!     ([blockform_core::BlockDocument]) and its text representations: lenient HTML in both
//!     directions, the comment-annotated block markup (export only) and the persisted JSON tree.
//!
//! Architecture
//!
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!     - dom: the lenient HTML parser seen through a small node trait, so the forward
//!       transcoder never touches html5ever types directly
//!
//!     This is a pure lib: it powers blockform-cli but is shell agnostic. No code here prints,
//!     reads env vars or assumes a terminal.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # serialize to memory or to a file
//!     ├── dom.rs                  # DomNode / HtmlParser traits
//!     │   └── rcdom.rs            # html5ever + RcDom implementation
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── classify.rs     # content-type rule chain
//!     │   │   ├── preprocess.rs   # self-closing policy tags
//!     │   │   ├── parser.rs       # HTML → blocks
//!     │   │   ├── serializer.rs   # blocks → HTML
//!     │   │   └── mod.rs
//!     │   ├── markup              # blocks → comment-annotated markup
//!     │   └── json                # persisted block tree
//!     ├── lib.rs
//!
//! Testing
//!     tests
//!     ├── html_import.rs
//!     ├── html_export.rs
//!     ├── html_roundtrip_proptest.rs
//!     ├── markup_output.rs
//!     └── json_format.rs
//!
//! Tag policies
//!
//!     Both directions consult the same [blockform_core::TagPolicyTable]. A policy pins the
//!     content type and the self-closing form of dynamic tags (`set`, `for`, `if`) that the
//!     structural rules can't infer. The table is data: callers can extend it, and
//!     blockform-config loads extra entries from TOML.

pub mod dom;
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::HtmlOptions;
pub use registry::FormatRegistry;

use blockform_core::{BlockDocument, BlockNode, IdGenerator, TagPolicyTable};
use dom::Html5everParser;

/// Converts an HTML document into a block tree using the given policies and id source.
pub fn html_to_blocks(
    source: &str,
    policies: &TagPolicyTable,
    ids: &dyn IdGenerator,
) -> BlockDocument {
    formats::html::HtmlImporter::new(&Html5everParser, policies, ids).import(source)
}

/// Renders blocks back to HTML.
pub fn blocks_to_html(
    blocks: &[BlockNode],
    policies: &TagPolicyTable,
    options: HtmlOptions,
) -> Result<String, FormatError> {
    formats::html::serialize_blocks(blocks, policies, options)
}

/// Renders blocks as comment-annotated block markup.
pub fn blocks_to_markup(blocks: &[BlockNode]) -> Result<String, FormatError> {
    formats::markup::serialize_markup(blocks)
}

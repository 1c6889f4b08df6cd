//! HTML format implementation
//!
//! Strategy: lenient DOM → block tree on import, direct block traversal on export
//!
//! # Data Model
//!
//! | HTML                                        | Block                                   |
//! |---------------------------------------------|-----------------------------------------|
//! | Element with a tag policy                   | content type from the policy            |
//! | Void element (`img`, `br`, ...)             | `empty`, self-closing                   |
//! | `<svg>`                                     | `html`, inner markup verbatim           |
//! | Container (`div`, `section`, ...) with elements | `blocks`, children recursed         |
//! | Other element with elements                 | `html`, inner markup verbatim           |
//! | Element with text only                      | `text`, full text content               |
//! | Stray non-blank text                        | synthetic `<p>` with trimmed text       |
//! | `class` attribute                           | `className`                             |
//! | `style` attribute                           | `data-style` attribute                  |
//!
//! # Round trips
//!
//! Import then export reproduces the same tag names, attributes and nesting for element-only
//! markup built from containers. Whitespace, quoting and escaping style may differ. Mixed
//! content outside containers is deliberately kept as opaque html blocks rather than
//! decomposed, since wrapper patterns such as `<p>text <em>x</em></p>` would otherwise split
//! into meaningless fragments.
//!
//! # Options
//!
//! `serialize_with_options` reads `indent` (`true`/`false`), overriding [HtmlOptions].
//!
//! # Example
//!
//! ```ignore
//! use blockform_babel::formats::html::HtmlFormat;
//! use blockform_babel::Format;
//!
//! let format = HtmlFormat::default();
//! let doc = format.parse(r#"<section class="hero"><h1>Hi</h1></section>"#)?;
//! let html = format.serialize(&doc)?;
//! ```

pub mod classify;
pub mod parser;
pub mod preprocess;
pub mod serializer;

pub use parser::HtmlImporter;
pub use serializer::{serialize_blocks, HtmlOptions};

use crate::dom::Html5everParser;
use crate::error::FormatError;
use crate::format::{bool_option, Format};
use blockform_core::{BlockDocument, IdGenerator, TagPolicyTable, UuidIds};
use std::collections::HashMap;
use std::sync::Arc;

/// HTML format with a policy table, an id source and output options
pub struct HtmlFormat {
    policies: TagPolicyTable,
    ids: Arc<dyn IdGenerator>,
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(policies: TagPolicyTable, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            policies,
            ids,
            options: HtmlOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HtmlOptions) -> Self {
        self.options = options;
        self
    }

    pub fn policies(&self) -> &TagPolicyTable {
        &self.policies
    }

    pub fn options(&self) -> HtmlOptions {
        self.options
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new(TagPolicyTable::builtin(), Arc::new(UuidIds))
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragments, imported through a lenient HTML5 parser"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<BlockDocument, FormatError> {
        let importer = HtmlImporter::new(&Html5everParser, &self.policies, self.ids.as_ref());
        Ok(importer.import(source))
    }

    fn serialize(&self, doc: &BlockDocument) -> Result<String, FormatError> {
        serialize_blocks(&doc.blocks, &self.policies, self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &BlockDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut html_options = self.options;
        if let Some(indent) = bool_option(options, "indent")? {
            html_options.indent = indent;
        }
        serialize_blocks(&doc.blocks, &self.policies, html_options)
    }
}

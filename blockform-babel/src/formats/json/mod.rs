//! Persisted block tree (JSON)
//!
//! The block editor stores trees as a JSON array of block objects:
//!
//! ```text
//! [
//!   {
//!     "id": "3f1c...",
//!     "name": "blockform/element",
//!     "isValid": true,
//!     "attributes": {
//!       "tagName": "section",
//!       "className": "hero",
//!       "contentType": "blocks",
//!       "selfClosing": false,
//!       "globalAttrs": {}
//!     },
//!     "innerBlocks": [ ... ]
//!   }
//! ]
//! ```
//!
//! `className`, `content`, `lock` and `metadata` are omitted when absent. A missing `id` is
//! replaced by a fresh one on read. The payload invariant is not checked on read; callers that
//! need it call [BlockDocument::validate].

use crate::error::FormatError;
use crate::format::Format;
use blockform_core::{
    Attributes, BlockDocument, BlockId, BlockKind, BlockNode, ContentType, IdGenerator,
    LegacyAttributes, UuidIds,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockRecord {
    #[serde(default)]
    id: Option<BlockId>,
    name: String,
    #[serde(default = "valid")]
    is_valid: bool,
    attributes: RecordAttributes,
    #[serde(default)]
    inner_blocks: Vec<BlockRecord>,
}

fn valid() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordAttributes {
    tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_name: Option<String>,
    content_type: ContentType,
    #[serde(default)]
    self_closing: bool,
    #[serde(default)]
    global_attrs: Attributes,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    content: String,
    #[serde(flatten)]
    legacy: LegacyAttributes,
}

impl BlockRecord {
    fn from_node(node: &BlockNode) -> Self {
        Self {
            id: Some(node.id.clone()),
            name: node.kind().name().to_string(),
            is_valid: true,
            attributes: RecordAttributes {
                tag_name: node.tag_name.clone(),
                class_name: node.class_name.clone(),
                content_type: node.content_type,
                self_closing: node.self_closing,
                global_attrs: node.attributes.clone(),
                content: node.content.clone(),
                legacy: node.legacy.clone(),
            },
            inner_blocks: node.children.iter().map(BlockRecord::from_node).collect(),
        }
    }

    fn into_node(self, ids: &dyn IdGenerator) -> Result<BlockNode, FormatError> {
        let kind = BlockKind::Element;
        if self.name != kind.name() {
            return Err(FormatError::InvalidInput(format!(
                "unsupported block '{}', expected '{}'",
                self.name,
                kind.name()
            )));
        }

        let id = self.id.unwrap_or_else(|| ids.next_id());
        let attributes = self.attributes;
        let children = self
            .inner_blocks
            .into_iter()
            .map(|record| record.into_node(ids))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BlockNode {
            id,
            tag_name: attributes.tag_name.to_ascii_lowercase(),
            class_name: attributes.class_name,
            attributes: attributes.global_attrs,
            content_type: attributes.content_type,
            content: attributes.content,
            children,
            self_closing: attributes.self_closing,
            legacy: attributes.legacy,
        })
    }
}

/// Read a persisted tree
pub fn parse_json(source: &str, ids: &dyn IdGenerator) -> Result<BlockDocument, FormatError> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
    if !value.is_array() {
        return Err(FormatError::InvalidInput(
            "a block tree must be a JSON array of blocks".to_string(),
        ));
    }

    let records: Vec<BlockRecord> =
        serde_json::from_value(value).map_err(|e| FormatError::ParseError(e.to_string()))?;
    let blocks = records
        .into_iter()
        .map(|record| record.into_node(ids))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BlockDocument::new(blocks))
}

/// Write a tree in its persisted form, pretty-printed
pub fn serialize_json(doc: &BlockDocument) -> Result<String, FormatError> {
    let records: Vec<BlockRecord> = doc.blocks.iter().map(BlockRecord::from_node).collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

/// The persisted JSON block tree
pub struct JsonFormat {
    ids: Arc<dyn IdGenerator>,
}

impl JsonFormat {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new(Arc::new(UuidIds))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block tree as persisted by the block editor"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<BlockDocument, FormatError> {
        parse_json(source, self.ids.as_ref())
    }

    fn serialize(&self, doc: &BlockDocument) -> Result<String, FormatError> {
        serialize_json(doc)
    }
}

//! The block node

use crate::ast::{BlockError, BlockId, ContentType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute name → value, `class` and `style` excluded
///
/// Source order is kept for output, but equality ignores it.
pub type Attributes = IndexMap<String, String>;

/// The kind of block this system produces
///
/// The editor schema knows other kinds; only elements are built here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Element,
}

impl BlockKind {
    /// Fixed name identifying the kind in persisted trees
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Element => "blockform/element",
        }
    }
}

/// Two legacy attributes the editor schema still expects on every element block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// One HTML element as a block
///
/// `content` is only meaningful for [ContentType::Text] and [ContentType::Html], `children`
/// only for [ContentType::Blocks]. See [BlockNode::validate].
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub id: BlockId,
    pub tag_name: String,
    pub class_name: Option<String>,
    pub attributes: Attributes,
    pub content_type: ContentType,
    pub content: String,
    pub children: Vec<BlockNode>,
    pub self_closing: bool,
    pub legacy: LegacyAttributes,
}

impl BlockNode {
    fn new(id: BlockId, tag_name: &str, content_type: ContentType) -> Self {
        Self {
            id,
            tag_name: tag_name.to_ascii_lowercase(),
            class_name: None,
            attributes: Attributes::new(),
            content_type,
            content: String::new(),
            children: Vec::new(),
            self_closing: false,
            legacy: LegacyAttributes::default(),
        }
    }

    pub fn empty(id: BlockId, tag_name: &str) -> Self {
        Self::new(id, tag_name, ContentType::Empty)
    }

    pub fn text(id: BlockId, tag_name: &str, content: impl Into<String>) -> Self {
        let mut node = Self::new(id, tag_name, ContentType::Text);
        node.content = content.into();
        node
    }

    pub fn html(id: BlockId, tag_name: &str, content: impl Into<String>) -> Self {
        let mut node = Self::new(id, tag_name, ContentType::Html);
        node.content = content.into();
        node
    }

    pub fn blocks(id: BlockId, tag_name: &str, children: Vec<BlockNode>) -> Self {
        let mut node = Self::new(id, tag_name, ContentType::Blocks);
        node.children = children;
        node
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_self_closing(mut self, self_closing: bool) -> Self {
        self.self_closing = self_closing;
        self
    }

    pub fn kind(&self) -> BlockKind {
        BlockKind::Element
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Visit this node and all descendants depth-first, with their depth
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&BlockNode, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&BlockNode, usize),
    {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }

    /// Check that the payload sits where the content type says, recursively
    pub fn validate(&self) -> Result<(), BlockError> {
        let conflict = |found| BlockError::PayloadConflict {
            tag_name: self.tag_name.clone(),
            content_type: self.content_type,
            found,
        };

        if !self.content.is_empty() && !self.content_type.carries_content() {
            return Err(conflict("content"));
        }
        if !self.children.is_empty() && self.content_type != ContentType::Blocks {
            return Err(conflict("child blocks"));
        }

        self.children.iter().try_for_each(BlockNode::validate)
    }
}

/// Structural equality; the id is not part of a node's identity
impl PartialEq for BlockNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag_name == other.tag_name
            && self.class_name == other.class_name
            && self.attributes == other.attributes
            && self.content_type == other.content_type
            && self.content == other.content
            && self.children == other.children
            && self.self_closing == other.self_closing
            && self.legacy == other.legacy
    }
}

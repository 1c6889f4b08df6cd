//! Block tree types
//!
//!     A document fragment is represented as an ordered sequence of [BlockNode]s. Each node
//!     stands for one HTML element and stores its payload in exactly one way, selected by its
//!     [ContentType]:
//!
//!     | ContentType | Payload                 |
//!     |-------------|-------------------------|
//!     | Empty       | nothing                 |
//!     | Text        | `content` (plain text)  |
//!     | Html        | `content` (raw markup)  |
//!     | Blocks      | `children`              |
//!
//!     Nodes are values: once built they are only read. Every child has exactly one parent,
//!     so the tree owns its nodes outright.

mod error;
mod ids;
mod node;

pub use error::BlockError;
pub use ids::{BlockId, IdGenerator, SequentialIds, UuidIds};
pub use node::{Attributes, BlockKind, BlockNode, LegacyAttributes};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a block node stores its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Empty,
    Text,
    Html,
    Blocks,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Empty => "empty",
            ContentType::Text => "text",
            ContentType::Html => "html",
            ContentType::Blocks => "blocks",
        }
    }

    /// Whether the payload lives in `content`
    pub fn carries_content(&self) -> bool {
        matches!(self, ContentType::Text | ContentType::Html)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of top-level block nodes
///
/// This is the value every format parses into and serializes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDocument {
    pub blocks: Vec<BlockNode>,
}

impl BlockDocument {
    pub fn new(blocks: Vec<BlockNode>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of nodes in the tree, nested ones included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        for block in &self.blocks {
            block.walk(&mut |_, _| count += 1);
        }
        count
    }

    /// Check the payload invariant on every node
    pub fn validate(&self) -> Result<(), BlockError> {
        self.blocks.iter().try_for_each(BlockNode::validate)
    }
}

impl From<Vec<BlockNode>> for BlockDocument {
    fn from(blocks: Vec<BlockNode>) -> Self {
        Self::new(blocks)
    }
}

impl IntoIterator for BlockDocument {
    type Item = BlockNode;
    type IntoIter = std::vec::IntoIter<BlockNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

//! Testing utilities for block tree assertions
//!
//!     Block trees are checked through a fluent API rather than by hand-indexing into nodes, so
//!     that failures name the path to the offending node (`blocks[0].children[2]`) and tests read
//!     as a description of the expected tree:
//!
//!     ```rust,ignore
//!     use blockform_core::testing::assert_blocks;
//!
//!     assert_blocks(&doc.blocks).count(1).block(0, |section| {
//!         section
//!             .tag("section")
//!             .class_name("hero")
//!             .child_count(1)
//!             .child(0, |h1| {
//!                 h1.tag("h1").text("Hi");
//!             });
//!     });
//!     ```
//!
//!     Ids are never asserted on; they are opaque.

mod assertions;
mod matchers;

pub use assertions::{BlockAssertion, BlocksAssertion};
pub use matchers::TextMatch;

use crate::ast::BlockNode;

/// Create an assertion builder for a sequence of top-level blocks
pub fn assert_blocks(blocks: &[BlockNode]) -> BlocksAssertion<'_> {
    BlocksAssertion {
        blocks,
        context: "blocks".to_string(),
    }
}

/// Create an assertion builder for a single block
pub fn assert_block(block: &BlockNode) -> BlockAssertion<'_> {
    BlockAssertion {
        block,
        context: "block".to_string(),
    }
}

/// One-line summary of a node sequence for failure messages
pub(crate) fn summarize_blocks(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(|b| format!("<{}>:{}", b.tag_name, b.content_type))
        .collect::<Vec<_>>()
        .join(", ")
}

//! Fluent assertions over block nodes

use super::matchers::TextMatch;
use super::summarize_blocks;
use crate::ast::{BlockNode, ContentType};

pub struct BlocksAssertion<'a> {
    pub(crate) blocks: &'a [BlockNode],
    pub(crate) context: String,
}

impl<'a> BlocksAssertion<'a> {
    /// Assert the number of blocks in the sequence
    pub fn count(self, expected: usize) -> Self {
        let actual = self.blocks.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} blocks, found {} blocks: [{}]",
            self.context,
            expected,
            actual,
            summarize_blocks(self.blocks)
        );
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.blocks.len(),
            "{}: Block index {} out of bounds (found {} blocks)",
            self.context,
            index,
            self.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.blocks[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the tag names of the sequence, in order
    pub fn tags(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.blocks.iter().map(|b| b.tag_name.as_str()).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected tag sequence",
            self.context
        );
        self
    }
}

pub struct BlockAssertion<'a> {
    pub(crate) block: &'a BlockNode,
    pub(crate) context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.block.tag_name, expected,
            "{}: Expected <{}>, found <{}>",
            self.context, expected, self.block.tag_name
        );
        self
    }

    pub fn content_type(self, expected: ContentType) -> Self {
        assert_eq!(
            self.block.content_type, expected,
            "{}: Expected content type {}, found {}",
            self.context, expected, self.block.content_type
        );
        self
    }

    /// Assert content type `text` with exactly this content
    pub fn text(self, expected: &str) -> Self {
        self.content_type(ContentType::Text).content(expected)
    }

    /// Assert content type `html` with exactly this content
    pub fn html(self, expected: &str) -> Self {
        self.content_type(ContentType::Html).content(expected)
    }

    /// Assert content type `empty` with no payload at all
    pub fn empty(self) -> Self {
        let this = self.content_type(ContentType::Empty);
        assert!(
            this.block.content.is_empty() && this.block.children.is_empty(),
            "{}: Expected no payload on an empty block",
            this.context
        );
        this
    }

    pub fn content(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.block.content, &self.context);
        self
    }

    pub fn content_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.block.content, &self.context);
        self
    }

    pub fn content_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.block.content, &self.context);
        self
    }

    pub fn class_name(self, expected: &str) -> Self {
        assert_eq!(
            self.block.class_name.as_deref(),
            Some(expected),
            "{}: Unexpected className",
            self.context
        );
        self
    }

    pub fn no_class_name(self) -> Self {
        assert_eq!(
            self.block.class_name, None,
            "{}: Expected no className",
            self.context
        );
        self
    }

    pub fn self_closing(self, expected: bool) -> Self {
        assert_eq!(
            self.block.self_closing, expected,
            "{}: Expected selfClosing = {}",
            self.context, expected
        );
        self
    }

    pub fn attr(self, name: &str, expected: &str) -> Self {
        assert_eq!(
            self.block.attribute(name),
            Some(expected),
            "{}: Unexpected value for attribute '{}' (attributes: {:?})",
            self.context,
            name,
            self.block.attributes
        );
        self
    }

    pub fn no_attr(self, name: &str) -> Self {
        assert!(
            !self.block.attributes.contains_key(name),
            "{}: Expected no attribute '{}' (attributes: {:?})",
            self.context,
            name,
            self.block.attributes
        );
        self
    }

    pub fn attr_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.attributes.len(),
            expected,
            "{}: Unexpected attribute count (attributes: {:?})",
            self.context,
            self.block.attributes
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            self.block.children.len(),
            summarize_blocks(&self.block.children)
        );
        self
    }

    /// Assert content type `blocks` and descend into a child
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let this = self.content_type(ContentType::Blocks);
        assert!(
            index < this.block.children.len(),
            "{}: Child index {} out of bounds (found {} children)",
            this.context,
            index,
            this.block.children.len()
        );
        assertion(BlockAssertion {
            block: &this.block.children[index],
            context: format!("{}.children[{}]", this.context, index),
        });
        this
    }

    /// Assertions over the children as a sequence
    pub fn children(self) -> BlocksAssertion<'a> {
        BlocksAssertion {
            blocks: &self.block.children,
            context: format!("{}.children", self.context),
        }
    }
}

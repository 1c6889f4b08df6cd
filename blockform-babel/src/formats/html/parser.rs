//! HTML parsing (HTML → block tree import)
//!
//! Pipeline: source → self-closing rewrite → lenient DOM → classification → BlockNodes
//!
//! Traversal is depth-first in document order. Whitespace-only text disappears, stray text is
//! wrapped in a synthetic `<p>` text block, comments and doctypes are dropped, and every element
//! becomes one block classified by [classify](super::classify).

use super::classify::{classify, ElementFacts};
use super::preprocess::expand_self_closing_tags;
use crate::dom::{DomNode, HtmlParser, NodeKind, ParsedFragment};
use blockform_core::{Attributes, BlockDocument, BlockNode, ContentType, IdGenerator, TagPolicyTable};

/// Attribute that receives the value of `style`
pub const DATA_STYLE: &str = "data-style";

/// Tag of the wrapper block created for stray text
pub const TEXT_WRAPPER_TAG: &str = "p";

/// Converts HTML into a block tree
pub struct HtmlImporter<'a, P: HtmlParser> {
    parser: &'a P,
    policies: &'a TagPolicyTable,
    ids: &'a dyn IdGenerator,
}

impl<'a, P: HtmlParser> HtmlImporter<'a, P> {
    pub fn new(parser: &'a P, policies: &'a TagPolicyTable, ids: &'a dyn IdGenerator) -> Self {
        Self {
            parser,
            policies,
            ids,
        }
    }

    /// Import a document fragment. Empty or blank input yields an empty document.
    pub fn import(&self, source: &str) -> BlockDocument {
        if source.trim().is_empty() {
            return BlockDocument::default();
        }

        let prepared = expand_self_closing_tags(source, self.policies);
        // The fragment owns the DOM and must outlive the whole traversal
        let fragment = self.parser.parse_fragment(&prepared);
        let doc = BlockDocument::new(self.transcode_all(fragment.roots()));

        tracing::debug!(
            blocks = doc.len(),
            nodes = doc.node_count(),
            "imported html fragment"
        );
        doc
    }

    fn transcode_all(&self, nodes: &[P::Node]) -> Vec<BlockNode> {
        nodes.iter().filter_map(|node| self.transcode(node)).collect()
    }

    fn transcode(&self, node: &P::Node) -> Option<BlockNode> {
        match node.kind() {
            NodeKind::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(BlockNode::text(
                        self.ids.next_id(),
                        TEXT_WRAPPER_TAG,
                        trimmed,
                    ))
                }
            }
            NodeKind::Element {
                tag_name,
                attributes,
            } => Some(self.transcode_element(node, &tag_name, attributes)),
            NodeKind::Other => None,
        }
    }

    fn transcode_element(
        &self,
        node: &P::Node,
        tag_name: &str,
        attributes: Vec<(String, String)>,
    ) -> BlockNode {
        let children = node.children();
        let facts = inspect(tag_name, &children);
        let classification = classify(&facts, self.policies);

        // Parent ids are drawn before children so ids follow document order
        let id = self.ids.next_id();
        let mut block = match classification.content_type {
            ContentType::Empty => BlockNode::empty(id, tag_name),
            ContentType::Text => BlockNode::text(id, tag_name, node.text_content()),
            ContentType::Html => BlockNode::html(id, tag_name, node.inner_html()),
            ContentType::Blocks => BlockNode::blocks(id, tag_name, self.transcode_all(&children)),
        };
        block.self_closing = classification.self_closing;
        apply_attributes(&mut block, attributes);
        block
    }
}

fn inspect<'t, N: DomNode>(tag_name: &'t str, children: &[N]) -> ElementFacts<'t> {
    let mut facts = ElementFacts {
        tag_name,
        has_element_children: false,
        has_non_whitespace_text: false,
    };
    for child in children {
        match child.kind() {
            NodeKind::Element { .. } => facts.has_element_children = true,
            NodeKind::Text(text) if !text.trim().is_empty() => {
                facts.has_non_whitespace_text = true
            }
            _ => {}
        }
    }
    facts
}

/// Split source attributes into className and the attribute map
///
/// `class` becomes the className verbatim and `style` is stored as `data-style`, so that
/// preview renderers which strip or mangle inline styles cannot corrupt it. When both `style`
/// and `data-style` are present, `style` wins. Names are not validated here; they are
/// sanitized on output.
fn apply_attributes(block: &mut BlockNode, attributes: Vec<(String, String)>) {
    let mut style = None;
    let mut map = Attributes::with_capacity(attributes.len());

    for (name, value) in attributes {
        match name.as_str() {
            "class" => block.class_name = Some(value),
            "style" => style = Some(value),
            _ => {
                map.insert(name, value);
            }
        }
    }
    if let Some(style) = style {
        map.insert(DATA_STYLE.to_string(), style);
    }
    block.attributes = map;
}

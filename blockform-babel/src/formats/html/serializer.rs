//! HTML serialization (block tree → HTML export)
//!
//! Every block renders as `<tag attrs>inner</tag>` or `<tag attrs />`. Text and html payloads
//! are emitted verbatim; they are already markup. Attribute values are escaped and attribute
//! names are reduced to `[A-Za-z0-9_-]`, so nothing read from a persisted tree can inject
//! markup through an attribute.

use crate::error::FormatError;
use blockform_core::tags::is_void_element;
use blockform_core::{BlockNode, ContentType, TagPolicyTable};

const INDENT: &str = "  ";

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Put nested blocks on their own lines, one indent level per depth
    pub indent: bool,
}

impl HtmlOptions {
    pub fn compact() -> Self {
        Self { indent: false }
    }

    pub fn indented() -> Self {
        Self { indent: true }
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::indented()
    }
}

/// Render a block sequence as HTML
pub fn serialize_blocks(
    blocks: &[BlockNode],
    policies: &TagPolicyTable,
    options: HtmlOptions,
) -> Result<String, FormatError> {
    let serializer = HtmlSerializer { policies, options };
    serializer.render_sequence(blocks)
}

struct HtmlSerializer<'a> {
    policies: &'a TagPolicyTable,
    options: HtmlOptions,
}

impl HtmlSerializer<'_> {
    fn render_sequence(&self, blocks: &[BlockNode]) -> Result<String, FormatError> {
        let rendered = blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Result<Vec<_>, _>>()?;
        let separator = if self.options.indent { "\n" } else { "" };
        Ok(rendered.join(separator))
    }

    fn render_block(&self, block: &BlockNode) -> Result<String, FormatError> {
        let tag = sanitize_name(&block.tag_name);
        if tag.is_empty() {
            return Err(FormatError::InvalidInput(format!(
                "block {} has no usable tag name ({:?})",
                block.id, block.tag_name
            )));
        }
        let attributes = render_attributes(block);

        if self.is_self_closing(block) {
            return Ok(format!("<{}{} />", tag, attributes));
        }

        let inner = match block.content_type {
            ContentType::Text | ContentType::Html => block.content.clone(),
            ContentType::Blocks => self.render_children(&block.children)?,
            ContentType::Empty => String::new(),
        };
        Ok(format!("<{}{}>{}</{}>", tag, attributes, inner, tag))
    }

    fn render_children(&self, children: &[BlockNode]) -> Result<String, FormatError> {
        let rendered = self.render_sequence(children)?;
        if !self.options.indent || rendered.is_empty() {
            return Ok(rendered);
        }
        Ok(format!("\n{}\n", indent_lines(&rendered)))
    }

    /// A policy's forced flag beats the stored one; otherwise the stored flag or voidness
    fn is_self_closing(&self, block: &BlockNode) -> bool {
        match self
            .policies
            .lookup(&block.tag_name)
            .and_then(|policy| policy.force_self_closing)
        {
            Some(forced) => forced,
            None => block.self_closing || is_void_element(&block.tag_name),
        }
    }
}

/// `class` first, then the attribute map in order, each with a leading space
fn render_attributes(block: &BlockNode) -> String {
    let mut out = String::new();
    if let Some(class_name) = &block.class_name {
        out.push_str(&format!(" class=\"{}\"", escape_attribute(class_name)));
    }
    for (name, value) in &block.attributes {
        let name = sanitize_name(name);
        if name.is_empty() {
            continue;
        }
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    out
}

fn indent_lines(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep only `[A-Za-z0-9_-]`
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Escape an attribute value for a double-quoted attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

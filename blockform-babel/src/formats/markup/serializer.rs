//! Block tree → comment-delimited markup writer

use crate::error::FormatError;
use blockform_core::{Attributes, BlockNode, ContentType};
use serde::Serialize;
use serde_json::{Map, Value};

/// Marker naming the element block kind inside comments
pub const BLOCK_MARKER: &str = "wp:blockform/element";

const INDENT: &str = "  ";

/// Block attributes as they appear inside the opening comment
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentAttributes<'a> {
    tag_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<&'a str>,
    content_type: ContentType,
    self_closing: bool,
    global_attrs: &'a Attributes,
    #[serde(skip_serializing_if = "is_empty")]
    content: &'a str,
    lock: &'a Value,
    metadata: &'a Value,
}

fn is_empty(s: &&str) -> bool {
    s.is_empty()
}

struct MarkupSerializer {
    output: String,
    indent_level: usize,
    empty_object: Value,
}

impl MarkupSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            empty_object: Value::Object(Map::new()),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(&INDENT.repeat(self.indent_level));
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn serialize_block(&mut self, block: &BlockNode) -> Result<(), FormatError> {
        let attributes = self.comment_json(block)?;

        if is_void_comment(block) {
            self.push_line(&format!("<!-- {} {} /-->", BLOCK_MARKER, attributes));
            return Ok(());
        }

        self.push_line(&format!("<!-- {} {} -->", BLOCK_MARKER, attributes));
        self.indent_level += 1;
        for child in &block.children {
            self.serialize_block(child)?;
        }
        self.indent_level -= 1;
        self.push_line(&format!("<!-- /{} -->", BLOCK_MARKER));
        Ok(())
    }

    fn comment_json(&self, block: &BlockNode) -> Result<String, FormatError> {
        let attributes = CommentAttributes {
            tag_name: &block.tag_name,
            class_name: block.class_name.as_deref(),
            content_type: block.content_type,
            self_closing: block.self_closing,
            global_attrs: &block.attributes,
            content: &block.content,
            lock: block.legacy.lock.as_ref().unwrap_or(&self.empty_object),
            metadata: block.legacy.metadata.as_ref().unwrap_or(&self.empty_object),
        };
        let json = serde_json::to_string(&attributes)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        Ok(escape_comment_json(&json))
    }
}

/// Whether the block is written as a single `/-->` comment
fn is_void_comment(block: &BlockNode) -> bool {
    block.children.is_empty()
        && match block.content_type {
            ContentType::Empty => true,
            ContentType::Text | ContentType::Html => block.content.is_empty(),
            ContentType::Blocks => false,
        }
}

/// Replace sequences that could end the comment or confuse an HTML tokenizer
///
/// All replacements are JSON unicode escapes, so the payload still decodes to the same value.
/// Escape pairs are copied whole so that an escaped backslash before a quote survives.
fn escape_comment_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut chars = json.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => escaped.push_str("\\u0022"),
                Some(next) => {
                    escaped.push('\\');
                    escaped.push(next);
                }
                None => escaped.push('\\'),
            },
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped.replace("--", "\\u002d\\u002d")
}

/// Serialize blocks to comment-delimited markup
pub fn serialize_markup(blocks: &[BlockNode]) -> Result<String, FormatError> {
    let mut serializer = MarkupSerializer::new();
    for block in blocks {
        serializer.serialize_block(block)?;
    }
    let mut output = serializer.output;
    output.truncate(output.trim_end_matches('\n').len());
    Ok(output)
}

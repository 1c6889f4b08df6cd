//! Fixed HTML tag sets used by structural inference
//!
//! Lookups are case-insensitive.

/// Elements that never have content and render as `<tag />`
pub const VOID_ELEMENTS: &[&str] = &[
    "img", "br", "hr", "input", "meta", "link", "area", "base", "col", "embed", "source", "track",
    "wbr",
];

/// Elements whose element children are decomposed into nested blocks
///
/// Anything outside this set that has element children keeps them as raw inner markup.
pub const CONTAINER_ELEMENTS: &[&str] = &[
    "div",
    "section",
    "article",
    "header",
    "footer",
    "main",
    "nav",
    "aside",
    "ul",
    "ol",
    "li",
    "form",
    "fieldset",
    "blockquote",
    "figure",
    "button",
];

pub fn is_void_element(tag_name: &str) -> bool {
    contains_ignore_case(VOID_ELEMENTS, tag_name)
}

pub fn is_container_element(tag_name: &str) -> bool {
    contains_ignore_case(CONTAINER_ELEMENTS, tag_name)
}

fn contains_ignore_case(set: &[&str], tag_name: &str) -> bool {
    set.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

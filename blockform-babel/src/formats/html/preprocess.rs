//! Source rewriting ahead of DOM construction
//!
//! HTML parsers only honour `/>` on void elements. Written on a custom tag such as
//! `<set name="x" />`, the slash is ignored and the tag stays open, swallowing every following
//! sibling as its children. Tags whose policy forces self-closing are therefore rewritten to an
//! explicit empty element (`<set name="x"></set>`) before parsing. Other tags are left alone.
//!
//! The scan is tag-aware: comments, the bodies of raw-text elements (`script`, `style`,
//! `textarea`, `title`) and quoted attribute values are consumed whole, so markup-looking text
//! inside them is never rewritten.

use blockform_core::TagPolicyTable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Attribute text of a start tag, with quoted values allowed to contain `<`, `>` and `/`
const ATTRIBUTES: &str = r#"(?:[^<>"']|"[^"]*"|'[^']*')*"#;

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

static MARKUP_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let mut alternatives = vec![r"(?s:<!--.*?-->)".to_string()];
    for element in RAW_TEXT_ELEMENTS {
        alternatives.push(format!(
            r"(?is:<{element}\b{ATTRIBUTES}>.*?</{element}\s*>)"
        ));
    }
    alternatives.push(format!(
        r"<(?P<name>[A-Za-z][A-Za-z0-9_:-]*)(?P<attrs>{ATTRIBUTES})>"
    ));
    Regex::new(&alternatives.join("|")).unwrap()
});

/// Rewrite `<tag ... />` to `<tag ...></tag>` for tags the policy table forces self-closing
pub fn expand_self_closing_tags<'s>(source: &'s str, policies: &TagPolicyTable) -> Cow<'s, str> {
    MARKUP_TOKEN.replace_all(source, |caps: &Captures| {
        let (Some(name), Some(attrs)) = (caps.name("name"), caps.name("attrs")) else {
            return caps[0].to_string();
        };
        let tag_name = name.as_str();
        match attrs.as_str().trim_end().strip_suffix('/') {
            Some(attributes) if policies.forces_self_closing(tag_name) => {
                format!("<{}{}></{}>", tag_name, attributes.trim_end(), tag_name)
            }
            _ => caps[0].to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(source: &str) -> String {
        expand_self_closing_tags(source, &TagPolicyTable::builtin()).into_owned()
    }

    #[test]
    fn test_expands_policy_tags() {
        assert_eq!(expand(r#"<set a="b" />"#), r#"<set a="b"></set>"#);
        assert_eq!(expand("<set/>"), "<set></set>");
        assert_eq!(expand(r#"<SET a="b"/>"#), r#"<SET a="b"></SET>"#);
    }

    #[test]
    fn test_keeps_slashes_inside_attribute_values() {
        assert_eq!(
            expand(r#"<set path="a/b/c" />"#),
            r#"<set path="a/b/c"></set>"#
        );
    }

    #[test]
    fn test_angle_brackets_inside_attribute_values() {
        assert_eq!(
            expand(r#"<set cond="a > b" /><div>after</div>"#),
            r#"<set cond="a > b"></set><div>after</div>"#
        );
        assert_eq!(
            expand(r#"<set cond='a < b' x="/>" />"#),
            r#"<set cond='a < b' x="/>"></set>"#
        );
    }

    #[test]
    fn test_policy_tags_inside_attribute_values_are_untouched() {
        let source = r#"<div title="<set/>" data-x='<set a="b" />'>x</div>"#;
        assert_eq!(expand(source), source);
    }

    #[test]
    fn test_comments_and_raw_text_are_untouched() {
        let source = "<!-- <set/> --><script>if (a) { x = '<set/>'; }</script>\
                      <style>p::after { content: \"<set/>\" }</style>";
        assert_eq!(expand(source), source);
        assert_eq!(
            expand("<!-- <set/> --><set/>"),
            "<!-- <set/> --><set></set>"
        );
    }

    #[test]
    fn test_leaves_other_tags_alone() {
        let source = r#"<img src="a.png" /><br/><for each="x" /><widget />"#;
        assert_eq!(expand(source), source);
    }

    #[test]
    fn test_open_policy_tags_are_not_rewritten() {
        let source = r#"<set a="b"></set>"#;
        assert_eq!(expand(source), source);
    }

    #[test]
    fn test_multiline_attributes() {
        assert_eq!(
            expand("<set\n  a=\"1\"\n  b=\"2\"\n/>"),
            "<set\n  a=\"1\"\n  b=\"2\"></set>"
        );
    }

    #[test]
    fn test_source_without_matches_is_borrowed() {
        let result = expand_self_closing_tags("plain text only", &TagPolicyTable::builtin());
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}

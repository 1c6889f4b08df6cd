//! Tag policy table
//!
//!     Dynamic tags (variable binding, iteration, conditional inclusion) carry template logic
//!     rather than presentation, so their shape cannot be inferred from the markup around them.
//!     A [TagPolicy] states it outright: which content model the tag uses and whether it renders
//!     self-closing. Both transcoders consult the same table; tags without an entry fall back to
//!     structural inference.
//!
//!     Lookups are case-insensitive and total: an unknown tag simply has no policy.
//!
//!     | Tag   | Content model | Self-closing |
//!     |-------|---------------|--------------|
//!     | set   | empty         | always       |
//!     | for   | nested-blocks | never        |
//!     | if    | nested-blocks | never        |

use crate::ast::ContentType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a policy-governed tag stores its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentModel {
    Empty,
    InlineText,
    RawHtml,
    NestedBlocks,
}

impl ContentModel {
    /// The block content type this model produces
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentModel::Empty => ContentType::Empty,
            ContentModel::InlineText => ContentType::Text,
            ContentModel::RawHtml => ContentType::Html,
            ContentModel::NestedBlocks => ContentType::Blocks,
        }
    }
}

/// Behavioral metadata for one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagPolicy {
    pub content_model: ContentModel,
    /// `Some(true)` always self-closes, `Some(false)` never does, `None` leaves it to the node
    #[serde(default, rename = "self_closing")]
    pub force_self_closing: Option<bool>,
}

impl TagPolicy {
    pub const fn new(content_model: ContentModel, force_self_closing: Option<bool>) -> Self {
        Self {
            content_model,
            force_self_closing,
        }
    }
}

/// Variable binding: `<set name="x" value="..." />`
pub const SET_POLICY: TagPolicy = TagPolicy::new(ContentModel::Empty, Some(true));
/// Iteration: `<for each="items">...</for>`
pub const FOR_POLICY: TagPolicy = TagPolicy::new(ContentModel::NestedBlocks, Some(false));
/// Conditional inclusion: `<if condition="...">...</if>`
pub const IF_POLICY: TagPolicy = TagPolicy::new(ContentModel::NestedBlocks, Some(false));

/// Lowercase tag name → policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPolicyTable {
    policies: HashMap<String, TagPolicy>,
}

impl TagPolicyTable {
    /// A table with no entries; every tag is inferred structurally
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
        }
    }

    /// The table shipped by default: `set`, `for` and `if`
    pub fn builtin() -> Self {
        Self::empty()
            .with("set", SET_POLICY)
            .with("for", FOR_POLICY)
            .with("if", IF_POLICY)
    }

    /// Add or replace a policy, returning the previous one
    pub fn insert(&mut self, tag_name: &str, policy: TagPolicy) -> Option<TagPolicy> {
        self.policies.insert(tag_name.to_ascii_lowercase(), policy)
    }

    pub fn with(mut self, tag_name: &str, policy: TagPolicy) -> Self {
        self.insert(tag_name, policy);
        self
    }

    pub fn lookup(&self, tag_name: &str) -> Option<&TagPolicy> {
        self.policies.get(&tag_name.to_ascii_lowercase())
    }

    /// Whether `tag_name` must always render self-closing
    pub fn forces_self_closing(&self, tag_name: &str) -> bool {
        matches!(
            self.lookup(tag_name),
            Some(TagPolicy {
                force_self_closing: Some(true),
                ..
            })
        )
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagPolicy)> {
        self.policies.iter().map(|(tag, policy)| (tag.as_str(), policy))
    }
}

impl Default for TagPolicyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let table = TagPolicyTable::builtin();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("set"), Some(&SET_POLICY));
        assert_eq!(table.lookup("for"), Some(&FOR_POLICY));
        assert_eq!(table.lookup("if"), Some(&IF_POLICY));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = TagPolicyTable::builtin();
        assert_eq!(table.lookup("SET"), table.lookup("set"));
        assert_eq!(table.lookup("For"), Some(&FOR_POLICY));
    }

    #[test]
    fn test_lookup_unknown_tag_has_no_policy() {
        let table = TagPolicyTable::builtin();
        assert_eq!(table.lookup("div"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_repeated_lookups_agree() {
        let table = TagPolicyTable::builtin();
        let first = table.lookup("if").copied();
        for _ in 0..10 {
            assert_eq!(table.lookup("if").copied(), first);
        }
    }

    #[test]
    fn test_table_is_extensible() {
        let raw = TagPolicy::new(ContentModel::RawHtml, None);
        let mut table = TagPolicyTable::builtin().with("Slot", raw);
        assert_eq!(table.lookup("slot"), Some(&raw));

        let replaced = table.insert("set", TagPolicy::new(ContentModel::InlineText, None));
        assert_eq!(replaced, Some(SET_POLICY));
        assert!(!table.forces_self_closing("set"));
    }

    #[test]
    fn test_content_model_maps_to_content_type() {
        assert_eq!(ContentModel::Empty.content_type(), ContentType::Empty);
        assert_eq!(ContentModel::InlineText.content_type(), ContentType::Text);
        assert_eq!(ContentModel::RawHtml.content_type(), ContentType::Html);
        assert_eq!(ContentModel::NestedBlocks.content_type(), ContentType::Blocks);
    }

    #[test]
    fn test_forces_self_closing() {
        let table = TagPolicyTable::builtin();
        assert!(table.forces_self_closing("set"));
        assert!(!table.forces_self_closing("for"));
        assert!(!table.forces_self_closing("img"));
    }

    #[test]
    fn test_policy_deserializes_from_kebab_case() {
        let policy: TagPolicy =
            serde_json::from_str(r#"{"content_model":"raw-html","self_closing":false}"#).unwrap();
        assert_eq!(policy, TagPolicy::new(ContentModel::RawHtml, Some(false)));

        let policy: TagPolicy = serde_json::from_str(r#"{"content_model":"inline-text"}"#).unwrap();
        assert_eq!(policy.force_self_closing, None);
    }
}

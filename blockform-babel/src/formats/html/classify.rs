//! Element classification
//!
//!     Deciding how an element becomes a block is a priority-ordered chain of rules. The first
//!     rule that claims an element decides its content type and self-closing flag:
//!
//!     | # | Rule       | Claims                         | Content type          | Self-closing   |
//!     |---|------------|--------------------------------|-----------------------|----------------|
//!     | 1 | Policy     | tags with a TagPolicy          | from the policy       | from the policy|
//!     | 2 | Void       | img, br, hr, input, ...        | empty                 | true           |
//!     | 3 | Svg        | svg                            | html (inner markup)   | false          |
//!     | 4 | Structural | everything else                | see below             | false          |
//!
//!     Structural inference:
//!
//!     - element children and a container tag → blocks
//!     - element children, not a container → html, the mixed content is kept opaque
//!     - only non-whitespace text → text
//!     - otherwise → empty
//!
//!     Each rule can be exercised on its own through [Rule::apply].

use blockform_core::tags::{is_container_element, is_void_element};
use blockform_core::{ContentType, TagPolicyTable};

/// The facts about an element that classification looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementFacts<'a> {
    pub tag_name: &'a str,
    pub has_element_children: bool,
    pub has_non_whitespace_text: bool,
}

/// Outcome of classifying one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub content_type: ContentType,
    pub self_closing: bool,
    pub rule: Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Policy,
    Void,
    Svg,
    Structural,
}

/// Rules in the order they are tried
pub const RULE_ORDER: [Rule; 4] = [Rule::Policy, Rule::Void, Rule::Svg, Rule::Structural];

impl Rule {
    /// Classify the element if this rule claims it
    pub fn apply(
        &self,
        facts: &ElementFacts<'_>,
        policies: &TagPolicyTable,
    ) -> Option<Classification> {
        match self {
            Rule::Policy => policies.lookup(facts.tag_name).map(|policy| Classification {
                content_type: policy.content_model.content_type(),
                self_closing: policy
                    .force_self_closing
                    .unwrap_or_else(|| is_void_element(facts.tag_name)),
                rule: Rule::Policy,
            }),
            Rule::Void => is_void_element(facts.tag_name).then_some(Classification {
                content_type: ContentType::Empty,
                self_closing: true,
                rule: Rule::Void,
            }),
            Rule::Svg => facts
                .tag_name
                .eq_ignore_ascii_case("svg")
                .then_some(Classification {
                    content_type: ContentType::Html,
                    self_closing: false,
                    rule: Rule::Svg,
                }),
            Rule::Structural => Some(structural(facts)),
        }
    }
}

fn structural(facts: &ElementFacts<'_>) -> Classification {
    let content_type = if facts.has_element_children {
        if is_container_element(facts.tag_name) {
            ContentType::Blocks
        } else {
            ContentType::Html
        }
    } else if facts.has_non_whitespace_text {
        ContentType::Text
    } else {
        ContentType::Empty
    };

    Classification {
        content_type,
        self_closing: false,
        rule: Rule::Structural,
    }
}

/// Run the rule chain
pub fn classify(facts: &ElementFacts<'_>, policies: &TagPolicyTable) -> Classification {
    let classification = RULE_ORDER
        .iter()
        .find_map(|rule| rule.apply(facts, policies))
        .unwrap_or_else(|| structural(facts));

    tracing::trace!(
        tag = facts.tag_name,
        rule = ?classification.rule,
        content_type = %classification.content_type,
        "classified element"
    );
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockform_core::{ContentModel, TagPolicy};
    use rstest::rstest;

    fn facts(tag_name: &str, elements: bool, text: bool) -> ElementFacts<'_> {
        ElementFacts {
            tag_name,
            has_element_children: elements,
            has_non_whitespace_text: text,
        }
    }

    #[test]
    fn test_policy_rule_overrides_structure() {
        let policies = TagPolicyTable::builtin();
        let c = Rule::Policy
            .apply(&facts("set", true, true), &policies)
            .expect("set has a policy");
        assert_eq!(c.content_type, ContentType::Empty);
        assert!(c.self_closing);

        let c = Rule::Policy
            .apply(&facts("for", false, true), &policies)
            .expect("for has a policy");
        assert_eq!(c.content_type, ContentType::Blocks);
        assert!(!c.self_closing);
    }

    #[test]
    fn test_policy_rule_ignores_unknown_tags() {
        let policies = TagPolicyTable::builtin();
        assert_eq!(Rule::Policy.apply(&facts("div", true, false), &policies), None);
    }

    #[test]
    fn test_policy_without_self_closing_falls_back_to_void() {
        let policies = TagPolicyTable::empty()
            .with("img", TagPolicy::new(ContentModel::RawHtml, None))
            .with("slot", TagPolicy::new(ContentModel::InlineText, None));

        let img = classify(&facts("img", false, false), &policies);
        assert_eq!(img.rule, Rule::Policy);
        assert_eq!(img.content_type, ContentType::Html);
        assert!(img.self_closing);

        let slot = classify(&facts("slot", false, true), &policies);
        assert_eq!(slot.content_type, ContentType::Text);
        assert!(!slot.self_closing);
    }

    #[test]
    fn test_void_rule() {
        let policies = TagPolicyTable::builtin();
        let c = Rule::Void
            .apply(&facts("br", false, false), &policies)
            .expect("br is void");
        assert_eq!(c.content_type, ContentType::Empty);
        assert!(c.self_closing);
        assert_eq!(Rule::Void.apply(&facts("div", false, false), &policies), None);
    }

    #[test]
    fn test_svg_rule() {
        let policies = TagPolicyTable::builtin();
        let c = Rule::Svg
            .apply(&facts("svg", true, false), &policies)
            .expect("svg is claimed");
        assert_eq!(c.content_type, ContentType::Html);
        assert_eq!(Rule::Svg.apply(&facts("path", false, false), &policies), None);
    }

    #[rstest]
    #[case("section", true, false, ContentType::Blocks)]
    #[case("li", true, true, ContentType::Blocks)]
    #[case("p", true, true, ContentType::Html)]
    #[case("span", true, false, ContentType::Html)]
    #[case("h1", false, true, ContentType::Text)]
    #[case("div", false, true, ContentType::Text)]
    #[case("div", false, false, ContentType::Empty)]
    fn test_structural_rule(
        #[case] tag: &str,
        #[case] elements: bool,
        #[case] text: bool,
        #[case] expected: ContentType,
    ) {
        let c = Rule::Structural
            .apply(&facts(tag, elements, text), &TagPolicyTable::empty())
            .expect("structural always classifies");
        assert_eq!(c.content_type, expected);
        assert!(!c.self_closing);
    }

    #[test]
    fn test_rule_order_is_policy_first() {
        let policies = TagPolicyTable::builtin()
            .with("svg", TagPolicy::new(ContentModel::NestedBlocks, Some(false)));
        let c = classify(&facts("svg", true, false), &policies);
        assert_eq!(c.rule, Rule::Policy);
        assert_eq!(c.content_type, ContentType::Blocks);

        let c = classify(&facts("hr", false, false), &TagPolicyTable::builtin());
        assert_eq!(c.rule, Rule::Void);
    }
}

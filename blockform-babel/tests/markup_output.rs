//! Markup export tests (HTML → block tree → comment markup)

use blockform_babel::{blocks_to_markup, html_to_blocks, FormatRegistry};
use blockform_core::{SequentialIds, TagPolicyTable};
use std::sync::Arc;

fn registry() -> FormatRegistry {
    FormatRegistry::with_policies(TagPolicyTable::builtin(), Arc::new(SequentialIds::default()))
}

fn html_to_markup(source: &str) -> String {
    let registry = registry();
    let doc = registry.parse(source, "html").unwrap();
    registry.serialize(&doc, "markup").unwrap()
}

#[test]
fn test_page_to_markup() {
    let markup = html_to_markup(
        r#"<section class="hero"><h1>Hi</h1><img src="a.png"><set a="b" /></section>"#,
    );

    insta::assert_snapshot!(markup, @r#"
    <!-- wp:blockform/element {"tagName":"section","className":"hero","contentType":"blocks","selfClosing":false,"globalAttrs":{},"lock":{},"metadata":{}} -->
      <!-- wp:blockform/element {"tagName":"h1","contentType":"text","selfClosing":false,"globalAttrs":{},"content":"Hi","lock":{},"metadata":{}} -->
      <!-- /wp:blockform/element -->
      <!-- wp:blockform/element {"tagName":"img","contentType":"empty","selfClosing":true,"globalAttrs":{"src":"a.png"},"lock":{},"metadata":{}} /-->
      <!-- wp:blockform/element {"tagName":"set","contentType":"empty","selfClosing":true,"globalAttrs":{"a":"b"},"lock":{},"metadata":{}} /-->
    <!-- /wp:blockform/element -->
    "#);
}

#[test]
fn test_markup_openers_and_closers_balance() {
    let markup = html_to_markup(
        "<div><ul><li>a</li><li>b</li></ul><div><p>x <em>y</em></p></div></div><hr>",
    );

    let openers = markup
        .lines()
        .filter(|line| line.trim_start().starts_with("<!-- wp:") && line.ends_with(" -->"))
        .count();
    let closers = markup
        .lines()
        .filter(|line| line.trim_start().starts_with("<!-- /wp:"))
        .count();
    let void = markup.lines().filter(|line| line.ends_with("/-->")).count();

    assert_eq!(openers, closers);
    assert_eq!(openers, 6);
    assert_eq!(void, 1);
}

#[test]
fn test_markup_is_export_only() {
    let registry = registry();
    assert!(registry.parse("<!-- wp:blockform/element {} /-->", "markup").is_err());
}

#[test]
fn test_markup_helper_matches_registry_output() {
    let source = r#"<div><span>x</span><br></div>"#;
    let doc = html_to_blocks(source, &TagPolicyTable::builtin(), &SequentialIds::default());
    assert_eq!(blocks_to_markup(&doc.blocks).unwrap(), html_to_markup(source));
}

//! Import tests (HTML → block tree)

use blockform_babel::formats::HtmlFormat;
use blockform_babel::{html_to_blocks, Format};
use blockform_core::testing::assert_blocks;
use blockform_core::{ContentType, SequentialIds, TagPolicyTable};
use std::sync::Arc;

fn import(source: &str) -> blockform_core::BlockDocument {
    html_to_blocks(source, &TagPolicyTable::builtin(), &SequentialIds::default())
}

#[test]
fn test_hero_section() {
    let doc = import(r#"<section class="hero"><h1>Hi</h1></section>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |section| {
        section
            .tag("section")
            .class_name("hero")
            .content_type(ContentType::Blocks)
            .child_count(1)
            .child(0, |h1| {
                h1.tag("h1").text("Hi").no_class_name();
            });
    });
}

#[test]
fn test_void_image() {
    let doc = import(r#"<img src="a.png">"#);

    assert_blocks(&doc.blocks).count(1).block(0, |img| {
        img.tag("img")
            .empty()
            .self_closing(true)
            .attr("src", "a.png")
            .attr_count(1);
    });
}

#[test]
fn test_dynamic_set_tag_forms_are_equivalent() {
    let explicit = import(r#"<set a="b"></set>"#);
    let self_closed = import(r#"<set a="b" />"#);

    assert_eq!(explicit, self_closed);
    assert_blocks(&explicit.blocks).count(1).block(0, |set| {
        set.tag("set").empty().self_closing(true).attr("a", "b");
    });
}

#[test]
fn test_self_closed_set_does_not_swallow_siblings() {
    let doc = import(r#"<set a="b" /><div>after</div>"#);

    assert_blocks(&doc.blocks)
        .tags(&["set", "div"])
        .block(1, |div| {
            div.text("after");
        });
}

#[test]
fn test_if_tag_keeps_text_as_nested_blocks() {
    let doc = import(r#"<if test="x">hello</if>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |if_block| {
        if_block
            .tag("if")
            .self_closing(false)
            .attr("test", "x")
            .child(0, |p| {
                p.tag("p").text("hello");
            });
    });
}

#[test]
fn test_for_tag_with_element_children() {
    let doc = import(r#"<for each="item"><div>a</div><div>b</div></for>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |for_block| {
        for_block
            .tag("for")
            .content_type(ContentType::Blocks)
            .children()
            .tags(&["div", "div"]);
    });
}

#[test]
fn test_nested_dynamic_tag_keeps_its_body() {
    let doc = import(r#"<div><if c="x"><p>t</p></if></div>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |div| {
        div.tag("div")
            .content_type(ContentType::Blocks)
            .child_count(1)
            .child(0, |if_block| {
                if_block.tag("if").attr("c", "x").child_count(1).child(0, |p| {
                    p.tag("p").text("t");
                });
            });
    });
}

#[test]
fn test_set_with_angle_bracket_in_value_does_not_swallow_siblings() {
    let doc = import(r#"<set cond="a > b" /><div>after</div>"#);

    assert_blocks(&doc.blocks)
        .count(2)
        .tags(&["set", "div"])
        .block(0, |set| {
            set.empty().self_closing(true).attr("cond", "a > b");
        })
        .block(1, |div| {
            div.text("after");
        });
}

#[test]
fn test_policy_markup_inside_attribute_value_is_verbatim() {
    let doc = import(r#"<div title="<set/>">x</div>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |div| {
        div.text("x").attr("title", "<set/>");
    });
}

#[test]
fn test_svg_inner_markup_is_verbatim() {
    let doc = import(r#"<svg viewBox="0 0 1 1"><path d="M0 0"></path></svg>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |svg| {
        svg.tag("svg")
            .content_starts_with("<path")
            .content_contains(r#"d="M0 0""#)
            .html(r#"<path d="M0 0"></path>"#)
            .attr("viewBox", "0 0 1 1")
            .child_count(0);
    });
}

#[test]
fn test_mixed_content_outside_containers_is_html() {
    let doc = import("<p>text <em>x</em></p>");

    assert_blocks(&doc.blocks).count(1).block(0, |p| {
        p.tag("p").html("text <em>x</em>");
    });
}

#[test]
fn test_style_becomes_data_style() {
    let doc = import(r#"<div id="a" style="color: red">x</div>"#);

    assert_blocks(&doc.blocks).count(1).block(0, |div| {
        div.attr("id", "a")
            .attr("data-style", "color: red")
            .no_attr("style")
            .attr_count(2);
    });
}

#[test]
fn test_style_wins_over_existing_data_style() {
    let doc = import(r#"<div data-style="old" style="new">x</div>"#);

    assert_blocks(&doc.blocks).block(0, |div| {
        div.attr("data-style", "new").attr_count(1);
    });
}

#[test]
fn test_attribute_order_is_preserved() {
    let doc = import(r#"<div z="1" a="2" m="3">x</div>"#);
    let names: Vec<&str> = doc.blocks[0].attributes.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn test_stray_text_is_wrapped() {
    let doc = import("  loose words  <hr>");

    assert_blocks(&doc.blocks)
        .tags(&["p", "hr"])
        .block(0, |p| {
            p.text("loose words");
        })
        .block(1, |hr| {
            hr.empty().self_closing(true);
        });
}

#[test]
fn test_comments_are_skipped() {
    let doc = import("<!-- top --><div><!-- note --><span>x</span></div>");

    assert_blocks(&doc.blocks).count(1).block(0, |div| {
        div.tag("div").child_count(1).child(0, |span| {
            span.tag("span").text("x");
        });
    });
}

#[test]
fn test_head_content_comes_first() {
    let doc = import("<title>T</title><div>x</div>");
    assert_blocks(&doc.blocks).tags(&["title", "div"]);
}

#[test]
fn test_blank_input_is_empty() {
    assert!(import("").is_empty());
    assert!(import(" \n\t ").is_empty());
}

#[test]
fn test_malformed_markup_is_accepted() {
    let doc = import("<div><span>unclosed</div><p>tail");

    assert_blocks(&doc.blocks).tags(&["div", "p"]).block(1, |p| {
        p.text("tail");
    });
}

#[test]
fn test_ids_follow_document_order() {
    let ids = SequentialIds::new("n");
    let doc = html_to_blocks(
        "<section><h1>a</h1><div>b</div></section><hr>",
        &TagPolicyTable::builtin(),
        &ids,
    );

    let mut seen = Vec::new();
    for block in &doc.blocks {
        block.walk(&mut |node, _| seen.push(node.id.to_string()));
    }
    assert_eq!(seen, vec!["n1", "n2", "n3", "n4"]);
}

#[test]
fn test_format_uses_injected_policies() {
    let policies = TagPolicyTable::builtin().with(
        "slot",
        blockform_core::TagPolicy::new(blockform_core::ContentModel::Empty, Some(true)),
    );
    let format = HtmlFormat::new(policies, Arc::new(SequentialIds::default()));
    let doc = format.parse(r#"<slot name="x" /><div>y</div>"#).unwrap();

    assert_blocks(&doc.blocks)
        .tags(&["slot", "div"])
        .block(0, |slot| {
            slot.empty().self_closing(true).attr("name", "x");
        });
}

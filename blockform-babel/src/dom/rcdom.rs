//! html5ever-backed parser

use super::{DomNode, HtmlParser, NodeKind, ParsedFragment};
use html5ever::serialize::{SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, serialize, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// Parses with html5ever into an [RcDom]
///
/// The fragment is parsed as a full document. The implicit root is then the concatenation of
/// `<head>` and `<body>` children, which keeps document order: the parser only routes
/// metadata elements into `<head>` when they precede all body content.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html5everParser;

impl HtmlParser for Html5everParser {
    type Node = Handle;
    type Fragment = RcDomFragment;

    fn parse_fragment(&self, source: &str) -> RcDomFragment {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
        let roots = implicit_root_children(&dom.document);
        RcDomFragment { dom, roots }
    }
}

/// An [RcDom] kept alive next to the handles of its implicit root
///
/// `markup5ever_rcdom` empties the children of every descendant when the document node is
/// dropped, so the handles are unusable once the dom is gone.
pub struct RcDomFragment {
    dom: RcDom,
    roots: Vec<Handle>,
}

impl RcDomFragment {
    pub fn dom(&self) -> &RcDom {
        &self.dom
    }
}

impl ParsedFragment for RcDomFragment {
    type Node = Handle;

    fn roots(&self) -> &[Handle] {
        &self.roots
    }
}

fn implicit_root_children(document: &Handle) -> Vec<Handle> {
    let mut roots = Vec::new();
    for child in document.children.borrow().iter() {
        if element_name(child).as_deref() != Some("html") {
            roots.push(child.clone());
            continue;
        }
        for section in child.children.borrow().iter() {
            match element_name(section).as_deref() {
                Some("head") | Some("body") => {
                    roots.extend(section.children.borrow().iter().cloned())
                }
                _ => roots.push(section.clone()),
            }
        }
    }
    roots
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {}
    }
}

impl DomNode for Handle {
    fn kind(&self) -> NodeKind {
        match &self.data {
            NodeData::Element { name, attrs, .. } => NodeKind::Element {
                tag_name: name.local.to_string(),
                attributes: attrs
                    .borrow()
                    .iter()
                    .map(|attr| (attribute_name(&attr.name), attr.value.to_string()))
                    .collect(),
            },
            NodeData::Text { contents } => NodeKind::Text(contents.borrow().to_string()),
            _ => NodeKind::Other,
        }
    }

    fn children(&self) -> Vec<Handle> {
        self.children.borrow().clone()
    }

    fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }

    fn inner_html(&self) -> String {
        let mut output = Vec::new();
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        };
        let serializable = SerializableHandle::from(self.clone());
        match serialize(&mut output, &serializable, opts) {
            Ok(()) => String::from_utf8_lossy(&output).into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize inner markup");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<NodeKind> {
        Html5everParser
            .parse_fragment(source)
            .roots()
            .iter()
            .map(DomNode::kind)
            .collect()
    }

    #[test]
    fn test_fragment_children_in_order() {
        let fragment = Html5everParser.parse_fragment("<h1>A</h1><p>B</p>");
        let roots = fragment.roots();
        let tags: Vec<_> = roots
            .iter()
            .filter_map(|n| match n.kind() {
                NodeKind::Element { tag_name, .. } => Some(tag_name),
                _ => None,
            })
            .collect();
        assert_eq!(tags, vec!["h1", "p"]);
    }

    #[test]
    fn test_head_elements_stay_in_document_order() {
        let fragment = Html5everParser.parse_fragment(r#"<meta charset="utf-8"><div>x</div>"#);
        let roots = fragment.roots();
        assert!(matches!(
            &roots[0].kind(),
            NodeKind::Element { tag_name, .. } if tag_name == "meta"
        ));
        assert!(matches!(
            &roots[1].kind(),
            NodeKind::Element { tag_name, .. } if tag_name == "div"
        ));
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let fragment = Html5everParser.parse_fragment(r#"<img src="a.png" alt="A" width="3">"#);
        let roots = fragment.roots();
        match roots[0].kind() {
            NodeKind::Element { attributes, .. } => {
                let names: Vec<_> = attributes.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["src", "alt", "width"]);
            }
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_text_content_and_inner_html() {
        let fragment = Html5everParser.parse_fragment("<p>Hello <b>world</b></p>");
        let roots = fragment.roots();
        assert_eq!(roots[0].text_content(), "Hello world");
        assert_eq!(roots[0].inner_html(), "Hello <b>world</b>");
    }

    #[test]
    fn test_empty_source_has_no_roots() {
        assert!(kinds("").is_empty());
    }

    #[test]
    fn test_nested_children_outlive_the_parse_call() {
        let fragment = Html5everParser.parse_fragment(r#"<div><if c="x"><p>t</p></if></div>"#);
        let div = &fragment.roots()[0];
        let children = div.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].children().len(), 1);
        assert_eq!(div.text_content(), "t");
        assert_eq!(div.inner_html(), r#"<if c="x"><p>t</p></if>"#);
    }

    #[test]
    fn test_fragment_keeps_its_document() {
        let fragment = Html5everParser.parse_fragment("<hr>");
        assert!(matches!(fragment.dom().document.data, NodeData::Document));
        assert_eq!(fragment.roots().len(), 1);
    }

    #[test]
    fn test_comments_are_other() {
        assert_eq!(kinds("<div></div><!-- note -->")[1], NodeKind::Other);
    }
}

//! Lenient HTML parsing behind a small interface
//!
//!     The forward transcoder only needs a handful of questions answered about a parsed
//!     document: what each node is, its children, its text and its inner markup. [DomNode] and
//!     [HtmlParser] capture exactly that, so any HTML5 parser with error recovery can back the
//!     transcoder. The shipped implementation is [Html5everParser].
//!
//!     Parsing never fails. Malformed markup is repaired by the parser's own recovery rules and
//!     whatever tree comes out is accepted.

mod rcdom;

pub use rcdom::{Html5everParser, RcDomFragment};

/// What a DOM node is, as far as the transcoder cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An element with its lowercase tag name and attributes in source order
    Element {
        tag_name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
    /// Comments, doctypes, processing instructions
    Other,
}

/// A node of a parsed document
pub trait DomNode: Sized {
    fn kind(&self) -> NodeKind;

    fn children(&self) -> Vec<Self>;

    /// Concatenated text of all descendant text nodes
    fn text_content(&self) -> String;

    /// Serialized markup of the children, without the node's own tags
    fn inner_html(&self) -> String;
}

/// A parsed fragment that owns its document
///
/// Nodes are only valid while the fragment is alive: dropping the document may detach the
/// children of every node in it, including nodes still referenced elsewhere.
pub trait ParsedFragment {
    type Node: DomNode;

    /// The ordered children of the implicit root
    fn roots(&self) -> &[Self::Node];
}

/// A lenient HTML parser
pub trait HtmlParser: Send + Sync {
    type Node: DomNode;
    type Fragment: ParsedFragment<Node = Self::Node>;

    fn parse_fragment(&self, source: &str) -> Self::Fragment;
}

//! DOM adapter: markup in, a read-only node forest out.

mod arena;
mod tree_sink;

pub use arena::{Attribute, Children, Dom, DomData, DomId, DomNode};
pub use tree_sink::{DomSink, Handle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse markup into a [`Dom`].
///
/// Fragments are accepted: the tree builder wraps them in `html/head/body`,
/// and [`Dom::roots`] hands back the children of `<body>`.
pub fn parse_html(markup: &str) -> Dom {
    let sink = DomSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(markup.as_bytes())
        .into_dom()
}

//! # notion-blocks
//!
//! Turn HTML copied or exported from Notion into a generic document tree.
//!
//! The export encodes meaning only through class names on otherwise generic
//! `div`s and `span`s (`notion-header-block`, `notion-quote-block`, ...).
//! This crate classifies those elements into [`Node`]s (headings,
//! paragraphs, lists, tables, code, images, callouts, columns, inline
//! emphasis) that a renderer can consume without knowing about the export.
//!
//! ## Quick Start
//!
//! ```
//! use notion_blocks::{parse, ContainerKind, Node};
//!
//! let html = r#"<div class="notion-header-block">Hi</div>"#;
//! let nodes = parse(html, true);
//!
//! assert_eq!(
//!     nodes,
//!     vec![Node::container(ContainerKind::Heading1, vec![Node::text("Hi")])]
//! );
//! ```
//!
//! ## Lists
//!
//! Every list entry is exported as its own block. With list normalization on
//! (the default), adjacent entries are merged back into one list:
//!
//! ```
//! use notion_blocks::{parse_with, NodeKind, ParseOptions};
//!
//! let html = r#"<div class="notion-bulleted_list-block">A</div><div class="notion-bulleted_list-block">B</div>"#;
//!
//! let merged = parse_with(html, &ParseOptions::default());
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].kind(), NodeKind::UnorderedList);
//!
//! let flat = parse_with(html, &ParseOptions::new().with_normalize_lists(false));
//! assert_eq!(flat.len(), 2);
//! ```
//!
//! ## Errors
//!
//! Top-level blocks that cannot be classified (or whose markup is not shaped
//! the way the export shapes it) are skipped and logged at `trace` level
//! through the [`log`] facade. [`parse_block`] exposes the error for a
//! single element.

pub mod classify;
pub mod dom;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use dom::{Dom, DomId, parse_html};
pub use error::{Error, Result};
pub use model::{ContainerKind, ListKind, Node, NodeKind};
pub use normalize::normalize_lists;
pub use parser::{ListLevels, parse_block};

/// Options for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Merge adjacent list blocks into nested lists.
    pub normalize_lists: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_lists: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize_lists(mut self, normalize_lists: bool) -> Self {
        self.normalize_lists = normalize_lists;
        self
    }
}

/// Parse exported markup into top-level nodes.
///
/// With `normalize_list` set, adjacent list blocks are merged into nested
/// lists before returning.
pub fn parse(markup: &str, normalize_list: bool) -> Vec<Node> {
    parse_with(
        markup,
        &ParseOptions::new().with_normalize_lists(normalize_list),
    )
}

pub fn parse_with(markup: &str, options: &ParseOptions) -> Vec<Node> {
    let dom = parse_html(markup);
    parse_dom(&dom, options)
}

/// Parse raw bytes, detecting the text encoding first.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Vec<Node> {
    let hint = util::extract_charset(bytes);
    let markup = util::decode_text(bytes, hint);
    parse_with(&markup, options)
}

/// Parse the body of an already-built [`Dom`].
pub fn parse_dom(dom: &Dom, options: &ParseOptions) -> Vec<Node> {
    let roots = dom.roots();
    let nodes = parser::parse_roots(dom, &roots);
    log::debug!(
        "parsed {} of {} root blocks (normalize_lists: {})",
        nodes.len(),
        roots.len(),
        options.normalize_lists
    );

    if options.normalize_lists {
        normalize_lists(nodes)
    } else {
        nodes
    }
}

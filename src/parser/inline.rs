//! Walkers for text-level blocks: headings, paragraphs, links, bookmarks
//! and styled spans.

use crate::classify::{EMOJI_ROLE, InlineStyle, resolve_inline_style};
use crate::dom::{Dom, DomId};
use crate::error::{Error, Result};
use crate::model::{ContainerKind, Node};

use super::{Append, ListLevels, collect, descend, first_child, first_text, parse_block, tag_name};

/// Heading or paragraph. Nested blocks are kept even when empty.
pub(super) fn text_block(dom: &Dom, id: DomId, kind: ContainerKind) -> Result<Node> {
    let children = collect(|out| walk_text_block(dom, id, out))?;
    Ok(Node::container(kind, children))
}

fn walk_text_block(dom: &Dom, id: DomId, out: &mut Vec<Node>) -> Result<()> {
    descend(dom, id, out, Append::Always, &mut |child, out| {
        walk_text_block(dom, child, out)
    })
}

/// Collect every text descendant in order, ignoring all markup.
pub(super) fn collect_text(dom: &Dom, id: DomId, out: &mut Vec<Node>) -> Result<()> {
    for child in dom.children(id) {
        if let Some(text) = dom.text(child) {
            out.push(Node::text(text));
        } else if dom.is_element(child) {
            collect_text(dom, child, out)?;
        }
    }
    Ok(())
}

/// Bookmark cards: text plus one `a` node per anchor met on the way down.
pub(super) fn walk_bookmark(dom: &Dom, id: DomId, out: &mut Vec<Node>) -> Result<()> {
    if dom.tag(id) == Some("a") {
        out.push(Node::Link {
            href: dom.href(id).map(str::to_owned),
            children: Vec::new(),
        });
    }
    for child in dom.children(id) {
        if let Some(text) = dom.text(child) {
            out.push(Node::text(text));
        } else if dom.is_element(child) {
            walk_bookmark(dom, child, out)?;
        }
    }
    Ok(())
}

/// Resolve a styled span into bold, italic, inline code or plain text.
pub(super) fn styled(dom: &Dom, id: DomId) -> Result<Node> {
    let style = dom.style(id).ok_or_else(|| Error::MissingAttribute {
        tag: tag_name(dom, id),
        attr: "style",
    })?;
    let first_is_emoji = dom
        .child(id, 0)
        .is_some_and(|first| dom.role(first) == Some(EMOJI_ROLE));

    match resolve_inline_style(style, first_is_emoji) {
        InlineStyle::Bold => Ok(Node::container(
            ContainerKind::Bold,
            collect(|out| collect_text(dom, id, out))?,
        )),
        InlineStyle::Italic => Ok(Node::container(
            ContainerKind::Italic,
            vec![first_text(dom, id)?],
        )),
        // span > span[role=img] > text
        InlineStyle::Emoji => first_text(dom, first_child(dom, id)?),
        InlineStyle::InlineCode => Ok(Node::container(
            ContainerKind::InlineCode,
            collect(|out| walk_inline_code(dom, id, out))?,
        )),
        InlineStyle::Plain => first_text(dom, id),
    }
}

/// Inline code classifies every element child, wrapper or not.
fn walk_inline_code(dom: &Dom, id: DomId, out: &mut Vec<Node>) -> Result<()> {
    for child in dom.children(id) {
        if let Some(text) = dom.text(child) {
            out.push(Node::text(text));
        } else if dom.is_element(child) {
            out.push(parse_block(dom, child, ListLevels::default())?);
        }
    }
    Ok(())
}

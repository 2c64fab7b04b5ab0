//! Block classification, dispatch and the root-level parse loop.
//!
//! [`parse_block`] turns one element into one [`Node`]: it classifies the
//! element by its class string and hands it to the walker for that kind.
//! Walkers descend depth-first and share one recursion rule (see
//! [`descend`]): text becomes a text leaf, a child carrying a whitelisted
//! block class is classified in its own right, and anything else is treated
//! as presentational wrapper markup and flattened away.
//!
//! Errors propagate unchanged to the root boundary in [`parse_roots`], which
//! drops the offending root block and keeps going.

mod block;
mod inline;

use crate::classify::{self, BlockClass, EMOJI_ROLE};
use crate::dom::{Dom, DomData, DomId};
use crate::error::{Error, Result};
use crate::model::{ContainerKind, ListKind, Node};

/// Nesting depth of the enclosing bulleted and numbered lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLevels {
    pub unordered: u32,
    pub ordered: u32,
}

impl ListLevels {
    pub fn get(self, kind: ListKind) -> u32 {
        match kind {
            ListKind::Unordered => self.unordered,
            ListKind::Ordered => self.ordered,
        }
    }
}

/// Classify one element and build its node.
///
/// `levels` only matters when the element is a list; everything else ignores
/// it. An element without a `class`, or whose class matches no rule, is an
/// error rather than an empty node.
pub fn parse_block(dom: &Dom, id: DomId, levels: ListLevels) -> Result<Node> {
    let tag = dom.tag(id).ok_or(Error::NotAnElement)?;

    // Rendered emoji shorthand.
    if dom.role(id) == Some(EMOJI_ROLE) {
        return first_text(dom, id);
    }

    let class = dom.class(id).ok_or_else(|| Error::MissingClass {
        tag: tag.to_string(),
    })?;
    let rule = classify::classify(class).ok_or_else(|| Error::UnsupportedBlock {
        class: class.to_string(),
    })?;

    let node = match rule {
        BlockClass::Header => inline::text_block(dom, id, ContainerKind::Heading1)?,
        BlockClass::SubHeader => inline::text_block(dom, id, ContainerKind::Heading2)?,
        BlockClass::SubSubHeader => inline::text_block(dom, id, ContainerKind::Heading3)?,
        BlockClass::Text => inline::text_block(dom, id, ContainerKind::Paragraph)?,
        BlockClass::Link => Node::Link {
            href: dom.href(id).map(str::to_owned),
            children: collect(|out| inline::collect_text(dom, id, out))?,
        },
        BlockClass::Bookmark => Node::container(
            ContainerKind::Bookmark,
            collect(|out| inline::walk_bookmark(dom, id, out))?,
        ),
        BlockClass::Styled => inline::styled(dom, id)?,
        BlockClass::Quote => Node::container(
            ContainerKind::Quote,
            collect(|out| block::walk_quote(dom, id, out))?,
        ),
        BlockClass::Callout => Node::container(
            ContainerKind::Callout,
            collect(|out| block::walk_callout(dom, id, out))?,
        ),
        BlockClass::Code => Node::container(
            ContainerKind::Code,
            collect(|out| block::walk_code(dom, id, out))?,
        ),
        BlockClass::Divider => Node::Divider,
        BlockClass::BulletedList => block::list(dom, id, ListKind::Unordered, levels)?,
        BlockClass::NumberedList => block::list(dom, id, ListKind::Ordered, levels)?,
        BlockClass::Image => Node::Image {
            href: None,
            children: collect(|out| block::walk_image_block(dom, id, out))?,
        },
        BlockClass::Table => Node::container(
            ContainerKind::Table,
            collect(|out| block::walk_table(dom, id, out))?,
        ),
        BlockClass::ColumnList => Node::container(
            ContainerKind::ColumnList,
            collect(|out| block::walk_column_list(dom, id, out))?,
        ),
    };
    Ok(node)
}

/// Parse each root independently, skipping the ones that fail.
///
/// A failure anywhere inside a root discards that whole root; its siblings
/// are unaffected.
pub fn parse_roots(dom: &Dom, roots: &[DomId]) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(roots.len());
    for &root in roots {
        match parse_block(dom, root, ListLevels::default()) {
            Ok(node) => nodes.push(node),
            Err(e) => log::trace!("skipping root block {}: {e}", root.0),
        }
    }
    nodes
}

/// Build a node directly from an `<img>` element, without descending.
pub fn image(dom: &Dom, id: DomId) -> Node {
    Node::Image {
        href: dom.src(id).map(str::to_owned),
        children: Vec::new(),
    }
}

/// How a walker appends a node returned by a nested classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Append {
    Always,
    /// Drop nodes that came back with no children, text leaves included.
    /// Only `divider` is exempt.
    NonEmpty,
}

impl Append {
    fn push(self, out: &mut Vec<Node>, node: Node) {
        if self == Append::Always || !node.is_empty() {
            out.push(node);
        }
    }
}

type Wrapper<'a> = dyn FnMut(DomId, &mut Vec<Node>) -> Result<()> + 'a;
type NestedLevels<'a> = dyn Fn(&str) -> ListLevels + 'a;

/// Apply the shared recursion rule to every child of `id`.
///
/// `wrapper` is called for element children that are not semantic blocks;
/// walkers pass themselves so wrapper markup is flattened with their own
/// rules.
fn descend(
    dom: &Dom,
    id: DomId,
    out: &mut Vec<Node>,
    append: Append,
    wrapper: &mut Wrapper<'_>,
) -> Result<()> {
    descend_nested(dom, id, out, append, &|_| ListLevels::default(), wrapper)
}

/// [`descend`], with list levels computed per nested block from its class.
fn descend_nested(
    dom: &Dom,
    id: DomId,
    out: &mut Vec<Node>,
    append: Append,
    levels: &NestedLevels<'_>,
    wrapper: &mut Wrapper<'_>,
) -> Result<()> {
    for child in dom.children(id) {
        visit_child(dom, child, out, append, levels, wrapper)?;
    }
    Ok(())
}

fn visit_child(
    dom: &Dom,
    child: DomId,
    out: &mut Vec<Node>,
    append: Append,
    levels: &NestedLevels<'_>,
    wrapper: &mut Wrapper<'_>,
) -> Result<()> {
    match dom.get(child).map(|n| &n.data) {
        Some(DomData::Text(text)) => out.push(Node::text(text.as_str())),
        Some(DomData::Element { .. }) => match dom.class(child) {
            Some(class) if classify::has_block_token(class) => {
                append.push(out, parse_block(dom, child, levels(class))?);
            }
            _ => wrapper(child, out)?,
        },
        _ => {}
    }
    Ok(())
}

/// Run `fill` into an optional group node.
///
/// With `Some(kind)` everything `fill` produces lands inside one new
/// container of that kind, appended to `out`; with `None` it goes to `out`.
fn grouped<F>(out: &mut Vec<Node>, group: Option<ContainerKind>, fill: F) -> Result<()>
where
    F: FnOnce(&mut Vec<Node>) -> Result<()>,
{
    match group {
        Some(kind) => {
            let mut children = Vec::new();
            fill(&mut children)?;
            out.push(Node::container(kind, children));
            Ok(())
        }
        None => fill(out),
    }
}

fn collect<F>(fill: F) -> Result<Vec<Node>>
where
    F: FnOnce(&mut Vec<Node>) -> Result<()>,
{
    let mut children = Vec::new();
    fill(&mut children)?;
    Ok(children)
}

fn tag_name(dom: &Dom, id: DomId) -> String {
    dom.tag(id).unwrap_or("#text").to_string()
}

fn first_child(dom: &Dom, id: DomId) -> Result<DomId> {
    dom.child(id, 0).ok_or_else(|| Error::MissingChild {
        tag: tag_name(dom, id),
        index: 0,
    })
}

/// Text leaf built from the first child of `id`.
///
/// The child must exist; if it is markup rather than text the leaf carries
/// no text.
fn first_text(dom: &Dom, id: DomId) -> Result<Node> {
    let first = first_child(dom, id)?;
    Ok(dom.text(first).map_or_else(Node::missing_text, Node::text))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::dom::parse_html;

    /// Parse `html` and classify its first root.
    pub(crate) fn parse_one(html: &str) -> Result<Node> {
        let dom = parse_html(html);
        let root = *dom.roots().first().expect("markup should have a root");
        parse_block(&dom, root, ListLevels::default())
    }

    #[test]
    fn test_header_with_text() {
        let node = parse_one(r#"<div class="notion-header-block">Hi</div>"#).unwrap();
        assert_eq!(
            node,
            Node::container(ContainerKind::Heading1, vec![Node::text("Hi")])
        );
    }

    #[test]
    fn test_heading_levels() {
        let h2 = parse_one(r#"<div class="notion-sub_header-block">a</div>"#).unwrap();
        let h3 = parse_one(r#"<div class="notion-sub_sub_header-block">a</div>"#).unwrap();
        assert_eq!(h2.kind().as_str(), "h2");
        assert_eq!(h3.kind().as_str(), "h3");
    }

    #[test]
    fn test_missing_class_is_an_error() {
        let err = parse_one("<div>plain</div>").unwrap_err();
        assert_eq!(err, Error::MissingClass { tag: "div".into() });
    }

    #[test]
    fn test_unknown_class_is_an_error() {
        let err = parse_one(r#"<div class="notion-toggle-block">x</div>"#).unwrap_err();
        assert!(matches!(err, Error::UnsupportedBlock { .. }));
    }

    #[test]
    fn test_text_root_is_an_error() {
        let dom = parse_html("loose text");
        let root = dom.roots()[0];
        assert_eq!(
            parse_block(&dom, root, ListLevels::default()),
            Err(Error::NotAnElement)
        );
    }

    #[test]
    fn test_role_img_short_circuits_class() {
        let node = parse_one(r#"<span role="img">🎉</span>"#).unwrap();
        assert_eq!(node, Node::text("🎉"));
    }

    #[test]
    fn test_wrappers_are_flattened() {
        let node = parse_one(
            r#"<div class="notion-text-block"><div><span class="color">a</span><b>b</b></div></div>"#,
        )
        .unwrap();
        assert_eq!(
            node,
            Node::container(
                ContainerKind::Paragraph,
                vec![Node::text("a"), Node::text("b")]
            )
        );
    }

    #[test]
    fn test_text_block_keeps_empty_nested_blocks() {
        let node = parse_one(
            r#"<div class="notion-text-block"><div class="notion-quote-block"></div></div>"#,
        )
        .unwrap();
        assert_eq!(
            node,
            Node::container(
                ContainerKind::Paragraph,
                vec![Node::container(ContainerKind::Quote, vec![])]
            )
        );
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let node = parse_one(r#"<div class="notion-text-block">  two  spaces </div>"#).unwrap();
        let children = node.children().unwrap();
        assert_eq!(children[0].as_text(), Some("  two  spaces "));
    }

    #[test]
    fn test_nested_failure_propagates() {
        let err = parse_one(
            r#"<div class="notion-text-block"><span class="notion-enable-hover">x</span></div>"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::MissingAttribute {
                tag: "span".into(),
                attr: "style",
            }
        );
    }

    #[test]
    fn test_parse_roots_skips_failures() {
        let dom = parse_html(
            r#"<div class="notion-text-block">a</div><div>bad</div><div class="notion-divider-block"></div>"#,
        );
        let nodes = parse_roots(&dom, &dom.roots());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1], Node::Divider);
    }
}

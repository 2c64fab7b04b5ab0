//! Output node types and kinds.

/// List flavour, shared by list nodes and the list normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Bulleted list (`ul`).
    Unordered,
    /// Numbered list (`ol`).
    Ordered,
}

/// Kinds whose only payload is an ordered list of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    /// Bookmark card. Its link target is carried by an `a` child.
    Bookmark,
    Bold,
    Italic,
    InlineCode,
    Quote,
    Callout,
    /// Code block; children are the literal code lines as text leaves.
    Code,
    /// Groups the inline run of one list entry.
    ListItem,
    Table,
    TableRow,
    TableCell,
    ColumnList,
    ColumnBlock,
}

/// The closed vocabulary of output kinds.
///
/// [`NodeKind::as_str`] gives the tag downstream consumers match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    Link,
    Bookmark,
    Bold,
    Italic,
    Text,
    InlineCode,
    Quote,
    Callout,
    Code,
    Divider,
    UnorderedList,
    OrderedList,
    Image,
    Table,
    TableRow,
    TableCell,
    ColumnList,
    ColumnBlock,
    ListItem,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Heading1 => "h1",
            NodeKind::Heading2 => "h2",
            NodeKind::Heading3 => "h3",
            NodeKind::Paragraph => "p",
            NodeKind::Link => "a",
            NodeKind::Bookmark => "bookmark",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Text => "text",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Quote => "quote",
            NodeKind::Callout => "callout",
            NodeKind::Code => "code",
            NodeKind::Divider => "divider",
            NodeKind::UnorderedList => "ul",
            NodeKind::OrderedList => "ol",
            NodeKind::Image => "image",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tr",
            NodeKind::TableCell => "td",
            NodeKind::ColumnList => "columnList",
            NodeKind::ColumnBlock => "columnBlock",
            NodeKind::ListItem => "li",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContainerKind> for NodeKind {
    fn from(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Heading1 => NodeKind::Heading1,
            ContainerKind::Heading2 => NodeKind::Heading2,
            ContainerKind::Heading3 => NodeKind::Heading3,
            ContainerKind::Paragraph => NodeKind::Paragraph,
            ContainerKind::Bookmark => NodeKind::Bookmark,
            ContainerKind::Bold => NodeKind::Bold,
            ContainerKind::Italic => NodeKind::Italic,
            ContainerKind::InlineCode => NodeKind::InlineCode,
            ContainerKind::Quote => NodeKind::Quote,
            ContainerKind::Callout => NodeKind::Callout,
            ContainerKind::Code => NodeKind::Code,
            ContainerKind::ListItem => NodeKind::ListItem,
            ContainerKind::Table => NodeKind::Table,
            ContainerKind::TableRow => NodeKind::TableRow,
            ContainerKind::TableCell => NodeKind::TableCell,
            ContainerKind::ColumnList => NodeKind::ColumnList,
            ContainerKind::ColumnBlock => NodeKind::ColumnBlock,
        }
    }
}

impl From<ListKind> for NodeKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Unordered => NodeKind::UnorderedList,
            ListKind::Ordered => NodeKind::OrderedList,
        }
    }
}

/// One parsed block or inline span.
///
/// Each variant carries only the fields meaningful for its kinds: text on
/// leaves, a target on links and images, a nesting level on lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, exactly as it appeared in the source. `None` when the
    /// position that should hold text held markup instead.
    Text { text: Option<String> },
    /// Horizontal rule. Never has children and is never dropped as empty.
    Divider,
    Container {
        kind: ContainerKind,
        children: Vec<Node>,
    },
    Link {
        href: Option<String>,
        children: Vec<Node>,
    },
    /// Image block (`href` unset, children collected) or the image itself
    /// (`href` set to the source, no children).
    Image {
        href: Option<String>,
        children: Vec<Node>,
    },
    List {
        kind: ListKind,
        /// Nesting depth among lists of the same kind, starting at 0.
        level: u32,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: Some(text.into()),
        }
    }

    /// Text leaf for a position that held no text node.
    pub fn missing_text() -> Self {
        Node::Text { text: None }
    }

    pub fn container(kind: ContainerKind, children: Vec<Node>) -> Self {
        Node::Container { kind, children }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text { .. } => NodeKind::Text,
            Node::Divider => NodeKind::Divider,
            Node::Container { kind, .. } => (*kind).into(),
            Node::Link { .. } => NodeKind::Link,
            Node::Image { .. } => NodeKind::Image,
            Node::List { kind, .. } => (*kind).into(),
        }
    }

    /// Children of children-bearing kinds; `None` for leaf kinds.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Text { .. } | Node::Divider => None,
            Node::Container { children, .. }
            | Node::Link { children, .. }
            | Node::Image { children, .. }
            | Node::List { children, .. } => Some(children),
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Text { .. } | Node::Divider => None,
            Node::Container { children, .. }
            | Node::Link { children, .. }
            | Node::Image { children, .. }
            | Node::List { children, .. } => Some(children),
        }
    }

    pub fn into_children(self) -> Vec<Node> {
        match self {
            Node::Text { .. } | Node::Divider => Vec::new(),
            Node::Container { children, .. }
            | Node::Link { children, .. }
            | Node::Image { children, .. }
            | Node::List { children, .. } => children,
        }
    }

    /// Text of a leaf, `None` on every other kind.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { text } => text.as_deref(),
            _ => None,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Node::Link { href, .. } | Node::Image { href, .. } => href.as_deref(),
            _ => None,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Node::List { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the node has nothing under it.
    ///
    /// Text leaves count as empty. A divider defines no children at all and
    /// is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Divider => false,
            _ => self.children().is_none_or(<[Node]>::is_empty),
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{ListKind, Node};

    /// Serialises to `{"type", "children", "text"?, "href"?, "ulLevel"?/"olLevel"?}`.
    ///
    /// Leaf kinds still emit an empty `children` array. A text leaf without
    /// text omits `text`.
    impl Serialize for Node {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(None)?;
            map.serialize_entry("type", self.kind().as_str())?;
            map.serialize_entry("children", self.children().unwrap_or(&[]))?;
            match self {
                Node::Text { text: Some(text) } => map.serialize_entry("text", text)?,
                Node::Link {
                    href: Some(href), ..
                }
                | Node::Image {
                    href: Some(href), ..
                } => map.serialize_entry("href", href)?,
                Node::List { kind, level, .. } => {
                    let key = match kind {
                        ListKind::Unordered => "ulLevel",
                        ListKind::Ordered => "olLevel",
                    };
                    map.serialize_entry(key, level)?;
                }
                _ => {}
            }
            map.end()
        }
    }
}

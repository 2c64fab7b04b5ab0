//! Arena-backed DOM for exported markup.
//!
//! html5ever parses into this tree through [`DomSink`](super::DomSink). The
//! walkers only ever read it: tag names, a handful of attributes and the
//! ordered children of each element.

use html5ever::QualName;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomId(pub u32);

impl DomId {
    /// Sentinel value for no node.
    pub const NONE: DomId = DomId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Payload of a DOM node.
#[derive(Debug, Clone)]
pub enum DomData {
    Document,
    Element { name: QualName, attrs: Vec<Attribute> },
    Text(String),
    Comment(String),
    Doctype,
}

/// An element attribute with its value already converted from the tendril.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node plus its tree links.
#[derive(Debug)]
pub struct DomNode {
    pub data: DomData,
    pub parent: DomId,
    pub first_child: DomId,
    pub last_child: DomId,
    pub prev_sibling: DomId,
    pub next_sibling: DomId,
}

impl DomNode {
    fn new(data: DomData) -> Self {
        Self {
            data,
            parent: DomId::NONE,
            first_child: DomId::NONE,
            last_child: DomId::NONE,
            prev_sibling: DomId::NONE,
            next_sibling: DomId::NONE,
        }
    }
}

/// Arena DOM tree.
///
/// Nodes live in one vector and refer to each other by index, so the parser
/// can hold plain `DomId`s while it walks.
pub struct Dom {
    nodes: Vec<DomNode>,
    document: DomId,
}

impl Dom {
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: DomId::NONE,
        };
        dom.document = dom.alloc(DomNode::new(DomData::Document));
        dom
    }

    fn alloc(&mut self, node: DomNode) -> DomId {
        let id = DomId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn document(&self) -> DomId {
        self.document
    }

    pub fn get(&self, id: DomId) -> Option<&DomNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: DomId) -> Option<&mut DomNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> DomId {
        self.alloc(DomNode::new(DomData::Element { name, attrs }))
    }

    pub fn create_text(&mut self, text: String) -> DomId {
        self.alloc(DomNode::new(DomData::Text(text)))
    }

    pub fn create_comment(&mut self, text: String) -> DomId {
        self.alloc(DomNode::new(DomData::Comment(text)))
    }

    pub fn create_doctype(&mut self) -> DomId {
        self.alloc(DomNode::new(DomData::Doctype))
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: DomId, child: DomId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(DomId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
        }

        if let Some(last_node) = self.get_mut(last_child) {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert `new_node` directly before `sibling`.
    pub fn insert_before(&mut self, sibling: DomId, new_node: DomId) {
        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Detach `id` from its parent and siblings.
    pub fn detach(&mut self, id: DomId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = DomId::NONE;
            node.prev_sibling = DomId::NONE;
            node.next_sibling = DomId::NONE;
        }
    }

    /// Append character data, extending the last child if it is already text.
    ///
    /// The tree builder hands text over in chunks; one source text run must
    /// come out as one text node.
    pub fn append_text(&mut self, parent: DomId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(DomId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let DomData::Text(existing) = &mut last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Iterate over the children of `parent` in document order.
    pub fn children(&self, parent: DomId) -> Children<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(DomId::NONE);
        Children {
            dom: self,
            current: first,
        }
    }

    /// The `index`-th child of `parent`, counting every node kind.
    pub fn child(&self, parent: DomId, index: usize) -> Option<DomId> {
        self.children(parent).nth(index)
    }

    /// First element with the given tag, depth-first in document order.
    pub fn find_by_tag(&self, tag: &str) -> Option<DomId> {
        let mut stack = vec![self.document];
        while let Some(id) = stack.pop() {
            if self.tag(id) == Some(tag) {
                return Some(id);
            }
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        None
    }

    /// The top-level nodes of the exported content: the children of `<body>`.
    pub fn roots(&self) -> Vec<DomId> {
        match self.find_by_tag("body") {
            Some(body) => self.children(body).collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    dom: &'a Dom,
    current: DomId,
}

impl Iterator for Children<'_> {
    type Item = DomId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(DomId::NONE);
        Some(id)
    }
}

/// Element accessors used by the block walkers.
impl Dom {
    /// Local tag name, `None` for non-elements.
    pub fn tag(&self, id: DomId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            DomData::Element { name, .. } => Some(name.local.as_ref()),
            _ => None,
        })
    }

    pub fn attr(&self, id: DomId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            DomData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Raw `class` attribute, unsplit.
    pub fn class(&self, id: DomId) -> Option<&str> {
        self.attr(id, "class")
    }

    pub fn style(&self, id: DomId) -> Option<&str> {
        self.attr(id, "style")
    }

    pub fn href(&self, id: DomId) -> Option<&str> {
        self.attr(id, "href")
    }

    pub fn src(&self, id: DomId) -> Option<&str> {
        self.attr(id, "src")
    }

    pub fn alt(&self, id: DomId) -> Option<&str> {
        self.attr(id, "alt")
    }

    pub fn role(&self, id: DomId) -> Option<&str> {
        self.attr(id, "role")
    }

    pub fn is_element(&self, id: DomId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, DomData::Element { .. }))
    }

    /// Literal character data of a text node.
    pub fn text(&self, id: DomId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            DomData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

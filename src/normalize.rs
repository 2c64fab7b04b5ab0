//! List normalizer: rebuild list nesting from flat sibling runs.
//!
//! The export writes every list entry as its own block, so one list comes
//! out as a run of adjacent `ul` (or `ol`) siblings:
//!
//! ```text
//! ul[A]  ul[B, ul[B.1]]  ul[C]
//! ```
//!
//! Merging a run keeps the first list and moves the children of the others
//! into it, giving `ul[A, B, ul[B.1], C]`. Merging can put lists of the
//! *other* kind next to each other one level down, so every merged list has
//! both passes (bulleted, then numbered) applied to its children.
//!
//! Each level is rebuilt into a fresh vector rather than spliced in place. A
//! subtree is only rescanned when its parent was just the head of a run, so
//! the total work stays linear in the number of nodes.

use crate::model::{ListKind, Node};

/// Normalize a top-level sequence: numbered runs first, then bulleted runs.
pub fn normalize_lists(nodes: Vec<Node>) -> Vec<Node> {
    let nodes = merge_runs(nodes, ListKind::Ordered);
    merge_runs(nodes, ListKind::Unordered)
}

/// Merge every maximal run of adjacent `kind` lists into its first list.
pub fn merge_runs(nodes: Vec<Node>, kind: ListKind) -> Vec<Node> {
    let mut merged = Vec::with_capacity(nodes.len());
    let mut head: Option<Node> = None;

    for node in nodes {
        if node.list_kind() == Some(kind) {
            match head.as_mut().and_then(Node::children_mut) {
                Some(children) => children.extend(node.into_children()),
                None => head = Some(node),
            }
            continue;
        }
        if let Some(run) = head.take() {
            merged.push(normalize_nested(run));
        }
        merged.push(node);
    }
    if let Some(run) = head.take() {
        merged.push(normalize_nested(run));
    }
    merged
}

/// Re-run both passes one level down, inside the head of a finished run.
fn normalize_nested(mut list: Node) -> Node {
    if let Some(children) = list.children_mut()
        && !children.is_empty()
    {
        let nested = merge_runs(std::mem::take(children), ListKind::Unordered);
        *children = merge_runs(nested, ListKind::Ordered);
    }
    list
}

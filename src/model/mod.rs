//! Output document model.
//!
//! Every walker produces [`Node`]s; the list normalizer is the only code that
//! rearranges them afterwards.

mod node;

pub use node::{ContainerKind, ListKind, Node, NodeKind};

//! Error types for block parsing.

use thiserror::Error;

/// Why a block could not be turned into a [`Node`](crate::Node).
///
/// Classification failures and structural mismatches are reported the same
/// way: the caller at the root boundary drops the whole root block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected an element, found a text or comment node")]
    NotAnElement,

    #[error("<{tag}> has no class attribute")]
    MissingClass { tag: String },

    #[error("unsupported notion block: class \"{class}\"")]
    UnsupportedBlock { class: String },

    #[error("<{tag}> is missing the {attr} attribute")]
    MissingAttribute { tag: String, attr: &'static str },

    #[error("<{tag}> has no child at index {index}")]
    MissingChild { tag: String, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

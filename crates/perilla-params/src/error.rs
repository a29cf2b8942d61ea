//! Error types for parameter registration and lookup.

use thiserror::Error;

/// Errors that can occur when building or querying a parameter tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// No parameter with the given identifier exists in the tree.
    ///
    /// Raised by [`ParamTree::lookup`](crate::ParamTree::lookup) and anything
    /// built on top of it (control attachments resolve ids through the tree).
    #[error("unknown parameter id: '{0}'")]
    UnknownId(String),

    /// A parameter with the given identifier is already registered.
    ///
    /// Identifiers are the stable persistence key, so collisions are always
    /// a programming error in the tree definition.
    #[error("duplicate parameter id: '{0}'")]
    DuplicateId(String),
}

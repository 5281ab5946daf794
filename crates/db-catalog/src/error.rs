//! Error types for catalog tree operations.

use thiserror::Error;

/// Main error type for catalog operations.
///
/// Every structural operation performs its checks before mutating either side
/// of a parent/child link, so a returned error always means the tree is
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A child with the same `(name, type)` already exists under the target.
    #[error("child '{name}' of type '{type_tag}' already exists")]
    DuplicateChild { name: String, type_tag: String },

    /// Remove-by-instance was given an object that is not a child (by
    /// identity) of the target.
    #[error("object '{name}' of type '{type_tag}' is not a child of the target")]
    NotAChild { name: String, type_tag: String },

    /// Detach was requested on an object that has no parent.
    #[error("object has no parent to detach from")]
    NoParent,

    /// Attaching the object would make it its own ancestor.
    #[error("attaching '{name}' of type '{type_tag}' would create a cycle")]
    WouldCycle { name: String, type_tag: String },

    /// A plain identity setter was called on an attached object, which would
    /// desynchronize the parent's children key. Use `rename`/`retag` instead.
    #[error("'{name}' of type '{type_tag}' is attached; use rename/retag to change its identity")]
    Attached { name: String, type_tag: String },

    /// A typed view was constructed from a node carrying the wrong type tag.
    #[error("expected a '{expected}' object, found '{actual}'")]
    TypeMismatch { expected: String, actual: String },
}

impl CatalogError {
    /// Create a DuplicateChild error.
    pub fn duplicate_child(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        CatalogError::DuplicateChild {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Create a NotAChild error.
    pub fn not_a_child(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        CatalogError::NotAChild {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Create a WouldCycle error.
    pub fn would_cycle(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        CatalogError::WouldCycle {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Create an Attached error.
    pub fn attached(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        CatalogError::Attached {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Create a TypeMismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        CatalogError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

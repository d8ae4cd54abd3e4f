//! Error types for assembly operations.

use thiserror::Error;

/// Errors that can occur while building or placing an assembly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// A selector path did not resolve to a node in the tree.
    ///
    /// Non-fatal: the operation that produced it left all state unchanged.
    #[error("selector did not resolve: '{selector}'")]
    UnresolvedPath {
        /// The selector that failed to resolve.
        selector: String,
    },

    /// A mate name is not present in the registry.
    #[error("unknown mate: '{name}'")]
    UnknownMate {
        /// The missing mate name.
        name: String,
    },

    /// `relocate` was called on an assembly that has already been relocated.
    ///
    /// Relocation runs exactly once; the second call is refused and the tree
    /// is left untouched.
    #[error("assembly already relocated")]
    AlreadyRelocated,

    /// An origin mate was declared on a node whose origin is already set.
    ///
    /// A node's origin is set at most once and never cleared.
    #[error("origin already set on node '{selector}'")]
    OriginAlreadySet {
        /// Selector of the node with the existing origin.
        selector: String,
    },
}

impl AssemblyError {
    /// Create an unresolved-path error.
    #[must_use]
    pub fn unresolved_path(selector: impl Into<String>) -> Self {
        Self::UnresolvedPath {
            selector: selector.into(),
        }
    }

    /// Create an unknown-mate error.
    #[must_use]
    pub fn unknown_mate(name: impl Into<String>) -> Self {
        Self::UnknownMate { name: name.into() }
    }

    /// Create an origin-already-set error.
    #[must_use]
    pub fn origin_already_set(selector: impl Into<String>) -> Self {
        Self::OriginAlreadySet {
            selector: selector.into(),
        }
    }

    /// Check if this is an unresolved-path error.
    #[must_use]
    pub fn is_unresolved_path(&self) -> bool {
        matches!(self, Self::UnresolvedPath { .. })
    }

    /// Check if this is the refused second relocation.
    #[must_use]
    pub fn is_already_relocated(&self) -> bool {
        matches!(self, Self::AlreadyRelocated)
    }
}

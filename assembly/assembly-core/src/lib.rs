//! Mate-based assembly tree and placement algorithms.
//!
//! This crate models a hierarchical mechanical assembly as a tree of parts
//! joined by named mates (rigid reference frames):
//!
//! - [`AssemblyNode`] - A tree node owning geometry, a local pose, and
//!   children
//! - [`Assembly`] - The root object: tree + mate registry + relocation state
//! - [`MateRegistry`] - Tree-wide mapping from mate name to frame and owner
//! - [`ResolvedPart`] - The read-only walk consumed by a renderer
//!
//! # Workflow
//!
//! Build the tree bottom-up with [`AssemblyNode::add`], register mates with
//! [`Assembly::mate`], call [`Assembly::relocate`] once to normalize every
//! part onto its declared origin, then call [`Assembly::assemble`]
//! repeatedly to place subtrees against each other. Placement is direct
//! transform algebra: aligning mate `a` on node `X` with mate `b` sets
//! `X.pose = pose_of(b) * pose_of(a)⁻¹`. There is no constraint solver and
//! no degree-of-freedom relaxation.
//!
//! # Geometry stays external
//!
//! Solid geometry is consumed through the
//! [`Shape`](assembly_types::Shape) trait; this crate never implements a
//! kernel. Selection failures propagate as the kernel's own error type.
//!
//! # Error Handling
//!
//! Unresolved selector paths are non-fatal: the operation reports
//! [`AssemblyError::UnresolvedPath`] (plus a `tracing` warning) and leaves
//! all state unchanged. Unknown mate names in [`Assembly::assemble`] are
//! hard failures of the registry lookup. A second [`Assembly::relocate`]
//! call is refused with [`AssemblyError::AlreadyRelocated`] and is a no-op.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,  // Accessors can't be const over generic S
)]

mod assembly;
mod error;
mod node;
mod registry;
mod view;

#[cfg(test)]
pub(crate) mod testshape;

pub use assembly::Assembly;
pub use error::AssemblyError;
pub use node::AssemblyNode;
pub use registry::{MateEntry, MateRegistry};
pub use view::{ResolvedMate, ResolvedPart};

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;

//! The geometry-kernel capability trait.
//!
//! The assembly core never implements solid geometry; it consumes a kernel
//! through [`Shape`]: apply a rigid transform, and narrow to sub-shapes via
//! the selection vocabulary. Selection failures are the kernel's own error
//! type and propagate unmasked.

use crate::{Criterion, Pose, SelectKind};

/// Trait for geometry objects owned by assembly nodes.
///
/// Implementations wrap whatever the geometry kernel calls a solid,
/// workplane, or shape. Both operations return new values; the core never
/// mutates kernel geometry in place.
pub trait Shape: Clone {
    /// Error produced by a failed sub-shape selection (e.g. a selector
    /// string that matches nothing).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply a rigid transform, returning the moved geometry.
    #[must_use]
    fn transformed(&self, pose: &Pose) -> Self;

    /// Narrow to the sub-shapes of `kind` matching `criterion`.
    ///
    /// # Errors
    ///
    /// Returns the kernel's selection error when the criterion yields no
    /// matches or is not supported for this geometry.
    fn select(&self, kind: SelectKind, criterion: &Criterion) -> Result<Self, Self::Error>;
}

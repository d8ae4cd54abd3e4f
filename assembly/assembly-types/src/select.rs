//! Geometric sub-selection vocabulary.
//!
//! Selection is a closed set of kinds and criteria rather than dynamic
//! name dispatch: a [`SubSelector`] pairs a [`SelectKind`] with a
//! [`Criterion`] and is interpreted by the geometry kernel behind the
//! [`Shape`](crate::Shape) trait.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which class of sub-shape a selection step narrows to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectKind {
    /// Select faces.
    Faces,
    /// Select edges.
    Edges,
    /// Select vertices.
    Vertices,
}

impl std::fmt::Display for SelectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Faces => write!(f, "faces"),
            Self::Edges => write!(f, "edges"),
            Self::Vertices => write!(f, "vertices"),
        }
    }
}

/// How matching sub-shapes are picked within a kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Criterion {
    /// A literal selection string, passed through to the geometry kernel's
    /// selector language (e.g. `">Z"`, `"%CIRCLE"`).
    Selector(String),
    /// Pick the matching sub-shape nearest to a point.
    Nearest(Point3<f64>),
}

/// One narrowing step: a selection kind plus its criterion.
///
/// Sub-selectors apply cumulatively; each narrows the result of the
/// previous step.
///
/// # Example
///
/// ```
/// use assembly_types::{Criterion, SelectKind, SubSelector};
/// use nalgebra::Point3;
///
/// let top_face = SubSelector::faces(">Z");
/// let near_hole = SubSelector::nearest(SelectKind::Edges, Point3::new(0.0, 0.0, 5.0));
/// assert_eq!(top_face.kind, SelectKind::Faces);
/// assert!(matches!(near_hole.criterion, Criterion::Nearest(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubSelector {
    /// Class of sub-shape to select.
    pub kind: SelectKind,
    /// Selection criterion.
    pub criterion: Criterion,
}

impl SubSelector {
    /// Create a sub-selector from its parts.
    #[must_use]
    pub const fn new(kind: SelectKind, criterion: Criterion) -> Self {
        Self { kind, criterion }
    }

    /// Select faces by selector string.
    #[must_use]
    pub fn faces(selector: impl Into<String>) -> Self {
        Self::new(SelectKind::Faces, Criterion::Selector(selector.into()))
    }

    /// Select edges by selector string.
    #[must_use]
    pub fn edges(selector: impl Into<String>) -> Self {
        Self::new(SelectKind::Edges, Criterion::Selector(selector.into()))
    }

    /// Select vertices by selector string.
    #[must_use]
    pub fn vertices(selector: impl Into<String>) -> Self {
        Self::new(SelectKind::Vertices, Criterion::Selector(selector.into()))
    }

    /// Select the sub-shape of the given kind nearest to a point.
    #[must_use]
    pub const fn nearest(kind: SelectKind, point: Point3<f64>) -> Self {
        Self::new(kind, Criterion::Nearest(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(SelectKind::Faces.to_string(), "faces");
        assert_eq!(SelectKind::Edges.to_string(), "edges");
        assert_eq!(SelectKind::Vertices.to_string(), "vertices");
    }

    #[test]
    fn test_constructors() {
        let s = SubSelector::edges("%CIRCLE");
        assert_eq!(s.kind, SelectKind::Edges);
        assert_eq!(s.criterion, Criterion::Selector("%CIRCLE".to_string()));

        let n = SubSelector::nearest(SelectKind::Vertices, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(n.kind, SelectKind::Vertices);
    }
}

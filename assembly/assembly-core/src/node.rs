//! Assembly tree nodes.
//!
//! An [`AssemblyNode`] owns an optional shape, a local pose relative to its
//! parent, and its children. Parents own children exclusively; all
//! traversal is top-down, so no child-to-parent back-reference exists.

use assembly_types::{Color, Mate, Pose, Shape, SubSelector};

/// A node in the assembly tree.
///
/// Nodes are created with the builder methods and attached bottom-up via
/// [`add`](Self::add). Names need only distinguish siblings; duplicate
/// sibling names are tolerated and resolved by construction order.
///
/// # Example
///
/// ```
/// use assembly_core::AssemblyNode;
/// # use assembly_types::{Criterion, Pose, SelectKind, Shape};
/// # #[derive(Debug, Clone, PartialEq)]
/// # struct NullShape;
/// # #[derive(Debug, thiserror::Error)]
/// # #[error("no selection")]
/// # struct NullError;
/// # impl Shape for NullShape {
/// #     type Error = NullError;
/// #     fn transformed(&self, _: &Pose) -> Self { Self }
/// #     fn select(&self, _: SelectKind, _: &Criterion) -> Result<Self, NullError> { Ok(Self) }
/// # }
///
/// let mut base = AssemblyNode::<NullShape>::new("base");
/// base.add(AssemblyNode::new("armL")).add(AssemblyNode::new("armR"));
/// assert!(base.find_assembly("armL").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyNode<S> {
    /// Node name; unique among siblings by convention, not enforced.
    pub name: String,
    /// Owned geometry; absent for pure grouping nodes.
    pub shape: Option<S>,
    /// Pose relative to the parent's frame.
    pub pose: Pose,
    /// Display color, if assigned.
    pub color: Option<Color>,
    /// Child nodes, exclusively owned, in construction order.
    pub children: Vec<AssemblyNode<S>>,
    /// Origin mate; set at most once, never cleared. Relocation consumes it
    /// to rewrite `shape` and `pose` but leaves it present.
    pub(crate) origin: Option<Mate>,
    /// Registry keys of mates declared on this node, in insertion order.
    pub(crate) mate_names: Vec<String>,
}

impl<S: Shape> AssemblyNode<S> {
    /// Create an empty grouping node with identity pose.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: None,
            pose: Pose::identity(),
            color: None,
            children: Vec::new(),
            origin: None,
            mate_names: Vec::new(),
        }
    }

    /// Attach geometry to this node.
    #[must_use]
    pub fn with_shape(mut self, shape: S) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set the node's pose relative to its parent.
    #[must_use]
    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = pose;
        self
    }

    /// Set the node's display color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a child node, returning `self` for chaining.
    ///
    /// No sibling-name validation is performed; lookups resolve duplicate
    /// names to the first-added match.
    pub fn add(&mut self, child: AssemblyNode<S>) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Wrap raw geometry into a node and append it, returning `self` for
    /// chaining.
    pub fn add_shape(&mut self, shape: S, name: impl Into<String>) -> &mut Self {
        self.add(AssemblyNode::new(name).with_shape(shape))
    }

    /// The node's origin mate, if one has been declared.
    #[must_use]
    pub fn origin(&self) -> Option<&Mate> {
        self.origin.as_ref()
    }

    /// Names of the mates declared on this node, in insertion order.
    #[must_use]
    pub fn mate_names(&self) -> &[String] {
        &self.mate_names
    }

    /// Resolve a `>`-delimited, root-relative name path to a node.
    ///
    /// The empty selector resolves to `self`. At each step the candidates
    /// are this node and its direct children, searched in order; the first
    /// name match wins and the remaining path recurses into it. Returns
    /// `None` if no candidate matches a segment.
    #[must_use]
    pub fn find_assembly(&self, selector: &str) -> Option<&Self> {
        if selector.is_empty() {
            return Some(self);
        }

        let (head, rest) = split_selector(selector);
        if self.name == head {
            return self.find_assembly(rest);
        }
        for child in &self.children {
            if child.name == head {
                return child.find_assembly(rest);
            }
        }

        None
    }

    /// Mutable variant of [`find_assembly`](Self::find_assembly).
    #[must_use]
    pub fn find_assembly_mut(&mut self, selector: &str) -> Option<&mut Self> {
        if selector.is_empty() {
            return Some(self);
        }

        let (head, rest) = split_selector(selector);
        if self.name == head {
            return self.find_assembly_mut(rest);
        }
        for child in &mut self.children {
            if child.name == head {
                return child.find_assembly_mut(rest);
            }
        }

        None
    }

    /// Apply geometric sub-selectors to this node's shape.
    ///
    /// Returns `Ok(None)` if the node owns no geometry. With no
    /// sub-selectors the raw shape is returned; otherwise each step narrows
    /// the result of the previous one.
    ///
    /// # Errors
    ///
    /// Propagates the geometry kernel's selection error unmasked.
    pub fn find_obj(&self, sub_selectors: &[SubSelector]) -> Result<Option<S>, S::Error> {
        let Some(shape) = &self.shape else {
            return Ok(None);
        };

        let mut current = shape.clone();
        for sub in sub_selectors {
            current = current.select(sub.kind, &sub.criterion)?;
        }
        Ok(Some(current))
    }

    /// Pre-order relocation pass: every node with an origin has its shape
    /// re-expressed in the origin frame and its local pose reset to
    /// identity. The origin mate itself stays in place.
    pub(crate) fn set_origin(&mut self) {
        if let Some(origin) = &self.origin {
            let inverse = origin.pose().inverse();
            if let Some(shape) = self.shape.take() {
                self.shape = Some(shape.transformed(&inverse));
            }
            self.pose = Pose::identity();
        }
        for child in &mut self.children {
            child.set_origin();
        }
    }
}

/// Split a selector at the first `>`, yielding the head segment and the
/// remaining path (empty when the head is the last segment).
fn split_selector(selector: &str) -> (&str, &str) {
    match selector.split_once('>') {
        Some((head, rest)) => (head, rest),
        None => (selector, ""),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testshape::{vertex, TestShape};
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn arm_tree() -> AssemblyNode<TestShape> {
        let mut base = AssemblyNode::new("base");
        let mut arm_l = AssemblyNode::new("armL").with_shape(vertex(0.0, 0.0, 0.0));
        arm_l.add(AssemblyNode::new("wrist"));
        base.add(arm_l);
        base.add(AssemblyNode::new("armR"));
        base
    }

    #[test]
    fn test_empty_selector_is_self() {
        let tree = arm_tree();
        let found = tree.find_assembly("").unwrap();
        assert_eq!(found.name, "base");
    }

    #[test]
    fn test_child_and_nested_paths() {
        let tree = arm_tree();
        assert_eq!(tree.find_assembly("armL").unwrap().name, "armL");
        assert_eq!(tree.find_assembly("armL>wrist").unwrap().name, "wrist");
        // The root's own name is also a valid first segment
        assert_eq!(tree.find_assembly("base>armR").unwrap().name, "armR");
    }

    #[test]
    fn test_unresolved_path() {
        let tree = arm_tree();
        assert!(tree.find_assembly("leg").is_none());
        assert!(tree.find_assembly("armL>elbow").is_none());
    }

    #[test]
    fn test_duplicate_siblings_first_match() {
        let mut root = AssemblyNode::new("root");
        root.add(AssemblyNode::new("leg").with_shape(vertex(1.0, 0.0, 0.0)));
        root.add(AssemblyNode::new("leg").with_shape(vertex(2.0, 0.0, 0.0)));

        let found = tree_shape_x(&root);
        assert_relative_eq!(found, 1.0, epsilon = 1e-12);
    }

    fn tree_shape_x(root: &AssemblyNode<TestShape>) -> f64 {
        root.find_assembly("leg").unwrap().shape.as_ref().unwrap().points[0].x
    }

    #[test]
    fn test_add_shape_wraps_geometry() {
        let mut root = AssemblyNode::new("root");
        root.add_shape(vertex(0.0, 1.0, 0.0), "bolt")
            .add_shape(vertex(0.0, 2.0, 0.0), "nut");

        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "bolt");
        assert!(root.children[1].shape.is_some());
    }

    #[test]
    fn test_find_obj_without_shape() {
        let node: AssemblyNode<TestShape> = AssemblyNode::new("group");
        assert!(node.find_obj(&[]).unwrap().is_none());
    }

    #[test]
    fn test_find_obj_no_selectors_returns_raw_shape() {
        let node = AssemblyNode::new("part").with_shape(vertex(3.0, 0.0, 0.0));
        let shape = node.find_obj(&[]).unwrap().unwrap();
        assert_relative_eq!(shape.points[0].x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_set_origin_resets_pose_and_recenters() {
        let origin_point = Point3::new(2.0, 0.0, 0.0);
        let mut node = AssemblyNode::new("part")
            .with_shape(vertex(2.0, 0.0, 0.0))
            .with_pose(Pose::from_position(Point3::new(5.0, 5.0, 5.0)));
        node.origin = Some(Mate::new(Pose::from_position(origin_point)));

        node.set_origin();

        assert_eq!(node.pose, Pose::identity());
        let moved = &node.shape.unwrap().points[0];
        assert_relative_eq!(moved.coords.norm(), 0.0, epsilon = 1e-10);
        // The origin marker survives relocation
        assert!(node.origin.is_some());
    }
}

//! The root assembly object: mate registration, relocation, and pairwise
//! placement.
//!
//! An [`Assembly`] owns the tree root, the mate registry, and the
//! relocation flag. Callers build the tree bottom-up, register mates, call
//! [`relocate`](Assembly::relocate) exactly once to normalize local
//! frames, then call [`assemble`](Assembly::assemble) repeatedly to place
//! subtrees against each other.

use assembly_types::{Mate, Shape, SubSelector};
use tracing::warn;

use crate::error::AssemblyError;
use crate::node::AssemblyNode;
use crate::registry::{MateEntry, MateRegistry};
use crate::Result;

/// A complete assembly: root node, mate registry, relocation state.
///
/// # Example
///
/// ```
/// use assembly_core::{Assembly, AssemblyNode};
/// use assembly_types::{Mate, Pose};
/// use nalgebra::Point3;
/// # use assembly_types::{Criterion, SelectKind, Shape};
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
/// let mut root = AssemblyNode::<NullShape>::new("root");
/// root.add(AssemblyNode::new("armL")).add(AssemblyNode::new("armR"));
///
/// let mut assembly = Assembly::new(root);
/// assembly.mate("wristL", "armL", Mate::identity(), false)?;
/// assembly.mate(
///     "wristR",
///     "armR",
///     Mate::new(Pose::from_position(Point3::new(10.0, 0.0, 0.0))),
///     false,
/// )?;
///
/// assembly.relocate()?;
/// assembly.assemble("wristL", "wristR")?;
///
/// let arm_l = assembly.find_assembly("armL").unwrap();
/// assert_eq!(arm_l.pose.position.x, 10.0);
/// # Ok::<(), assembly_core::AssemblyError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly<S> {
    root: AssemblyNode<S>,
    mates: MateRegistry,
    relocated: bool,
}

impl<S: Shape> Assembly<S> {
    /// Create an assembly from its root node.
    #[must_use]
    pub fn new(root: AssemblyNode<S>) -> Self {
        Self {
            root,
            mates: MateRegistry::new(),
            relocated: false,
        }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &AssemblyNode<S> {
        &self.root
    }

    /// Mutable access to the root node, for bottom-up construction.
    pub fn root_mut(&mut self) -> &mut AssemblyNode<S> {
        &mut self.root
    }

    /// The mate registry.
    #[must_use]
    pub fn mates(&self) -> &MateRegistry {
        &self.mates
    }

    /// Whether the one-shot relocation pass has run.
    #[must_use]
    pub fn is_relocated(&self) -> bool {
        self.relocated
    }

    /// Resolve a selector path against the tree. See
    /// [`AssemblyNode::find_assembly`].
    #[must_use]
    pub fn find_assembly(&self, selector: &str) -> Option<&AssemblyNode<S>> {
        self.root.find_assembly(selector)
    }

    /// Resolve a selector path, then apply geometric sub-selectors to the
    /// matched node's shape.
    ///
    /// An unresolved path is reported via `tracing::warn!` and yields
    /// `Ok(None)`; it never aborts the caller.
    ///
    /// # Errors
    ///
    /// Propagates the geometry kernel's selection error unmasked.
    pub fn find(
        &self,
        selector: &str,
        sub_selectors: &[SubSelector],
    ) -> std::result::Result<Option<S>, S::Error> {
        match self.root.find_assembly(selector) {
            Some(node) => node.find_obj(sub_selectors),
            None => {
                warn!(selector, "find: selector did not resolve");
                Ok(None)
            }
        }
    }

    /// Register a mate on the node resolved by `selector`.
    ///
    /// On success the registry gains an entry `{name -> (mate, selector)}`
    /// and `name` is appended to the owner's mate list. With `is_origin`
    /// the mate also becomes the owner's origin frame.
    ///
    /// # Errors
    ///
    /// - [`AssemblyError::UnresolvedPath`] if the selector matches no node;
    ///   registry and tree are unchanged. Non-fatal by design: callers may
    ///   ignore the error and continue.
    /// - [`AssemblyError::OriginAlreadySet`] if `is_origin` is requested on
    ///   a node whose origin is already declared; no state changes.
    pub fn mate(
        &mut self,
        name: impl Into<String>,
        selector: &str,
        mate: Mate,
        is_origin: bool,
    ) -> Result<()> {
        let name = name.into();
        let Some(node) = self.root.find_assembly_mut(selector) else {
            warn!(selector, mate = %name, "mate: selector did not resolve");
            return Err(AssemblyError::unresolved_path(selector));
        };
        if is_origin && node.origin().is_some() {
            return Err(AssemblyError::origin_already_set(selector));
        }

        self.mates.insert(
            name.clone(),
            MateEntry {
                mate,
                owner: selector.to_string(),
            },
        );
        node.mate_names.push(name);
        if is_origin {
            node.origin = Some(mate);
        }
        Ok(())
    }

    /// Run the one-shot relocation pass.
    ///
    /// 1. Every node with an origin has its shape re-expressed in the
    ///    origin frame (moved by the inverse origin pose) and its local
    ///    pose reset to identity.
    /// 2. Every registry entry whose owner has an origin is rewritten into
    ///    the owner's recentred local frame.
    ///
    /// Mates are authored against a part's raw import frame; relocation
    /// normalizes every part to be centered on its declared origin so that
    /// later `assemble` calls compose without accumulated pre-origin
    /// offsets.
    ///
    /// # Errors
    ///
    /// [`AssemblyError::AlreadyRelocated`] if relocation has already run;
    /// the call is refused and the tree is untouched.
    pub fn relocate(&mut self) -> Result<()> {
        if self.relocated {
            warn!("relocate: assembly already relocated, refusing");
            return Err(AssemblyError::AlreadyRelocated);
        }

        self.root.set_origin();
        for entry in self.mates.entries_mut() {
            if let Some(origin) = self.root.find_assembly(&entry.owner).and_then(AssemblyNode::origin) {
                entry.mate = entry.mate.moved(&origin.pose().inverse());
            }
        }
        self.relocated = true;
        Ok(())
    }

    /// Place the node owning `mate_obj` so that its mate frame coincides
    /// with `mate_target`'s frame.
    ///
    /// The owner's local pose is overwritten with
    /// `pose_of(target) * pose_of(obj)⁻¹`. Descendants are not touched;
    /// they follow through normal pose composition. Repeated calls against
    /// the same node simply overwrite the pose (last write wins).
    ///
    /// # Errors
    ///
    /// - [`AssemblyError::UnknownMate`] if either mate name is not
    ///   registered.
    /// - [`AssemblyError::UnresolvedPath`] if the owning node of
    ///   `mate_obj` cannot be resolved; no state changes.
    pub fn assemble(&mut self, mate_obj: &str, mate_target: &str) -> Result<()> {
        let obj = self
            .mates
            .get(mate_obj)
            .ok_or_else(|| AssemblyError::unknown_mate(mate_obj))?;
        let target = self
            .mates
            .get(mate_target)
            .ok_or_else(|| AssemblyError::unknown_mate(mate_target))?;

        let new_pose = target.mate.pose().compose(&obj.mate.pose().inverse());
        let owner = obj.owner.clone();

        let Some(node) = self.root.find_assembly_mut(&owner) else {
            warn!(mate = mate_obj, owner = %owner, "assemble: no node for mate");
            return Err(AssemblyError::unresolved_path(owner));
        };
        node.pose = new_pose;
        Ok(())
    }
}

//! Mate frames.
//!
//! A [`Mate`] is a named-by-the-registry rigid reference frame attached to a
//! part, used as a handle for joining parts. Mates are immutable values:
//! re-expressing one in another frame produces a new mate.

use nalgebra::{Point3, Rotation3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Pose;

/// Minimum axis length accepted when building a mate from direction vectors.
const AXIS_EPSILON: f64 = 1e-9;

/// A rigid reference frame attached to a part.
///
/// # Example
///
/// ```
/// use assembly_types::{Mate, Pose};
/// use nalgebra::Point3;
///
/// let mate = Mate::new(Pose::from_position(Point3::new(0.0, 0.0, 5.0)));
/// assert_eq!(mate.pose().position.z, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mate {
    pose: Pose,
}

impl Mate {
    /// Create a mate from a pose.
    #[must_use]
    pub const fn new(pose: Pose) -> Self {
        Self { pose }
    }

    /// Create a mate at the coordinate origin with identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            pose: Pose::identity(),
        }
    }

    /// Build a mate frame from an origin point, an x direction, and a z
    /// direction.
    ///
    /// The y axis is `z × x`; the x direction is projected into the plane
    /// perpendicular to z, so the two directions need not be exactly
    /// orthogonal. Returns `None` if either direction is degenerate (near
    /// zero length, or x parallel to z).
    #[must_use]
    pub fn from_axes(origin: Point3<f64>, x_dir: Vector3<f64>, z_dir: Vector3<f64>) -> Option<Self> {
        let z = z_dir.try_normalize(AXIS_EPSILON)?;
        let x = (x_dir - x_dir.dot(&z) * z).try_normalize(AXIS_EPSILON)?;
        let y = z.cross(&x);

        let rotation =
            UnitQuaternion::from_rotation_matrix(&Rotation3::from_basis_unchecked(&[x, y, z]));
        Some(Self {
            pose: Pose::from_position_rotation(origin, rotation),
        })
    }

    /// The mate's pose in its owning part's frame.
    #[must_use]
    pub const fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Re-express this mate through `p`, returning a new mate with pose
    /// `p * self.pose`.
    ///
    /// Relocation passes the inverse of an origin pose here; the resolved
    /// walk passes a node's absolute pose to obtain the mate's absolute
    /// frame.
    #[must_use]
    pub fn moved(&self, p: &Pose) -> Self {
        Self {
            pose: p.compose(&self.pose),
        }
    }
}

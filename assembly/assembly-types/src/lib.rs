//! Core types for mate-based assembly modeling.
//!
//! This crate provides the foundational types for building hierarchical
//! mechanical assemblies:
//!
//! - [`Pose`] - Rigid transform with composition, inversion, and identity
//! - [`Mate`] - A rigid reference frame attached to a part, used for joining
//! - [`SubSelector`] - Geometric sub-selection steps (faces/edges/vertices)
//! - [`Shape`] - The capability trait the geometry kernel is consumed through
//! - [`Color`] - Display color carried per part
//!
//! # Design Philosophy
//!
//! These types are **pure data** plus pose algebra. They know nothing about
//! the assembly tree, the mate registry, or placement algorithms; those live
//! in `assembly-core`. The geometry kernel stays external: it is reached only
//! through the [`Shape`] trait.
//!
//! # Example
//!
//! ```
//! use assembly_types::{Mate, Pose};
//! use nalgebra::Point3;
//!
//! let wrist = Mate::new(Pose::from_position(Point3::new(10.0, 0.0, 0.0)));
//!
//! // Re-express the mate in a frame shifted by its own pose inverse:
//! // the mate lands on the coordinate origin.
//! let recentred = wrist.moved(&wrist.pose().inverse());
//! assert!(recentred.pose().position.coords.norm() < 1e-10);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,  // Many methods can't be const due to nalgebra
    clippy::cast_possible_truncation,  // Color channel to byte conversion is clamped
    clippy::cast_sign_loss,
)]

mod color;
mod mate;
mod pose;
mod select;
mod shape;

pub use color::{Color, DEFAULT_COLOR_HEX};
pub use mate::Mate;
pub use pose::Pose;
pub use select::{Criterion, SelectKind, SubSelector};
pub use shape::Shape;

// Re-export math types for convenience
pub use nalgebra::{Isometry3, Point3, UnitQuaternion, Vector3};

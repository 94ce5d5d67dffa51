/*!
sat3d
========

**sat3d** is the narrow-phase core of a 3-dimensional rigid-body physics
engine, restricted to the separating-axis theorem. Given two convex shapes
and their world transforms it decides whether they overlap and, if so,
builds a contact manifold: contact points carrying a world-space normal, a
penetration depth, and the local-space contact position on each shape.

Supported shape pairs are sphere vs. convex polyhedron, capsule vs. convex
polyhedron, and convex polyhedron vs. convex polyhedron. Edge/edge axis
candidates are pruned with a Gauss-map test, face contacts are recovered by
Sutherland–Hodgman clipping, and the minimum separating axis found on one
frame is cached per pair so the next frame can often skip the full scan.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Translation3, UnitQuaternion, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}

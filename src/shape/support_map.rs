//! Traits for support mapping based shapes.

use crate::math::{Point, Real, UnitVector, Vector};

/// Trait implemented by convex shapes representable by a support mapping function.
///
/// The support function of a convex shape returns the point of the shape that
/// is the farthest along a given direction. For round shapes (sphere,
/// capsule) the returned point lies on the outer surface, i.e. the radius is
/// included; for polyhedral shapes it is the farthest vertex.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// `dir` does not have to be normalized.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as [`Self::local_support_point`] except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }
}

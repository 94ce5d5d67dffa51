use crate::math::{Isometry, Real};
use crate::shape::CollisionShape;

/// A read-only view of one narrow-phase pair: both shapes and their
/// shape-to-world transforms.
///
/// The per-pair [`SeparatingAxisCache`](crate::query::SeparatingAxisCache)
/// is passed to the drivers as a separate mutable argument so the pair view
/// itself can be shared freely.
#[derive(Copy, Clone)]
pub struct NarrowPhaseInfo<'a> {
    /// The first shape of the pair.
    pub shape1: &'a CollisionShape,
    /// The second shape of the pair.
    pub shape2: &'a CollisionShape,
    /// The shape-to-world transform of the first shape.
    pub pos1: &'a Isometry<Real>,
    /// The shape-to-world transform of the second shape.
    pub pos2: &'a Isometry<Real>,
}

impl<'a> NarrowPhaseInfo<'a> {
    /// Creates the view of a narrow-phase pair.
    pub fn new(
        shape1: &'a CollisionShape,
        pos1: &'a Isometry<Real>,
        shape2: &'a CollisionShape,
        pos2: &'a Isometry<Real>,
    ) -> Self {
        Self {
            shape1,
            shape2,
            pos1,
            pos2,
        }
    }
}

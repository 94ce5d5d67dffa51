use crate::math::{Point, Real, Vector};

/// A single contact point between two shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The contact normal, in world space, pointing from the second shape
    /// toward the first one.
    pub normal_world: Vector<Real>,
    /// The penetration depth along the normal. Strictly positive.
    pub depth: Real,
    /// The contact point in the local space of the first shape.
    pub local_p1: Point<Real>,
    /// The contact point in the local space of the second shape.
    pub local_p2: Point<Real>,
}

/// The set of contact points between two shapes.
///
/// Contact points are appended by the narrow-phase drivers; their order
/// carries no meaning. A manifold may come out empty even when the driver
/// reported a collision, if contact generation degenerated numerically, so
/// callers consuming the contacts must inspect the points rather than the
/// returned boolean alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactManifold {
    /// The contacts accumulated so far.
    pub points: Vec<ContactPoint>,
}

impl ContactManifold {
    /// Creates an empty contact manifold.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends one contact point to this manifold.
    pub fn push_contact(
        &mut self,
        normal_world: Vector<Real>,
        depth: Real,
        local_p1: Point<Real>,
        local_p2: Point<Real>,
    ) {
        self.points.push(ContactPoint {
            normal_world,
            depth,
            local_p1,
            local_p2,
        });
    }

    /// Removes every contact point from this manifold.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The number of contact points in this manifold.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this manifold holds no contact point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

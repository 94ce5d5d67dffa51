use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::SupportMap;
use na::Unit;

/// A segment shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`, or `None` if the segment is degenerate.
    #[inline]
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.a.coords.dot(dir) > self.b.coords.dot(dir) {
            self.a
        } else {
            self.b
        }
    }
}

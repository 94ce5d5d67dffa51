use crate::math::{Point, Real, Vector};
use crate::shape::{HalfEdgeMesh, PolyhedralShape, SupportMap};
use crate::utils;

/// A triangle shape, seen by the narrow-phase as a degenerate convex
/// polyhedron with two coincident faces of opposite normals.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
    mesh: HalfEdgeMesh,
}

impl Triangle {
    /// Creates a triangle from three points.
    ///
    /// Returns `None` if the triangle is degenerate (its points are nearly
    /// collinear).
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Option<Triangle> {
        // Both windings of the same points, so the shape is two-sided.
        let faces = [vec![0, 1, 2], vec![0, 2, 1]];
        let mesh = HalfEdgeMesh::new(vec![a, b, c], &faces)?;
        Some(Triangle { a, b, c, mesh })
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self.mesh.points())
    }
}

impl PolyhedralShape for Triangle {
    #[inline]
    fn topology(&self) -> &HalfEdgeMesh {
        &self.mesh
    }

    #[inline]
    fn is_triangle(&self) -> bool {
        true
    }
}

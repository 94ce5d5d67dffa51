use crate::math::{Point, Real, Vector};
use crate::shape::{HalfEdgeMesh, PolyhedralShape, SupportMap};
use crate::utils;

/// A convex polyhedron described by its half-edge topology.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolyhedron {
    mesh: HalfEdgeMesh,
}

impl ConvexPolyhedron {
    /// Creates a convex polyhedron from an already-built half-edge mesh.
    ///
    /// The mesh is assumed convex; this is not verified.
    pub fn from_mesh(mesh: HalfEdgeMesh) -> Self {
        Self { mesh }
    }

    /// Creates a convex polyhedron from a set of points and the vertex
    /// indices of its faces, listed in counter-clockwise order as seen from
    /// outside.
    ///
    /// Returns `None` if the faces do not form a closed two-manifold.
    pub fn from_convex_mesh(points: Vec<Point<Real>>, faces: &[Vec<u32>]) -> Option<Self> {
        HalfEdgeMesh::new(points, faces).map(Self::from_mesh)
    }

    /// Creates the convex polyhedron of an axis-aligned box with the given
    /// half-extents.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        Self::from_mesh(HalfEdgeMesh::cuboid(half_extents))
    }

    /// The half-edge topology of this polyhedron.
    #[inline]
    pub fn mesh(&self) -> &HalfEdgeMesh {
        &self.mesh
    }
}

impl SupportMap for ConvexPolyhedron {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, self.mesh.points())
    }
}

impl PolyhedralShape for ConvexPolyhedron {
    #[inline]
    fn topology(&self) -> &HalfEdgeMesh {
        &self.mesh
    }
}

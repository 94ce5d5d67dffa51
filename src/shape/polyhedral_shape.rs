use crate::shape::{HalfEdgeMesh, SupportMap};

/// Trait implemented by convex shapes described by a half-edge topology.
///
/// This is the surface consumed by the separating-axis drivers: face
/// normals, vertex positions, and edge adjacency all come from the
/// [`HalfEdgeMesh`], while the farthest-vertex query comes from
/// [`SupportMap`].
pub trait PolyhedralShape: SupportMap {
    /// The half-edge topology of this polyhedron.
    fn topology(&self) -> &HalfEdgeMesh;

    /// Whether this polyhedron is a standalone triangle.
    ///
    /// Triangles are transient shapes (typically produced by decomposing a
    /// larger mesh), so the minimum separating axis found for them is never
    /// reused on the next frame.
    fn is_triangle(&self) -> bool {
        false
    }
}

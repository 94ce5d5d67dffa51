use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Capsule, HalfEdgeMesh, SupportMap};
use crate::utils::PARALLEL_VECTORS_EPSILON;

/// Penetration depth of a capsule along one face normal of a convex
/// polyhedron.
///
/// All the math happens in the capsule's local frame: `poly_to_capsule`
/// maps polyhedron-local coordinates into it. Returns the depth together
/// with the face normal expressed in capsule space.
pub fn polyhedron_face_capsule_penetration_depth(
    mesh: &HalfEdgeMesh,
    face_id: u32,
    capsule: &Capsule,
    poly_to_capsule: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let face = mesh.face(face_id);
    let face_normal = poly_to_capsule * mesh.face_normal(face_id).into_inner();

    // The capsule support includes the radius, so the depth accounts for the
    // full rounded extent.
    let capsule_support = capsule.local_support_point(&-face_normal);
    let face_point = poly_to_capsule * mesh.vertex(face.vertices[0]);
    let depth = (face_point - capsule_support).dot(&face_normal);

    (depth, face_normal)
}

/// Penetration depth along the cross product of the capsule's inner segment
/// and one edge of a convex polyhedron.
///
/// `capsule_axis` is the inner segment direction in capsule space,
/// `edge_vertex` a polyhedron-local vertex of the edge, and
/// `edge_dir_capsule` the edge direction already rotated into capsule
/// space. The returned axis is unit-length, expressed in capsule space, and
/// oriented out of the polyhedron. Returns `Real::MAX` (and a zero axis)
/// when the edge is almost parallel to the capsule segment.
pub fn polyhedron_edge_capsule_segment_penetration_depth(
    mesh: &HalfEdgeMesh,
    capsule: &Capsule,
    capsule_axis: &Vector<Real>,
    edge_vertex: &Point<Real>,
    edge_dir_capsule: &Vector<Real>,
    poly_to_capsule: &Isometry<Real>,
) -> (Real, Vector<Real>) {
    let mut axis = capsule_axis.cross(edge_dir_capsule);

    if axis.norm_squared() < PARALLEL_VECTORS_EPSILON {
        return (Real::MAX, Vector::zeros());
    }

    let centroid = poly_to_capsule * mesh.centroid();
    let edge_point = poly_to_capsule * *edge_vertex;

    // Make the axis point out of the polyhedron.
    if axis.dot(&(edge_point - centroid)) < 0.0 {
        axis = -axis;
    }

    let axis = axis.normalize();
    let capsule_support = capsule.local_support_point(&-axis);
    let depth = (edge_point - capsule_support).dot(&axis);

    (depth, axis)
}

/// Tests whether a polyhedron edge has to be considered as an edge/segment
/// separating-axis candidate against a capsule.
///
/// On the unit sphere, the edge maps to the arc joining its two adjacent
/// face normals while the capsule's inner segment maps to the great circle
/// orthogonal to its direction. The cross product of the segment and the
/// edge can only realize the minimum penetration if the arc crosses that
/// circle, i.e. if the two adjacent normals lie on opposite sides of it.
#[inline]
pub fn capsule_segment_crosses_edge_arc(
    capsule_axis: &Vector<Real>,
    adjacent_normal1: &Vector<Real>,
    adjacent_normal2: &Vector<Real>,
) -> bool {
    capsule_axis.dot(adjacent_normal1) * capsule_axis.dot(adjacent_normal2) < 0.0
}

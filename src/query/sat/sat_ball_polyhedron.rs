use crate::math::{Point, Real};
use crate::shape::{Ball, HalfEdgeMesh};

/// Penetration depth of a ball along one face normal of a convex polyhedron.
///
/// `center` is the ball's center expressed in the polyhedron's local frame.
/// The returned depth is positive if the ball overlaps the face's support
/// plane, and smaller than or equal to zero if the face normal is a
/// separating axis.
pub fn polyhedron_face_ball_penetration_depth(
    mesh: &HalfEdgeMesh,
    face_id: u32,
    ball: &Ball,
    center: &Point<Real>,
) -> Real {
    let face = mesh.face(face_id);
    let face_normal = mesh.face_normal(face_id);
    let center_to_face_point = mesh.vertex(face.vertices[0]) - center;

    face_normal.dot(&center_to_face_point) + ball.radius
}

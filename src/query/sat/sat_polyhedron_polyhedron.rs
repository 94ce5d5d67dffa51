use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{HalfEdgeMesh, PolyhedralShape};
use crate::utils;

/// Penetration depth between two convex polyhedra along one face normal of
/// the first one.
///
/// `pos12` maps the first polyhedron's local coordinates into the second
/// one's frame, where the depth is measured against the second polyhedron's
/// support point.
pub fn polyhedron_face_penetration_depth(
    mesh1: &HalfEdgeMesh,
    face_id: u32,
    polyhedron2: &dyn PolyhedralShape,
    pos12: &Isometry<Real>,
) -> Real {
    let face = mesh1.face(face_id);
    let face_normal2 = pos12 * mesh1.face_normal(face_id).into_inner();

    let support2 = polyhedron2.local_support_point(&-face_normal2);
    let face_vertex2 = pos12 * mesh1.vertex(face.vertices[0]);

    (face_vertex2 - support2).dot(&face_normal2)
}

/// Tests every face normal of the first polyhedron and returns the smallest
/// penetration depth together with the face realizing it.
///
/// Exits early with a non-positive depth as soon as a separating face is
/// found.
pub fn polyhedron_faces_penetration_depth(
    mesh1: &HalfEdgeMesh,
    polyhedron2: &dyn PolyhedralShape,
    pos12: &Isometry<Real>,
) -> (Real, u32) {
    let mut min_depth = Real::MAX;
    let mut min_face = 0;

    for f in 0..mesh1.num_faces() {
        let depth = polyhedron_face_penetration_depth(mesh1, f, polyhedron2, pos12);

        if depth <= 0.0 {
            return (depth, f);
        }

        if depth < min_depth {
            min_depth = depth;
            min_face = f;
        }
    }

    (min_depth, min_face)
}

/// Penetration depth between two convex polyhedra along the cross product of
/// one edge of each.
///
/// All inputs are expressed in the second polyhedron's frame. The returned
/// axis is unit-length and oriented from the second polyhedron toward the
/// first one. Returns `Real::MAX` (and a zero axis) for parallel edges,
/// whose cross product cannot be a separating-axis candidate.
pub fn edge_edge_penetration_depth(
    edge1_start: &Point<Real>,
    edge1_dir: &Vector<Real>,
    edge2_start: &Point<Real>,
    edge2_dir: &Vector<Real>,
    centroid2: &Point<Real>,
) -> (Real, Vector<Real>) {
    if utils::are_parallel_vectors(edge1_dir, edge2_dir) {
        return (Real::MAX, Vector::zeros());
    }

    let mut axis = edge1_dir.cross(edge2_dir).normalize();

    // Make the axis point from the second polyhedron toward the first one.
    if axis.dot(&(edge2_start - centroid2)) > 0.0 {
        axis = -axis;
    }

    let depth = -axis.dot(&(edge2_start - edge1_start));

    (depth, axis)
}

/// The face of a polyhedron whose outward normal is the most anti-parallel
/// to the given direction.
///
/// This is the incident face selection of face/face contact generation: the
/// direction is the reference face normal expressed in the incident
/// polyhedron's frame.
pub fn most_anti_parallel_face(mesh: &HalfEdgeMesh, dir: &Vector<Real>) -> u32 {
    let mut min_dot = Real::MAX;
    let mut best_face = 0;

    for f in 0..mesh.num_faces() {
        let dot = mesh.face_normal(f).dot(dir);

        if dot < min_dot {
            min_dot = dot;
            best_face = f;
        }
    }

    best_face
}

/// Tests whether the arcs AB and CD of the Gauss map intersect.
///
/// The arc joining the adjacent-face normals `a` and `b` of an edge of the
/// first polyhedron crosses the arc joining `c` and `d` of an edge of the
/// second one exactly when the two edges build a face of the Minkowski
/// difference, in which case (and only in which case) their cross product
/// can realize the minimum penetration. `b_cross_a` and `d_cross_c` are the
/// corresponding edge directions.
#[inline]
pub fn gauss_map_arcs_intersect(
    a: &Vector<Real>,
    b: &Vector<Real>,
    c: &Vector<Real>,
    d: &Vector<Real>,
    b_cross_a: &Vector<Real>,
    d_cross_c: &Vector<Real>,
) -> bool {
    let cba = c.dot(b_cross_a);
    let dba = d.dot(b_cross_a);
    let adc = a.dot(d_cross_c);
    let bdc = b.dot(d_cross_c);

    cba * dba < 0.0 && adc * bdc < 0.0 && cba * bdc > 0.0
}

/// Tests whether one edge of each polyhedron builds a face of their
/// Minkowski difference, i.e. whether their cross product has to be tested
/// as a separating-axis candidate.
///
/// `edge1_id` and `edge2_id` are half-edge indices; `pos12` maps the first
/// polyhedron's local coordinates into the second one's frame.
pub fn edges_build_minkowski_face(
    mesh1: &HalfEdgeMesh,
    edge1_id: u32,
    mesh2: &HalfEdgeMesh,
    edge2_id: u32,
    pos12: &Isometry<Real>,
) -> bool {
    let edge1 = mesh1.half_edge(edge1_id);
    let edge2 = mesh2.half_edge(edge2_id);

    let a = pos12 * mesh1.face_normal(edge1.face).into_inner();
    let b = pos12 * mesh1.face_normal(mesh1.half_edge(edge1.twin).face).into_inner();

    let c = mesh2.face_normal(edge2.face).into_inner();
    let d = mesh2.face_normal(mesh2.half_edge(edge2.twin).face).into_inner();

    let (edge1_start, edge1_end) = mesh1.half_edge_endpoints(edge1_id);
    let b_cross_a = pos12 * (edge1_end - edge1_start);

    let (edge2_start, edge2_end) = mesh2.half_edge_endpoints(edge2_id);
    let d_cross_c = edge2_end - edge2_start;

    // The second polyhedron's normals are negated because the relevant
    // surface is the Minkowski difference, which flips its Gauss map.
    gauss_map_arcs_intersect(&a, &b, &-c, &-d, &b_cross_a, &d_cross_c)
}

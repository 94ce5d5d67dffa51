use crate::math::{Point, Real, Vector};
use crate::query::clip::clip_segment_with_planes;
use crate::query::closest_points::closest_points_segment_segment_locals;
use crate::query::contact_manifolds::{ContactManifold, SeparatingAxisCache};
use crate::query::sat;
use crate::query::NarrowPhaseInfo;
use crate::shape::{Segment, ShapeType};

/// Computes the contact manifold between a capsule and a convex polyhedron.
///
/// The pair may be given in either order. Separating-axis candidates are
/// the polyhedron's face normals plus, for every polyhedron edge whose
/// Gauss arc crosses the capsule's great circle, the cross product of the
/// edge with the capsule's inner segment. A face-normal minimum yields up
/// to two contacts by clipping the inner segment against the face's
/// adjacent planes; an edge minimum yields the single closest point
/// between the segment and the edge. Returns `true` iff at least one
/// contact was produced; the cache is updated either way.
pub fn contact_manifold_capsule_polyhedron(
    info: &NarrowPhaseInfo<'_>,
    cache: &mut SeparatingAxisCache,
    manifold: &mut ContactManifold,
) -> bool {
    let capsule_is_shape1 = info.shape1.shape_type() == ShapeType::Capsule;

    let (capsule_shape, capsule_pos, poly_shape, poly_pos) = if capsule_is_shape1 {
        (info.shape1, info.pos1, info.shape2, info.pos2)
    } else {
        (info.shape2, info.pos2, info.shape1, info.pos1)
    };

    let capsule = capsule_shape
        .as_capsule()
        .expect("capsule/polyhedron pair: one shape must be a capsule");
    let polyhedron = poly_shape
        .as_polyhedral()
        .expect("capsule/polyhedron pair: one shape must be polyhedral");
    let mesh = polyhedron.topology();

    // Axis probes run in the capsule's local frame.
    let poly_to_capsule = capsule_pos.inv_mul(poly_pos);
    let capsule_axis = capsule.segment.scaled_direction();

    let mut min_depth = Real::MAX;
    let mut min_face = 0;
    let mut min_edge = 0;
    let mut min_is_face_normal = false;
    let mut separating_axis_capsule = Vector::zeros();
    // Polyhedron-local endpoints of the winning edge, for the edge case.
    let mut separating_edge = (Point::origin(), Point::origin());

    // True when the previous frame's minimum axis still overlaps, in which
    // case the full axis scan is skipped.
    let mut coherence_valid = false;

    if !polyhedron.is_triangle() && cache.valid && cache.used_sat {
        if cache.axis_is_face1 {
            let (depth, face_normal_capsule) = sat::polyhedron_face_capsule_penetration_depth(
                mesh,
                cache.face_index,
                capsule,
                &poly_to_capsule,
            );

            if depth <= 0.0 {
                cache.finish_frame(false);
                return false;
            }

            coherence_valid = cache.colliding;

            if coherence_valid {
                min_depth = depth;
                min_face = cache.face_index;
                min_is_face_normal = true;
                separating_axis_capsule = face_normal_capsule;
            }
        } else {
            let (edge_start, edge_end) = mesh.half_edge_endpoints(cache.edge1_index);
            let edge_dir_capsule = poly_to_capsule * (edge_end - edge_start);

            let (depth, axis) = sat::polyhedron_edge_capsule_segment_penetration_depth(
                mesh,
                capsule,
                &capsule_axis,
                &edge_start,
                &edge_dir_capsule,
                &poly_to_capsule,
            );

            if depth <= 0.0 {
                cache.finish_frame(false);
                return false;
            }

            coherence_valid = cache.colliding;

            if coherence_valid {
                min_depth = depth;
                min_edge = cache.edge1_index;
                min_is_face_normal = false;
                separating_axis_capsule = axis;
                separating_edge = (edge_start, edge_end);
            }
        }
    }

    if !coherence_valid {
        for f in 0..mesh.num_faces() {
            let (depth, face_normal_capsule) =
                sat::polyhedron_face_capsule_penetration_depth(mesh, f, capsule, &poly_to_capsule);

            if depth <= 0.0 {
                cache.axis_is_face1 = true;
                cache.face_index = f;
                cache.finish_frame(false);
                return false;
            }

            if depth < min_depth {
                min_depth = depth;
                min_face = f;
                min_is_face_normal = true;
                separating_axis_capsule = face_normal_capsule;
            }
        }

        // One probe per geometric edge: half-edges come in twin pairs.
        for e in (0..mesh.num_half_edges()).step_by(2) {
            let edge = mesh.half_edge(e);
            let twin = mesh.half_edge(edge.twin);
            let (edge_start, edge_end) = mesh.half_edge_endpoints(e);
            let edge_dir_capsule = poly_to_capsule * (edge_end - edge_start);

            let adjacent_normal1 = poly_to_capsule * mesh.face_normal(edge.face).into_inner();
            let adjacent_normal2 = poly_to_capsule * mesh.face_normal(twin.face).into_inner();

            if !sat::capsule_segment_crosses_edge_arc(
                &capsule_axis,
                &adjacent_normal1,
                &adjacent_normal2,
            ) {
                continue;
            }

            let (depth, axis) = sat::polyhedron_edge_capsule_segment_penetration_depth(
                mesh,
                capsule,
                &capsule_axis,
                &edge_start,
                &edge_dir_capsule,
                &poly_to_capsule,
            );

            if depth <= 0.0 {
                cache.axis_is_face1 = false;
                cache.edge1_index = e;
                cache.finish_frame(false);
                return false;
            }

            if depth < min_depth {
                min_depth = depth;
                min_edge = e;
                min_is_face_normal = false;
                separating_axis_capsule = axis;
                separating_edge = (edge_start, edge_end);
            }
        }
    }

    // Contact generation happens in the polyhedron's local frame.
    let capsule_to_poly = poly_to_capsule.inverse();
    let seg_a_poly = capsule_to_poly * capsule.segment.a;
    let seg_b_poly = capsule_to_poly * capsule.segment.b;

    let mut normal_world = capsule_pos * separating_axis_capsule;
    if !capsule_is_shape1 {
        normal_world = -normal_world;
    }

    let capsule_radius = capsule.radius;

    if min_is_face_normal {
        // Clip the inner segment with the planes of the faces adjacent to
        // the reference face, then project the clipped points on both
        // shapes' boundaries.
        let face = mesh.face(min_face);
        let mut planes = Vec::with_capacity(face.vertices.len());

        let first = face.first_half_edge;
        let mut eid = first;
        loop {
            let edge = mesh.half_edge(eid);
            let twin = mesh.half_edge(edge.twin);
            planes.push((
                mesh.vertex(edge.vertex),
                mesh.face_normal(twin.face).into_inner(),
            ));

            eid = edge.next;
            if eid == first {
                break;
            }
        }

        let clipped = clip_segment_with_planes(&seg_a_poly, &seg_b_poly, &planes);
        let face_normal = mesh.face_normal(min_face).into_inner();

        for point in &clipped {
            let contact_poly = *point + face_normal * (min_depth - capsule_radius);
            let contact_capsule =
                poly_to_capsule * *point - separating_axis_capsule * capsule_radius;

            if capsule_is_shape1 {
                manifold.push_contact(normal_world, min_depth, contact_capsule, contact_poly);
            } else {
                manifold.push_contact(normal_world, min_depth, contact_poly, contact_capsule);
            }
        }

        cache.axis_is_face1 = true;
        cache.face_index = min_face;
    } else {
        let (closest_capsule_seg, closest_edge) = closest_points_segment_segment_locals(
            &Segment::new(seg_a_poly, seg_b_poly),
            &Segment::new(separating_edge.0, separating_edge.1),
        );

        // Project the inner-segment point on the capsule's surface.
        let contact_capsule =
            (poly_to_capsule * closest_capsule_seg) - separating_axis_capsule * capsule_radius;

        if capsule_is_shape1 {
            manifold.push_contact(normal_world, min_depth, contact_capsule, closest_edge);
        } else {
            manifold.push_contact(normal_world, min_depth, closest_edge, contact_capsule);
        }

        cache.axis_is_face1 = false;
        cache.edge1_index = min_edge;
    }

    cache.finish_frame(true);

    true
}

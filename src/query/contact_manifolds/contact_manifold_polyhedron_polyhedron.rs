use crate::math::{Point, Real, Vector};
use crate::query::clip::clip_polygon_with_planes;
use crate::query::closest_points::closest_points_segment_segment_locals;
use crate::query::contact_manifolds::{ContactManifold, SeparatingAxisCache};
use crate::query::sat::{self, SAME_SEPARATING_AXIS_BIAS};
use crate::query::NarrowPhaseInfo;
use crate::shape::Segment;

/// Computes the contact manifold between two convex polyhedra.
///
/// Separating-axis candidates are the face normals of both polyhedra plus
/// the cross products of their edge pairs, pruned by the Gauss-map test. A
/// new axis only displaces the current minimum if it is shallower by more
/// than [`SAME_SEPARATING_AXIS_BIAS`], so near-ties keep resolving to the
/// same axis frame after frame and the per-pair cache keeps hitting.
///
/// A face-normal minimum produces a multi-point manifold by clipping the
/// incident face against the reference face's adjacent planes; an edge/edge
/// minimum produces the single closest point between the two edges.
/// Returns `true` iff the shapes overlap; note that a grazing face contact
/// may produce zero points even then, so consumers must inspect the
/// manifold. The cache is updated either way.
pub fn contact_manifold_polyhedron_polyhedron(
    info: &NarrowPhaseInfo<'_>,
    cache: &mut SeparatingAxisCache,
    manifold: &mut ContactManifold,
) -> bool {
    let polyhedron1 = info
        .shape1
        .as_polyhedral()
        .expect("polyhedron/polyhedron pair: the first shape must be polyhedral");
    let polyhedron2 = info
        .shape2
        .as_polyhedral()
        .expect("polyhedron/polyhedron pair: the second shape must be polyhedral");
    let mesh1 = polyhedron1.topology();
    let mesh2 = polyhedron2.topology();

    let poly1_to_poly2 = info.pos2.inv_mul(info.pos1);
    let poly2_to_poly1 = poly1_to_poly2.inverse();

    let mut min_depth = Real::MAX;
    let mut min_face = 0;
    let mut min_is_face_normal = false;
    let mut min_is_face_normal_poly1 = false;
    let mut min_edge1 = 0;
    let mut min_edge2 = 0;
    // Winning edge endpoints and axis, all in the second polyhedron's frame.
    let mut separating_edge1 = (Point::origin(), Point::origin());
    let mut separating_edge2 = (Point::origin(), Point::origin());
    let mut min_edge_axis = Vector::zeros();

    // True when the previous frame's minimum axis still overlaps, in which
    // case the full axis scan is skipped.
    let mut coherence_valid = false;

    if !polyhedron1.is_triangle() && !polyhedron2.is_triangle() && cache.valid && cache.used_sat {
        if cache.axis_is_face1 {
            let depth = sat::polyhedron_face_penetration_depth(
                mesh1,
                cache.face_index,
                polyhedron2,
                &poly1_to_poly2,
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
                min_is_face_normal_poly1 = true;
            }
        } else if cache.axis_is_face2 {
            let depth = sat::polyhedron_face_penetration_depth(
                mesh2,
                cache.face_index,
                polyhedron1,
                &poly2_to_poly1,
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
                min_is_face_normal_poly1 = false;
            }
        } else {
            let (start1, end1) = mesh1.half_edge_endpoints(cache.edge1_index);
            let edge1_start = poly1_to_poly2 * start1;
            let edge1_end = poly1_to_poly2 * end1;
            let edge1_dir = edge1_end - edge1_start;

            let (edge2_start, edge2_end) = mesh2.half_edge_endpoints(cache.edge2_index);
            let edge2_dir = edge2_end - edge2_start;

            let (depth, axis) = sat::edge_edge_penetration_depth(
                &edge1_start,
                &edge1_dir,
                &edge2_start,
                &edge2_dir,
                &mesh2.centroid(),
            );

            if depth <= 0.0 {
                cache.finish_frame(false);
                return false;
            }

            coherence_valid = cache.colliding;

            if coherence_valid {
                min_depth = depth;
                min_is_face_normal = false;
                min_is_face_normal_poly1 = false;
                min_edge1 = cache.edge1_index;
                min_edge2 = cache.edge2_index;
                separating_edge1 = (edge1_start, edge1_end);
                separating_edge2 = (edge2_start, edge2_end);
                min_edge_axis = axis;
            }
        }
    }

    if !coherence_valid {
        // Face normals of the first polyhedron.
        let (depth1, face1) =
            sat::polyhedron_faces_penetration_depth(mesh1, polyhedron2, &poly1_to_poly2);

        if depth1 <= 0.0 {
            cache.axis_is_face1 = true;
            cache.axis_is_face2 = false;
            cache.face_index = face1;
            cache.finish_frame(false);
            return false;
        }

        if depth1 < min_depth - SAME_SEPARATING_AXIS_BIAS {
            min_depth = depth1;
            min_face = face1;
            min_is_face_normal = true;
            min_is_face_normal_poly1 = true;
        }

        // Face normals of the second polyhedron.
        let (depth2, face2) =
            sat::polyhedron_faces_penetration_depth(mesh2, polyhedron1, &poly2_to_poly1);

        if depth2 <= 0.0 {
            cache.axis_is_face1 = false;
            cache.axis_is_face2 = true;
            cache.face_index = face2;
            cache.finish_frame(false);
            return false;
        }

        if depth2 < min_depth - SAME_SEPARATING_AXIS_BIAS {
            min_depth = depth2;
            min_face = face2;
            min_is_face_normal = true;
            min_is_face_normal_poly1 = false;
        }

        // Cross products of the edge pairs, one probe per geometric edge
        // pair, restricted to the pairs building a face of the Minkowski
        // difference.
        for e1 in (0..mesh1.num_half_edges()).step_by(2) {
            let (start1, end1) = mesh1.half_edge_endpoints(e1);
            let edge1_start = poly1_to_poly2 * start1;
            let edge1_end = poly1_to_poly2 * end1;
            let edge1_dir = edge1_end - edge1_start;

            for e2 in (0..mesh2.num_half_edges()).step_by(2) {
                if !sat::edges_build_minkowski_face(mesh1, e1, mesh2, e2, &poly1_to_poly2) {
                    continue;
                }

                let (edge2_start, edge2_end) = mesh2.half_edge_endpoints(e2);
                let edge2_dir = edge2_end - edge2_start;

                let (depth, axis) = sat::edge_edge_penetration_depth(
                    &edge1_start,
                    &edge1_dir,
                    &edge2_start,
                    &edge2_dir,
                    &mesh2.centroid(),
                );

                if depth <= 0.0 {
                    cache.axis_is_face1 = false;
                    cache.axis_is_face2 = false;
                    cache.edge1_index = e1;
                    cache.edge2_index = e2;
                    cache.finish_frame(false);
                    return false;
                }

                if depth < min_depth - SAME_SEPARATING_AXIS_BIAS {
                    min_depth = depth;
                    min_is_face_normal = false;
                    min_is_face_normal_poly1 = false;
                    min_edge1 = e1;
                    min_edge2 = e2;
                    separating_edge1 = (edge1_start, edge1_end);
                    separating_edge2 = (edge2_start, edge2_end);
                    min_edge_axis = axis;
                }
            }
        }
    }

    // The shapes overlap along the minimum axis; clip them along it to
    // build the contact points.
    debug_assert!(min_depth > 0.0);

    if min_is_face_normal {
        let (reference_mesh, incident_mesh) = if min_is_face_normal_poly1 {
            (mesh1, mesh2)
        } else {
            (mesh2, mesh1)
        };
        let (ref_to_incident, incident_to_ref) = if min_is_face_normal_poly1 {
            (poly1_to_poly2, poly2_to_poly1)
        } else {
            (poly2_to_poly1, poly1_to_poly2)
        };

        let axis_reference = reference_mesh.face_normal(min_face).into_inner();
        let axis_incident = ref_to_incident * axis_reference;

        let normal_world = if min_is_face_normal_poly1 {
            info.pos1 * axis_reference
        } else {
            -(info.pos2 * axis_reference)
        };

        // The incident face is the one most anti-parallel to the reference
        // normal; its vertices are lifted into the reference frame where
        // the clipping planes live.
        let incident_face_id = sat::most_anti_parallel_face(incident_mesh, &axis_incident);
        let incident_face = incident_mesh.face(incident_face_id);

        let polygon: Vec<Point<Real>> = incident_face
            .vertices
            .iter()
            .map(|vid| incident_to_ref * incident_mesh.vertex(*vid))
            .collect();

        let reference_face = reference_mesh.face(min_face);
        let first = reference_face.first_half_edge;
        let mut planes = Vec::with_capacity(reference_face.vertices.len());

        let mut eid = first;
        loop {
            let edge = reference_mesh.half_edge(eid);
            let twin = reference_mesh.half_edge(edge.twin);
            planes.push((
                reference_mesh.vertex(edge.vertex),
                reference_mesh.face_normal(twin.face).into_inner(),
            ));

            eid = edge.next;
            if eid == first {
                break;
            }
        }

        let clipped = clip_polygon_with_planes(&polygon, &planes);

        // Only the clipped vertices below the reference face plane become
        // contacts; a grazing configuration may keep none of them.
        let reference_vertex = reference_mesh.vertex(reference_mesh.half_edge(first).vertex);

        for point in &clipped {
            if (*point - reference_vertex).dot(&axis_reference) < 0.0 {
                let contact_incident = ref_to_incident * *point;
                let contact_reference = *point + axis_reference * min_depth;

                if min_is_face_normal_poly1 {
                    manifold.push_contact(
                        normal_world,
                        min_depth,
                        contact_reference,
                        contact_incident,
                    );
                } else {
                    manifold.push_contact(
                        normal_world,
                        min_depth,
                        contact_incident,
                        contact_reference,
                    );
                }
            }
        }

        cache.axis_is_face1 = min_is_face_normal_poly1;
        cache.axis_is_face2 = !min_is_face_normal_poly1;
        cache.face_index = min_face;
    } else {
        // Single contact at the closest points of the two edges, computed
        // in the second polyhedron's frame.
        let (closest1, closest2) = closest_points_segment_segment_locals(
            &Segment::new(separating_edge1.0, separating_edge1.1),
            &Segment::new(separating_edge2.0, separating_edge2.1),
        );

        let closest1_local = poly2_to_poly1 * closest1;
        let normal_world = info.pos2 * min_edge_axis;

        manifold.push_contact(normal_world, min_depth, closest1_local, closest2);

        cache.axis_is_face1 = false;
        cache.axis_is_face2 = false;
        cache.edge1_index = min_edge1;
        cache.edge2_index = min_edge2;
    }

    cache.finish_frame(true);

    true
}

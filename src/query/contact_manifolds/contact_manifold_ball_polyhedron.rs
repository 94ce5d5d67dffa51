use crate::math::{Point, Real};
use crate::query::contact_manifolds::{ContactManifold, SeparatingAxisCache};
use crate::query::sat;
use crate::query::NarrowPhaseInfo;
use crate::shape::ShapeType;

/// Computes the contact manifold between a ball and a convex polyhedron.
///
/// The pair may be given in either order. The only separating-axis
/// candidates are the polyhedron's face normals, and the previous frame's
/// minimum face is probed first so an unchanged configuration skips the
/// full scan (unless the polyhedron is a triangle, which never reuses the
/// cache). Returns `true` iff a contact was produced; the cache is updated
/// either way.
pub fn contact_manifold_ball_polyhedron(
    info: &NarrowPhaseInfo<'_>,
    cache: &mut SeparatingAxisCache,
    manifold: &mut ContactManifold,
) -> bool {
    let ball_is_shape1 = info.shape1.shape_type() == ShapeType::Ball;

    let (ball_shape, ball_pos, poly_shape, poly_pos) = if ball_is_shape1 {
        (info.shape1, info.pos1, info.shape2, info.pos2)
    } else {
        (info.shape2, info.pos2, info.shape1, info.pos1)
    };

    let ball = ball_shape
        .as_ball()
        .expect("ball/polyhedron pair: one shape must be a ball");
    let polyhedron = poly_shape
        .as_polyhedral()
        .expect("ball/polyhedron pair: one shape must be polyhedral");
    let mesh = polyhedron.topology();

    // The ball's center in the polyhedron's local frame; every probe runs there.
    let ball_to_poly = poly_pos.inv_mul(ball_pos);
    let center = Point::from(ball_to_poly.translation.vector);

    let mut min_depth = Real::MAX;
    let mut min_face = 0;

    // True when the previous frame's minimum axis still overlaps, in which
    // case the full face scan is skipped.
    let mut coherence_valid = false;

    if !polyhedron.is_triangle() && cache.valid && cache.used_sat {
        let depth =
            sat::polyhedron_face_ball_penetration_depth(mesh, cache.face_index, ball, &center);

        // The previous minimum axis separates again.
        if depth <= 0.0 {
            cache.finish_frame(false);
            return false;
        }

        coherence_valid = cache.colliding;

        if coherence_valid {
            min_depth = depth;
            min_face = cache.face_index;
        }
    }

    if !coherence_valid {
        for f in 0..mesh.num_faces() {
            let depth = sat::polyhedron_face_ball_penetration_depth(mesh, f, ball, &center);

            if depth <= 0.0 {
                cache.face_index = f;
                cache.finish_frame(false);
                return false;
            }

            if depth < min_depth {
                min_depth = depth;
                min_face = f;
            }
        }
    }

    let min_face_normal = mesh.face_normal(min_face).into_inner();
    let mut normal_world = -(poly_pos * min_face_normal);
    let contact_ball = Point::from(ball_pos.inverse_transform_vector(&normal_world) * ball.radius);
    let contact_poly = center + min_face_normal * (min_depth - ball.radius);

    if !ball_is_shape1 {
        normal_world = -normal_world;
    }

    if ball_is_shape1 {
        manifold.push_contact(normal_world, min_depth, contact_ball, contact_poly);
    } else {
        manifold.push_contact(normal_world, min_depth, contact_poly, contact_ball);
    }

    cache.face_index = min_face;
    cache.finish_frame(true);

    true
}

use approx::assert_relative_eq;
use na::{Point3, Vector3};
use sat3d::math::Isometry;
use sat3d::query::SeparatingAxisCache;
use sat3d::shape::{Ball, Capsule, CollisionShape};

use crate::common::{ball_contact, capsule_contact, polyhedron_contact, unit_cube};

#[test]
fn repeated_ball_cube_queries_reuse_the_cached_face() {
    let ball = CollisionShape::from(Ball::new(0.1));
    let cube = unit_cube();
    let ball_pos = Isometry::translation(0.55, 0.0, 0.0);
    let cube_pos = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit1, manifold1) = ball_contact(&ball, &ball_pos, &cube, &cube_pos, &mut cache);
    assert!(hit1);
    let cached_face = cache.face_index;

    // Same configuration, warm cache: same result, same axis.
    let (hit2, manifold2) = ball_contact(&ball, &ball_pos, &cube, &cube_pos, &mut cache);
    assert!(hit2);
    assert_eq!(manifold1, manifold2);
    assert_eq!(cache.face_index, cached_face);
    assert!(cache.colliding);
}

#[test]
fn separation_along_the_cached_face_exits_early() {
    let ball = CollisionShape::from(Ball::new(0.1));
    let cube = unit_cube();
    let cube_pos = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit, _) = ball_contact(
        &ball,
        &Isometry::translation(0.55, 0.0, 0.0),
        &cube,
        &cube_pos,
        &mut cache,
    );
    assert!(hit);

    // The ball moved away along the same axis: the cached +x face separates
    // again and the full scan is skipped.
    let (hit, manifold) = ball_contact(
        &ball,
        &Isometry::translation(2.0, 0.0, 0.0),
        &cube,
        &cube_pos,
        &mut cache,
    );
    assert!(!hit);
    assert!(manifold.is_empty());
    assert!(!cache.colliding);
    assert!(cache.valid && cache.used_sat);
}

#[test]
fn repeated_cube_cube_queries_are_identical() {
    let cube1 = unit_cube();
    let cube2 = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.9, 0.0, 0.0);

    let mut cache = SeparatingAxisCache::new();
    let (hit1, manifold1) = polyhedron_contact(&cube1, &pos1, &cube2, &pos2, &mut cache);
    let was_face1 = cache.axis_is_face1;
    let was_face2 = cache.axis_is_face2;

    let (hit2, manifold2) = polyhedron_contact(&cube1, &pos1, &cube2, &pos2, &mut cache);

    assert!(hit1 && hit2);
    assert_eq!(manifold1, manifold2);
    assert_eq!(cache.axis_is_face1, was_face1);
    assert_eq!(cache.axis_is_face2, was_face2);
}

#[test]
fn warm_cache_matches_a_fresh_scan_after_a_small_motion() {
    let cube1 = unit_cube();
    let cube2 = unit_cube();
    let pos1 = Isometry::identity();

    let mut warm_cache = SeparatingAxisCache::new();
    let (hit, _) = polyhedron_contact(
        &cube1,
        &pos1,
        &cube2,
        &Isometry::translation(0.9, 0.0, 0.0),
        &mut warm_cache,
    );
    assert!(hit);

    // Nudge the second cube and compare the cached-path result against a
    // fresh full scan of the same configuration.
    let nudged = Isometry::translation(0.89, 0.001, 0.0);

    let (warm_hit, warm_manifold) =
        polyhedron_contact(&cube1, &pos1, &cube2, &nudged, &mut warm_cache);

    let mut fresh_cache = SeparatingAxisCache::new();
    let (fresh_hit, fresh_manifold) =
        polyhedron_contact(&cube1, &pos1, &cube2, &nudged, &mut fresh_cache);

    assert_eq!(warm_hit, fresh_hit);
    assert_eq!(warm_manifold.len(), fresh_manifold.len());

    for (warm, fresh) in warm_manifold
        .points
        .iter()
        .zip(fresh_manifold.points.iter())
    {
        assert_relative_eq!(warm.depth, fresh.depth, epsilon = 1.0e-5);
        assert_relative_eq!(warm.normal_world, fresh.normal_world, epsilon = 1.0e-5);
        assert_relative_eq!(warm.local_p1, fresh.local_p1, epsilon = 1.0e-5);
        assert_relative_eq!(warm.local_p2, fresh.local_p2, epsilon = 1.0e-5);
    }
}

#[test]
fn cached_edge_axis_is_reused_by_the_capsule_driver() {
    let cube = unit_cube();
    let diag = Vector3::new(1.0, 1.0, 0.0).normalize();
    let outward = Vector3::new(1.0, -1.0, 0.0).normalize();
    let center = Point3::new(0.5, -0.5, 0.0) + outward * 0.08;
    let capsule = CollisionShape::from(Capsule::new(
        center - diag * 0.5,
        center + diag * 0.5,
        0.1,
    ));
    let identity = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit1, manifold1) = capsule_contact(&capsule, &identity, &cube, &identity, &mut cache);
    assert!(hit1);
    assert!(!cache.axis_is_face1);
    let cached_edge = cache.edge1_index;

    let (hit2, manifold2) = capsule_contact(&capsule, &identity, &cube, &identity, &mut cache);
    assert!(hit2);
    assert_eq!(manifold1, manifold2);
    assert_eq!(cache.edge1_index, cached_edge);
}

#[test]
fn capsule_separation_along_the_cached_edge_axis_exits_early() {
    let cube = unit_cube();
    let diag = Vector3::new(1.0, 1.0, 0.0).normalize();
    let outward = Vector3::new(1.0, -1.0, 0.0).normalize();
    let identity = Isometry::identity();

    let near = Point3::new(0.5, -0.5, 0.0) + outward * 0.08;
    let capsule = CollisionShape::from(Capsule::new(near - diag * 0.5, near + diag * 0.5, 0.1));

    let mut cache = SeparatingAxisCache::new();
    let (hit, _) = capsule_contact(&capsule, &identity, &cube, &identity, &mut cache);
    assert!(hit);
    assert!(!cache.axis_is_face1);

    // Pull the capsule away along the cached cross-product axis.
    let offset = outward * 0.1;
    let capsule_pos = Isometry::translation(offset.x, offset.y, offset.z);
    let (hit, manifold) = capsule_contact(&capsule, &capsule_pos, &cube, &identity, &mut cache);
    assert!(!hit);
    assert!(manifold.is_empty());
    assert!(!cache.colliding);
}

use approx::assert_relative_eq;
use na::Vector3;
use sat3d::math::{Isometry, Real};
use sat3d::query::SeparatingAxisCache;
use sat3d::shape::{CollisionShape, ConvexPolyhedron};

use crate::common::{polyhedron_contact, unit_cube};

#[test]
fn two_cubes_overlapping_along_x() {
    let cube1 = unit_cube();
    let cube2 = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.9, 0.0, 0.0);

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = polyhedron_contact(&cube1, &pos1, &cube2, &pos2, &mut cache);

    assert!(hit);
    assert_eq!(manifold.len(), 4);

    for contact in &manifold.points {
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1.0e-5);
        assert_relative_eq!(contact.normal_world.x.abs(), 1.0, epsilon = 1.0e-5);

        // Contacts lie on the overlapping faces of each cube.
        assert_relative_eq!(contact.local_p1.x, 0.5, epsilon = 1.0e-5);
        assert_relative_eq!(contact.local_p2.x, -0.5, epsilon = 1.0e-5);
        assert!(contact.local_p1.y.abs() <= 0.5 + 1.0e-5);
        assert!(contact.local_p1.z.abs() <= 0.5 + 1.0e-5);
    }

    // The winning axis is a face normal of one of the cubes.
    assert!(cache.axis_is_face1 || cache.axis_is_face2);
    assert!(!(cache.axis_is_face1 && cache.axis_is_face2));
    assert!(cache.colliding);
}

#[test]
fn two_separated_cubes() {
    let cube1 = unit_cube();
    let cube2 = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(1.5, 0.0, 0.0);

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = polyhedron_contact(&cube1, &pos1, &cube2, &pos2, &mut cache);

    assert!(!hit);
    assert!(manifold.is_empty());
    assert!(cache.valid && cache.used_sat && !cache.colliding);
    // The first cube's +x face separates.
    assert!(cache.axis_is_face1);
    assert!(!cache.axis_is_face2);
    assert_eq!(cache.face_index, 0);
}

#[test]
fn edge_edge_collision_of_rotated_cubes() {
    let cube1 = unit_cube();
    let cube2 = unit_cube();

    // The first cube is rotated 45 degrees around z: its topmost feature is
    // an edge along z at height sqrt(2)/2. The second is rotated 45 degrees
    // around x: its lowest feature is an edge along x. Lowering the second
    // cube so the two edges cross with a 0.03 overlap yields an edge/edge
    // minimum axis.
    let half_diag = Real::sqrt(2.0) / 2.0;
    let pos1 = Isometry::new(Vector3::zeros(), Vector3::z() * Real::to_radians(45.0));
    let pos2 = Isometry::new(
        Vector3::new(0.0, 2.0 * half_diag - 0.03, 0.0),
        Vector3::x() * Real::to_radians(45.0),
    );

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = polyhedron_contact(&cube1, &pos1, &cube2, &pos2, &mut cache);

    assert!(hit);
    assert_eq!(manifold.len(), 1);

    // The winning axis is an edge/edge cross product.
    assert!(!cache.axis_is_face1);
    assert!(!cache.axis_is_face2);

    let contact = manifold.points[0];
    assert_relative_eq!(contact.depth, 0.03, epsilon = 1.0e-4);
    // The crossed edges run along z and x, so their cross product is
    // vertical.
    assert_relative_eq!(contact.normal_world.y.abs(), 1.0, epsilon = 1.0e-4);

    // Both local contacts sit on the crossing edges, near the top vertex
    // line of the first cube.
    let world_p1 = pos1 * contact.local_p1;
    let world_p2 = pos2 * contact.local_p2;
    assert_relative_eq!(world_p1.x, 0.0, epsilon = 1.0e-4);
    assert_relative_eq!(world_p1.z, 0.0, epsilon = 1.0e-4);
    assert_relative_eq!(world_p2.x, 0.0, epsilon = 1.0e-4);
    assert_relative_eq!(world_p2.z, 0.0, epsilon = 1.0e-4);
}

#[test]
fn cube_resting_on_a_larger_box() {
    let small = unit_cube();
    let large = CollisionShape::from(ConvexPolyhedron::cuboid(Vector3::new(2.0, 0.5, 2.0)));
    let pos_small = Isometry::translation(0.0, 0.95, 0.0);
    let pos_large = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = polyhedron_contact(&small, &pos_small, &large, &pos_large, &mut cache);

    assert!(hit);
    assert_eq!(manifold.len(), 4);
    for contact in &manifold.points {
        assert_relative_eq!(contact.depth, 0.05, epsilon = 1.0e-5);
        assert_relative_eq!(contact.normal_world.y.abs(), 1.0, epsilon = 1.0e-5);
    }
}

#[test]
fn grazing_face_contact_tolerates_an_empty_manifold() {
    // Two cubes sharing a corner region so thinly that the clipped incident
    // face may keep no vertex below the reference face. The driver must not
    // crash, and any produced contact must carry a positive depth.
    let cube1 = unit_cube();
    let cube2 = unit_cube();
    let pos1 = Isometry::identity();
    let pos2 = Isometry::translation(0.9999, 0.9999, 0.9999);

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = polyhedron_contact(&cube1, &pos1, &cube2, &pos2, &mut cache);

    if hit {
        for contact in &manifold.points {
            assert!(contact.depth > 0.0);
        }
    } else {
        assert!(manifold.is_empty());
    }
}

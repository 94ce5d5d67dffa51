use approx::assert_relative_eq;
use na::{Point3, Vector3};
use sat3d::math::{Isometry, Real};
use sat3d::query::SeparatingAxisCache;
use sat3d::shape::{Capsule, CollisionShape};

use crate::common::{capsule_contact, unit_cube};

#[test]
fn capsule_resting_on_the_top_face_of_a_cube() {
    let cube = unit_cube();
    // A capsule lying along the world x axis, dipping 0.05 into the top face.
    let capsule = CollisionShape::from(Capsule::new(
        Point3::new(-0.5, 0.55, 0.0),
        Point3::new(0.5, 0.55, 0.0),
        0.1,
    ));
    let cube_pos = Isometry::identity();
    let capsule_pos = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = capsule_contact(&cube, &cube_pos, &capsule, &capsule_pos, &mut cache);

    assert!(hit);
    assert_eq!(manifold.len(), 2);

    for contact in &manifold.points {
        assert_relative_eq!(contact.depth, 0.05, epsilon = 1.0e-5);
        // The capsule is the second shape, so the normal points from it
        // down into the cube.
        assert_relative_eq!(contact.normal_world, -Vector3::y(), epsilon = 1.0e-5);
        // Cube-side contacts lie on the top face, capsule-side contacts on
        // the capsule's surface.
        assert_relative_eq!(contact.local_p1.y, 0.5, epsilon = 1.0e-5);
        assert!(contact.local_p1.x.abs() <= 0.5 + 1.0e-5);
        assert_relative_eq!(contact.local_p2.y, 0.45, epsilon = 1.0e-5);
    }

    // The two clipped contacts sit at opposite ends of the face.
    let xs: Vec<Real> = manifold.points.iter().map(|c| c.local_p1.x).collect();
    assert_relative_eq!(xs[0].min(xs[1]), -0.5, epsilon = 1.0e-5);
    assert_relative_eq!(xs[0].max(xs[1]), 0.5, epsilon = 1.0e-5);

    // A polyhedron face normal won.
    assert!(cache.axis_is_face1);
    assert_eq!(cache.face_index, 2);
    assert!(cache.colliding);
}

#[test]
fn capsule_first_shape_order_flips_the_normal() {
    let cube = unit_cube();
    let capsule = CollisionShape::from(Capsule::new(
        Point3::new(-0.5, 0.55, 0.0),
        Point3::new(0.5, 0.55, 0.0),
        0.1,
    ));
    let identity = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = capsule_contact(&capsule, &identity, &cube, &identity, &mut cache);

    assert!(hit);
    for contact in &manifold.points {
        assert_relative_eq!(contact.normal_world, Vector3::y(), epsilon = 1.0e-5);
        assert_relative_eq!(contact.local_p2.y, 0.5, epsilon = 1.0e-5);
        assert_relative_eq!(contact.local_p1.y, 0.45, epsilon = 1.0e-5);
    }
}

#[test]
fn capsule_separated_from_the_cube() {
    let cube = unit_cube();
    let capsule = CollisionShape::from(Capsule::new_y(0.5, 0.1));
    let cube_pos = Isometry::identity();
    let capsule_pos = Isometry::translation(2.0, 0.0, 0.0);

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = capsule_contact(&capsule, &capsule_pos, &cube, &cube_pos, &mut cache);

    assert!(!hit);
    assert!(manifold.is_empty());
    assert!(cache.valid && cache.used_sat && !cache.colliding);
    // A polyhedron face separated the shapes.
    assert!(cache.axis_is_face1);
}

#[test]
fn capsule_crossing_a_cube_edge_diagonally() {
    let cube = unit_cube();

    // The capsule runs along (1, 1, 0), passing 0.08 away from the cube
    // edge at (0.5, -0.5, z); with radius 0.1 it overlaps by 0.02.
    let diag = Vector3::new(1.0, 1.0, 0.0).normalize();
    let outward = Vector3::new(1.0, -1.0, 0.0).normalize();
    let closest_on_edge = Point3::new(0.5, -0.5, 0.0);
    let center = closest_on_edge + outward * 0.08;

    let capsule = CollisionShape::from(Capsule::new(
        center - diag * 0.5,
        center + diag * 0.5,
        0.1,
    ));
    let identity = Isometry::identity();

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = capsule_contact(&capsule, &identity, &cube, &identity, &mut cache);

    assert!(hit);
    assert_eq!(manifold.len(), 1);

    let contact = manifold.points[0];
    assert_relative_eq!(contact.depth, 0.02, epsilon = 1.0e-4);
    // An edge/segment cross product won, pointing out of the cube.
    assert!(!cache.axis_is_face1);
    assert_relative_eq!(contact.normal_world, outward, epsilon = 1.0e-4);
    // The cube-side contact is the closest point on the crossed edge.
    assert_relative_eq!(contact.local_p2, closest_on_edge, epsilon = 1.0e-4);
    // The capsule-side contact is on the capsule surface, radius away from
    // the inner segment.
    assert_relative_eq!((contact.local_p1 - center).norm(), 0.1, epsilon = 1.0e-4);
}

#[test]
fn deep_vertical_capsule_reports_the_face_overlap() {
    let cube = unit_cube();
    let capsule = CollisionShape::from(Capsule::new_y(0.5, 0.1));
    let cube_pos = Isometry::identity();
    // Standing upright, centered above the cube with its lower cap inside.
    let capsule_pos = Isometry::translation(0.0, 1.05, 0.0);

    let mut cache = SeparatingAxisCache::new();
    let (hit, manifold) = capsule_contact(&capsule, &capsule_pos, &cube, &cube_pos, &mut cache);

    assert!(hit);
    assert!(!manifold.is_empty());
    for contact in &manifold.points {
        assert_relative_eq!(contact.depth, 0.05, epsilon = 1.0e-5);
        assert_relative_eq!(contact.normal_world, Vector3::y(), epsilon = 1.0e-5);
    }
    assert!(cache.axis_is_face1);
    assert_eq!(cache.face_index, 2);
}

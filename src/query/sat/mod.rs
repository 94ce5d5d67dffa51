//! Application of the Separating-Axis-Theorem (SAT).
//!
//! The functions of this module compute penetration depths along candidate
//! separating axes. A positive depth means the shapes overlap along that
//! axis; a depth smaller than or equal to zero means the axis separates
//! them. Degenerate candidates (e.g. the cross product of two parallel
//! edges) decline to participate by returning [`Real::MAX`].

pub use self::sat_ball_polyhedron::polyhedron_face_ball_penetration_depth;
pub use self::sat_capsule_polyhedron::{
    capsule_segment_crosses_edge_arc, polyhedron_edge_capsule_segment_penetration_depth,
    polyhedron_face_capsule_penetration_depth,
};
pub use self::sat_polyhedron_polyhedron::{
    edge_edge_penetration_depth, edges_build_minkowski_face, gauss_map_arcs_intersect,
    most_anti_parallel_face, polyhedron_face_penetration_depth,
    polyhedron_faces_penetration_depth,
};

mod sat_ball_polyhedron;
mod sat_capsule_polyhedron;
mod sat_polyhedron_polyhedron;

use crate::math::Real;

/// Hysteresis margin applied when a candidate axis tries to displace the
/// current minimum-penetration axis.
///
/// Without it, two axes with near-equal penetration depths would alternate
/// as the reported minimum from frame to frame, defeating the per-pair axis
/// cache. The margin is only applied when overriding an already-found
/// minimum, and uniformly across the axis families.
pub const SAME_SEPARATING_AXIS_BIAS: Real = 0.001;

//! Closest-point computations between simple primitives.

pub use self::closest_points_segment_segment::closest_points_segment_segment_locals;

mod closest_points_segment_segment;

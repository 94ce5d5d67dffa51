//! Polygon and segment clipping against half-space planes.

pub use self::clip_halfspace_polygon::{clip_halfspace_polygon, clip_polygon_with_planes};
pub use self::clip_halfspace_segment::clip_segment_with_planes;

mod clip_halfspace_polygon;
mod clip_halfspace_segment;

use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// Cuts a segment with the intersection of the given half-spaces.
///
/// Each plane is given as a point and an outward normal; the kept region is
/// the intersection of the `normal.dot(&(pt - point)) <= 0.0` sides. The
/// result holds the two endpoints of the clipped segment (equal if the
/// segment was reduced to a single point), or nothing if the segment lies
/// entirely outside one of the half-spaces.
pub fn clip_segment_with_planes(
    a: &Point<Real>,
    b: &Point<Real>,
    planes: &[(Point<Real>, Vector<Real>)],
) -> ArrayVec<Point<Real>, 2> {
    let mut result = ArrayVec::new();
    let dir = b - a;
    let mut t_min: Real = 0.0;
    let mut t_max: Real = 1.0;

    for (center, normal) in planes {
        let dist_a = (a - center).dot(normal);
        let dist_b = (b - center).dot(normal);

        if dist_a > 0.0 && dist_b > 0.0 {
            return result;
        }

        // The signed distance along the segment is affine in `t`, so a
        // single crossing bounds the kept parameter interval.
        if dist_a > 0.0 {
            t_min = t_min.max(dist_a / (dist_a - dist_b));
        } else if dist_b > 0.0 {
            t_max = t_max.min(dist_a / (dist_a - dist_b));
        }
    }

    if t_min > t_max {
        return result;
    }

    result.push(a + dir * t_min);
    result.push(a + dir * t_max);
    result
}

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Segment;

/// Closest points between two segments expressed in the same frame.
///
/// Returns the point of `seg1` and the point of `seg2` realizing the
/// smallest distance between the two segments.
#[inline]
pub fn closest_points_segment_segment_locals(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    // Inspired by real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let _eps = DEFAULT_EPSILON;
    if a <= _eps && e <= _eps {
        s = 0.0;
        t = 0.0;
    } else if a <= _eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= _eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > _eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (seg1.a + d1 * s, seg2.a + d2 * t)
}

use crate::math::{Point, Real, Vector};

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward `normal`, this computes the
/// intersection between the half-space and the polygon. A point `pt` is
/// considered inside of the half-space if `normal.dot(&(pt - center)) <= 0.0`,
/// so points lying exactly on the boundary are retained.
pub fn clip_halfspace_polygon(
    center: &Point<Real>,
    normal: &Vector<Real>,
    polygon: &[Point<Real>],
    result: &mut Vec<Point<Real>>,
) {
    result.clear();

    if polygon.is_empty() {
        return;
    }

    let mut last_pt = polygon[polygon.len() - 1];
    let mut last_dist = (last_pt - center).dot(normal);

    for pt in polygon {
        let dist = (pt - center).dot(normal);

        if (dist <= 0.0) != (last_dist <= 0.0) {
            // We crossed the plane, so we need to cut the edge.
            let t = last_dist / (last_dist - dist);

            if t > 0.0 && t < 1.0 {
                result.push(last_pt + (pt - last_pt) * t);
            }
        }

        if dist <= 0.0 {
            result.push(*pt);
        }

        last_pt = *pt;
        last_dist = dist;
    }
}

/// Cuts a polygon with the intersection of the given half-spaces.
///
/// Each plane is given as a point and an outward normal; the kept region is
/// the intersection of the `normal.dot(&(pt - point)) <= 0.0` sides. This is
/// the Sutherland–Hodgman clip, applied once per plane.
pub fn clip_polygon_with_planes(
    polygon: &[Point<Real>],
    planes: &[(Point<Real>, Vector<Real>)],
) -> Vec<Point<Real>> {
    let mut clipped = polygon.to_vec();
    let mut buffer = Vec::with_capacity(polygon.len());

    for (center, normal) in planes {
        clip_halfspace_polygon(center, normal, &clipped, &mut buffer);
        std::mem::swap(&mut clipped, &mut buffer);

        if clipped.is_empty() {
            break;
        }
    }

    clipped
}

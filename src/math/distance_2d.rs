use super::{to_f64, Point};

/// Returns the Euclidean distance between two grid points.
#[must_use]
pub fn point_distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(&to_f64(a), &to_f64(b))
}

/// Returns `true` if `p` lies on the closed axis-aligned segment `a`-`b`.
///
/// Segments that are neither vertical nor horizontal never contain anything.
#[must_use]
pub fn on_axis_segment(p: &Point, a: &Point, b: &Point) -> bool {
    if a.x == b.x {
        p.x == a.x && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
    } else if a.y == b.y {
        p.y == a.y && p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x)
    } else {
        false
    }
}

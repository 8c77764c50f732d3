use super::{to_f64, Point, Point2, TOLERANCE};

/// Parametric intersection of the infinite lines through `a0`-`a1` and `b0`-`b1`.
///
/// Returns `(t, u)` such that the crossing sits at `a0 + t * (a1 - a0)` and at
/// `b0 + u * (b1 - b0)`, or `None` if the lines are parallel or coincident.
#[must_use]
pub fn line_line_intersect_2d(a0: &Point, a1: &Point, b0: &Point, b1: &Point) -> Option<(f64, f64)> {
    let (a0, a1, b0, b1) = (to_f64(a0), to_f64(a1), to_f64(b0), to_f64(b1));
    let da = a1 - a0;
    let db = b1 - b0;

    let denom = db.y * da.x - db.x * da.y;
    if denom.abs() < TOLERANCE {
        return None;
    }

    let dy = a0.y - b0.y;
    let dx = a0.x - b0.x;
    let t = (db.x * dy - db.y * dx) / denom;
    let u = (da.x * dy - da.y * dx) / denom;
    Some((t, u))
}

/// Strict segment-segment crossing in 2D.
///
/// Returns the crossing point only when it lies strictly inside both segments
/// (`0 < t < 1` and `0 < u < 1`). Touching at an endpoint does not count.
#[must_use]
pub fn segment_segment_crossing_2d(a0: &Point, a1: &Point, b0: &Point, b1: &Point) -> Option<Point2> {
    let (t, u) = line_line_intersect_2d(a0, a1, b0, b1)?;
    if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
        let origin = to_f64(a0);
        Some(origin + (to_f64(a1) - origin) * t)
    } else {
        None
    }
}

use std::collections::HashSet;

use tracing::debug;

use crate::geometry::{PointSet, Rectangle};
use crate::math::Point;

/// Best-effort recovery of the smallest rectangles whose corners are all in `points`.
///
/// Points are visited by ascending x, then y. Each one is tried as the top-left
/// corner `P1` of a face:
///
/// ```text
///     P1----------P3
///     |           |
///     P4----------P2
/// ```
///
/// `P3` is the nearest point to the right on the same row that has another
/// point somewhere below it in its column. `P2` is the nearest point below `P3`
/// whose row also holds a point `P4` in `P1`'s column.
///
/// This is a nearest-neighbour chase, not a face enumeration: faces can be
/// missed and emitted rectangles can overlap in irregular arrangements.
#[must_use]
pub fn heuristic_faces(points: &PointSet) -> Vec<Rectangle> {
    let sorted = points.sorted();
    let mut used: HashSet<Point> = HashSet::new();
    let mut faces = Vec::new();

    for p1 in &sorted {
        if used.contains(p1) {
            continue;
        }
        let Some(p3) = top_right_anchor(p1, &sorted) else {
            debug!(%p1, "no top-right anchor");
            continue;
        };
        let Some(p2) = bottom_right_corner(p1, &p3, &sorted, points) else {
            debug!(%p1, %p3, "no bottom-right corner");
            continue;
        };
        faces.push(Rectangle::new(*p1, p2));
        used.insert(*p1);
    }

    faces
}

/// Returns `true` if some other point shares `p`'s column further down.
fn has_point_below(p: &Point, sorted: &[Point]) -> bool {
    sorted.iter().any(|q| q.x == p.x && q.y > p.y)
}

fn top_right_anchor(p1: &Point, sorted: &[Point]) -> Option<Point> {
    sorted
        .iter()
        .filter(|q| q.y == p1.y && q.x > p1.x)
        .filter(|q| has_point_below(q, sorted))
        .min_by_key(|q| q.x - p1.x)
        .copied()
}

fn bottom_right_corner(p1: &Point, p3: &Point, sorted: &[Point], points: &PointSet) -> Option<Point> {
    sorted
        .iter()
        .filter(|q| q.x == p3.x && q.y > p3.y)
        .filter(|q| points.contains(&Point::new(p1.x, q.y)))
        .min_by_key(|q| q.y - p3.y)
        .copied()
}

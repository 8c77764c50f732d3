use std::collections::HashSet;

use tracing::debug;

use crate::error::{FaceError, Result};
use crate::geometry::{Orientation, PointSet, Rectangle, Segment};
use crate::math::Point;

use super::half_edge::{doubled_signed_area, HalfEdgeStore};

/// Exact recovery of every bounded rectangular face of an axis-aligned arrangement.
///
/// Segments are split at every endpoint and crossing that lies on them, the
/// resulting edges are loaded into a [`HalfEdgeStore`], and each face cycle is
/// walked once. Cycles with positive area whose extent fills their bounding box
/// become faces; the outer face and any non-rectangular face are skipped.
///
/// Faces are returned sorted by top-left corner, x first.
///
/// # Errors
///
/// Returns `FaceError::NotAxisAligned` if any segment is diagonal.
pub fn planar_faces(segments: &[Segment]) -> Result<Vec<Rectangle>> {
    if let Some(bad) = segments.iter().find(|s| s.orientation().is_none()) {
        return Err(FaceError::NotAxisAligned(*bad).into());
    }

    let vertices = split_points(segments);
    let mut store = HalfEdgeStore::new();
    let mut seen: HashSet<(Point, Point)> = HashSet::new();

    for segment in segments {
        let mut on_segment: Vec<Point> = vertices
            .iter()
            .filter(|p| segment.contains(p))
            .copied()
            .collect();
        on_segment.sort_unstable_by_key(|p| (p.x, p.y));

        for pair in on_segment.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a != b && seen.insert((a, b)) {
                store.add_edge(a, b);
            }
        }
    }

    store.link();

    let mut faces = Vec::new();
    for cycle in store.cycles() {
        if doubled_signed_area(&cycle) <= 0 {
            continue;
        }
        let Some(face) = bounding_rectangle(&cycle) else {
            continue;
        };
        if doubled_signed_area(&cycle) == 2 * face.area() {
            faces.push(face);
        } else {
            debug!(corners = cycle.len(), "skipping non-rectangular face");
        }
    }

    faces.sort_unstable_by_key(|r| (r.p1.x, r.p1.y));
    Ok(faces)
}

/// All segment endpoints plus every point where a vertical meets a horizontal.
fn split_points(segments: &[Segment]) -> PointSet {
    let mut points: PointSet = segments.iter().flat_map(|s| [s.p1, s.p2]).collect();

    let verticals = segments
        .iter()
        .filter(|s| s.orientation() == Some(Orientation::Vertical));
    for v in verticals {
        for h in segments
            .iter()
            .filter(|s| s.orientation() == Some(Orientation::Horizontal))
        {
            let meet = Point::new(v.p1.x, h.p1.y);
            if v.contains(&meet) && h.contains(&meet) {
                points.insert(meet);
            }
        }
    }

    points
}

fn bounding_rectangle(cycle: &[Point]) -> Option<Rectangle> {
    let min_x = cycle.iter().map(|p| p.x).min()?;
    let min_y = cycle.iter().map(|p| p.y).min()?;
    let max_x = cycle.iter().map(|p| p.x).max()?;
    let max_y = cycle.iter().map(|p| p.y).max()?;
    Some(Rectangle::new(Point::new(min_x, min_y), Point::new(max_x, max_y)))
}

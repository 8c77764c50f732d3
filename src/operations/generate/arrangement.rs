use crate::geometry::{PointSet, Segment};
use crate::math::distance_2d::point_distance;
use crate::math::Point;

use super::clip::{clip_through, Endpoint};

/// One accepted partition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The full-span candidate as drawn, before clipping.
    pub drawn: Segment,
    /// The segment actually appended after clipping.
    pub placed: Segment,
    /// Candidates drawn before this one was accepted, itself included.
    pub attempts: usize,
}

/// The segments drawn on a canvas and the points where they end.
///
/// Segments are kept in insertion order; the four border segments come first.
/// The point set is seeded with the top-left, top-right and bottom-right
/// corners only. The bottom-left corner is reachable through the left and
/// bottom border segments but is never seeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    width: i64,
    height: i64,
    segments: Vec<Segment>,
    points: PointSet,
    placements: Vec<Placement>,
}

impl Arrangement {
    /// Number of border segments at the head of [`Self::segments`].
    pub const BORDER_LEN: usize = 4;

    /// Creates the border of a `width` by `height` canvas.
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        let upper_left = Point::new(0, 0);
        let upper_right = Point::new(width, 0);
        let lower_left = Point::new(0, height);
        let lower_right = Point::new(width, height);

        let segments = vec![
            Segment::new(upper_left, upper_right),
            Segment::new(upper_left, lower_left),
            Segment::new(lower_left, lower_right),
            Segment::new(upper_right, lower_right),
        ];
        let points = [upper_left, upper_right, lower_right].into_iter().collect();

        Self {
            width,
            height,
            segments,
            points,
            placements: Vec::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        self.height
    }

    /// All segments in insertion order, border first.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The four border segments: top, left, bottom, right.
    #[must_use]
    pub fn border(&self) -> &[Segment] {
        &self.segments[..Self::BORDER_LEN]
    }

    /// The partition segments added after the border.
    #[must_use]
    pub fn partitions(&self) -> &[Segment] {
        &self.segments[Self::BORDER_LEN..]
    }

    /// Endpoints of every placed segment plus the three seeded corners.
    #[must_use]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Log of accepted partitions, in order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns `true` if neither endpoint of `candidate` is closer than
    /// `min_spacing` to any existing point.
    #[must_use]
    pub fn admits(&self, candidate: &Segment, min_spacing: f64) -> bool {
        self.points.iter().all(|p| {
            point_distance(p, &candidate.p1) >= min_spacing
                && point_distance(p, &candidate.p2) >= min_spacing
        })
    }

    /// Clips `candidate` against every existing segment and appends the result.
    ///
    /// `choose` picks which endpoint moves at each crossing. `attempts` is
    /// recorded in the placement log as is. Spacing is not checked here; see
    /// [`Self::admits`].
    pub fn insert(
        &mut self,
        candidate: Segment,
        attempts: usize,
        choose: impl FnMut() -> Endpoint,
    ) -> Placement {
        let placed = clip_through(candidate, &self.segments, choose);
        self.segments.push(placed);
        self.points.insert(placed.p1);
        self.points.insert(placed.p2);

        let placement = Placement {
            drawn: candidate,
            placed,
            attempts,
        };
        self.placements.push(placement);
        placement
    }
}

use std::fmt;

use crate::math::distance_2d::on_axis_segment;
use crate::math::Point;

/// Direction of an axis-aligned segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Constant y.
    Horizontal,
    /// Constant x.
    Vertical,
}

/// A finite line piece between two grid points.
///
/// Segments are values: clipping produces a new segment rather than
/// rewriting one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Creates a full-height vertical segment at `x`, from `y = 0` down to `y = height`.
    #[must_use]
    pub fn vertical(x: i64, height: i64) -> Self {
        Self::new(Point::new(x, 0), Point::new(x, height))
    }

    /// Creates a full-width horizontal segment at `y`, from `x = 0` across to `x = width`.
    #[must_use]
    pub fn horizontal(width: i64, y: i64) -> Self {
        Self::new(Point::new(0, y), Point::new(width, y))
    }

    /// Returns a copy with the first endpoint replaced.
    #[must_use]
    pub fn with_p1(self, p1: Point) -> Self {
        Self { p1, ..self }
    }

    /// Returns a copy with the second endpoint replaced.
    #[must_use]
    pub fn with_p2(self, p2: Point) -> Self {
        Self { p2, ..self }
    }

    /// Returns the segment's orientation, or `None` if it is diagonal.
    ///
    /// A zero-length segment reports `Vertical`.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        if self.p1.x == self.p2.x {
            Some(Orientation::Vertical)
        } else if self.p1.y == self.p2.y {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    /// Returns `true` if `p` lies on this segment, endpoints included.
    ///
    /// Only meaningful for axis-aligned segments.
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        on_axis_segment(p, &self.p1, &self.p2)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

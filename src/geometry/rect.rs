use crate::math::Point;

/// An axis-aligned rectangular face, stored as its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Top-left corner (minimum x and y).
    pub p1: Point,
    /// Bottom-right corner (maximum x and y).
    pub p2: Point,
}

impl Rectangle {
    /// Creates a rectangle from its top-left and bottom-right corners.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Returns the top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Point {
        Point::new(self.p2.x, self.p1.y)
    }

    /// Returns the bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.p1.x, self.p2.y)
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        (self.p2.x - self.p1.x).abs()
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        (self.p2.y - self.p1.y).abs()
    }

    /// Area in square pixels, widened so any pair of `i64` sides fits.
    #[must_use]
    pub fn area(&self) -> i128 {
        i128::from(self.width()) * i128::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_area() {
        let r = Rectangle::new(Point::new(5, 10), Point::new(40, 30));
        assert_eq!(r.top_right(), Point::new(40, 10));
        assert_eq!(r.bottom_left(), Point::new(5, 30));
        assert_eq!(r.area(), 35 * 20);
    }
}

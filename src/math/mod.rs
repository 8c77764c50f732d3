pub mod distance_2d;
pub mod intersect_2d;

/// Integer canvas point. Generated arrangements live entirely on the pixel grid.
pub type Point = nalgebra::Point2<i64>;

/// 2D point type for intermediate floating-point math.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Lifts a grid point into floating-point space.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_f64(p: &Point) -> Point2 {
    Point2::new(p.x as f64, p.y as f64)
}

/// Rounds a floating-point position to the nearest grid point.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_grid(p: &Point2) -> Point {
    Point::new(p.x.round() as i64, p.y.round() as i64)
}

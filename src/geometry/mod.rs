pub mod point_set;
pub mod rect;
pub mod segment;

pub use point_set::PointSet;
pub use rect::Rectangle;
pub use segment::{Orientation, Segment};

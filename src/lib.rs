pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;
pub mod render;

pub use error::{MondrianError, Result};
pub use params::MondrianParams;

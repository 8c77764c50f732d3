pub mod colorize;
pub mod compose;
pub mod faces;
pub mod generate;

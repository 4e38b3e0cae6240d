pub mod markers;
pub mod parsing;
pub mod stubgen;

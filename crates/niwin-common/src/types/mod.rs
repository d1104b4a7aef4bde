mod geometry;
mod pointer;

pub use geometry::*;
pub use pointer::*;

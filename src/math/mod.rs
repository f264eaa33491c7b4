pub mod arc_2d;
pub mod distance_2d;
pub mod polygon_2d;
pub mod segment;

pub use arc_2d::{arc, project_coordinates};
pub use segment::Segment;

/// 2D point type of the working frame.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

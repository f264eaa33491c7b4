mod point_buffer;

pub use point_buffer::{PointBuffer, DEFAULT_QUADRANT_SEGMENTS};

pub mod config;
pub mod error;
pub mod feature;
pub mod frame;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod sidc;
pub mod style;
pub mod symbols;

pub use config::RenderConfig;
pub use error::{Result, TacgeoError};
pub use feature::Feature;
pub use render::Renderer;
pub use style::{Mode, Style};

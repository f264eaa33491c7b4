mod difference;
mod parts;
mod trace;
mod union;

pub use difference::Difference;
pub use union::Union;

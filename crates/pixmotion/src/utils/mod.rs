//! Utility types and helper functions

mod color;
mod errors;
mod math;
mod regions;

pub use color::parse_hex_color;
pub use errors::RenderError;
pub use math::{cubic_bezier, solve_bezier_parameter};
pub use regions::Bounds;

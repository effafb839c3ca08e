//! Leaf widgets

mod color_box;

pub use color_box::ColorBox;

//! Frame-indexed position animation for pixel displays
//!
//! `pixmotion` paints widget trees one frame at a time. Its core widget,
//! [`AnimatedPositioned`], slides a child between two integer coordinates
//! along an easing [`Curve`], with optional delay and hold phases, and
//! composites the child onto a fresh [`Canvas`] each frame.
//!
//! Every widget is a pure function of the frame index, so frames can be
//! rendered in any order and in parallel by [`FrameRenderer`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod animation;
pub mod canvas;
#[cfg(feature = "serde")]
pub mod config;
pub mod curve;
pub mod renderer;
pub mod utils;
pub mod widget;
pub mod widgets;

pub use animation::{AnimatedPositioned, AnimatedPositionedBuilder, AnimationPhase, MotionTiming};
pub use canvas::Canvas;
pub use curve::{CubicBezierCurve, Curve, CurveRegistry, LinearCurve, DEFAULT_CURVE};
pub use renderer::{Frame, FrameRenderer};
pub use utils::{Bounds, RenderError};
pub use widget::Widget;
pub use widgets::ColorBox;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Frame-indexed animation widgets
//!
//! Every animation here is a pure function of the frame index: no state is
//! carried between frames, so frames can be rendered out of order, skipped,
//! replayed, or painted concurrently.

mod positioned;
mod timing;

pub use positioned::{AnimatedPositioned, AnimatedPositionedBuilder};
pub use timing::{AnimationPhase, MotionTiming, SETTLED_PROGRESS};

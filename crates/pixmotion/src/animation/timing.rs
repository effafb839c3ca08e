//! Delay, duration and hold phases of a frame-indexed animation

use crate::curve::Curve;

/// Progress reported once motion has finished
///
/// Kept just under 1.0 so curves are never sampled at their terminal edge.
/// With ceiling rounding this still lands on the end coordinate for any
/// distance below 1e10 pixels.
pub const SETTLED_PROGRESS: f64 = 0.9999999999;

/// Phase of an animation at a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    /// Before motion, pinned to the start
    Pending,
    /// Moving from start to end
    Moving,
    /// After motion, pinned to the end (covers the hold phase and beyond)
    Settled,
}

/// Frame timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionTiming {
    /// Frames spent motionless at the start
    pub delay: u32,
    /// Frames spent moving
    pub duration: u32,
    /// Frames spent motionless at the end
    pub hold: u32,
}

impl MotionTiming {
    /// Create new motion timing
    pub fn new(delay: u32, duration: u32, hold: u32) -> Self {
        Self {
            delay,
            duration,
            hold,
        }
    }

    /// First frame at which the animation is settled
    fn settle_frame(&self) -> u64 {
        u64::from(self.delay) + u64::from(self.duration)
    }

    /// Classify `frame_idx`
    ///
    /// With a zero duration there is no `Moving` frame: the animation goes
    /// straight from `Pending` to `Settled` at `frame_idx == delay`.
    pub fn phase(&self, frame_idx: u32) -> AnimationPhase {
        if frame_idx < self.delay {
            AnimationPhase::Pending
        } else if u64::from(frame_idx) >= self.settle_frame() {
            AnimationPhase::Settled
        } else {
            AnimationPhase::Moving
        }
    }

    /// Eased progress at `frame_idx`
    ///
    /// Curve output is not clamped.
    pub fn progress(&self, frame_idx: u32, curve: &dyn Curve) -> f64 {
        match self.phase(frame_idx) {
            AnimationPhase::Pending => 0.0,
            AnimationPhase::Settled => SETTLED_PROGRESS,
            AnimationPhase::Moving => {
                // duration > 0 here, Moving is unreachable otherwise
                let elapsed = f64::from(frame_idx - self.delay);
                curve.transform(elapsed / f64::from(self.duration))
            }
        }
    }

    /// Total frames covered by delay, motion and hold
    pub fn frame_count(&self) -> u32 {
        self.duration
            .saturating_add(self.delay)
            .saturating_add(self.hold)
    }
}

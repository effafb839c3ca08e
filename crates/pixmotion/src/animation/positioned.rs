//! Widget that slides its child between two pixel coordinates

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use tiny_skia::Pixmap;

use super::timing::{AnimationPhase, MotionTiming};
use crate::canvas::Canvas;
use crate::curve::Curve;
use crate::utils::{Bounds, RenderError};
use crate::widget::Widget;

/// Animate a child widget from a start to an end coordinate
///
/// The child sits at the start coordinate for `delay` frames, moves along
/// the eased path for `duration` frames, then stays at the end coordinate
/// for `hold` frames and every frame after.
#[derive(Clone)]
pub struct AnimatedPositioned {
    child: Arc<dyn Widget>,
    x_start: i32,
    x_end: i32,
    y_start: i32,
    y_end: i32,
    timing: MotionTiming,
    curve: Arc<dyn Curve>,
}

impl AnimatedPositioned {
    /// Start building an animation for `child`
    pub fn builder(child: Arc<dyn Widget>) -> AnimatedPositionedBuilder {
        AnimatedPositionedBuilder::new().child(child)
    }

    /// Horizontal start and end coordinates
    pub fn x_range(&self) -> (i32, i32) {
        (self.x_start, self.x_end)
    }

    /// Vertical start and end coordinates
    pub fn y_range(&self) -> (i32, i32) {
        (self.y_start, self.y_end)
    }

    /// Delay, duration and hold
    pub fn timing(&self) -> MotionTiming {
        self.timing
    }

    /// Phase of the animation at `frame_idx`
    pub fn phase(&self, frame_idx: u32) -> AnimationPhase {
        self.timing.phase(frame_idx)
    }

    /// Top-left coordinate of the child at `frame_idx`
    pub fn compute_position(&self, frame_idx: u32) -> (i32, i32) {
        let position = self.timing.progress(frame_idx, self.curve.as_ref());
        (
            displace(self.x_start, self.x_end, position),
            displace(self.y_start, self.y_end, position),
        )
    }
}

/// Move `position` of the way from `start` towards `end`, rounding away from
/// `start`
///
/// Rounding up means any nonzero progress moves at least one pixel.
fn displace(start: i32, end: i32, position: f64) -> i32 {
    let direction: f64 = if start > end { -1.0 } else { 1.0 };
    let distance = (i64::from(end) - i64::from(start)).unsigned_abs() as f64;
    let step = (distance * position).ceil();

    // Float to int casts saturate, so overshooting curves cannot wrap
    direction.mul_add(step, f64::from(start)) as i32
}

impl Widget for AnimatedPositioned {
    fn paint(&self, bounds: Bounds, frame_idx: u32) -> Result<Pixmap, RenderError> {
        let image = self.child.paint(bounds, frame_idx)?;
        let (x, y) = self.compute_position(frame_idx);
        trace!(
            "animated_positioned frame {frame_idx}: {:?} at ({x}, {y})",
            self.phase(frame_idx)
        );

        let mut canvas = Canvas::for_bounds(bounds)?;
        canvas.draw_image_at(image.as_ref(), x, y);
        Ok(canvas.into_image())
    }

    fn frame_count(&self) -> u32 {
        self.timing.frame_count()
    }
}

impl fmt::Debug for AnimatedPositioned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedPositioned")
            .field("x", &(self.x_start, self.x_end))
            .field("y", &(self.y_start, self.y_end))
            .field("timing", &self.timing)
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AnimatedPositioned`]
///
/// `child`, `duration` and `curve` are required. Coordinates, `delay` and
/// `hold` default to 0.
#[derive(Default)]
pub struct AnimatedPositionedBuilder {
    child: Option<Arc<dyn Widget>>,
    x_start: i32,
    x_end: i32,
    y_start: i32,
    y_end: i32,
    duration: Option<u32>,
    curve: Option<Arc<dyn Curve>>,
    delay: u32,
    hold: u32,
}

impl AnimatedPositionedBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the widget to animate
    pub fn child(mut self, child: Arc<dyn Widget>) -> Self {
        self.child = Some(child);
        self
    }

    /// Set horizontal start and end coordinates
    pub fn x(mut self, start: i32, end: i32) -> Self {
        self.x_start = start;
        self.x_end = end;
        self
    }

    /// Set vertical start and end coordinates
    pub fn y(mut self, start: i32, end: i32) -> Self {
        self.y_start = start;
        self.y_end = end;
        self
    }

    /// Set the number of frames spent moving
    pub fn duration(mut self, frames: u32) -> Self {
        self.duration = Some(frames);
        self
    }

    /// Set the easing curve
    pub fn curve(mut self, curve: Arc<dyn Curve>) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Set frames to wait before moving
    pub fn delay(mut self, frames: u32) -> Self {
        self.delay = frames;
        self
    }

    /// Set frames to stay at the end after moving
    pub fn hold(mut self, frames: u32) -> Self {
        self.hold = frames;
        self
    }

    /// Build the animation
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidConfig`] naming the first missing
    /// required field.
    pub fn build(self) -> Result<AnimatedPositioned, RenderError> {
        let child = self
            .child
            .ok_or_else(|| RenderError::InvalidConfig("child is required".to_string()))?;
        let duration = self
            .duration
            .ok_or_else(|| RenderError::InvalidConfig("duration is required".to_string()))?;
        let curve = self
            .curve
            .ok_or_else(|| RenderError::InvalidConfig("curve is required".to_string()))?;

        let timing = MotionTiming::new(self.delay, duration, self.hold);
        debug!(
            "animated_positioned ({}, {}) -> ({}, {}) over {timing:?} with {curve:?}",
            self.x_start, self.y_start, self.x_end, self.y_end
        );

        Ok(AnimatedPositioned {
            child,
            x_start: self.x_start,
            x_end: self.x_end,
            y_start: self.y_start,
            y_end: self.y_end,
            timing,
            curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{LinearCurve, EASE_IN_OUT};
    use crate::widgets::ColorBox;

    fn dot() -> Arc<dyn Widget> {
        Arc::new(ColorBox::new(1, 1, [255, 255, 255, 255]))
    }

    fn linear(x: (i32, i32), y: (i32, i32), duration: u32) -> AnimatedPositionedBuilder {
        AnimatedPositioned::builder(dot())
            .x(x.0, x.1)
            .y(y.0, y.1)
            .duration(duration)
            .curve(Arc::new(LinearCurve))
    }

    #[test]
    fn test_linear_horizontal_motion() {
        let anim = linear((0, 10), (0, 0), 10).build().unwrap();

        assert_eq!(anim.compute_position(0), (0, 0));
        assert_eq!(anim.compute_position(5), (5, 0));
        assert_eq!(anim.compute_position(9), (9, 0));
        assert_eq!(anim.compute_position(10), (10, 0));
        assert_eq!(anim.compute_position(500), (10, 0));
    }

    #[test]
    fn test_reverse_direction() {
        let anim = linear((10, 0), (0, 0), 10).build().unwrap();

        assert_eq!(anim.compute_position(1), (9, 0));
        assert_eq!(anim.compute_position(5), (5, 0));
        assert_eq!(anim.compute_position(10), (0, 0));
    }

    #[test]
    fn test_both_axes_with_negative_coordinates() {
        let anim = linear((-4, 4), (6, -6), 4).build().unwrap();

        assert_eq!(anim.compute_position(0), (-4, 6));
        assert_eq!(anim.compute_position(2), (0, 0));
        assert_eq!(anim.compute_position(4), (4, -6));
    }

    #[test]
    fn ceiling_moves_on_first_frame() {
        // 3px over 10 frames: 0.3px rounds up to a full pixel
        let anim = linear((0, 3), (0, 0), 10).build().unwrap();
        assert_eq!(anim.compute_position(1).0, 1);
        assert_eq!(anim.compute_position(4).0, 2);
    }

    #[test]
    fn delay_and_hold_pin_endpoints() {
        let anim = linear((2, 12), (1, 1), 5).delay(3).hold(4).build().unwrap();

        for frame in 0..3 {
            assert_eq!(anim.compute_position(frame), (2, 1));
        }
        assert_eq!(anim.compute_position(3), (2, 1));
        assert_eq!(anim.compute_position(4), (4, 1));
        for frame in 8..12 {
            assert_eq!(anim.compute_position(frame), (12, 1));
        }
        assert_eq!(anim.frame_count(), 12);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let anim = linear((0, 7), (0, 3), 0).delay(3).build().unwrap();

        assert_eq!(anim.compute_position(2), (0, 0));
        assert_eq!(anim.compute_position(3), (7, 3));
        assert_eq!(anim.phase(3), AnimationPhase::Settled);
        assert_eq!(anim.frame_count(), 3);
    }

    #[test]
    fn stationary_animation_never_moves() {
        let anim = linear((5, 5), (5, 5), 8).build().unwrap();
        for frame in 0..12 {
            assert_eq!(anim.compute_position(frame), (5, 5));
        }
    }

    #[test]
    fn eased_motion_stays_within_range() {
        let anim = AnimatedPositioned::builder(dot())
            .x(0, 100)
            .duration(20)
            .curve(Arc::new(EASE_IN_OUT))
            .build()
            .unwrap();

        let mut previous = 0;
        for frame in 0..=20 {
            let (x, _) = anim.compute_position(frame);
            assert!((0..=100).contains(&x));
            assert!(x >= previous);
            previous = x;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let anim = linear((i32::MIN, i32::MAX), (i32::MAX, i32::MIN), 2)
            .build()
            .unwrap();
        assert_eq!(anim.compute_position(0), (i32::MIN, i32::MAX));
        assert_eq!(anim.compute_position(2), (i32::MAX, i32::MIN));
    }

    #[test]
    fn builder_requires_fields() {
        let missing_duration = AnimatedPositioned::builder(dot())
            .curve(Arc::new(LinearCurve))
            .build();
        assert!(matches!(
            missing_duration,
            Err(RenderError::InvalidConfig(msg)) if msg.contains("duration")
        ));

        let missing_curve = AnimatedPositioned::builder(dot()).duration(3).build();
        assert!(matches!(
            missing_curve,
            Err(RenderError::InvalidConfig(msg)) if msg.contains("curve")
        ));

        let missing_child = AnimatedPositionedBuilder::new()
            .duration(3)
            .curve(Arc::new(LinearCurve))
            .build();
        assert!(matches!(
            missing_child,
            Err(RenderError::InvalidConfig(msg)) if msg.contains("child")
        ));
    }

    #[test]
    fn paint_places_child_at_computed_offset() {
        let anim = linear((0, 6), (3, 3), 6).build().unwrap();
        let image = anim.paint(Bounds::from_size(8, 8), 3).unwrap();

        assert_eq!((image.width(), image.height()), (8, 8));
        let lit: Vec<(u32, u32)> = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| image.pixel(x, y).unwrap().alpha() > 0)
            .collect();
        assert_eq!(lit, vec![(3, 3)]);
    }

    #[test]
    fn paint_rejects_empty_bounds() {
        let anim = linear((0, 1), (0, 0), 1).build().unwrap();
        assert!(matches!(
            anim.paint(Bounds::from_size(4, 0), 0),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }
}

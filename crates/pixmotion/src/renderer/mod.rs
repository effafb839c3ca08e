//! Frame driver that paints a widget tree once per frame index

use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::utils::{Bounds, RenderError};
use crate::widget::Widget;

mod frame;

pub use frame::Frame;

/// Default cap on frames rendered for one widget tree
pub const DEFAULT_MAX_FRAMES: u32 = 2000;

/// Renders every frame of a widget tree at a fixed canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRenderer {
    width: u32,
    height: u32,
    max_frames: u32,
}

impl FrameRenderer {
    /// Create a renderer for a `width` x `height` canvas
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            max_frames: DEFAULT_MAX_FRAMES,
        })
    }

    /// Cap the number of rendered frames (at least one frame is always rendered)
    pub fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = max_frames.max(1);
        self
    }

    /// Canvas bounds handed to the root widget
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width, self.height)
    }

    /// Number of frames that will be rendered for `root`
    ///
    /// Static trees report zero or one frame and still render once.
    pub fn frame_total(&self, root: &dyn Widget) -> u32 {
        let requested = root.frame_count().max(1);
        if requested > self.max_frames {
            warn!(
                "widget tree wants {requested} frames, truncating to {}",
                self.max_frames
            );
        }
        requested.min(self.max_frames)
    }

    /// Paint a single frame
    pub fn render_frame(&self, root: &dyn Widget, frame_idx: u32) -> Result<Frame, RenderError> {
        let pixmap = root.paint(self.bounds(), frame_idx)?;
        Ok(Frame::new(frame_idx, pixmap))
    }

    /// Paint every frame, ordered by frame index
    pub fn render(&self, root: &dyn Widget) -> Result<Vec<Frame>, RenderError> {
        let total = self.frame_total(root);
        debug!(
            "rendering {total} frames at {}x{}",
            self.width, self.height
        );

        #[cfg(feature = "parallel")]
        let frames: Result<Vec<Frame>, RenderError> = (0..total)
            .into_par_iter()
            .map(|frame_idx| self.render_frame(root, frame_idx))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let frames: Result<Vec<Frame>, RenderError> = (0..total)
            .map(|frame_idx| self.render_frame(root, frame_idx))
            .collect();

        frames
    }
}

//! Paintable, frame-counted visual elements

use std::sync::Arc;

use tiny_skia::Pixmap;

use crate::utils::{Bounds, RenderError};

/// A visual element rendered one frame at a time
///
/// Implementations must be pure in `frame_idx`: painting the same frame twice
/// yields the same image, and frames may be painted in any order or
/// concurrently. Animated wrappers implement this trait too, so widgets nest.
pub trait Widget: Send + Sync {
    /// Render the element for `frame_idx` into an image sized to `bounds`
    fn paint(&self, bounds: Bounds, frame_idx: u32) -> Result<Pixmap, RenderError>;

    /// Number of frames this element meaningfully occupies
    fn frame_count(&self) -> u32;
}

impl<W: Widget + ?Sized> Widget for Arc<W> {
    fn paint(&self, bounds: Bounds, frame_idx: u32) -> Result<Pixmap, RenderError> {
        (**self).paint(bounds, frame_idx)
    }

    fn frame_count(&self) -> u32 {
        (**self).frame_count()
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn paint(&self, bounds: Bounds, frame_idx: u32) -> Result<Pixmap, RenderError> {
        (**self).paint(bounds, frame_idx)
    }

    fn frame_count(&self) -> u32 {
        (**self).frame_count()
    }
}

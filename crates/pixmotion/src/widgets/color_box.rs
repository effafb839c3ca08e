//! Solid color rectangle

use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use crate::canvas::Canvas;
use crate::utils::{Bounds, RenderError};
use crate::widget::Widget;

/// Rectangle of a single color drawn at the top-left of its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBox {
    width: u32,
    height: u32,
    color: [u8; 4],
}

impl ColorBox {
    /// Create a box; a zero width or height fills the bounds on that axis
    pub fn new(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Box size once placed in `bounds`
    pub fn size_in(&self, bounds: Bounds) -> (u32, u32) {
        let width = if self.width == 0 {
            bounds.width
        } else {
            self.width
        };
        let height = if self.height == 0 {
            bounds.height
        } else {
            self.height
        };
        (width, height)
    }

    /// RGBA color
    pub fn color(&self) -> [u8; 4] {
        self.color
    }
}

impl Widget for ColorBox {
    fn paint(&self, bounds: Bounds, _frame_idx: u32) -> Result<Pixmap, RenderError> {
        let mut pixmap = Canvas::for_bounds(bounds)?.into_image();
        let (width, height) = self.size_in(bounds);

        // An unrepresentable rect covers nothing, leave the canvas blank
        if let Some(rect) = Rect::from_xywh(0.0, 0.0, width as f32, height as f32) {
            let [r, g, b, a] = self.color;
            let mut paint = Paint::default();
            paint.set_color(Color::from_rgba8(r, g, b, a));
            paint.anti_alias = false;
            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }

        Ok(pixmap)
    }

    fn frame_count(&self) -> u32 {
        1
    }
}

//! Destination surface that widget images are composited onto

use tiny_skia::{BlendMode, IntRect, Pixmap, PixmapPaint, PixmapRef, Transform};

use crate::utils::{Bounds, RenderError};

/// Blank RGBA surface with integer-offset blitting
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    /// Allocate a canvas covering `bounds`
    pub fn for_bounds(bounds: Bounds) -> Result<Self, RenderError> {
        Self::new(bounds.width, bounds.height)
    }

    /// Canvas width
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Overwrite canvas pixels with `image`, its top-left corner at (x, y)
    ///
    /// Parts of the image outside the canvas on either axis are clipped.
    pub fn draw_image_at(&mut self, image: PixmapRef<'_>, x: i32, y: i32) {
        let paint = PixmapPaint {
            blend_mode: BlendMode::Source,
            ..PixmapPaint::default()
        };

        let left = x.min(0).unsigned_abs();
        let top = y.min(0).unsigned_abs();
        if left == 0 && top == 0 {
            self.pixmap
                .draw_pixmap(x, y, image, &paint, Transform::identity(), None);
            return;
        }

        // draw_pixmap bleeds one pixel past a negative edge, so crop first
        if left >= image.width() || top >= image.height() {
            return;
        }
        let visible = IntRect::from_xywh(
            left as i32,
            top as i32,
            image.width() - left,
            image.height() - top,
        )
        .and_then(|rect| image.clone_rect(rect));
        if let Some(visible) = visible {
            self.pixmap.draw_pixmap(
                x.max(0),
                y.max(0),
                visible.as_ref(),
                &paint,
                Transform::identity(),
                None,
            );
        }
    }

    /// Finish compositing and hand the image to the caller
    pub fn into_image(self) -> Pixmap {
        self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    fn solid(width: u32, height: u32) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(Color::from_rgba8(255, 0, 0, 255));
        pixmap
    }

    fn is_set(pixmap: &Pixmap, x: u32, y: u32) -> bool {
        pixmap.pixel(x, y).unwrap().alpha() == 255
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 8),
            Err(RenderError::InvalidDimensions { width: 0, height: 8 })
        ));
    }

    #[test]
    fn blit_lands_at_offset() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.draw_image_at(solid(2, 2).as_ref(), 3, 4);
        let image = canvas.into_image();

        assert!(is_set(&image, 3, 4));
        assert!(is_set(&image, 4, 5));
        assert!(!is_set(&image, 2, 4));
        assert!(!is_set(&image, 5, 4));
        assert!(!is_set(&image, 3, 6));
    }

    #[test]
    fn negative_offsets_are_clipped() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw_image_at(solid(3, 3).as_ref(), -2, -1);
        let image = canvas.into_image();

        assert!(is_set(&image, 0, 0));
        assert!(is_set(&image, 0, 1));
        assert!(!is_set(&image, 1, 0));
        assert!(!is_set(&image, 0, 2));
    }

    fn lit_count(pixmap: &Pixmap) -> usize {
        pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }

    #[test]
    fn negative_offset_keeps_only_overlap() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw_image_at(solid(3, 3).as_ref(), -1, 0);
        let image = canvas.into_image();

        assert_eq!(lit_count(&image), 6);
        assert!(is_set(&image, 1, 2));
        assert!(!is_set(&image, 2, 0));

        for offset in 1..=4 {
            let mut canvas = Canvas::new(4, 4).unwrap();
            canvas.draw_image_at(solid(4, 4).as_ref(), 0, -offset);
            let expected = 4 * (4 - offset as usize);
            assert_eq!(lit_count(&canvas.into_image()), expected, "y = -{offset}");
        }
    }

    #[test]
    fn image_just_past_left_edge_is_invisible() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw_image_at(solid(4, 4).as_ref(), -4, 0);
        assert_eq!(lit_count(&canvas.into_image()), 0);

        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw_image_at(solid(4, 4).as_ref(), i32::MIN, i32::MIN);
        assert_eq!(lit_count(&canvas.into_image()), 0);
    }

    #[test]
    fn fully_offscreen_draw_leaves_canvas_blank() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.draw_image_at(solid(2, 2).as_ref(), 10, -10);
        let image = canvas.into_image();
        assert!(image.pixels().iter().all(|p| p.alpha() == 0));
    }
}

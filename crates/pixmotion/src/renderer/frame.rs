//! Rendered frame representation

use tiny_skia::Pixmap;

use crate::utils::RenderError;

/// One rendered frame of a widget tree
#[derive(Clone)]
pub struct Frame {
    index: u32,
    pixmap: Pixmap,
}

impl Frame {
    /// Wrap a painted image
    pub fn new(index: u32, pixmap: Pixmap) -> Self {
        Self { index, pixmap }
    }

    /// Frame index this image was painted for
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get frame width
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Get frame height
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied image
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Take ownership of the image
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Straight-alpha RGBA bytes, row-major
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        rgba
    }

    /// Check if frame is empty (all transparent)
    pub fn is_empty(&self) -> bool {
        self.pixmap.pixels().iter().all(|pixel| pixel.alpha() == 0)
    }

    /// Encode the frame as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap
            .encode_png()
            .map_err(|e| RenderError::EncodeError(e.to_string()))
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("index", &self.index)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

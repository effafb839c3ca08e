//! Writing rendered frames to disk

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};
use log::{debug, info};
use pixmotion::Frame;
use rayon::prelude::*;

fn to_rgba_image(frame: &Frame) -> Result<RgbaImage> {
    RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba8())
        .with_context(|| format!("frame {} has an invalid buffer size", frame.index()))
}

/// Encode `frames` as a looping animated GIF
pub fn write_gif(frames: &[Frame], delay_ms: u32, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    for frame in frames {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        encoder
            .encode_frame(image::Frame::from_parts(to_rgba_image(frame)?, 0, 0, delay))
            .with_context(|| format!("failed to encode frame {}", frame.index()))?;
    }

    info!("wrote {} frames to {}", frames.len(), path.display());
    Ok(())
}

/// Write each frame as `frameNNNNN.png` inside `dir`
pub fn write_png_frames(frames: &[Frame], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    frames.par_iter().try_for_each(|frame| -> Result<()> {
        let path = dir.join(format!("frame{:05}.png", frame.index()));
        to_rgba_image(frame)?
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("wrote {}", path.display());
        Ok(())
    })?;

    info!("wrote {} frames to {}", frames.len(), dir.display());
    Ok(())
}

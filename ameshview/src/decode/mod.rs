//! Image payload decoding.
//!
//! Wraps the `image` crate behind two entry points shaped for the reload
//! chain: [`still`] for the JPEG base map and PNG border overlay, and
//! [`gif_frames`] for the animated radar frame. Both return [`Raster`]s so
//! nothing downstream touches encoder-specific buffer types.

use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use thiserror::Error;

use crate::raster::Raster;

/// Errors that can occur while decoding a fetched payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not a well-formed image.
    #[error("image decode failed: {0}")]
    Malformed(#[from] image::ImageError),

    /// A GIF container that yielded no frames at all.
    #[error("animation contained no frames")]
    EmptyAnimation,
}

/// Decodes a still image (JPEG or PNG, sniffed from the payload).
pub fn still(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let image = image::load_from_memory(bytes)?;
    Ok(Raster::from_rgba_image(&image.to_rgba8()))
}

/// Decodes every frame of a GIF payload, in presentation order.
///
/// Frames are composited the way a viewer would show them, so each returned
/// raster is a full-size screen state. A payload with zero frames is an
/// error; a frame that fails mid-stream aborts the whole decode.
pub fn gif_frames(bytes: &[u8]) -> Result<Vec<Raster>, DecodeError> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let mut rasters = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame?;
        rasters.push(Raster::from_rgba_image(frame.buffer()));
    }
    if rasters.is_empty() {
        return Err(DecodeError::EmptyAnimation);
    }
    Ok(rasters)
}

//! Decode boundary: anything the `image` crate can read becomes an RGB8
//! `PixelBuffer`. Decode failures surface to the caller before the core
//! transform ever runs.

use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::core::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Load and decode an image file, converting to 8-bit RGB.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let image = ImageReader::open(path)?.decode().map_err(Error::Decode)?;
    let rgb = image.to_rgb8();
    debug!("Decoded {:?}: {}x{}", path, rgb.width(), rgb.height());
    Ok(PixelBuffer::from_rgb_image(rgb))
}

use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::core::buffer::PixelBuffer;
use crate::error::{Error, Result};

pub fn write_rgb_png(output: &Path, buffer: &PixelBuffer) -> Result<()> {
    image::save_buffer_with_format(
        output,
        buffer.as_bytes(),
        buffer.width() as u32,
        buffer.height() as u32,
        ExtendedColorType::Rgb8,
        ImageFormat::Png,
    )
    .map_err(Error::external)
}

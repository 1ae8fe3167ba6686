use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::buffer::PixelBuffer;
use crate::error::{Error, Result};

pub fn write_rgb_jpeg(output: &Path, buffer: &PixelBuffer) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, 100);
    encoder
        .encode(
            buffer.as_bytes(),
            buffer.width() as u16,
            buffer.height() as u16,
            ColorType::Rgb,
        )
        .map_err(Error::external)?;
    Ok(())
}

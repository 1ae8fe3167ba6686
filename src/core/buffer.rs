//! Owned RGB pixel storage and mutable row-band views.
//!
//! `PixelBuffer` is the single shared resource of a processing run: a flat,
//! row-major grid of interleaved 8-bit RGB values. `PixelBand` is a mutable
//! view of a contiguous row range, produced by `split_bands_mut` so that
//! concurrent workers hold provably disjoint regions of the same buffer.

use image::RgbImage;

use crate::core::processing::segment::Segment;
use crate::error::{Error, Result};

pub(crate) const CHANNELS: usize = 3;

/// A W×H grid of interleaved 8-bit RGB pixels. No alpha channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Solid-black buffer of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Wrap an existing interleaved RGB byte vector.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * CHANNELS {
            return Err(Error::InvalidArgument {
                arg: "data",
                value: format!("{} bytes for a {}x{} buffer", data.len(), width, height),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgb_image(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            data: image.into_raw(),
        }
    }

    pub fn into_rgb_image(self) -> RgbImage {
        RgbImage::from_raw(self.width as u32, self.height as u32, self.data)
            .expect("buffer length matches its dimensions")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw interleaved RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = (y * self.width + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// View the whole buffer as one band.
    pub fn as_band_mut(&mut self) -> PixelBand<'_> {
        PixelBand {
            width: self.width,
            rows: self.height,
            data: &mut self.data,
        }
    }

    /// Split the buffer into one mutable band per segment.
    ///
    /// The segments must tile `[0, height)` in order; this is checked, since
    /// band disjointness is what makes lock-free concurrent writes sound.
    pub fn split_bands_mut(&mut self, segments: &[Segment]) -> Vec<PixelBand<'_>> {
        let width = self.width;
        let mut bands = Vec::with_capacity(segments.len());
        let mut rest = self.data.as_mut_slice();
        let mut next_row = 0;
        for segment in segments {
            assert_eq!(
                segment.start_row, next_row,
                "segments must tile the row range in order"
            );
            let rows = segment.rows();
            let (band, tail) = rest.split_at_mut(rows * width * CHANNELS);
            bands.push(PixelBand {
                width,
                rows,
                data: band,
            });
            rest = tail;
            next_row = segment.end_row;
        }
        assert_eq!(next_row, self.height, "segments must cover every row");
        bands
    }
}

/// Mutable view of a contiguous run of full pixel rows.
///
/// Row indices are local to the band; the band does not know (or need to
/// know) where in the parent buffer it starts.
#[derive(Debug)]
pub struct PixelBand<'a> {
    width: usize,
    rows: usize,
    pub(crate) data: &'a mut [u8],
}

impl PixelBand<'_> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

//! Block averaging: the leaf transform of the pixelation pipeline.

use crate::core::buffer::{CHANNELS, PixelBand, PixelBuffer};

/// Replace every pixel of one block with the block's average color.
///
/// The block starts at `(x_start, y_start)` and is clipped to the buffer's
/// bounds, so blocks touching the right or bottom edge may be smaller than
/// `square_size` per side. Channel means use truncating integer division;
/// sums are accumulated in u64 so even a whole-image block cannot overflow.
///
/// Callers must keep `x_start`/`y_start` in bounds and `square_size >= 1`,
/// which makes the clipped region non-empty. Concurrent calls on overlapping
/// regions of the same buffer are not allowed.
pub fn average_block(buffer: &mut PixelBuffer, x_start: usize, y_start: usize, square_size: usize) {
    let mut band = buffer.as_band_mut();
    average_block_in_band(&mut band, x_start, y_start, square_size);
}

/// Band-local variant shared by both traversal strategies. `y_start` is
/// relative to the band's first row.
pub(crate) fn average_block_in_band(
    band: &mut PixelBand<'_>,
    x_start: usize,
    y_start: usize,
    square_size: usize,
) {
    let width = band.width();
    debug_assert!(x_start < width && y_start < band.rows() && square_size >= 1);

    let x_end = (x_start + square_size).min(width);
    let y_end = (y_start + square_size).min(band.rows());

    let mut sum = [0u64; CHANNELS];
    let mut count = 0u64;
    for y in y_start..y_end {
        let row = &band.data[(y * width + x_start) * CHANNELS..(y * width + x_end) * CHANNELS];
        for pixel in row.chunks_exact(CHANNELS) {
            sum[0] += u64::from(pixel[0]);
            sum[1] += u64::from(pixel[1]);
            sum[2] += u64::from(pixel[2]);
        }
        count += (x_end - x_start) as u64;
    }

    let average = [
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    ];

    for y in y_start..y_end {
        let row =
            &mut band.data[(y * width + x_start) * CHANNELS..(y * width + x_end) * CHANNELS];
        for pixel in row.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&average);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_is_unchanged() {
        let mut buffer = PixelBuffer::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                buffer.set_pixel(x, y, [7, 130, 255]);
            }
        }
        average_block(&mut buffer, 0, 0, 3);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(buffer.pixel(x, y), [7, 130, 255]);
            }
        }
    }

    #[test]
    fn average_truncates_toward_zero() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set_pixel(0, 0, [1, 0, 0]);
        buffer.set_pixel(1, 0, [2, 0, 0]);
        average_block(&mut buffer, 0, 0, 2);
        // floor(3 / 2) = 1, not 2
        assert_eq!(buffer.pixel(0, 0), [1, 0, 0]);
        assert_eq!(buffer.pixel(1, 0), [1, 0, 0]);
    }

    #[test]
    fn edge_block_is_clipped_to_bounds() {
        // 5x5 with size 3: the bottom-right block covers only 2x2 pixels.
        let mut buffer = PixelBuffer::new(5, 5);
        for y in 3..5 {
            for x in 3..5 {
                buffer.set_pixel(x, y, [100, 0, 0]);
            }
        }
        buffer.set_pixel(3, 3, [104, 0, 0]);
        average_block(&mut buffer, 3, 3, 3);
        // Averaged over exactly 4 pixels: (104 + 3 * 100) / 4 = 101.
        for y in 3..5 {
            for x in 3..5 {
                assert_eq!(buffer.pixel(x, y), [101, 0, 0]);
            }
        }
        // Pixels outside the block are untouched.
        assert_eq!(buffer.pixel(0, 0), [0, 0, 0]);
        assert_eq!(buffer.pixel(2, 3), [0, 0, 0]);
        assert_eq!(buffer.pixel(3, 2), [0, 0, 0]);
    }

    #[test]
    fn four_by_four_corner_block() {
        let mut buffer = PixelBuffer::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                buffer.set_pixel(x, y, [(x * 50) as u8, (y * 50) as u8, ((x + y) * 25) as u8]);
            }
        }
        average_block(&mut buffer, 0, 0, 2);
        // red = floor((0+50+0+50)/4), green = floor((0+0+50+50)/4),
        // blue = floor((0+25+25+50)/4)
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buffer.pixel(x, y), [25, 25, 25]);
            }
        }
        // The rest of the image is untouched.
        assert_eq!(buffer.pixel(2, 0), [100, 0, 50]);
        assert_eq!(buffer.pixel(0, 2), [0, 100, 50]);
    }

    #[test]
    fn oversized_block_on_single_pixel() {
        let mut buffer = PixelBuffer::new(1, 1);
        buffer.set_pixel(0, 0, [9, 8, 7]);
        average_block(&mut buffer, 0, 0, 4);
        assert_eq!(buffer.pixel(0, 0), [9, 8, 7]);
    }
}

//! Row partitioning for the concurrent strategy.
//!
//! The image is divided into contiguous row segments, one per worker.
//! Segment boundaries are snapped to the block grid so a block never
//! straddles two workers; together with `PixelBuffer::split_bands_mut` this
//! makes the workers' write sets disjoint by construction, and both
//! strategies produce pixel-identical output for any worker count.

/// A contiguous half-open range of pixel rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start_row: usize,
    pub end_row: usize,
}

impl Segment {
    pub fn rows(&self) -> usize {
        self.end_row - self.start_row
    }

    pub fn is_empty(&self) -> bool {
        self.start_row == self.end_row
    }
}

/// Partition `height` pixel rows into `workers` segments.
///
/// Whole block rows (stripes of `square_size` pixel rows) are divided with
/// an integer quotient per worker and the last segment absorbs the
/// remainder. Empty segments are legal when there are more workers than
/// block rows; they simply carry no work.
///
/// The returned segments tile `[0, height)` exactly: contiguous,
/// non-overlapping, complete. This invariant is asserted, not assumed.
pub fn partition_rows(height: usize, square_size: usize, workers: usize) -> Vec<Segment> {
    assert!(square_size > 0, "square size must be positive");
    assert!(workers > 0, "worker count must be positive");

    let block_rows = height.div_ceil(square_size);
    let per_worker = block_rows / workers;

    let mut segments = Vec::with_capacity(workers);
    for i in 0..workers {
        let start_block = i * per_worker;
        let end_block = if i == workers - 1 {
            block_rows
        } else {
            (i + 1) * per_worker
        };
        segments.push(Segment {
            start_row: (start_block * square_size).min(height),
            end_row: (end_block * square_size).min(height),
        });
    }

    let mut next_row = 0;
    for segment in &segments {
        assert_eq!(segment.start_row, next_row, "segments must be contiguous");
        next_row = segment.end_row;
    }
    assert_eq!(next_row, height, "segments must cover every row");

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles(segments: &[Segment], height: usize) {
        let mut next = 0;
        for segment in segments {
            assert_eq!(segment.start_row, next);
            assert!(segment.end_row >= segment.start_row);
            next = segment.end_row;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn partition_covers_all_rows_exactly() {
        for height in [0, 1, 2, 5, 17, 64, 101] {
            for square_size in [1, 2, 3, 8] {
                for workers in [1, 2, 3, 4, 7, 16] {
                    let segments = partition_rows(height, square_size, workers);
                    assert_eq!(segments.len(), workers);
                    assert_tiles(&segments, height);
                }
            }
        }
    }

    #[test]
    fn boundaries_fall_on_the_block_grid() {
        let segments = partition_rows(100, 8, 3);
        for segment in &segments[..segments.len() - 1] {
            assert_eq!(segment.end_row % 8, 0);
        }
        assert_tiles(&segments, 100);
    }

    #[test]
    fn last_segment_absorbs_the_remainder() {
        // 10 block rows over 4 workers: two each, the last takes four.
        let segments = partition_rows(10, 1, 4);
        assert_eq!(
            segments,
            vec![
                Segment {
                    start_row: 0,
                    end_row: 2
                },
                Segment {
                    start_row: 2,
                    end_row: 4
                },
                Segment {
                    start_row: 4,
                    end_row: 6
                },
                Segment {
                    start_row: 6,
                    end_row: 10
                },
            ]
        );
    }

    #[test]
    fn more_workers_than_block_rows_leaves_empty_segments() {
        let segments = partition_rows(3, 1, 8);
        assert_tiles(&segments, 3);
        assert_eq!(segments.iter().filter(|s| s.is_empty()).count(), 7);
    }

    #[test]
    fn zero_height_yields_only_empty_segments() {
        let segments = partition_rows(0, 4, 3);
        assert_tiles(&segments, 0);
        assert!(segments.iter().all(Segment::is_empty));
    }
}

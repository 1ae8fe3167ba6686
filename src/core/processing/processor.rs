//! Sequential and concurrent pixelation drivers.
//!
//! Both strategies walk the image in `square_size` strides, average each
//! block in place, and report progress through a `ProgressSink`. The
//! concurrent strategy hands each worker its own row band; see
//! `segment::partition_rows` for the disjointness guarantee that lets the
//! workers share one buffer without locks.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::buffer::{PixelBand, PixelBuffer};
use crate::core::processing::block::average_block_in_band;
use crate::core::processing::progress::ProgressSink;
use crate::core::processing::segment::partition_rows;
use crate::error::{Error, Result};

/// Block-averaging processor for one pixel buffer.
#[derive(Debug, Clone)]
pub struct Pixelator {
    square_size: usize,
    pace: Option<Duration>,
}

impl Pixelator {
    /// `square_size` is the block side length in pixels and must be positive.
    pub fn new(square_size: usize) -> Result<Self> {
        if square_size == 0 {
            return Err(Error::InvalidArgument {
                arg: "square_size",
                value: square_size.to_string(),
            });
        }
        Ok(Self {
            square_size,
            pace: None,
        })
    }

    /// Sleep this long after every block. Intended for watching progress
    /// live; leave unset for full throughput.
    pub fn with_pace(mut self, pace: Option<Duration>) -> Self {
        self.pace = pace;
        self
    }

    pub fn square_size(&self) -> usize {
        self.square_size
    }

    /// Process every block in row-major order on the calling thread.
    ///
    /// The sink is notified after each block and once more after the last
    /// one, so even a 0x0 image produces a single final notification.
    /// Returns the number of blocks processed.
    pub fn process_sequential<S: ProgressSink>(
        &self,
        buffer: &mut PixelBuffer,
        sink: &S,
    ) -> Result<u64> {
        let mut band = buffer.as_band_mut();
        let blocks = self.process_band(&mut band, sink);
        sink.block_done();
        Ok(blocks)
    }

    /// Process the image with `workers` threads over disjoint row bands.
    ///
    /// Within one worker, blocks complete in row-major order; across workers
    /// no order is guaranteed and sink notifications interleave. Every
    /// worker is joined before this returns, then the sink fires one final
    /// time. A worker that dies early aborts the run with `Error::Aborted`
    /// after the remaining workers have been joined.
    pub fn process_concurrent<S: ProgressSink>(
        &self,
        buffer: &mut PixelBuffer,
        workers: usize,
        sink: &S,
    ) -> Result<u64> {
        if workers == 0 {
            return Err(Error::InvalidArgument {
                arg: "workers",
                value: workers.to_string(),
            });
        }

        let segments = partition_rows(buffer.height(), self.square_size, workers);
        debug!(
            "Partitioned {} rows into {} segments",
            buffer.height(),
            segments.len()
        );
        let bands = buffer.split_bands_mut(&segments);

        let joined: Vec<thread::Result<u64>> = thread::scope(|scope| {
            let handles: Vec<_> = bands
                .into_iter()
                .map(|mut band| scope.spawn(move || self.process_band(&mut band, sink)))
                .collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut blocks = 0;
        let mut failed = 0usize;
        for result in joined {
            match result {
                Ok(count) => blocks += count,
                Err(_) => {
                    warn!("Worker thread terminated early");
                    failed += 1;
                }
            }
        }
        if failed > 0 {
            return Err(Error::Aborted(format!(
                "{failed} of {workers} workers terminated early"
            )));
        }

        sink.block_done();
        Ok(blocks)
    }

    /// Shared row-major traversal over one band. Notifies the sink per
    /// block; the trailing run-complete notification is the strategy's job.
    fn process_band<S: ProgressSink>(&self, band: &mut PixelBand<'_>, sink: &S) -> u64 {
        let mut blocks = 0;
        let mut y = 0;
        while y < band.rows() {
            let mut x = 0;
            while x < band.width() {
                average_block_in_band(band, x, y, self.square_size);
                sink.block_done();
                if let Some(pace) = self.pace {
                    thread::sleep(pace);
                }
                blocks += 1;
                x += self.square_size;
            }
            y += self.square_size;
        }
        blocks
    }
}

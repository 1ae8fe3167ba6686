#![doc = r#"
MOSAPIX — a block-averaging image pixelator.

This crate turns a raster image into a mosaic: it partitions the image into
fixed-size square blocks and replaces every pixel in each block with the
block's average color. The transform runs either sequentially or across a
set of worker threads that own disjoint row bands of the same buffer, and
both strategies produce pixel-identical output. It powers the MOSAPIX CLI
and can be embedded in your own Rust applications.

Quick start: pixelate a file
----------------------------
```rust,no_run
use std::path::Path;
use mosapix::{ProcessingMode, ProcessingParams, pixelate_file_to_path};

fn main() -> mosapix::Result<()> {
    let params = ProcessingParams {
        square_size: 16,
        mode: ProcessingMode::Concurrent,
        ..Default::default()
    };

    let report = pixelate_file_to_path(
        Path::new("/photos/input.jpg"),
        Path::new("/out/mosaic.png"),
        &params,
    )?;

    println!("{} blocks in {} ms", report.blocks, report.elapsed_ms);
    Ok(())
}
```

Process an in-memory buffer
---------------------------
```rust
use mosapix::{NullSink, PixelBuffer, Pixelator};

fn main() -> mosapix::Result<()> {
    let mut buffer = PixelBuffer::new(64, 48);
    let pixelator = Pixelator::new(8)?;
    pixelator.process_sequential(&mut buffer, &NullSink)?;
    Ok(())
}
```

Progress reporting
------------------
Both strategies notify a [`ProgressSink`] after every completed block and
once more when the run finishes. In concurrent mode the notifications arrive
interleaved from several workers; sinks must be `Sync` and must not assume
any ordering. [`CountingSink`] is a ready-made atomic counter suitable for
polling from a display thread.

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. decode failures or invalid arguments.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — the pixel buffer and the processing primitives.
- [`io`] — image decode and PNG/JPEG/sidecar writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::buffer::{PixelBand, PixelBuffer};
pub use core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{OutputFormat, ProcessingMode};

// Processing primitives
pub use core::processing::block::average_block;
pub use core::processing::processor::Pixelator;
pub use core::processing::progress::{CountingSink, NullSink, ProgressSink};
pub use core::processing::segment::{Segment, partition_rows};

// Readers and writers
pub use io::reader::load_image;
pub use io::writers::metadata::{RunMetadata, write_json_sidecar};

// High-level API re-exports
pub use api::{
    BatchReport, ProcessingReport, pixelate_buffer, pixelate_file_to_path,
    pixelate_file_with_sink, process_directory_to_path, resolve_workers,
};

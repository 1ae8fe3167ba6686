//! High-level, ergonomic library API: pixelate files to disk or buffers in
//! memory, with a batch helper for directories. Prefer these entrypoints
//! over the low-level processing modules when embedding MOSAPIX.
use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};

use crate::core::buffer::PixelBuffer;
use crate::core::params::ProcessingParams;
use crate::core::processing::processor::Pixelator;
use crate::core::processing::progress::{NullSink, ProgressSink};
use crate::error::{Error, Result};
use crate::io::reader::load_image;
use crate::io::writers::metadata::{RunMetadata, write_json_sidecar};
use crate::io::writers::{jpeg, png};
use crate::types::{OutputFormat, ProcessingMode};

/// Outcome of one completed run.
#[derive(Debug, Clone)]
pub struct ProcessingReport {
    pub width: usize,
    pub height: usize,
    pub blocks: u64,
    pub elapsed_ms: u64,
}

/// Outcome of a directory batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Resolve the worker count: the explicit parameter if given, else the
/// host's reported parallelism. Applied here, at the boundary, so the core
/// never consults the environment.
pub fn resolve_workers(workers: Option<usize>) -> usize {
    workers.unwrap_or_else(|| num_cpus::get().max(1))
}

/// Pixelate an already-decoded buffer in place. Returns the block count.
pub fn pixelate_buffer<S: ProgressSink>(
    buffer: &mut PixelBuffer,
    params: &ProcessingParams,
    sink: &S,
) -> Result<u64> {
    let pixelator = Pixelator::new(params.square_size)?.with_pace(params.pace);
    match params.mode {
        ProcessingMode::Sequential => pixelator.process_sequential(buffer, sink),
        ProcessingMode::Concurrent => {
            pixelator.process_concurrent(buffer, resolve_workers(params.workers), sink)
        }
    }
}

/// Load, pixelate, and save one image, reporting progress to `sink`.
pub fn pixelate_file_with_sink<S: ProgressSink>(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
    sink: &S,
) -> Result<ProcessingReport> {
    let started = Instant::now();
    let mut buffer = load_image(input)?;
    let (width, height) = (buffer.width(), buffer.height());
    info!("Loaded {:?}: {}x{}", input, width, height);

    let blocks = pixelate_buffer(&mut buffer, params, sink)?;

    match params.format {
        OutputFormat::PNG => png::write_rgb_png(output, &buffer)?,
        OutputFormat::JPEG => jpeg::write_rgb_jpeg(output, &buffer)?,
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    if params.metadata {
        let workers = match params.mode {
            ProcessingMode::Sequential => 1,
            ProcessingMode::Concurrent => resolve_workers(params.workers),
        };
        write_json_sidecar(
            output,
            &RunMetadata {
                source: input.to_path_buf(),
                width,
                height,
                square_size: params.square_size,
                mode: params.mode,
                workers,
                format: params.format,
                blocks,
                elapsed_ms,
                created: Utc::now().to_rfc3339(),
            },
        )?;
    }

    Ok(ProcessingReport {
        width,
        height,
        blocks,
        elapsed_ms,
    })
}

/// Load, pixelate, and save one image with no progress reporting beyond logs.
pub fn pixelate_file_to_path(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
) -> Result<ProcessingReport> {
    pixelate_file_with_sink(input, output, params, &NullSink)
}

/// Pixelate every decodable file in a directory.
///
/// Files the decoder rejects are counted as skipped. Other failures abort
/// the batch unless `continue_on_error` is set, in which case they are
/// logged and counted.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut entries: Vec<_> = fs::read_dir(input_dir)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    let mut report = BatchReport::default();
    for entry in entries {
        let path = entry.path();
        if !path.is_file() {
            info!("Skipping non-file entry: {:?}", path);
            report.skipped += 1;
            continue;
        }

        let Some(stem) = path.file_stem() else {
            report.skipped += 1;
            continue;
        };
        let output_name = format!("{}.{}", stem.to_string_lossy(), params.format.extension());
        let output = output_dir.join(&output_name);

        info!("Processing: {:?} -> {:?}", path, output);
        match pixelate_file_to_path(&path, &output, params) {
            Ok(file_report) => {
                info!(
                    "Successfully processed: {:?} ({} blocks)",
                    path, file_report.blocks
                );
                report.processed += 1;
            }
            Err(Error::Decode(e)) => {
                warn!("Skipping undecodable file {:?}: {}", path, e);
                report.skipped += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

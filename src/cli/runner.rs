use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use mosapix::api::{pixelate_file_with_sink, process_directory_to_path, resolve_workers};
use mosapix::core::processing::progress::ProgressSink;
use mosapix::{ProcessingMode, ProcessingParams};

use super::args::CliArgs;
use super::errors::AppError;

const PROGRESS_LOG_EVERY: u64 = 500;

/// Forwards each notification into an mpsc channel so the calling thread
/// can observe progress while the workers run.
struct ChannelSink(mpsc::Sender<()>);

impl ProgressSink for ChannelSink {
    fn block_done(&self) {
        // The drain side may have hung up already; progress is best-effort.
        let _ = self.0.send(());
    }
}

fn process_single_file(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel();
    let sink = ChannelSink(tx);

    let report = thread::scope(|scope| {
        // The processing thread owns the sink; when it finishes, the channel
        // disconnects and the drain loop below ends.
        let handle = scope.spawn(move || {
            let sink = sink;
            pixelate_file_with_sink(input, output, params, &sink)
        });

        let mut done: u64 = 0;
        while rx.recv().is_ok() {
            done += 1;
            if done % PROGRESS_LOG_EVERY == 0 {
                debug!("Progress: {} blocks", done);
            }
        }

        handle.join().map_err(|_| {
            mosapix::Error::Aborted("processing thread terminated early".to_string())
        })?
    })?;

    info!(
        "Pixelated {}x{} image into {} blocks ({} ms)",
        report.width, report.height, report.blocks, report.elapsed_ms
    );
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.square_size == 0 {
        return Err(AppError::ZeroSquareSize {
            size: args.square_size,
        }
        .into());
    }
    if args.workers == Some(0) {
        return Err(AppError::ZeroWorkers { workers: 0 }.into());
    }

    let params = ProcessingParams {
        format: args.format,
        mode: args.mode,
        square_size: args.square_size,
        workers: args.workers,
        pace: args.pace_ms.map(Duration::from_millis),
        metadata: args.metadata,
    };

    if matches!(params.mode, ProcessingMode::Concurrent) {
        debug!("Using {} worker threads", resolve_workers(params.workers));
    }

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, true)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        process_single_file(&input, &output, &params)?;
        info!("Successfully processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}

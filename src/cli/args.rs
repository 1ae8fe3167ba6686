use clap::Parser;
use std::path::PathBuf;

use mosapix::types::{OutputFormat, ProcessingMode};

#[derive(Parser)]
#[command(name = "mosapix", version, about = "MOSAPIX CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory of image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Side length of the averaging square in pixels
    #[arg(short, long, default_value_t = 8)]
    pub square_size: usize,

    /// Processing mode: s (sequential) or m (multi-threaded)
    #[arg(short, long, value_enum, default_value_t = ProcessingMode::Sequential, ignore_case = true)]
    pub mode: ProcessingMode,

    /// Worker threads for multi-threaded mode (defaults to all CPU cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::PNG)]
    pub format: OutputFormat,

    /// Delay after each block in milliseconds, to watch progress live
    #[arg(long)]
    pub pace_ms: Option<u64>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Write a JSON sidecar describing the run next to the output
    #[arg(long, default_value_t = false)]
    pub metadata: bool,

    /// Batch mode: continue processing other files when one of them fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{OutputFormat, ProcessingMode};

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub format: OutputFormat,
    pub mode: ProcessingMode,
    /// Side length of the averaging square in pixels; must be positive
    pub square_size: usize,
    /// Worker threads for concurrent mode; None means the host's available
    /// parallelism, resolved at the api/CLI boundary
    pub workers: Option<usize>,
    /// Optional delay after each block, for watching progress live
    pub pace: Option<Duration>,
    /// If true, write a JSON sidecar describing the run next to the output
    pub metadata: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::PNG,
            mode: ProcessingMode::Sequential,
            square_size: 8,
            workers: None,
            pace: None,
            metadata: false,
        }
    }
}

//! Shared types and enums used across MOSAPIX.
//! Includes the `ProcessingMode` strategy selector and `OutputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ProcessingMode {
    Sequential,
    Concurrent,
}

// Manual implementation so the CLI accepts the short "s"/"m" selectors
impl clap::ValueEnum for ProcessingMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[ProcessingMode::Sequential, ProcessingMode::Concurrent]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            ProcessingMode::Sequential => {
                clap::builder::PossibleValue::new("s").alias("sequential")
            }
            ProcessingMode::Concurrent => clap::builder::PossibleValue::new("m").alias("multi"),
        })
    }
}

impl std::fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingMode::Sequential => write!(f, "Sequential"),
            ProcessingMode::Concurrent => write!(f, "Concurrent"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
    JPEG, // Lossy, preview only
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PNG => "png",
            OutputFormat::JPEG => "jpg",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

//! JSON sidecar describing a processing run, written next to the output
//! image on request.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{OutputFormat, ProcessingMode};

/// Everything worth knowing about one pixelation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub source: PathBuf,
    pub width: usize,
    pub height: usize,
    pub square_size: usize,
    pub mode: ProcessingMode,
    pub workers: usize,
    pub format: OutputFormat,
    pub blocks: u64,
    pub elapsed_ms: u64,
    pub created: String,
}

/// Write `<output>.json` beside the output image.
pub fn write_json_sidecar(output: &Path, metadata: &RunMetadata) -> Result<()> {
    let sidecar = sidecar_path(output);
    let json = serde_json::to_string_pretty(metadata).map_err(Error::external)?;
    fs::write(&sidecar, json)?;
    info!("Metadata sidecar written: {:?}", sidecar);
    Ok(())
}

fn sidecar_path(output: &Path) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(".json");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_sits_next_to_the_output() {
        assert_eq!(
            sidecar_path(Path::new("/out/picture.png")),
            PathBuf::from("/out/picture.png.json")
        );
    }
}

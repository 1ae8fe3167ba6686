//! Writers for PNG/JPEG outputs and the JSON metadata sidecar.
pub mod jpeg;
pub mod metadata;
pub mod png;

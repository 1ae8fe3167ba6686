//! I/O layer for decoding source images and writing results.
//! Provides the `reader` decode boundary and `writers` for PNG/JPEG outputs
//! and JSON metadata sidecars.
pub mod reader;
pub use reader::load_image;

pub mod writers;

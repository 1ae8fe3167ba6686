//! Core processing building blocks: the pixel buffer, block averaging,
//! row partitioning, and the sequential/concurrent processors. These are
//! internal primitives consumed by the high-level `api` module.
pub mod buffer;
pub mod params;
pub mod processing;

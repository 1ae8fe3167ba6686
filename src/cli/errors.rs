use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Square size must be a positive integer, got: {size}")]
    ZeroSquareSize { size: usize },

    #[error("Worker count must be a positive integer, got: {workers}")]
    ZeroWorkers { workers: usize },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },
}

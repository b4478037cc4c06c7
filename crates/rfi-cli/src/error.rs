//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// None of the supplied input paths exist
    #[error("No valid PDF files provided")]
    NoValidInputs,

    /// Every supplied file failed to process
    #[error("No files could be processed")]
    NoFilesProcessed,

    /// Report write error
    #[error(transparent)]
    Write(#[from] rfi_report::WriteError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

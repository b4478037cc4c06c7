//! Error types for report writing

use thiserror::Error;

/// Errors that can occur while persisting a report
///
/// A write failure is fatal to the invocation; it surfaces to the caller
/// instead of being recovered.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The report could not be serialized
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The temporary file could not be created or written
    #[error("Failed to write report near {path}: {source}")]
    Io {
        /// Destination path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be moved over the destination
    #[error("Failed to persist report to {path}: {reason}")]
    Persist {
        /// Destination path
        path: String,
        /// What the rename reported
        reason: String,
    },
}

//! Error types for text extraction

use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file could not be parsed as a PDF
    #[error("Failed to extract text from {path}: {reason}")]
    Pdf {
        /// Path of the malformed file
        path: String,
        /// What the PDF parser reported
        reason: String,
    },
}

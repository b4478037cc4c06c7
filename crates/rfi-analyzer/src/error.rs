//! Error types for the analyzer

use thiserror::Error;

/// Errors that can occur while classifying text
///
/// These are always recovered internally by falling back to the keyword
/// heuristic; they never surface to the caller as a hard failure.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM call exceeded the configured timeout
    #[error("Classification timeout")]
    Timeout,

    /// LLM response did not match the expected schema
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors that fail the review of a single document
///
/// Callers skip the offending file and continue with the rest of the
/// batch.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// The source document could not be read or parsed
    #[error("Extraction failed: {0}")]
    Extraction(String),
}

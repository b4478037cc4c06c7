//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (rfi-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for extracting plain text from a document on disk
///
/// Implemented by the infrastructure layer (rfi-extract)
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract the concatenated text content of a document
    fn extract(&self, path: &std::path::Path) -> Result<String, Self::Error>;
}

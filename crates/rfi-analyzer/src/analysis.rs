//! Classifier output type

use rfi_domain::Action;

/// The themes, actions, and summary a classifier derived from one
/// document's text
///
/// Both the AI classifier and the keyword fallback produce this shape;
/// the Reviewer attaches source path, timestamp, and provenance to turn
/// it into a [`DocumentResult`].
///
/// [`DocumentResult`]: rfi_domain::DocumentResult
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Theme labels in first-appearance order
    pub themes: Vec<String>,

    /// Extracted actions
    pub actions: Vec<Action>,

    /// Free-text summary
    pub summary: String,
}

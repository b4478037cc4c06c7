//! Action module - actionable commitments extracted from documents

use crate::priority::Priority;
use serde::{Deserialize, Serialize};

/// Timeframe value used when no schedule information was found
pub const TIMEFRAME_NOT_SPECIFIED: &str = "Not specified";

/// Category value used when no theme could be attributed
pub const CATEGORY_GENERAL: &str = "General";

/// An actionable commitment extracted from a document
///
/// Actions are always created in the context of a [`DocumentResult`] and
/// never exist independently of one.
///
/// [`DocumentResult`]: crate::result::DocumentResult
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// What needs to be done
    #[serde(rename = "action")]
    pub description: String,

    /// When it should be completed (free text, e.g. "Within 30 days")
    pub timeframe: String,

    /// Urgency level
    pub priority: Priority,

    /// Topical category, typically one of the document's themes
    pub category: String,
}

impl Action {
    /// Create an action with default timeframe, priority, and category
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            timeframe: TIMEFRAME_NOT_SPECIFIED.to_string(),
            priority: Priority::Medium,
            category: CATEGORY_GENERAL.to_string(),
        }
    }

    /// Validate that the action is well-formed
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("action description is empty".to_string());
        }
        Ok(())
    }
}

/// An action tagged with the document it came from
///
/// This is the representation used in the consolidated report; the
/// `source_file` must reference a document present in the same report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedAction {
    /// The underlying action
    #[serde(flatten)]
    pub action: Action,

    /// Path of the document this action was extracted from
    pub source_file: String,
}

impl SourcedAction {
    /// Tag an action with its source document
    pub fn new(action: Action, source_file: impl Into<String>) -> Self {
        Self {
            action,
            source_file: source_file.into(),
        }
    }
}

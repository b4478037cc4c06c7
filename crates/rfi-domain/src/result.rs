//! Per-document analysis results

use crate::action::Action;
use crate::mode::AnalysisMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analysis record for a single reviewed document
///
/// Created once per file and never mutated afterwards. Themes are
/// de-duplicated per document on construction (exact string match,
/// case-sensitive, first occurrence wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Path of the source document
    pub file: String,

    /// Theme labels, ordered, de-duplicated within this document
    pub themes: Vec<String>,

    /// Actions extracted from this document
    pub actions: Vec<Action>,

    /// Free-text summary of the document
    pub summary: String,

    /// When the analysis was performed
    pub analyzed_at: DateTime<Utc>,

    /// How the results were derived (not part of the report schema)
    #[serde(skip)]
    pub mode: AnalysisMode,
}

impl DocumentResult {
    /// Create a result for a document, timestamped now
    pub fn new(
        file: impl Into<String>,
        themes: Vec<String>,
        actions: Vec<Action>,
        summary: impl Into<String>,
        mode: AnalysisMode,
    ) -> Self {
        Self {
            file: file.into(),
            themes: dedup_preserving_order(themes),
            actions,
            summary: summary.into(),
            analyzed_at: Utc::now(),
            mode,
        }
    }
}

/// Drop exact duplicates from a theme list, keeping first-seen order
pub fn dedup_preserving_order(themes: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(themes.len());
    for theme in themes {
        if !seen.contains(&theme) {
            seen.push(theme);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_deduplicated_on_construction() {
        let result = DocumentResult::new(
            "a.pdf",
            vec![
                "Security".to_string(),
                "Cost".to_string(),
                "Security".to_string(),
            ],
            vec![],
            "",
            AnalysisMode::Heuristic,
        );
        assert_eq!(result.themes, vec!["Security", "Cost"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let themes = dedup_preserving_order(vec![
            "Security".to_string(),
            "security".to_string(),
        ]);
        // Differently-cased labels are distinct by design
        assert_eq!(themes.len(), 2);
    }

    #[test]
    fn test_mode_not_serialized() {
        let result = DocumentResult::new("a.pdf", vec![], vec![], "", AnalysisMode::Ai);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("mode").is_none());
        assert!(json.get("analyzed_at").is_some());
    }
}

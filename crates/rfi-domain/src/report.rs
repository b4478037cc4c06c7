//! Consolidated cross-document report

use crate::action::SourcedAction;
use crate::result::DocumentResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The merged result of reviewing a batch of documents
///
/// Created once per invocation and write-once: never mutated after
/// serialization. Field order here matches the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of documents that were successfully analyzed
    pub total_files: usize,

    /// Per-document results, in the order the documents were supplied
    pub files_analyzed: Vec<DocumentResult>,

    /// Union of all themes, first-seen order, exact-string de-duplicated
    pub consolidated_themes: Vec<String>,

    /// All actions across documents, each tagged with its source file
    pub consolidated_actions: Vec<SourcedAction>,
}

impl ConsolidatedReport {
    /// Check the report's internal invariants
    ///
    /// Every consolidated action must reference a document present in
    /// `files_analyzed`, and consolidated themes must be free of exact
    /// duplicates.
    pub fn validate(&self) -> Result<(), String> {
        if self.total_files != self.files_analyzed.len() {
            return Err(format!(
                "total_files {} does not match files_analyzed length {}",
                self.total_files,
                self.files_analyzed.len()
            ));
        }

        for action in &self.consolidated_actions {
            if !self
                .files_analyzed
                .iter()
                .any(|r| r.file == action.source_file)
            {
                return Err(format!(
                    "action references unknown source file: {}",
                    action.source_file
                ));
            }
        }

        for (i, theme) in self.consolidated_themes.iter().enumerate() {
            if self.consolidated_themes[..i].contains(theme) {
                return Err(format!("duplicate consolidated theme: {}", theme));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::mode::AnalysisMode;

    fn report_with(results: Vec<DocumentResult>, actions: Vec<SourcedAction>) -> ConsolidatedReport {
        ConsolidatedReport {
            generated_at: Utc::now(),
            total_files: results.len(),
            files_analyzed: results,
            consolidated_themes: vec![],
            consolidated_actions: actions,
        }
    }

    #[test]
    fn test_validate_accepts_consistent_report() {
        let doc = DocumentResult::new("a.pdf", vec![], vec![], "", AnalysisMode::Heuristic);
        let action = SourcedAction::new(Action::new("Do the thing"), "a.pdf");
        assert!(report_with(vec![doc], vec![action]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_orphan_action() {
        let doc = DocumentResult::new("a.pdf", vec![], vec![], "", AnalysisMode::Heuristic);
        let action = SourcedAction::new(Action::new("Do the thing"), "b.pdf");
        assert!(report_with(vec![doc], vec![action]).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_themes() {
        let mut report = report_with(vec![], vec![]);
        report.consolidated_themes = vec!["Security".to_string(), "Security".to_string()];
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_count_mismatch() {
        let mut report = report_with(vec![], vec![]);
        report.total_files = 3;
        assert!(report.validate().is_err());
    }
}

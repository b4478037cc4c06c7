//! Batch consolidation

use chrono::Utc;
use rfi_domain::{ConsolidatedReport, DocumentResult, SourcedAction};

/// Merge per-document results into a consolidated report
///
/// Pure aggregation: input document order is preserved in
/// `files_analyzed`; themes are unioned in first-seen order with exact
/// case-sensitive matching (differently-cased labels from different
/// documents stay distinct, a known fidelity limit of the heuristic
/// approach that is preserved here on purpose); actions are flattened in
/// document order, each tagged with its source file.
pub fn consolidate(results: Vec<DocumentResult>) -> ConsolidatedReport {
    let mut consolidated_themes: Vec<String> = Vec::new();
    for result in &results {
        for theme in &result.themes {
            if !consolidated_themes.contains(theme) {
                consolidated_themes.push(theme.clone());
            }
        }
    }

    let mut consolidated_actions: Vec<SourcedAction> = Vec::new();
    for result in &results {
        for action in &result.actions {
            consolidated_actions.push(SourcedAction::new(action.clone(), result.file.clone()));
        }
    }

    ConsolidatedReport {
        generated_at: Utc::now(),
        total_files: results.len(),
        files_analyzed: results,
        consolidated_themes,
        consolidated_actions,
    }
}

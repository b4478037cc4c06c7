//! Atomic JSON report writing

use crate::error::WriteError;
use rfi_domain::ConsolidatedReport;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Serialize a report to JSON and atomically persist it at `path`
///
/// The JSON is written to a temporary file in the destination's parent
/// directory and renamed into place, so an existing report at the same
/// path is either fully replaced or left untouched.
pub fn write_report(report: &ConsolidatedReport, path: &Path) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(report)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let io_err = |source| WriteError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.write_all(b"\n").map_err(io_err)?;
    tmp.flush().map_err(io_err)?;

    tmp.persist(path).map_err(|e| WriteError::Persist {
        path: path.display().to_string(),
        reason: e.error.to_string(),
    })?;

    info!("Report saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consolidate::consolidate;
    use rfi_domain::{Action, AnalysisMode, DocumentResult};

    fn sample_report() -> ConsolidatedReport {
        let result = DocumentResult::new(
            "a.pdf",
            vec!["Security".to_string(), "Cost".to_string()],
            vec![Action::new("Implement MFA")],
            "summary",
            AnalysisMode::Heuristic,
        );
        consolidate(vec![result])
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = sample_report();

        write_report(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: ConsolidatedReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_report(&sample_report(), &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert!(json["generated_at"].is_string());
        assert_eq!(json["total_files"], 1);
        assert_eq!(json["files_analyzed"][0]["file"], "a.pdf");
        assert_eq!(json["files_analyzed"][0]["themes"][0], "Security");
        assert_eq!(json["files_analyzed"][0]["actions"][0]["action"], "Implement MFA");
        assert_eq!(json["files_analyzed"][0]["actions"][0]["priority"], "medium");
        assert!(json["files_analyzed"][0]["analyzed_at"].is_string());
        assert_eq!(json["consolidated_themes"][1], "Cost");
        assert_eq!(json["consolidated_actions"][0]["source_file"], "a.pdf");
    }

    #[test]
    fn test_overwrites_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "old content").unwrap();

        write_report(&sample_report(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("files_analyzed"));
        assert!(!content.contains("old content"));
    }

    #[test]
    fn test_missing_parent_directory_fails_without_touching_existing() {
        let result = write_report(
            &sample_report(),
            Path::new("/nonexistent-dir-for-rfi-tests/report.json"),
        );
        assert!(matches!(result, Err(WriteError::Io { .. })));
    }
}

//! Parse LLM output into an Analysis

use crate::analysis::Analysis;
use crate::error::AnalyzerError;
use rfi_domain::{action, Action, Priority};
use serde_json::Value;
use tracing::warn;

/// Parse an LLM JSON response into an [`Analysis`]
///
/// The response must be a JSON object with `themes` and `actions`
/// arrays; anything else is rejected so the caller can fall back to the
/// keyword heuristic. Individual malformed action entries are skipped
/// with a warning rather than failing the whole response.
pub fn parse_llm_response(response: &str) -> Result<Analysis, AnalyzerError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| AnalyzerError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| AnalyzerError::InvalidFormat("Expected JSON object".to_string()))?;

    let themes_json = obj
        .get("themes")
        .and_then(|v| v.as_array())
        .ok_or_else(|| AnalyzerError::InvalidFormat("Missing 'themes' array".to_string()))?;

    let mut themes = Vec::new();
    for (idx, theme) in themes_json.iter().enumerate() {
        match theme.as_str() {
            Some(s) if !s.trim().is_empty() => themes.push(s.to_string()),
            _ => warn!("Skipping non-string theme at index {}", idx),
        }
    }

    let actions_json = obj
        .get("actions")
        .and_then(|v| v.as_array())
        .ok_or_else(|| AnalyzerError::InvalidFormat("Missing 'actions' array".to_string()))?;

    let mut actions = Vec::new();
    for (idx, action_json) in actions_json.iter().enumerate() {
        match parse_action_json(action_json) {
            Ok(action) => actions.push(action),
            Err(e) => warn!("Skipping action {}: {}", idx, e),
        }
    }

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Ok(Analysis {
        themes,
        actions,
        summary,
    })
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, AnalyzerError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(AnalyzerError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse a single action from JSON
///
/// Only the description is mandatory; the remaining fields fall back to
/// their documented defaults (timeframe "Not specified", priority
/// medium, category "General").
fn parse_action_json(json: &Value) -> Result<Action, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Action is not a JSON object".to_string())?;

    let description = obj
        .get("action")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "Missing or empty 'action'".to_string())?
        .to_string();

    let timeframe = obj
        .get("timeframe")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(action::TIMEFRAME_NOT_SPECIFIED)
        .to_string();

    let priority = obj
        .get("priority")
        .and_then(|v| v.as_str())
        .map(Priority::parse)
        .unwrap_or_default();

    let category = obj
        .get("category")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(action::CATEGORY_GENERAL)
        .to_string();

    Ok(Action {
        description,
        timeframe,
        priority,
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_response() {
        let response = r#"{
            "themes": ["Security", "Cost"],
            "actions": [
                {
                    "action": "Implement MFA",
                    "timeframe": "Within 30 days",
                    "priority": "high",
                    "category": "Security"
                }
            ],
            "summary": "A security-focused response."
        }"#;

        let analysis = parse_llm_response(response).unwrap();
        assert_eq!(analysis.themes, vec!["Security", "Cost"]);
        assert_eq!(analysis.actions.len(), 1);
        assert_eq!(analysis.actions[0].description, "Implement MFA");
        assert_eq!(analysis.actions[0].priority, Priority::High);
        assert_eq!(analysis.summary, "A security-focused response.");
    }

    #[test]
    fn test_parse_response_with_markdown_wrapper() {
        let response = "```json\n{\"themes\": [\"Security\"], \"actions\": [], \"summary\": \"s\"}\n```";

        let analysis = parse_llm_response(response).unwrap();
        assert_eq!(analysis.themes, vec!["Security"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_llm_response("This is not JSON");
        assert!(matches!(result, Err(AnalyzerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let result = parse_llm_response(r#"["themes"]"#);
        assert!(matches!(result, Err(AnalyzerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_missing_themes() {
        let result = parse_llm_response(r#"{"actions": [], "summary": ""}"#);
        assert!(matches!(result, Err(AnalyzerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_missing_actions() {
        let result = parse_llm_response(r#"{"themes": [], "summary": ""}"#);
        assert!(matches!(result, Err(AnalyzerError::InvalidFormat(_))));
    }

    #[test]
    fn test_action_defaults_applied() {
        let response = r#"{
            "themes": [],
            "actions": [{"action": "Submit the pricing sheet"}],
            "summary": ""
        }"#;

        let analysis = parse_llm_response(response).unwrap();
        let action = &analysis.actions[0];
        assert_eq!(action.timeframe, "Not specified");
        assert_eq!(action.priority, Priority::Medium);
        assert_eq!(action.category, "General");
    }

    #[test]
    fn test_unknown_priority_defaults_to_medium() {
        let response = r#"{
            "themes": [],
            "actions": [{"action": "Do it", "priority": "blocker"}],
            "summary": ""
        }"#;

        let analysis = parse_llm_response(response).unwrap();
        assert_eq!(analysis.actions[0].priority, Priority::Medium);
    }

    #[test]
    fn test_partial_success_skips_bad_actions() {
        let response = r#"{
            "themes": ["Security"],
            "actions": [
                {"action": "Valid action"},
                {"timeframe": "no description here"},
                {"action": "   "},
                {"action": "Another valid action"}
            ],
            "summary": ""
        }"#;

        let analysis = parse_llm_response(response).unwrap();
        assert_eq!(analysis.actions.len(), 2);
        assert_eq!(analysis.actions[0].description, "Valid action");
        assert_eq!(analysis.actions[1].description, "Another valid action");
    }

    #[test]
    fn test_non_string_themes_skipped() {
        let response = r#"{"themes": ["Security", 42, null], "actions": [], "summary": ""}"#;

        let analysis = parse_llm_response(response).unwrap();
        assert_eq!(analysis.themes, vec!["Security"]);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"themes\": [], \"actions\": [], \"summary\": \"\"}\n```";
        let analysis = parse_llm_response(response).unwrap();
        assert!(analysis.themes.is_empty());
    }
}

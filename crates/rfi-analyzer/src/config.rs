//! Configuration for the analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One theme-lexicon entry: a keyword and the canonical theme it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Keyword matched case-insensitively as a substring of the text
    pub keyword: String,

    /// Canonical theme label contributed on a match
    pub theme: String,
}

impl LexiconEntry {
    fn new(keyword: &str, theme: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            theme: theme.to_string(),
        }
    }
}

/// Keyword tables driving the heuristic classifier
///
/// These are data, not a fixed contract: deployments can extend or
/// replace them via TOML without touching the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTables {
    /// Words that mark a sentence as a candidate action
    pub action_indicators: Vec<String>,

    /// Words that promote an action's priority to high
    pub urgency_words: Vec<String>,

    /// Keyword-to-theme mapping
    pub theme_lexicon: Vec<LexiconEntry>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            action_indicators: [
                "implement",
                "develop",
                "create",
                "establish",
                "complete",
                "deliver",
                "submit",
                "provide",
                "ensure",
                "review",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            urgency_words: ["immediately", "critical", "urgent", "asap"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            theme_lexicon: vec![
                LexiconEntry::new("security", "Security"),
                LexiconEntry::new("authentication", "Security"),
                LexiconEntry::new("encryption", "Security"),
                LexiconEntry::new("timeline", "Timeline"),
                LexiconEntry::new("schedule", "Timeline"),
                LexiconEntry::new("cost", "Cost"),
                LexiconEntry::new("budget", "Cost"),
                LexiconEntry::new("pricing", "Cost"),
                LexiconEntry::new("implementation", "Implementation"),
                LexiconEntry::new("deployment", "Implementation"),
                LexiconEntry::new("compliance", "Compliance"),
                LexiconEntry::new("regulatory", "Compliance"),
                LexiconEntry::new("training", "Training"),
                LexiconEntry::new("integration", "Integration"),
                LexiconEntry::new("support", "Support"),
                LexiconEntry::new("maintenance", "Support"),
            ],
        }
    }
}

/// Configuration for the Reviewer and the classifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum document text included in the LLM prompt (characters)
    pub max_prompt_text_len: usize,

    /// Maximum time for a single LLM classification call (seconds)
    pub llm_timeout_secs: u64,

    /// Maximum length of a heuristic action description (characters)
    pub max_action_len: usize,

    /// Minimum sentence length for a heuristic action candidate
    pub min_sentence_len: usize,

    /// Keyword tables for the heuristic classifier
    pub tables: KeywordTables,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_prompt_text_len: 8_000,
            llm_timeout_secs: 60,
            max_action_len: 200,
            min_sentence_len: 10,
            tables: KeywordTables::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Get the LLM timeout as a Duration
    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_prompt_text_len == 0 {
            return Err("max_prompt_text_len must be greater than 0".to_string());
        }
        if self.llm_timeout_secs == 0 {
            return Err("llm_timeout_secs must be greater than 0".to_string());
        }
        if self.max_action_len == 0 {
            return Err("max_action_len must be greater than 0".to_string());
        }
        if self.tables.action_indicators.is_empty() {
            return Err("action_indicators table must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = AnalyzerConfig::default();
        config.llm_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_action_indicators_rejected() {
        let mut config = AnalyzerConfig::default();
        config.tables.action_indicators.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_prompt_text_len, parsed.max_prompt_text_len);
        assert_eq!(config.llm_timeout_secs, parsed.llm_timeout_secs);
        assert_eq!(config.tables, parsed.tables);
    }

    #[test]
    fn test_lexicon_covers_core_domains() {
        let tables = KeywordTables::default();
        let themes: Vec<&str> = tables
            .theme_lexicon
            .iter()
            .map(|e| e.theme.as_str())
            .collect();
        assert!(themes.contains(&"Security"));
        assert!(themes.contains(&"Cost"));
        assert!(themes.contains(&"Timeline"));
    }
}
